//! Renderer module
//!
//! Maps matched features into wire records and renders them to the selected
//! output format: jsonl, json, text.

use serde::Serialize;

use crate::core::index::IndexedFeature;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Wire record for one matched feature
#[derive(Debug, Clone, Serialize)]
pub struct FeatureRecord<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub url: &'a str,
    pub usage: &'a str,
    pub text: &'a str,
}

impl<'a> From<&'a IndexedFeature> for FeatureRecord<'a> {
    fn from(feature: &'a IndexedFeature) -> Self {
        Self {
            id: &feature.id,
            title: &feature.title,
            url: &feature.url,
            usage: &feature.usage,
            text: &feature.text,
        }
    }
}

/// Renderer for matched features
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    fn to_json(&self, record: &FeatureRecord) -> Option<String> {
        if self.config.pretty {
            serde_json::to_string_pretty(record).ok()
        } else {
            serde_json::to_string(record).ok()
        }
    }

    /// Render a ranked match list (one record per match)
    pub fn render_matches(&self, matches: &[&IndexedFeature]) -> String {
        let records: Vec<FeatureRecord> = matches.iter().map(|f| FeatureRecord::from(*f)).collect();
        match self.config.format {
            OutputFormat::Jsonl => records
                .iter()
                .filter_map(|r| self.to_json(r))
                .collect::<Vec<_>>()
                .join(if self.config.pretty { "\n\n" } else { "\n" }),
            OutputFormat::Json => {
                if self.config.pretty {
                    serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
                } else {
                    serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
                }
            }
            OutputFormat::Text => matches
                .iter()
                .map(|f| format!("{}  {}  {}", f.title, f.usage, f.url))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Render a single feature (direct lookup)
    pub fn render_feature(&self, feature: &IndexedFeature) -> String {
        match self.config.format {
            OutputFormat::Text => feature.text.clone(),
            OutputFormat::Jsonl | OutputFormat::Json => self
                .to_json(&FeatureRecord::from(feature))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::index::FeatureIndex;
    use crate::core::model::Dataset;

    fn features() -> FeatureIndex {
        let dataset = Dataset::from_value(serde_json::json!({
            "agents": {},
            "statuses": {"rec": "Recommendation"},
            "data": {
                "flexbox": {"title": "Flexbox", "status": "rec", "usage_perc_y": 97.5},
                "css-grid": {"title": "CSS Grid", "usage_perc_y": 90.0}
            }
        }))
        .unwrap();
        FeatureIndex::build(&dataset)
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_matches_jsonl() {
        let index = features();
        let matches: Vec<&IndexedFeature> = index.features().iter().collect();
        let renderer = Renderer::with_config(RenderConfig::new(OutputFormat::Jsonl));
        let output = renderer.render_matches(&matches);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], "flexbox");
        assert_eq!(first["url"], "http://caniuse.com/#feat=flexbox");
        assert_eq!(first["usage"], "✔ 97.50% ◒ 0.00%");
    }

    #[test]
    fn test_render_matches_json_array() {
        let index = features();
        let matches: Vec<&IndexedFeature> = index.features().iter().collect();
        let renderer = Renderer::with_config(RenderConfig::new(OutputFormat::Json));
        let parsed: serde_json::Value =
            serde_json::from_str(&renderer.render_matches(&matches)).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_render_matches_text_lines() {
        let index = features();
        let matches: Vec<&IndexedFeature> = index.features().iter().collect();
        let renderer = Renderer::with_config(RenderConfig::new(OutputFormat::Text));
        let output = renderer.render_matches(&matches);
        assert!(output.starts_with("Flexbox  ✔ 97.50% ◒ 0.00%  http://caniuse.com/#feat=flexbox"));
    }

    #[test]
    fn test_render_feature_text_is_display_text() {
        let index = features();
        let feature = &index.features()[0];
        let renderer = Renderer::with_config(RenderConfig::new(OutputFormat::Text));
        assert_eq!(renderer.render_feature(feature), feature.text);
    }

    #[test]
    fn test_render_empty_matches() {
        let renderer = Renderer::with_config(RenderConfig::new(OutputFormat::Jsonl));
        assert_eq!(renderer.render_matches(&[]), "");
        let renderer = Renderer::with_config(RenderConfig::new(OutputFormat::Json));
        assert_eq!(renderer.render_matches(&[]), "[]");
    }
}
