//! Dataset model
//!
//! Typed view of the caniuse-format dataset JSON: feature records, browser
//! agents, and the status-code label table. The dataset is loaded once at
//! startup and is read-only afterwards.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while loading the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset is missing the `{0}` object")]
    MissingSection(&'static str),
}

/// Browser category used to partition support rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentCategory {
    Desktop,
    Mobile,
    /// Unrecognized category; excluded from both partitions
    #[serde(other)]
    Other,
}

/// A browser tracked by the dataset
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserAgent {
    /// Browser identifier (the key in the dataset's `agents` object)
    #[serde(skip)]
    pub id: String,

    /// Display name
    pub browser: String,

    #[serde(rename = "type")]
    pub category: AgentCategory,

    /// Version labels in display order; null padding entries are tolerated
    #[serde(default)]
    pub versions: Vec<Option<String>>,
}

/// A raw feature record as supplied by the dataset
///
/// Absent fields default to empty: missing text normalizes to the empty
/// string and rendering omits the corresponding section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFeature {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub status: Option<String>,
    pub usage_perc_y: f64,
    pub usage_perc_a: f64,
    /// General note shown at the end of the display text
    pub notes: Option<String>,
    /// Numbered footnotes in dataset order
    pub notes_by_num: serde_json::Map<String, Value>,
    /// browser-id → (version → support code)
    pub stats: HashMap<String, HashMap<String, String>>,
}

/// The full dataset: features and agents in dataset order, plus the
/// status-code label table
#[derive(Debug, Clone)]
pub struct Dataset {
    pub features: Vec<(String, RawFeature)>,
    pub agents: Vec<BrowserAgent>,
    pub statuses: HashMap<String, String>,
}

impl Dataset {
    /// Parse a caniuse-format JSON document
    pub fn from_json(text: &str) -> Result<Self, DatasetError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Build a dataset from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, DatasetError> {
        let Value::Object(mut root) = value else {
            return Err(DatasetError::MissingSection("data"));
        };
        let data = take_object(&mut root, "data")?;
        let raw_agents = take_object(&mut root, "agents")?;
        let raw_statuses = take_object(&mut root, "statuses")?;

        let mut features = Vec::with_capacity(data.len());
        for (key, value) in data {
            let feature: RawFeature = serde_json::from_value(value)?;
            features.push((key, feature));
        }

        let mut agents = Vec::with_capacity(raw_agents.len());
        for (id, value) in raw_agents {
            let mut agent: BrowserAgent = serde_json::from_value(value)?;
            agent.id = id;
            agents.push(agent);
        }

        let statuses = raw_statuses
            .into_iter()
            .map(|(code, label)| (code, label.as_str().unwrap_or_default().to_string()))
            .collect();

        Ok(Dataset {
            features,
            agents,
            statuses,
        })
    }
}

fn take_object(
    root: &mut serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<serde_json::Map<String, Value>, DatasetError> {
    match root.remove(key) {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(DatasetError::MissingSection(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_dataset() {
        let dataset = Dataset::from_json(
            r#"{
                "agents": {
                    "chrome": {"browser": "Chrome", "type": "desktop", "versions": ["1", "2"]},
                    "ios_saf": {"browser": "iOS Safari", "type": "mobile", "versions": [null, "3.2"]}
                },
                "statuses": {"rec": "Recommendation"},
                "data": {
                    "flexbox": {
                        "title": "Flexbox",
                        "status": "rec",
                        "usage_perc_y": 97.5,
                        "usage_perc_a": 1.25,
                        "stats": {"chrome": {"1": "y"}}
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(dataset.features.len(), 1);
        assert_eq!(dataset.features[0].0, "flexbox");
        assert_eq!(dataset.agents.len(), 2);
        assert_eq!(dataset.agents[0].id, "chrome");
        assert_eq!(dataset.agents[0].category, AgentCategory::Desktop);
        assert_eq!(dataset.agents[1].versions[0], None);
        assert_eq!(dataset.statuses["rec"], "Recommendation");
    }

    #[test]
    fn test_absent_feature_fields_default() {
        let dataset = Dataset::from_json(
            r#"{"agents": {}, "statuses": {}, "data": {"bare": {}}}"#,
        )
        .unwrap();
        let (_, feature) = &dataset.features[0];
        assert!(feature.title.is_none());
        assert!(feature.description.is_none());
        assert!(feature.keywords.is_none());
        assert_eq!(feature.usage_perc_y, 0.0);
        assert!(feature.notes_by_num.is_empty());
        assert!(feature.stats.is_empty());
    }

    #[test]
    fn test_agents_preserve_dataset_order() {
        let dataset = Dataset::from_json(
            r#"{
                "agents": {
                    "z_browser": {"browser": "Z", "type": "desktop", "versions": []},
                    "a_browser": {"browser": "A", "type": "mobile", "versions": []}
                },
                "statuses": {},
                "data": {}
            }"#,
        )
        .unwrap();
        let ids: Vec<&str> = dataset.agents.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["z_browser", "a_browser"]);
    }

    #[test]
    fn test_unknown_agent_category_tolerated() {
        let dataset = Dataset::from_json(
            r#"{
                "agents": {"tv": {"browser": "TV", "type": "tv", "versions": []}},
                "statuses": {},
                "data": {}
            }"#,
        )
        .unwrap();
        assert_eq!(dataset.agents[0].category, AgentCategory::Other);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let err = Dataset::from_json(r#"{"agents": {}, "data": {}}"#).unwrap_err();
        assert!(matches!(err, DatasetError::MissingSection("statuses")));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Dataset::from_json("not json"),
            Err(DatasetError::Parse(_))
        ));
    }
}
