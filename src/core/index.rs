//! Feature indexing
//!
//! One-time preprocessing of the raw dataset into searchable, pre-rendered
//! records. Runs to completion before any search is served; the resulting
//! index is immutable.

use crate::core::model::{AgentCategory, Dataset, RawFeature};
use crate::core::normalize::normalize;
use crate::core::support::{render_support_row, superscript, ICON_INFO, ICON_PARTIAL, ICON_YES};

/// Canonical page URL for a feature key.
pub fn feature_url(key: &str) -> String {
    format!("http://caniuse.com/#feat={}", key)
}

/// A feature record with normalized search fields and pre-rendered display
/// text, derived once from a [`RawFeature`] and the browser agent set.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedFeature {
    /// Dataset key
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    /// Human-readable status label
    pub status: String,
    /// Usage summary, e.g. `✔ 97.50% ◒ 1.25%`
    pub usage: String,
    /// Rendered footnote block, one numbered note per line
    pub footnotes: String,
    /// General note
    pub note: String,
    pub desktop_support: Vec<String>,
    pub mobile_support: Vec<String>,
    /// Fully assembled display text
    pub text: String,
    /// Normalized search fields
    pub norm_title: String,
    pub norm_description: String,
    pub norm_keywords: String,
}

/// The complete indexed collection, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureIndex {
    features: Vec<IndexedFeature>,
}

impl FeatureIndex {
    /// Index every feature in the dataset. Pure and deterministic: identical
    /// inputs always yield field-for-field identical output.
    pub fn build(dataset: &Dataset) -> Self {
        let features = dataset
            .features
            .iter()
            .map(|(key, raw)| index_feature(key, raw, dataset))
            .collect();
        Self { features }
    }

    pub fn features(&self) -> &[IndexedFeature] {
        &self.features
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

fn index_feature(key: &str, raw: &RawFeature, dataset: &Dataset) -> IndexedFeature {
    let title = raw.title.clone().unwrap_or_default();
    let description = raw.description.as_deref().unwrap_or("").trim().to_string();
    let note = raw.notes.clone().unwrap_or_default();

    let status = raw
        .status
        .as_deref()
        .and_then(|code| dataset.statuses.get(code))
        .cloned()
        .unwrap_or_default();

    let usage = format!(
        "{} {:.2}% {} {:.2}%",
        ICON_YES, raw.usage_perc_y, ICON_PARTIAL, raw.usage_perc_a
    );

    let footnotes = raw
        .notes_by_num
        .iter()
        .map(|(num, text)| format!("{} {}", superscript(num), text.as_str().unwrap_or("")))
        .collect::<Vec<_>>()
        .join("\n");

    let mut desktop_support = Vec::new();
    let mut mobile_support = Vec::new();
    for agent in &dataset.agents {
        let target = match agent.category {
            AgentCategory::Desktop => &mut desktop_support,
            AgentCategory::Mobile => &mut mobile_support,
            AgentCategory::Other => continue,
        };
        let Some(stats) = raw.stats.get(&agent.id) else {
            continue;
        };
        if let Some(row) = render_support_row(agent, stats) {
            target.push(row);
        }
    }

    let url = feature_url(key);
    let text = assemble_text(
        &title,
        &url,
        &status,
        &description,
        &desktop_support,
        &mobile_support,
        &footnotes,
        &note,
    );

    IndexedFeature {
        id: key.to_string(),
        url,
        norm_title: normalize(raw.title.as_deref()),
        norm_description: normalize(raw.description.as_deref()),
        norm_keywords: normalize(raw.keywords.as_deref()),
        title,
        description,
        status,
        usage,
        footnotes,
        note,
        desktop_support,
        mobile_support,
        text,
    }
}

#[allow(clippy::too_many_arguments)]
fn assemble_text(
    title: &str,
    url: &str,
    status: &str,
    description: &str,
    desktop_support: &[String],
    mobile_support: &[String],
    footnotes: &str,
    note: &str,
) -> String {
    let mut text = format!("[{}]({}) [[{}]]", title, url, status);
    if !description.is_empty() {
        text.push('\n');
        text.push_str(description);
    }
    text.push_str("\n\n");
    text.push_str(&desktop_support.join("\n"));
    text.push_str("\n\n");
    text.push_str(&mobile_support.join("\n"));
    if !footnotes.is_empty() {
        text.push_str("\n\n");
        text.push_str(footnotes);
    }
    if !note.is_empty() {
        text.push_str(&format!("\n\n{} {}", ICON_INFO, note));
    }
    text
}
