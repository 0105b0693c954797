//! Support row rendering
//!
//! Renders one browser's per-version support codes as a single compact
//! glyph string, collapsing consecutive versions with identical support
//! into runs (e.g. `*Chrome*  ◒ᵖ 4¹   ✔ 5+`).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::core::model::BrowserAgent;

/// Supported.
pub const ICON_YES: char = '✔';
/// Not supported (also covers prefix/unofficial/disabled sub-variants).
pub const ICON_NO: char = '✘';
/// Partial support.
pub const ICON_PARTIAL: char = '◒';
/// Informational.
pub const ICON_INFO: char = 'ⓘ';

/// Superscript numeral alphabet used for footnote references.
pub const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

static ICONS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([
        ('y', ICON_YES),
        ('n', ICON_NO),
        ('a', ICON_PARTIAL),
        ('i', ICON_INFO),
    ])
});

static FOOTNOTE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\d").unwrap());

/// Render decimal digits in the superscript alphabet; non-digits are dropped.
pub fn superscript(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| SUPERSCRIPT_DIGITS[d as usize]))
        .collect()
}

/// A maximal stretch of consecutive versions sharing one collapsed code.
struct Run {
    code: String,
    version: String,
    continues: bool,
}

/// Collapse code variants: prefix ("p"), unofficial ("u") and disabled ("d")
/// all display as not supported.
fn collapse(code: &str) -> String {
    code.chars()
        .map(|c| match c {
            'p' | 'u' | 'd' => 'n',
            other => other,
        })
        .collect()
}

fn render_run(run: &Run) -> Option<String> {
    let icon = run.code.chars().next().and_then(|c| ICONS.get(&c).copied())?;
    let mut out = String::new();
    out.push(icon);
    if run.code.contains('x') {
        out.push('ᵖ');
    }
    out.push(' ');
    out.push_str(&run.version);
    if run.continues {
        out.push('+');
    }
    for reference in FOOTNOTE_REF.find_iter(&run.code) {
        out.push_str(&superscript(&reference.as_str()[1..]));
    }
    Some(out)
}

/// Render one browser's support row against a feature's version→code map.
///
/// Returns `None` when the browser has no recorded codes for the feature,
/// so that it contributes no line to the feature's support block.
pub fn render_support_row(
    agent: &BrowserAgent,
    stats: &HashMap<String, String>,
) -> Option<String> {
    let mut runs: Vec<Run> = Vec::new();
    for version in agent.versions.iter().flatten() {
        let Some(raw) = stats.get(version) else {
            continue;
        };
        let code = collapse(raw);
        match runs.last_mut() {
            Some(last) if last.code == code => last.continues = true,
            _ => runs.push(Run {
                code,
                version: version.clone(),
                continues: false,
            }),
        }
    }

    let rendered: Vec<String> = runs.iter().filter_map(render_run).collect();
    if rendered.is_empty() {
        return None;
    }
    Some(format!("*{}*  {}", agent.browser, rendered.join("   ")))
}
