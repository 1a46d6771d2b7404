//! Project detail records parsed from trigger attributes.
//!
//! Each project card carries its details as `data-*` attributes:
//!
//! | attribute          | format                          |
//! |--------------------|---------------------------------|
//! | `data-title`       | text                            |
//! | `data-description` | text                            |
//! | `data-features`    | JSON array of strings           |
//! | `data-tech`        | comma-separated names, deduped  |
//! | `data-links`       | JSON object `{label: url}`      |
//! | `data-images`      | comma-separated URLs (max 3)    |
//!
//! Every field is optional. Missing or malformed values degrade to empty
//! content, never to an error.

use serde_json::Value;
use tracing::debug;

use crate::palette;

/// Gallery slots in the details dialog.
pub const MAX_GALLERY_IMAGES: usize = 3;

/// Read access to a trigger's `data-*` attributes, keyed without the prefix.
pub trait DataSource {
    fn data(&self, key: &str) -> Option<String>;
}

impl DataSource for std::collections::HashMap<String, String> {
    fn data(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl DataSource for std::collections::BTreeMap<String, String> {
    fn data(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// A labelled external link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// A technology tag with its display color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechChip {
    pub name: String,
    pub color: &'static str,
}

/// Everything the details dialog shows for one project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
    pub links: Vec<ProjectLink>,
    pub images: Vec<String>,
}

impl ProjectDetails {
    /// Parse a record from a trigger's attributes.
    pub fn from_source(source: &impl DataSource) -> Self {
        Self {
            title: source.data("title").unwrap_or_default(),
            description: source.data("description").unwrap_or_default(),
            features: parse_features(source.data("features").as_deref()),
            tech: unique_names(split_list(source.data("tech").as_deref())),
            links: parse_links(source.data("links").as_deref()),
            images: split_list(source.data("images").as_deref())
                .into_iter()
                .take(MAX_GALLERY_IMAGES)
                .collect(),
        }
    }

    /// Technology chips in source order.
    pub fn chips(&self) -> impl Iterator<Item = TechChip> + '_ {
        self.tech.iter().map(|name| TechChip {
            name: name.clone(),
            color: palette::chip_color(name),
        })
    }
}

fn parse_features(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Err(e) => {
            debug!(error = %e, "Malformed features data, showing none");
            Vec::new()
        }
    }
}

fn parse_links(raw: Option<&str>) -> Vec<ProjectLink> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<serde_json::Map<String, Value>>(raw) {
        Ok(map) => map
            .into_iter()
            .filter_map(|(label, url)| match url {
                Value::String(url) if !url.trim().is_empty() => Some(ProjectLink { label, url }),
                _ => None,
            })
            .collect(),
        Err(e) => {
            debug!(error = %e, "Malformed links data, showing none");
            Vec::new()
        }
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Drop repeated names, case-insensitively, keeping the first spelling.
fn unique_names(names: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.iter().any(|seen| seen.eq_ignore_ascii_case(&name)) {
            unique.push(name);
        }
    }
    unique
}
