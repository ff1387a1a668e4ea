use serde::{Deserialize, Serialize};

/// Title recorded when a fetched page has no (or an empty) `<title>` element.
pub const UNTITLED: &str = "(untitled)";

/// A committed catalog entry.
///
/// Links are immutable once built: the catalog hands out clones and never edits entries in place.
/// The serialized form is the peer wire format (`{"URL": ..., "Title": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "URL")]
    url: String,
    #[serde(rename = "Title")]
    title: String,
}

impl Link {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.url, self.title)
    }
}
