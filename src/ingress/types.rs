//! Request and response bodies for the ingress endpoints.

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw `POST /links` body before validation.
///
/// Both fields are optional at this stage so a missing URL can be reported as such
/// instead of as a decoding error.
///
/// Keys match `URL` and `Title` ignoring ASCII case (`url`, `Url`, `TITLE` all work).
/// When a field appears more than once the last non-null value wins, and a `null`
/// leaves the field unset. Unknown keys are skipped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkSubmission {
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl<'de> Deserialize<'de> for LinkSubmission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SubmissionVisitor;

        impl<'de> Visitor<'de> for SubmissionVisitor {
            type Value = LinkSubmission;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object with URL and Title fields")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut submission = LinkSubmission::default();

                while let Some(key) = map.next_key::<String>()? {
                    let slot = if key.eq_ignore_ascii_case("url") {
                        &mut submission.url
                    } else if key.eq_ignore_ascii_case("title") {
                        &mut submission.title
                    } else {
                        map.next_value::<IgnoredAny>()?;
                        continue;
                    };

                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *slot = Some(value);
                    }
                }

                Ok(submission)
            }
        }

        deserializer.deserialize_map(SubmissionVisitor)
    }
}

impl LinkSubmission {
    pub fn new(url: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            url: Some(url.into()),
            title: title.map(str::to_string),
        }
    }
}

/// What happened to an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Titled and new: committed and broadcast before responding.
    Committed,
    /// Untitled and new: handed to the title resolver.
    Queued,
    /// The catalog already held this URL.
    Duplicate,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SubmitOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PeersResponse {
    pub status: &'static str,
    pub added: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
