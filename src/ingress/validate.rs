use super::types::LinkSubmission;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("bad JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("no url")]
    MissingUrl,

    #[error("bad url: {0}")]
    InvalidUrl(url::ParseError),

    #[error("url must be absolute")]
    NotAbsolute,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    /// Exactly as submitted; identity is the raw string.
    pub url: String,
    /// `None` when absent or empty.
    pub title: Option<String>,
}

/// Decodes a `POST /links` body. A JSON `null` is reported as a missing URL.
pub fn parse_link_body(body: &[u8]) -> Result<LinkSubmission, LinkError> {
    let submission: Option<LinkSubmission> = serde_json::from_slice(body)?;
    submission.ok_or(LinkError::MissingUrl)
}

pub fn validate_submission(submission: LinkSubmission) -> Result<ValidSubmission, LinkError> {
    let url = match submission.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(LinkError::MissingUrl),
    };

    check_absolute_url(&url)?;

    let title = submission.title.filter(|t| !t.is_empty());
    Ok(ValidSubmission { url, title })
}

/// Parses `url` only to check it; the parsed (normalized) form is discarded.
pub fn check_absolute_url(url: &str) -> Result<(), LinkError> {
    match Url::parse(url) {
        Ok(_) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase) => Err(LinkError::NotAbsolute),
        Err(e) => Err(LinkError::InvalidUrl(e)),
    }
}
