//! Syntactic URL checks applied before a submission is accepted.
//!
//! A submission must be an absolute URL with an explicit `scheme://` prefix
//! and a fully qualified host. Bare domains (`www.example.com`) and
//! single-slash forms (`ftp:/bad-url`) are rejected even though a lenient
//! parser would accept them.

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};

/// Longest submission accepted, in characters.
pub const MAX_URL_LENGTH: usize = 2083;

/// Schemes a short URL may redirect to.
pub const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

static SCHEME_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*)://").unwrap());

static LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").unwrap());

static TLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]{2,63}|xn--[a-z0-9-]{1,59})$").unwrap());

/// Reasons a submission fails the syntactic check.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlSyntaxError {
    #[error("URL is empty")]
    Empty,

    #[error("URL exceeds {} characters", MAX_URL_LENGTH)]
    TooLong,

    #[error("URL contains whitespace")]
    ContainsWhitespace,

    #[error("URL must start with a protocol such as https://")]
    MissingProtocol,

    #[error("Protocol '{0}' is not allowed")]
    UnsupportedProtocol(String),

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("Host '{0}' is not a fully qualified domain name")]
    InvalidHost(String),
}

/// Parses `input` and checks that it is an absolute URL with an explicit
/// protocol and a fully qualified host.
///
/// The input is not modified; callers keep storing the string they received.
///
/// # Errors
///
/// Returns the first [`UrlSyntaxError`] the input trips over.
pub fn check_url_syntax(input: &str) -> Result<Url, UrlSyntaxError> {
    if input.is_empty() {
        return Err(UrlSyntaxError::Empty);
    }
    if input.chars().count() > MAX_URL_LENGTH {
        return Err(UrlSyntaxError::TooLong);
    }
    if input.chars().any(char::is_whitespace) {
        return Err(UrlSyntaxError::ContainsWhitespace);
    }

    let scheme = SCHEME_PREFIX_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
        .ok_or(UrlSyntaxError::MissingProtocol)?;

    if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
        return Err(UrlSyntaxError::UnsupportedProtocol(scheme));
    }

    let url = Url::parse(input).map_err(|e| UrlSyntaxError::InvalidFormat(e.to_string()))?;

    match url.host() {
        None => return Err(UrlSyntaxError::MissingHost),
        Some(Host::Domain(domain)) => check_domain(domain)?,
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
    }

    Ok(url)
}

/// Checks that a parsed domain has at least two well-formed labels and an
/// alphabetic top-level label.
fn check_domain(domain: &str) -> Result<(), UrlSyntaxError> {
    let invalid = || UrlSyntaxError::InvalidHost(domain.to_string());

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid());
    }

    let (tld, rest) = labels.split_last().ok_or_else(invalid)?;
    if !TLD_REGEX.is_match(tld) {
        return Err(invalid());
    }
    if !rest.iter().all(|label| LABEL_REGEX.is_match(label)) {
        return Err(invalid());
    }

    Ok(())
}
