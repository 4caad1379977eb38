//! URL scheme classification for metadata URLs.

/// Schemes the resolver knows how to turn into an HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    Ipfs,
    Https,
    Unknown(String),
}

impl Scheme {
    pub fn classify(scheme: &str) -> Self {
        match scheme {
            "ipfs" => Scheme::Ipfs,
            "https" => Scheme::Https,
            other => Scheme::Unknown(other.to_string()),
        }
    }
}

/// Split `url` at its first `://` into scheme and remainder.
pub fn split_scheme(url: &str) -> Option<(&str, &str)> {
    url.split_once("://")
}
