//! Errors raised while proxying image URLs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// The document URL the image is resolved against is not absolute.
    #[error("invalid base url {base:?}: {source}")]
    InvalidBase {
        base: String,
        #[source]
        source: url::ParseError,
    },
    /// The image URL cannot be resolved against the document URL.
    #[error("invalid image url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
