//! Error types for the shared crate.

use thiserror::Error;

use super::keyword::KeywordError;
use super::routing::RouteError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Keyword(#[from] KeywordError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flexbox::AlignItems;

    #[test]
    fn keyword_errors_convert() {
        fn parse(raw: &str) -> Result<AlignItems> {
            Ok(raw.parse::<AlignItems>()?)
        }
        let err = parse("baseline").unwrap_err();
        assert!(matches!(err, Error::Keyword(_)));
        assert_eq!(err.to_string(), "`baseline` is not a valid alignItems keyword");
    }

    #[test]
    fn route_errors_convert() {
        let err: Error = RouteError::Empty.into();
        assert_eq!(err.to_string(), "lesson id is empty");
    }
}
