//! NewType for the base URL of the Phenotype Database API.

use crate::errors::InvalidPhenoDbUrl;
use aliri_braid::braid;

/// A [PhenoDbUrl] is the root of the Phenotype Database API, e.g.
/// `https://dashin.eu/interventionstudies/api/`
///
/// Query names are appended directly, so the URL must end with a `/`.
#[braid(validator, serde)]
pub struct PhenoDbUrl(String);

impl aliri_braid::Validator for PhenoDbUrl {
    type Error = InvalidPhenoDbUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if !(s.starts_with("http://") || s.starts_with("https://")) {
            Err(InvalidPhenoDbUrl::Protocol(s.to_string()))
        } else if !s.ends_with('/') {
            Err(InvalidPhenoDbUrl::TrailingSlash(s.to_string()))
        } else {
            Ok(())
        }
    }
}

impl PhenoDbUrl {
    /// URL of a named remote operation, e.g. `<base>/getStudies`.
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}{}", self.as_str(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("http://localhost/")]
    #[case("http://localhost:8080/api/")]
    #[case("https://dashin.eu/interventionstudies/api/")]
    fn test_parse_url(#[case] url: &str) {
        assert!(PhenoDbUrl::try_from(url).is_ok());
    }

    #[rstest]
    #[case("ftp://localhost/api/")]
    #[case("dashin.eu/interventionstudies/api/")]
    fn test_reject_bad_protocol(#[case] url: &str) {
        assert!(matches!(
            PhenoDbUrl::try_from(url).unwrap_err(),
            InvalidPhenoDbUrl::Protocol { .. }
        ))
    }

    #[rstest]
    #[case("http://localhost")]
    #[case("https://dashin.eu/interventionstudies/api")]
    fn test_reject_missing_trailing_slash(#[case] url: &str) {
        assert!(matches!(
            PhenoDbUrl::try_from(url).unwrap_err(),
            InvalidPhenoDbUrl::TrailingSlash { .. }
        ))
    }

    #[test]
    fn test_endpoint() {
        let url = PhenoDbUrl::from_static("https://dashin.eu/interventionstudies/api/");
        assert_eq!(
            url.endpoint("authenticate"),
            "https://dashin.eu/interventionstudies/api/authenticate"
        );
    }
}
