//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One entry of the Bazaar chart listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub name: String,
    #[serde(default)]
    pub chart_version: String,
    #[serde(default)]
    pub app_version: String,
    /// Service plans offered by the chart
    #[serde(default)]
    pub plans: Vec<String>,
}

/// Status message returned by save and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

const URL_DELIMITERS: [char; 3] = ['#', '?', '%'];

/// Chart name that is safe to place in a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartName(String);

impl ChartName {
    /// Validate a chart name.
    ///
    /// Only syntax is checked: the name must be non-empty and must not contain
    /// path separators, whitespace, `..` or URL delimiters (`#`, `?`, `%`).
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidChartName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("name is empty"));
        }
        if raw.contains('/') || raw.contains('\\') {
            return Err(invalid("name contains a path separator"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(invalid("name contains whitespace"));
        }
        if raw.contains("..") {
            return Err(invalid("name contains '..'"));
        }
        if let Some(c) = raw.chars().find(|c| URL_DELIMITERS.contains(c)) {
            return Err(invalid(&format!("name contains '{}'", c)));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved coordinates of a Bazaar API.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Base URL without trailing slash
    pub target: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Endpoint {
    /// Build an endpoint, normalizing the target URL.
    pub fn new(
        target: &str,
        user: Option<String>,
        password: Option<String>,
    ) -> Result<Self, DomainError> {
        let trimmed = target.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTarget {
                target: target.to_string(),
                reason: "target is empty".into(),
            });
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(DomainError::InvalidTarget {
                target: target.to_string(),
                reason: "expected an http:// or https:// URL".into(),
            });
        }
        Ok(Self {
            target: trimmed.to_string(),
            user: user.filter(|u| !u.is_empty()),
            password,
        })
    }

    /// Full URL for an API path (path must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.target, path)
    }
}

// Keep the password out of logs.
impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("target", &self.target)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_listing_json_when_deserializing_then_maps_camel_case_fields() {
        let json = r#"[{"name":"mysql","chartVersion":"0.10.2","appVersion":"5.7.14","plans":["small","medium"]}]"#;

        let charts: Vec<Chart> = serde_json::from_str(json).unwrap();

        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].name, "mysql");
        assert_eq!(charts[0].chart_version, "0.10.2");
        assert_eq!(charts[0].app_version, "5.7.14");
        assert_eq!(charts[0].plans, vec!["small", "medium"]);
    }

    #[test]
    fn given_listing_without_optional_fields_when_deserializing_then_defaults() {
        let charts: Vec<Chart> = serde_json::from_str(r#"[{"name":"redis"}]"#).unwrap();
        assert!(charts[0].plans.is_empty());
        assert_eq!(charts[0].app_version, "");
    }

    #[rstest]
    #[case("mysql")]
    #[case("spacebears-1.0")]
    #[case("my_chart")]
    fn given_valid_name_when_parsing_then_accepts(#[case] raw: &str) {
        assert_eq!(ChartName::parse(raw).unwrap().as_str(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("a/b")]
    #[case("..")]
    #[case("my chart")]
    #[case("a\\b")]
    #[case("mysql#evil")]
    #[case("a?b")]
    #[case("a%2Fb")]
    fn given_invalid_name_when_parsing_then_rejects(#[case] raw: &str) {
        assert!(matches!(
            ChartName::parse(raw),
            Err(DomainError::InvalidChartName { .. })
        ));
    }

    #[test]
    fn given_trailing_slash_when_building_endpoint_then_trims() {
        let ep = Endpoint::new("http://bazaar.example.com:8080/", None, None).unwrap();
        assert_eq!(ep.url("/charts/"), "http://bazaar.example.com:8080/charts/");
    }

    #[test]
    fn given_empty_user_when_building_endpoint_then_no_auth_user() {
        let ep = Endpoint::new("https://b", Some(String::new()), None).unwrap();
        assert_eq!(ep.user, None);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("bazaar.example.com")]
    fn given_bad_target_when_building_endpoint_then_rejects(#[case] target: &str) {
        assert!(matches!(
            Endpoint::new(target, None, None),
            Err(DomainError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn given_password_when_debug_formatting_then_masks_it() {
        let ep = Endpoint::new("http://b", Some("admin".into()), Some("s3cret".into())).unwrap();
        let rendered = format!("{:?}", ep);
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("***"));
    }
}
