// Configuration type definitions

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::error::SuggestError;

/// Class put on the wrapper element when none is configured
pub const DEFAULT_CLASS: &str = "suggest-domain";

const DATA_CLASS: &str = "class";
const DATA_DOMAINS: &str = "domains";

/// Fully resolved widget options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestOptions {
    pub class: String,
    pub domains: Vec<String>,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        SuggestOptions {
            class: DEFAULT_CLASS.to_string(),
            domains: Vec::new(),
        }
    }
}

impl SuggestOptions {
    /// Apply an override layer; keys it leaves out keep their current value
    pub fn merged(mut self, layer: &OptionsOverride) -> Self {
        if let Some(class) = &layer.class {
            self.class = class.clone();
        }
        if let Some(domains) = &layer.domains {
            self.domains = domains.clone();
        }
        self
    }

    /// Defaults, then the attach-time options, then the element's data attributes
    pub fn resolve(input: &OptionsInput, data: &BTreeMap<String, String>) -> Self {
        SuggestOptions::default()
            .merged(&input.to_override())
            .merged(&OptionsOverride::from_data(data))
    }
}

/// A partial set of options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OptionsOverride {
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default, deserialize_with = "lenient_domains")]
    pub domains: Option<Vec<String>>,
}

impl OptionsOverride {
    pub fn with_domains(domains: Vec<String>) -> Self {
        OptionsOverride {
            class: None,
            domains: Some(domains),
        }
    }

    /// Overrides carried by `data-class` / `data-domains`
    pub fn from_data(data: &BTreeMap<String, String>) -> Self {
        OptionsOverride {
            class: data.get(DATA_CLASS).cloned(),
            domains: data.get(DATA_DOMAINS).map(|raw| parse_domain_list(raw)),
        }
    }

    /// Stack `other` on top of `self`
    pub fn then(mut self, other: OptionsOverride) -> Self {
        if other.class.is_some() {
            self.class = other.class;
        }
        if other.domains.is_some() {
            self.domains = other.domains;
        }
        self
    }
}

/// What a caller hands to attach: a bare domain list or an options object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsInput {
    Domains(Vec<String>),
    Config(OptionsOverride),
}

impl Default for OptionsInput {
    fn default() -> Self {
        OptionsInput::Config(OptionsOverride::default())
    }
}

impl OptionsInput {
    pub fn to_override(&self) -> OptionsOverride {
        match self {
            OptionsInput::Domains(domains) => OptionsOverride::with_domains(domains.clone()),
            OptionsInput::Config(layer) => layer.clone(),
        }
    }

    /// Parse `["a.com", ...]` or `{"class": ..., "domains": [...]}`
    pub fn from_json(json: &str) -> Result<Self, SuggestError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| SuggestError::InvalidOptions(e.to_string()))?;
        match value {
            serde_json::Value::Array(_) => {
                let entries: Vec<LenientText> = serde_json::from_value(value)
                    .map_err(|e| SuggestError::InvalidOptions(e.to_string()))?;
                Ok(OptionsInput::Domains(
                    entries.into_iter().map(String::from).collect(),
                ))
            }
            serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(OptionsInput::Config)
                .map_err(|e| SuggestError::InvalidOptions(e.to_string())),
            other => Err(SuggestError::InvalidOptions(format!(
                "unsupported options value: {}",
                other
            ))),
        }
    }
}

impl From<Vec<String>> for OptionsInput {
    fn from(domains: Vec<String>) -> Self {
        OptionsInput::Domains(domains)
    }
}

impl From<&[&str]> for OptionsInput {
    fn from(domains: &[&str]) -> Self {
        OptionsInput::Domains(domains.iter().map(|d| d.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionsInput {
    fn from(domains: [&str; N]) -> Self {
        OptionsInput::from(&domains[..])
    }
}

impl From<OptionsOverride> for OptionsInput {
    fn from(layer: OptionsOverride) -> Self {
        OptionsInput::Config(layer)
    }
}

impl From<SuggestOptions> for OptionsInput {
    fn from(options: SuggestOptions) -> Self {
        OptionsInput::Config(OptionsOverride {
            class: Some(options.class),
            domains: Some(options.domains),
        })
    }
}

/// Domain list from a data attribute: a JSON array, else comma separated
pub fn parse_domain_list(raw: &str) -> Vec<String> {
    if let Ok(entries) = serde_json::from_str::<Vec<LenientText>>(raw) {
        return entries.into_iter().map(String::from).collect();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

/// Any scalar shows up as its text; anything else shows up empty
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientText {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Other(IgnoredAny),
}

impl From<LenientText> for String {
    fn from(entry: LenientText) -> Self {
        match entry {
            LenientText::Text(s) => s,
            LenientText::Integer(n) => n.to_string(),
            LenientText::Float(f) => f.to_string(),
            LenientText::Flag(b) => b.to_string(),
            LenientText::Other(_) => String::new(),
        }
    }
}

fn lenient_domains<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<LenientText>::deserialize(deserializer)?;
    Ok(Some(entries.into_iter().map(String::from).collect()))
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub suggest: OptionsOverride,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let options = SuggestOptions::default();
        assert_eq!(options.class, "suggest-domain");
        assert!(options.domains.is_empty());
    }

    #[test]
    fn test_shorthand_only_sets_domains() {
        let options = SuggestOptions::resolve(&OptionsInput::from(["a.com", "b.com"]), &BTreeMap::new());
        assert_eq!(options.class, DEFAULT_CLASS);
        assert_eq!(options.domains, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_data_attributes_take_precedence() {
        let input = OptionsInput::Config(OptionsOverride {
            class: Some("from-options".to_string()),
            domains: Some(vec!["a.com".to_string()]),
        });
        let mut data = BTreeMap::new();
        data.insert("class".to_string(), "from-data".to_string());

        let options = SuggestOptions::resolve(&input, &data);
        assert_eq!(options.class, "from-data");
        assert_eq!(options.domains, vec!["a.com"]);
    }

    #[test]
    fn test_parse_domain_list_json_array() {
        assert_eq!(
            parse_domain_list(r#"["gmail.com", "yahoo.com"]"#),
            vec!["gmail.com", "yahoo.com"]
        );
    }

    #[test]
    fn test_parse_domain_list_comma_separated() {
        assert_eq!(
            parse_domain_list(" gmail.com, ,yahoo.com "),
            vec!["gmail.com", "yahoo.com"]
        );
    }

    #[test]
    fn test_lenient_domains_stringify_scalars() {
        assert_eq!(
            parse_domain_list(r#"["a.com", 42, true, null, {"x": 1}]"#),
            vec!["a.com", "42", "true", "", ""]
        );
    }

    #[test]
    fn test_from_json_array_shorthand() {
        let input = OptionsInput::from_json(r#"["a.com", "b.com"]"#).unwrap();
        assert_eq!(input, OptionsInput::from(["a.com", "b.com"]));
    }

    #[test]
    fn test_from_json_object() {
        let input = OptionsInput::from_json(r#"{"class": "mail", "ignored": 1}"#).unwrap();
        assert_eq!(
            input,
            OptionsInput::Config(OptionsOverride {
                class: Some("mail".to_string()),
                domains: None,
            })
        );
    }

    #[test]
    fn test_from_json_rejects_scalars_and_garbage() {
        assert!(matches!(
            OptionsInput::from_json("42"),
            Err(SuggestError::InvalidOptions(_))
        ));
        assert!(matches!(
            OptionsInput::from_json("{not json"),
            Err(SuggestError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_override_then_keeps_unset_keys() {
        let base = OptionsOverride {
            class: Some("base".to_string()),
            domains: Some(vec!["a.com".to_string()]),
        };
        let stacked = base.then(OptionsOverride::with_domains(vec!["b.com".to_string()]));
        assert_eq!(stacked.class.as_deref(), Some("base"));
        assert_eq!(stacked.domains, Some(vec!["b.com".to_string()]));
    }

    // For any combination of keys present in the [suggest] table, parsing succeeds and
    // absent keys resolve to the defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_section in prop::bool::ANY,
            include_class in prop::bool::ANY,
            include_domains in prop::bool::ANY
        ) {
            let mut toml_content = String::new();
            if include_section {
                toml_content.push_str("[suggest]\n");
                if include_class {
                    toml_content.push_str("class = \"mail\"\n");
                }
                if include_domains {
                    toml_content.push_str("domains = [\"a.com\"]\n");
                }
            }

            let config: Result<AppConfig, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config: {}", toml_content);

            let options = SuggestOptions::default().merged(&config.unwrap().suggest);
            if include_section && include_class {
                prop_assert_eq!(options.class.as_str(), "mail");
            } else {
                prop_assert_eq!(options.class.as_str(), DEFAULT_CLASS);
            }
            if include_section && include_domains {
                prop_assert_eq!(options.domains, vec!["a.com".to_string()]);
            } else {
                prop_assert!(options.domains.is_empty());
            }
        }
    }

    // Comma-separated data attributes round out to the trimmed, non-empty entries.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_comma_list_keeps_every_domain(domains in prop::collection::vec("[a-z]{1,8}\\.(com|org|net)", 0..6)) {
            let raw = domains.join(", ");
            prop_assert_eq!(parse_domain_list(&raw), domains);
        }
    }
}
