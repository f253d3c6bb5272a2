use serde::{Deserialize, Deserializer, Serialize};

pub const UNKNOWN_TEXT: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available";

/// Localized text attributes of a spell.
///
/// `class`, `spec`, `school` and `use_type` are scored; `name` and
/// `description` are display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellText {
    pub name: String,
    pub description: String,
    pub class: String,
    /// Unordered set of specializations. Empty means "no spec".
    #[serde(default, deserialize_with = "deserialize_specs")]
    pub spec: Vec<String>,
    pub school: String,
    pub use_type: String,
}

impl SpellText {
    /// Placeholder used when a spell has no text for the requested locale.
    pub fn unknown() -> Self {
        SpellText {
            name: UNKNOWN_TEXT.to_string(),
            description: NO_DESCRIPTION.to_string(),
            class: UNKNOWN_TEXT.to_string(),
            spec: Vec::new(),
            school: UNKNOWN_TEXT.to_string(),
            use_type: UNKNOWN_TEXT.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpecValue {
    One(String),
    Many(Vec<String>),
}

// Catalog data carries `spec` as null, a single string, or a list.
fn deserialize_specs<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<SpecValue>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(SpecValue::One(spec)) => vec![spec],
        Some(SpecValue::Many(specs)) => specs,
    })
}
