use serde::{Deserialize, Deserializer};

/// `skip_serializing_if` predicate: omits both `None` and `Some("")`.
pub fn is_none_or_empty(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Reads `null`, a missing field or `""` as `None`.
pub mod option_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        Ok(opt.filter(|s| !s.is_empty()))
    }
}
