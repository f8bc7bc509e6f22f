use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Serializable compiler settings, e.g. loaded from a JSON file.
///
/// ```json
/// { "operator_aliases": { "<=": "LessThanOrEqual", "has": "Contains" }, "capabilities": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Alternative operator spellings mapped onto a built-in comparison or a
    /// capability name.
    pub operator_aliases: AHashMap<String, String>,
    /// Whether operators may fall back to the field type's named capabilities.
    pub capabilities: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            operator_aliases: AHashMap::new(),
            capabilities: true,
        }
    }
}

impl CompilerConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
