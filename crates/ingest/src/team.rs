use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A room is identified by its title and nothing else.
pub type Room = String;

/// Fallback display name when a team carries none of the name fields.
pub const UNKNOWN_ROLE: &str = "unknown";

/// Fields consulted, in order, when resolving a team's display name.
const NAME_FIELDS: [&str; 3] = ["role_en", "name_en", "id"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    fields: Map<String, Value>,
}

impl Team {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Resolve the role name shown in relevance maps.
    ///
    /// Takes the first non-empty of `role_en`, `name_en`, `id`. Non-zero numbers
    /// are rendered as their JSON text; zero and other non-string values count
    /// as absent.
    pub fn display_name(&self) -> String {
        NAME_FIELDS
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find_map(|value| match value {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| UNKNOWN_ROLE.to_string())
    }
}

impl From<Map<String, Value>> for Team {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
