use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A `mypads:group:<gid>` record.
///
/// The application layer stores more than the pad list in a group (name,
/// admins, visibility, ...). The sweep only reasons about `pads`, so every
/// other field is captured verbatim and written back untouched when the
/// record is rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub pads: Vec<String>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Group {
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn to_value(&self) -> Value {
        // Serializing a struct of known-serializable fields cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_a_rewrite() {
        let raw = json!({
            "name": "team",
            "visibility": "private",
            "pads": ["a", "b"],
            "admins": ["u1"]
        });

        let mut group = Group::from_value(&raw).unwrap();
        group.pads.retain(|p| p == "b");

        let out = group.to_value();
        assert_eq!(out["pads"], json!(["b"]));
        assert_eq!(out["name"], json!("team"));
        assert_eq!(out["visibility"], json!("private"));
        assert_eq!(out["admins"], json!(["u1"]));
    }

    #[test]
    fn missing_pads_field_defaults_to_empty() {
        let raw = json!({ "name": "team" });
        let group = Group::from_value(&raw).unwrap();
        assert!(group.pads.is_empty());
    }
}
