/*
[INPUT]:  Caller-supplied REST parameters
[OUTPUT]: JSON bodies, query pairs and extracted path parameters
[POS]:    Data layer - request parameter map
[UPDATE]: When parameter encoding rules change
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::http::{PlivoError, Result};

/// Parameter map passed to every REST operation
///
/// POST operations send it as a JSON object; GET and DELETE operations send
/// it as the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Remove a required path parameter and return it as text
    ///
    /// Absent and falsy values (`null`, `false`, `0`, `""`, `"0"`, empty
    /// arrays and objects) are rejected with [`PlivoError::MissingParameter`].
    pub(crate) fn take_required(&mut self, key: &str) -> Result<String> {
        match self.0.remove(key) {
            Some(value) if !is_falsy(&value) => Ok(value_to_text(&value)),
            _ => Err(PlivoError::missing_parameter(key)),
        }
    }

    /// Flatten into query-string pairs
    ///
    /// Nulls are skipped, booleans become `1`/`0`, and arrays and objects
    /// expand to bracketed keys (`tags[0]=a`, `filter[kind]=b`).
    pub(crate) fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            push_query_pairs(key.clone(), value, &mut pairs);
        }
        pairs
    }
}

fn push_query_pairs(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((key, if *flag { "1" } else { "0" }.to_string())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_query_pairs(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (field, item) in fields {
                push_query_pairs(format!("{key}[{field}]"), item, pairs);
            }
        }
        other => pairs.push((key, value_to_text(other))),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl TryFrom<Value> for Params {
    type Error = PlivoError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(PlivoError::Config(format!(
                "parameters must be a JSON object, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_take_required_removes_key() {
        let mut params = Params::new()
            .with("call_uuid", "abc-123")
            .with("legs", "aleg");

        assert_eq!(params.take_required("call_uuid").unwrap(), "abc-123");
        assert!(!params.contains_key("call_uuid"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_take_required_rejects_falsy() {
        for value in [json!(null), json!(false), json!(0), json!(""), json!("0"), json!([])] {
            let mut params = Params::new().with("member_id", value.clone());
            let err = params
                .take_required("member_id")
                .expect_err("falsy value should be rejected");
            assert!(
                matches!(err, PlivoError::MissingParameter { ref name } if name == "member_id"),
                "value {value} gave {err:?}"
            );
        }

        let err = Params::new().take_required("number").unwrap_err();
        assert_eq!(err.to_string(), "number parameter not found");
    }

    #[test]
    fn test_take_required_stringifies_numbers() {
        let mut params = Params::new().with("member_id", 17);
        assert_eq!(params.take_required("member_id").unwrap(), "17");
    }

    #[test]
    fn test_query_pairs() {
        let params = Params::new()
            .with("status", "live")
            .with("limit", 20)
            .with("ring", true)
            .with("hold", false)
            .with("skip", Value::Null);

        let mut pairs = params.to_query_pairs();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("hold".to_string(), "0".to_string()),
                ("limit".to_string(), "20".to_string()),
                ("ring".to_string(), "1".to_string()),
                ("status".to_string(), "live".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_expand_nested_values() {
        let params = Params::new()
            .with("tags", json!(["sales", 2, null, true]))
            .with("filter", json!({"kind": "sip", "range": {"min": 1}}));

        let mut pairs = params.to_query_pairs();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("filter[kind]".to_string(), "sip".to_string()),
                ("filter[range][min]".to_string(), "1".to_string()),
                ("tags[0]".to_string(), "sales".to_string()),
                ("tags[1]".to_string(), "2".to_string()),
                ("tags[3]".to_string(), "1".to_string()),
            ]
        );
        assert!(Params::new().with("empty", json!([])).to_query_pairs().is_empty());
    }

    #[test]
    fn test_serializes_as_object() {
        assert_eq!(serde_json::to_string(&Params::new()).unwrap(), "{}");
        let params: Params = [("to", "15551234567")].into_iter().collect();
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"to": "15551234567"}));
    }

    #[test]
    fn test_try_from_value() {
        let params = Params::try_from(json!({"app_id": "42"})).unwrap();
        assert_eq!(params.get("app_id"), Some(&json!("42")));
        assert!(Params::try_from(json!(null)).unwrap().is_empty());
        assert!(Params::try_from(json!([1, 2])).is_err());
    }
}
