//! Building values from JSON data.

use serde_json::Value as Json;

use crate::Realm;
use crate::value::{Array, Value};

impl Realm {
    /// Convert `json` into a value graph owned by this realm.
    ///
    /// Objects become plain records linked to the universal base, keeping
    /// key order. Numbers outside the `f64` range become `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simpleoo::{Capabilities, Realm, Value};
    ///
    /// let realm = Realm::with_capabilities(Capabilities::FULL);
    /// let value = realm.value_from_json(&serde_json::json!({"a": {"b": 1}}));
    /// let inner = value.as_record().map(|r| r.get("a"));
    /// assert_eq!(
    ///     inner.and_then(|a| a.as_record().map(|r| r.get("b"))),
    ///     Some(Value::from(1))
    /// );
    /// ```
    #[must_use]
    pub fn value_from_json(&self, json: &Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(flag) => Value::Bool(*flag),
            Json::Number(number) => Value::Number(number.as_f64().unwrap_or(f64::NAN)),
            Json::String(text) => Value::from(text.as_str()),
            Json::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.value_from_json(item))
                    .collect::<Array>(),
            ),
            Json::Object(map) => {
                let record = self.record();
                for (key, item) in map {
                    record.set(key, self.value_from_json(item));
                }
                Value::Record(record)
            }
        }
    }
}
