use serde::ser::{Serialize, SerializeMap, Serializer};
use url::form_urlencoded;

/// A single scalar parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Scalar {
    fn to_query_value(&self) -> String {
        match self {
            Scalar::Str(s) => s.clone(),
            Scalar::Int(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Str(s) => serializer.serialize_str(s),
            Scalar::Int(n) => serializer.serialize_i64(*n),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// A parameter value: either one scalar or a list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Scalar(s) => s.serialize(serializer),
            ParamValue::List(items) => items.serialize(serializer),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(Scalar::Str(value))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(Scalar::Str(value.to_string()))
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Scalar(Scalar::Str(value.clone()))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Scalar(Scalar::Int(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Scalar(Scalar::Bool(value))
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values.into_iter().map(Scalar::Str).collect())
    }
}

impl From<&[String]> for ParamValue {
    fn from(values: &[String]) -> Self {
        ParamValue::List(values.iter().cloned().map(Scalar::Str).collect())
    }
}

/// Ordered, flat mapping of parameter names to values.
///
/// Entries keep their insertion order. A key set to `None` is remembered but
/// never emitted, neither in a query string nor in a JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any earlier value under the same key.
    pub fn set<K: Into<String>, V: Into<ParamValue>>(self, key: K, value: V) -> Self {
        self.set_opt(key, Some(value))
    }

    /// Set a parameter that may be absent.
    pub fn set_opt<K: Into<String>, V: Into<ParamValue>>(
        mut self,
        key: K,
        value: Option<V>,
    ) -> Self {
        let key = key.into();
        let value = value.map(Into::into);
        match self.entries.iter_mut().find(|entry| entry.0 == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// True when no entry would be emitted.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    fn present(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k, v)))
    }

    /// Encode as `application/x-www-form-urlencoded`, one pair per scalar.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.present() {
            match value {
                ParamValue::Scalar(s) => {
                    serializer.append_pair(key, &s.to_query_value());
                }
                ParamValue::List(items) => {
                    for item in items {
                        serializer.append_pair(key, &item.to_query_value());
                    }
                }
            }
        }
        serializer.finish()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.present() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
