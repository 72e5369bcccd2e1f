//! Ordered key/value parameters sent with every request.
//!
//! The same `Params` value is encoded both as the query string and as the
//! form body of a request, so it serializes as a flat string map.

use serde::{Serialize, Serializer};

use super::{Currency, LinkType, PayoutAccountType};

/// A scalar that can be placed into [`Params`].
pub trait ParamValue {
    fn to_param(&self) -> String;
}

impl ParamValue for str {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

/// Booleans are sent as `1` / `0`.
impl ParamValue for bool {
    fn to_param(&self) -> String {
        if *self { "1" } else { "0" }.to_string()
    }
}

/// Amounts always carry a fractional part: `100.0`, `99.5`.
impl ParamValue for f64 {
    fn to_param(&self) -> String {
        if self.is_finite() && self.fract() == 0.0 {
            format!("{:.1}", self)
        } else {
            format!("{}", self)
        }
    }
}

impl ParamValue for Currency {
    fn to_param(&self) -> String {
        self.code().to_string()
    }
}

impl ParamValue for LinkType {
    fn to_param(&self) -> String {
        self.code().to_string()
    }
}

impl ParamValue for PayoutAccountType {
    fn to_param(&self) -> String {
        self.code().to_string()
    }
}

/// Request parameters in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any earlier value.
    pub fn insert<V: ParamValue + ?Sized>(&mut self, key: &'static str, value: &V) {
        let value = value.to_param();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Sets `key` only when `value` is present and non-empty.
    pub fn insert_opt<V: AsRef<str>>(&mut self, key: &'static str, value: Option<V>) {
        if let Some(value) = value {
            let value = value.as_ref();
            if !value.is_empty() {
                self.insert(key, value);
            }
        }
    }

    /// Builder-style [`Params::insert`].
    pub fn with<V: ParamValue + ?Sized>(mut self, key: &'static str, value: &V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
