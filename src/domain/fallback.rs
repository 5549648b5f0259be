//! Default values for lookups that miss

use std::fmt;

use serde_json::Value;

/// A default: a ready value or a producer that runs only when needed.
pub enum Fallback<'f> {
    Value(Value),
    Lazy(Box<dyn FnOnce() -> Value + 'f>),
}

impl<'f> Fallback<'f> {
    /// Defer computing the default until a lookup misses.
    pub fn lazy(producer: impl FnOnce() -> Value + 'f) -> Self {
        Fallback::Lazy(Box::new(producer))
    }

    /// Produce the default value. Runs the producer, if any.
    pub fn resolve(self) -> Value {
        match self {
            Fallback::Value(value) => value,
            Fallback::Lazy(producer) => producer(),
        }
    }
}

impl Default for Fallback<'_> {
    fn default() -> Self {
        Fallback::Value(Value::Null)
    }
}

impl fmt::Debug for Fallback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Fallback::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<Value> for Fallback<'_> {
    fn from(value: Value) -> Self {
        Fallback::Value(value)
    }
}

impl From<Option<Value>> for Fallback<'_> {
    fn from(value: Option<Value>) -> Self {
        Fallback::Value(value.unwrap_or(Value::Null))
    }
}
