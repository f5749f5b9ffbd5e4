use super::HostValue;
use serde_json::Value;
use std::borrow::Cow;

impl HostValue for Value {
    fn as_array(&self) -> Option<Cow<'_, [Value]>> {
        match self {
            Value::Array(elems) => Some(Cow::Borrowed(elems.as_slice())),
            _ => None,
        }
    }

    fn is_bool(&self) -> bool {
        self.is_boolean()
    }

    fn to_f64(&self) -> Option<f64> {
        self.as_f64()
    }
}
