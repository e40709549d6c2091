//! Argument checking for the dynamically-typed call boundary.
//!
//! Every check runs in two tiers: argument count first, then the type of the
//! argument at the requested position.

use serde_json::Value;

use crate::error::BindingError;

/// Host-facing name of a value's type, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert a host number to an unsigned 32-bit integer.
///
/// Truncates toward zero and wraps modulo 2^32; NaN and infinities map to 0.
pub fn to_uint32(number: f64) -> u32 {
    if !number.is_finite() {
        return 0;
    }
    let wrapped = number.trunc().rem_euclid(4_294_967_296.0);
    wrapped as u32
}

/// Arguments of one call, tagged with the method name for error reporting.
pub struct CallArgs<'a> {
    method: &'a str,
    values: &'a [Value],
}

impl<'a> CallArgs<'a> {
    pub fn new(method: &'a str, values: &'a [Value]) -> Self {
        Self { method, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fail with `ArgumentCount` unless at least `expected` arguments were given.
    /// Extra arguments are accepted and ignored.
    pub fn require_count(&self, expected: usize) -> Result<(), BindingError> {
        if self.values.len() < expected {
            return Err(BindingError::ArgumentCount {
                method: self.method.to_string(),
                expected,
                received: self.values.len(),
            });
        }
        Ok(())
    }

    pub fn string(&self, index: usize) -> Result<&'a str, BindingError> {
        let value = self.at(index)?;
        value
            .as_str()
            .ok_or_else(|| self.type_error("string", value))
    }

    pub fn boolean(&self, index: usize) -> Result<bool, BindingError> {
        let value = self.at(index)?;
        value
            .as_bool()
            .ok_or_else(|| self.type_error("boolean", value))
    }

    pub fn number(&self, index: usize) -> Result<f64, BindingError> {
        let value = self.at(index)?;
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| self.type_error("number", value)),
            _ => Err(self.type_error("number", value)),
        }
    }

    fn at(&self, index: usize) -> Result<&'a Value, BindingError> {
        self.require_count(index + 1)?;
        Ok(&self.values[index])
    }

    fn type_error(&self, expected: &str, value: &Value) -> BindingError {
        BindingError::ArgumentType {
            method: self.method.to_string(),
            expected: expected.to_string(),
            received: type_name(value).to_string(),
        }
    }
}
