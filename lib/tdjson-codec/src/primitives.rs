// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversions for the TDLib primitive types and containers.
//!
//! TDLib's JSON interface has a few quirks that show up here: `int64`
//! values travel as strings so that JavaScript-like consumers don't lose
//! precision, and `bytes` travel as base64.
use crate::errors::DecodeError;
use crate::{FromJson, ToJson};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{Number, Value};
use std::ops::Deref;

/// Largest integer magnitude a double can hold exactly.
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// A TDLib `bytes` value.
///
/// This is a new-type over `Vec<u8>` so that it gets encoded as a base64
/// string instead of an array of numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for Bytes {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(value: Bytes) -> Self {
        value.0
    }
}

impl FromJson for Bytes {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let text = value
            .as_str()
            .ok_or_else(|| DecodeError::invalid_type("base64 string", value))?;

        STANDARD
            .decode(text)
            .map(Self)
            .map_err(|e| DecodeError::invalid_value("bytes", e))
    }
}

impl ToJson for Bytes {
    fn to_json(&self) -> Value {
        Value::String(STANDARD.encode(&self.0))
    }
}

impl FromJson for String {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| DecodeError::invalid_type("string", value))
    }
}

impl ToJson for String {
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| DecodeError::invalid_type("boolean", value))
    }
}

impl ToJson for bool {
    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromJson for i32 {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let n = value
            .as_i64()
            .ok_or_else(|| DecodeError::invalid_type("int32", value))?;

        i32::try_from(n).map_err(|_| DecodeError::invalid_value("int32", format!("{n} is out of range")))
    }
}

impl ToJson for i32 {
    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

/// Both `int53` and `int64` map to `i64`. TDLib sends the former as a number
/// and the latter as a string, so both forms are accepted.
impl FromJson for i64 {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| DecodeError::invalid_value("int64", format!("{n} is not an integer"))),
            Value::String(s) => s
                .parse()
                .map_err(|e| DecodeError::invalid_value("int64", format!("{s:?}: {e}"))),
            other => Err(DecodeError::invalid_type("int64", other)),
        }
    }
}

/// Values a double can represent exactly are written as numbers, anything
/// larger as a string. TDLib accepts either form on input.
impl ToJson for i64 {
    fn to_json(&self) -> Value {
        if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(self) {
            Value::from(*self)
        } else {
            Value::String(self.to_string())
        }
    }
}

impl FromJson for f64 {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_f64()
            .ok_or_else(|| DecodeError::invalid_type("double", value))
    }
}

/// JSON has no representation for NaN or infinities. They encode as `null`,
/// which leaves the field out of the object, so only finite values round-trip.
impl ToJson for f64 {
    fn to_json(&self) -> Value {
        debug_assert!(self.is_finite(), "cannot encode {self} as json");
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_array()
            .ok_or_else(|| DecodeError::invalid_type("array", value))?
            .iter()
            .enumerate()
            .map(|(i, item)| T::from_json(item).map_err(|e| e.at_index(i)))
            .collect()
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

/// A nullable slot. Both a missing key and an explicit `null` are `None`.
impl<T: FromJson> FromJson for Option<T> {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(None),
            value => T::from_json(value).map(Some),
        }
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> Value {
        match self {
            Some(value) => value.to_json(),
            None => Value::Null,
        }
    }
}

impl<T: FromJson> FromJson for Box<T> {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        T::from_json(value).map(Box::new)
    }

    fn absent() -> Option<Self> {
        T::absent().map(Box::new)
    }
}

impl<T: ToJson + ?Sized> ToJson for Box<T> {
    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn check_int64_accepts_strings_and_numbers() {
        assert_eq!(i64::from_json(&json!("-9223372036854775808")).unwrap(), i64::MIN);
        assert_eq!(i64::from_json(&json!(1234)).unwrap(), 1234);
        assert!(matches!(
            i64::from_json(&json!("12a")),
            Err(DecodeError::InvalidValue { expected: "int64", .. })
        ));
        assert!(matches!(
            i64::from_json(&json!(1.5)),
            Err(DecodeError::InvalidValue { expected: "int64", .. })
        ));
    }

    #[test]
    fn check_int64_keeps_precision() {
        assert_eq!(5_i64.to_json(), json!(5));
        assert_eq!(MAX_SAFE_INTEGER.to_json(), json!(9007199254740991_i64));
        assert_eq!(
            (MAX_SAFE_INTEGER + 1).to_json(),
            json!("9007199254740992")
        );
        assert_eq!(
            i64::from_json(&(i64::MAX).to_json()).unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn check_int32_range() {
        assert_eq!(i32::from_json(&json!(-5)).unwrap(), -5);
        assert!(matches!(
            i32::from_json(&json!(4294967296_i64)),
            Err(DecodeError::InvalidValue { expected: "int32", .. })
        ));
        assert!(matches!(
            i32::from_json(&json!("5")),
            Err(DecodeError::InvalidType {
                expected: "int32",
                found: "string"
            })
        ));
    }

    #[test]
    fn check_double_round_trip() {
        assert_eq!(0.25f64.to_json(), json!(0.25));
        assert_eq!(f64::from_json(&json!(-1.5)).unwrap(), -1.5);
        assert_eq!(f64::from_json(&json!(3)).unwrap(), 3.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot encode NaN as json")]
    fn check_double_nan_is_rejected() {
        f64::NAN.to_json();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot encode inf as json")]
    fn check_double_infinity_is_rejected() {
        f64::INFINITY.to_json();
    }

    #[test]
    fn check_bytes_are_base64() {
        let bytes = Bytes(vec![0, 1, 2, 253, 254, 255]);
        assert_eq!(bytes.to_json(), json!("AAEC/f7/"));
        assert_eq!(Bytes::from_json(&json!("AAEC/f7/")).unwrap(), bytes);
        assert!(matches!(
            Bytes::from_json(&json!("not base64!")),
            Err(DecodeError::InvalidValue { expected: "bytes", .. })
        ));
    }

    #[test]
    fn check_sequence_order_and_error_index() {
        assert_eq!(
            Vec::<i32>::from_json(&json!([3, 1, 3, 2])).unwrap(),
            [3, 1, 3, 2]
        );
        match Vec::<i32>::from_json(&json!([1, 2, "three"])) {
            Err(DecodeError::Field { path, .. }) => assert_eq!(path.to_string(), "[2]"),
            other => panic!("expected a field error, got {other:?}"),
        }
    }

    #[test]
    fn check_option_null_is_absent() {
        assert_eq!(Option::<String>::from_json(&Value::Null).unwrap(), None);
        assert_eq!(Option::<String>::absent(), Some(None));
        assert_eq!(String::absent(), None);
        assert_eq!(Option::<String>::None.to_json(), Value::Null);
    }
}
