// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the machinery to convert TDLib's JSON objects into
//! strongly-typed Rust values and back.
//!
//! Every value TDLib exchanges is a JSON object tagged with its type name
//! under the `"@type"` key. Concrete objects map to plain structures
//! implementing [`Entity`]. Abstract types, which may hold any one of a closed
//! set of concrete objects, map to enumerations implementing [`Union`], and
//! are decoded by looking up the tag in that union's [`Registry`].
//!
//! The [`entity!`] and [`union!`] macros generate all the needed code from a
//! compact description of the schema:
//!
//! ```
//! use tdjson_codec::{entity, union};
//!
//! entity! {
//!     pub struct PollTypeRegular = "pollTypeRegular" {
//!         pub allow_multiple_answers: bool,
//!     }
//! }
//!
//! entity! {
//!     pub struct PollTypeQuiz = "pollTypeQuiz" {
//!         pub correct_option_id: i32,
//!     }
//! }
//!
//! union! {
//!     pub enum PollType = "PollType" {
//!         Regular(PollTypeRegular),
//!         Quiz(PollTypeQuiz),
//!     }
//! }
//!
//! let raw = serde_json::json!({"@type": "pollTypeQuiz", "correct_option_id": 2});
//! let poll_type = tdjson_codec::decode::<PollType>(&raw).unwrap();
//! assert_eq!(
//!     poll_type,
//!     Some(PollType::Quiz(PollTypeQuiz { correct_option_id: 2 }))
//! );
//! assert_eq!(tdjson_codec::encode(&poll_type.unwrap()), raw);
//! ```
//!
//! Decoding never falls back to a default value: a missing `"@type"`, a tag
//! that is not part of the union, or any field that fails to decode is
//! reported as a [`DecodeError`], with the path to the offending field.
pub mod errors;
mod macros;
mod primitives;
mod registry;

pub use errors::{DecodeError, FieldPath, PathSegment, RegistryError};
pub use primitives::Bytes;
pub use registry::{Factory, Registry, RegistryBuilder};

use serde_json::{Map, Value};
use std::fmt;

/// Key under which every TDLib object carries its type name.
pub const TYPE_KEY: &str = "@type";

/// Types that can be built out of a JSON value.
pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Result<Self, DecodeError>;

    /// The value to use when the field holding this type is missing or
    /// `null`, if the type has one. Only nullable slots do.
    fn absent() -> Option<Self> {
        None
    }
}

/// Types that can be turned into a JSON value.
pub trait ToJson {
    fn to_json(&self) -> Value;
}

/// A concrete TDLib object, with a fixed tag and a fixed set of fields.
pub trait Entity: FromJson + ToJson {
    /// The value of `"@type"` for this object.
    const TAG: &'static str;

    /// Build the object out of its fields, ignoring `"@type"`.
    fn decode_fields(object: &Map<String, Value>) -> Result<Self, DecodeError>;

    /// Write every field of the object, except `"@type"`, into `object`.
    fn encode_fields(&self, object: &mut Map<String, Value>);
}

/// Recursive variants are stored boxed inside their union.
impl<T: Entity> Entity for Box<T> {
    const TAG: &'static str = T::TAG;

    fn decode_fields(object: &Map<String, Value>) -> Result<Self, DecodeError> {
        T::decode_fields(object).map(Box::new)
    }

    fn encode_fields(&self, object: &mut Map<String, Value>) {
        (**self).encode_fields(object)
    }
}

/// An abstract TDLib type: one of a closed set of [`Entity`] variants.
pub trait Union: FromJson + ToJson + 'static {
    /// The name of the abstract type, such as `"AuthorizationState"`.
    const NAME: &'static str;

    /// The table of variants of this union. It is built on first use and
    /// never changes afterwards.
    fn registry() -> &'static Registry<Self>;

    /// The tag of the variant held.
    fn tag(&self) -> &'static str;
}

/// Object-safe view over any entity or union, for when the concrete type is
/// only known at runtime.
pub trait Object: ToJson + fmt::Debug + Send + Sync {
    /// The tag of the concrete object.
    fn type_tag(&self) -> &'static str;
}

/// Decode a value of the union `U`.
///
/// Returns `Ok(None)` if `raw` is `null`, so callers can tell an omitted
/// value apart from one that failed to decode.
pub fn decode<U: Union>(raw: &Value) -> Result<Option<U>, DecodeError> {
    if raw.is_null() {
        Ok(None)
    } else {
        U::registry().decode(raw).map(Some)
    }
}

/// Decode a value of the union `U`, treating `null` as an error.
pub fn decode_required<U: Union>(raw: &Value) -> Result<U, DecodeError> {
    decode(raw)?.ok_or(DecodeError::MissingValue)
}

/// Parse `text` as JSON and decode it as `T`.
///
/// Unlike `serde_json::from_str`, nesting depth is not capped, so recursive
/// objects such as rich text read back from text at any depth the stack allows.
pub fn decode_str<T: FromJson>(text: &str) -> Result<T, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = <Value as serde::Deserialize>::deserialize(&mut deserializer)?;
    deserializer.end()?;
    T::from_json(&value)
}

/// Encode `value` into JSON, `"@type"` included.
pub fn encode<T: ToJson + ?Sized>(value: &T) -> Value {
    value.to_json()
}

/// Encode `value` into JSON text, `"@type"` included.
pub fn encode_string<T: ToJson + ?Sized>(value: &T) -> String {
    value.to_json().to_string()
}

/// Support code for the macros. Not public API.
#[doc(hidden)]
pub mod __private {
    use super::{DecodeError, Entity, FromJson, ToJson, TYPE_KEY};
    pub use serde;
    pub use serde_json::{Map, Value};

    /// Rust field names that clash with keywords are written as raw
    /// identifiers (`r#type`), but travel without the prefix.
    fn json_key(name: &'static str) -> &'static str {
        name.strip_prefix("r#").unwrap_or(name)
    }

    pub fn read_field<T: FromJson>(
        object: &Map<String, Value>,
        owner: &'static str,
        name: &'static str,
    ) -> Result<T, DecodeError> {
        let key = json_key(name);
        match object.get(key) {
            None | Some(Value::Null) => T::absent().ok_or(DecodeError::MissingValue),
            Some(value) => T::from_json(value),
        }
        .map_err(|e| e.in_field(owner, key))
    }

    pub fn write_field<T: ToJson>(object: &mut Map<String, Value>, name: &'static str, value: &T) {
        let value = value.to_json();
        if !value.is_null() {
            object.insert(json_key(name).to_owned(), value);
        }
    }

    pub fn decode_entity<T: Entity>(value: &Value) -> Result<T, DecodeError> {
        let object = value
            .as_object()
            .ok_or_else(|| DecodeError::invalid_type("object", value))?;

        match object.get(TYPE_KEY) {
            None => {}
            Some(Value::String(tag)) if tag == T::TAG => {}
            Some(Value::String(tag)) => {
                return Err(DecodeError::UnexpectedType {
                    expected: T::TAG,
                    found: tag.clone(),
                });
            }
            Some(other) => {
                return Err(DecodeError::invalid_type("string", other).in_field(T::TAG, TYPE_KEY));
            }
        }

        T::decode_fields(object)
    }

    pub fn encode_entity<T: Entity>(value: &T) -> Value {
        let mut object = Map::new();
        object.insert(TYPE_KEY.to_owned(), Value::String(T::TAG.to_owned()));
        value.encode_fields(&mut object);
        Value::Object(object)
    }

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: ToJson + ?Sized,
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&value.to_json(), serializer)
    }

    /// Nesting depth is whatever `deserializer` allows.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromJson,
        D: serde::Deserializer<'de>,
    {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        T::from_json(&value).map_err(serde::de::Error::custom)
    }
}
