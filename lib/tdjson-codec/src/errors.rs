// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that can occur while decoding TDLib objects or while building the
//! registries that drive the decoding of [`Union`]s.
//!
//! [`Union`]: crate::Union
use serde_json::Value;
use std::error::Error;
use std::fmt;

/// A single step in the path leading to a field that failed to decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A named field of an object.
    Field(&'static str),
    /// A position inside a sequence.
    Index(usize),
}

/// Dotted location of a field relative to the outermost object being decoded,
/// such as `code_info.type.length` or `entities[2].type`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The individual steps of this path, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{name}")?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// The error type returned when a JSON value cannot be turned into the
/// requested entity or union.
#[derive(Debug)]
pub enum DecodeError {
    /// The value for a polymorphic slot was not an object carrying a string
    /// `"@type"`.
    MalformedUnion {
        /// Name of the union that was being decoded.
        union: &'static str,
    },

    /// The `"@type"` of a polymorphic value is not a variant of the union.
    ///
    /// This is how schema drift shows up: TDLib sent a type this binding has
    /// not been updated for.
    UnknownVariant {
        /// Name of the union that was being decoded.
        union: &'static str,
        /// The offending tag, preserved verbatim.
        tag: String,
    },

    /// A concrete (non-polymorphic) slot carried a `"@type"` for a different
    /// entity.
    UnexpectedType {
        expected: &'static str,
        found: String,
    },

    /// A field of an entity failed to decode.
    Field {
        /// Outermost union the failing entity was decoded through, if any.
        union: Option<&'static str>,
        /// Tag of the outermost entity owning the path.
        owner: &'static str,
        /// Location of the failing field, relative to `owner`.
        path: FieldPath,
        /// The underlying reason.
        source: Box<DecodeError>,
    },

    /// A required value was missing or `null`.
    MissingValue,

    /// The JSON value had the wrong kind (e.g. a string where a number was
    /// expected).
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },

    /// The JSON value had the right kind but could not be represented (e.g.
    /// an `int32` out of range, or invalid base64).
    InvalidValue {
        expected: &'static str,
        reason: String,
    },

    /// A union was looked up by a name no union has.
    UnknownUnion { name: String },

    /// The input text was not JSON at all.
    Json(serde_json::Error),
}

impl DecodeError {
    pub(crate) fn invalid_type(expected: &'static str, found: &Value) -> Self {
        Self::InvalidType {
            expected,
            found: json_kind(found),
        }
    }

    pub(crate) fn invalid_value(expected: &'static str, reason: impl fmt::Display) -> Self {
        Self::InvalidValue {
            expected,
            reason: reason.to_string(),
        }
    }

    /// Wrap this error as having occurred in the field `name` of the entity
    /// tagged `owner`, extending the path if it already was a field error.
    pub fn in_field(self, owner: &'static str, name: &'static str) -> Self {
        self.prepend(owner, PathSegment::Field(name))
    }

    /// Wrap this error as having occurred in the element `index` of a sequence.
    pub fn at_index(self, index: usize) -> Self {
        match self {
            Self::Field {
                union,
                owner,
                mut path,
                source,
            } => {
                path.prepend(PathSegment::Index(index));
                Self::Field {
                    union,
                    owner,
                    path,
                    source,
                }
            }
            other => Self::Field {
                union: None,
                owner: "",
                path: FieldPath(vec![PathSegment::Index(index)]),
                source: Box::new(other),
            },
        }
    }

    /// Record the union this error surfaced through. The outermost union wins.
    pub(crate) fn within_union(self, name: &'static str) -> Self {
        match self {
            Self::Field {
                owner,
                path,
                source,
                ..
            } => Self::Field {
                union: Some(name),
                owner,
                path,
                source,
            },
            other => other,
        }
    }

    fn prepend(self, owner: &'static str, segment: PathSegment) -> Self {
        match self {
            Self::Field {
                union,
                mut path,
                source,
                ..
            } => {
                path.prepend(segment);
                Self::Field {
                    union,
                    owner,
                    path,
                    source,
                }
            }
            other => Self::Field {
                union: None,
                owner,
                path: FieldPath(vec![segment]),
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, skipping over every [`DecodeError::Field`] wrapper.
    pub fn root_cause(&self) -> &DecodeError {
        let mut error = self;
        while let Self::Field { source, .. } = error {
            error = source;
        }
        error
    }

    /// The tag of the unknown variant behind this error, if that is what
    /// caused it, no matter how deeply nested.
    pub fn unknown_tag(&self) -> Option<&str> {
        match self.root_cause() {
            Self::UnknownVariant { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field { source, .. } => Some(source.as_ref()),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedUnion { union } => {
                write!(f, "malformed {union}: expected an object with a string \"@type\"")
            }
            Self::UnknownVariant { union, tag } => write!(f, "unknown {union} variant: {tag}"),
            Self::UnexpectedType { expected, found } => {
                write!(f, "expected object of type {expected}, found {found}")
            }
            Self::Field {
                union,
                owner,
                path,
                source,
            } => {
                write!(f, "failed to decode ")?;
                if let Some(union) = union {
                    write!(f, "{union} ")?;
                }
                if owner.is_empty() {
                    write!(f, "{path}: {source}")
                } else {
                    write!(f, "{owner}.{path}: {source}")
                }
            }
            Self::MissingValue => write!(f, "missing value"),
            Self::InvalidType { expected, found } => {
                write!(f, "invalid type: expected {expected}, found {found}")
            }
            Self::InvalidValue { expected, reason } => {
                write!(f, "invalid {expected} value: {reason}")
            }
            Self::UnknownUnion { name } => write!(f, "unknown union: {name}"),
            Self::Json(err) => write!(f, "malformed json: {err}"),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

/// The error type returned when a registry cannot be built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The same tag was registered twice for one union.
    DuplicateVariant {
        union: &'static str,
        tag: &'static str,
    },
}

impl Error for RegistryError {}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVariant { union, tag } => {
                write!(f, "variant {tag} registered twice for {union}")
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_path_composition() {
        let error = DecodeError::MissingValue
            .in_field("textEntity", "type")
            .at_index(2)
            .in_field("formattedText", "entities")
            .in_field("pollTypeQuiz", "explanation");

        match &error {
            DecodeError::Field { owner, path, .. } => {
                assert_eq!(*owner, "pollTypeQuiz");
                assert_eq!(path.to_string(), "explanation.entities[2].type");
            }
            other => panic!("expected a field error, got {other:?}"),
        }
        assert!(matches!(error.root_cause(), DecodeError::MissingValue));
        assert_eq!(
            error.to_string(),
            "failed to decode pollTypeQuiz.explanation.entities[2].type: missing value"
        );
    }

    #[test]
    fn check_outermost_union_wins() {
        let error = DecodeError::UnknownVariant {
            union: "AuthenticationCodeType",
            tag: "authenticationCodeTypeCarrierPigeon".into(),
        }
        .in_field("authenticationCodeInfo", "type")
        .within_union("AuthenticationCodeType")
        .in_field("authorizationStateWaitCode", "code_info")
        .within_union("AuthorizationState");

        match &error {
            DecodeError::Field { union, path, .. } => {
                assert_eq!(*union, Some("AuthorizationState"));
                assert_eq!(path.to_string(), "code_info.type");
            }
            other => panic!("expected a field error, got {other:?}"),
        }
        assert_eq!(
            error.unknown_tag(),
            Some("authenticationCodeTypeCarrierPigeon")
        );
    }

    #[test]
    fn check_index_without_owner() {
        let error = DecodeError::MissingValue.at_index(0);
        assert_eq!(error.to_string(), "failed to decode [0]: missing value");
    }
}
