// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runtime access to the abstract types by their name.
//!
//! Most code knows statically which union it expects, and should use
//! [`tdjson_codec::decode`] with the right `enum`. This module is for the
//! remaining cases, such as tools that are told the union name as text.
use crate::enums;
use serde_json::Value;
use std::fmt;
use tdjson_codec::{DecodeError, Object, Union};

type DecodeFn = fn(&Value) -> Result<Option<Box<dyn Object>>, DecodeError>;

/// A union known to this crate.
pub struct UnionEntry {
    name: &'static str,
    tags: fn() -> Vec<&'static str>,
    decode: DecodeFn,
}

impl UnionEntry {
    /// The name of the union, such as `"AuthorizationState"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The tags of every variant of the union, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        (self.tags)()
    }

    /// Decode `raw` as this union. `null` decodes to `None`.
    pub fn decode(&self, raw: &Value) -> Result<Option<Box<dyn Object>>, DecodeError> {
        (self.decode)(raw)
    }
}

impl fmt::Debug for UnionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn tags_of<U: Union>() -> Vec<&'static str> {
    U::registry().tags()
}

fn decode_as<U: Union + Object>(raw: &Value) -> Result<Option<Box<dyn Object>>, DecodeError> {
    Ok(tdjson_codec::decode::<U>(raw)?.map(|value| Box::new(value) as Box<dyn Object>))
}

macro_rules! catalog {
    ($($union:ident),+ $(,)?) => {
        /// Every union defined in [`enums`](crate::enums).
        pub static UNIONS: &[UnionEntry] = &[
            $(
                UnionEntry {
                    name: <enums::$union as Union>::NAME,
                    tags: tags_of::<enums::$union>,
                    decode: decode_as::<enums::$union>,
                },
            )+
        ];
    };
}

catalog![
    AuthenticationCodeType,
    AuthorizationState,
    TextEntityType,
    TextParseMode,
    RichText,
    PageBlock,
    InputFile,
    ThumbnailFormat,
    MaskPoint,
    VectorPathCommand,
    PollType,
    KeyboardButtonType,
    InlineKeyboardButtonType,
    ReplyMarkup,
    CallbackQueryPayload,
    InputMessageContent,
    MessageContent,
    MessageSchedulingState,
    InputInlineQueryResult,
    OptionValue,
    ConnectionState,
    Update,
];

/// Find the union called `name`.
pub fn find(name: &str) -> Option<&'static UnionEntry> {
    UNIONS.iter().find(|entry| entry.name == name)
}

/// The names of every known union, in declaration order.
pub fn union_names() -> impl Iterator<Item = &'static str> {
    UNIONS.iter().map(UnionEntry::name)
}

/// The sorted variant tags of the union called `name`, if it exists.
pub fn variant_tags(name: &str) -> Option<Vec<&'static str>> {
    find(name).map(UnionEntry::tags)
}

/// The name of the union having `tag` as one of its variants.
pub fn union_of_tag(tag: &str) -> Option<&'static str> {
    UNIONS
        .iter()
        .find(|entry| entry.tags().iter().any(|t| *t == tag))
        .map(UnionEntry::name)
}

/// Decode `raw` as the union called `name`.
///
/// Behaves like [`tdjson_codec::decode`], but fails with
/// [`DecodeError::UnknownUnion`] if no union has that name.
pub fn decode_by_name(name: &str, raw: &Value) -> Result<Option<Box<dyn Object>>, DecodeError> {
    let entry = find(name).ok_or_else(|| DecodeError::UnknownUnion {
        name: name.to_string(),
    })?;
    entry.decode(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use tdjson_codec::ToJson;

    #[test]
    fn check_tags_globally_unique() {
        let mut owners = HashMap::new();
        for entry in UNIONS {
            for tag in entry.tags() {
                if let Some(previous) = owners.insert(tag, entry.name()) {
                    panic!("{tag} is a variant of both {previous} and {}", entry.name());
                }
            }
        }
        assert!(owners.len() > 100);
    }

    #[test]
    fn check_names_unique_and_found() {
        let mut names = union_names().collect::<Vec<_>>();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count);

        for name in names {
            assert_eq!(find(name).map(UnionEntry::name), Some(name));
        }
    }

    #[test]
    fn check_variant_tags() {
        assert_eq!(
            variant_tags("PollType"),
            Some(vec!["pollTypeQuiz", "pollTypeRegular"])
        );
        assert_eq!(variant_tags("Poll"), None);
        assert_eq!(union_of_tag("maskPointChin"), Some("MaskPoint"));
        assert_eq!(union_of_tag("poll"), None);
    }

    #[test]
    fn check_decode_by_name() {
        let raw = json!({"@type": "connectionStateReady"});
        let value = decode_by_name("ConnectionState", &raw).unwrap().unwrap();
        assert_eq!(value.type_tag(), "connectionStateReady");
        assert_eq!(value.to_json(), raw);

        assert!(decode_by_name("ConnectionState", &Value::Null)
            .unwrap()
            .is_none());
    }

    #[test]
    fn check_decode_by_unknown_name() {
        let err = decode_by_name("Chat", &json!({"@type": "chat"})).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownUnion { ref name } if name == "Chat"));
    }

    #[test]
    fn check_decode_by_name_wrong_union() {
        let err = decode_by_name("MaskPoint", &json!({"@type": "pollTypeRegular"})).unwrap_err();
        assert_eq!(err.unknown_tag(), Some("pollTypeRegular"));
    }
}
