// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Declarative macros that expand a compact schema description into the
//! structures, enumerations and trait implementations the codec needs.

/// Defines a concrete TDLib object.
///
/// ```
/// tdjson_codec::entity! {
///     /// A point on a Cartesian plane.
///     pub struct Point = "point" {
///         pub x: f64,
///         pub y: f64,
///     }
/// }
/// ```
///
/// Expands to the structure itself plus implementations of [`Entity`],
/// [`FromJson`], [`ToJson`], [`Object`], and serde's `Serialize` and
/// `Deserialize`. Fields named after Rust keywords are written as raw
/// identifiers (`r#type`) and map to the JSON key without the prefix.
///
/// [`Entity`]: crate::Entity
/// [`FromJson`]: crate::FromJson
/// [`ToJson`]: crate::ToJson
/// [`Object`]: crate::Object
#[macro_export]
macro_rules! entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $tag:literal {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident: $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::Entity for $name {
            const TAG: &'static str = $tag;

            #[allow(unused_variables)]
            fn decode_fields(
                object: &$crate::__private::Map<::std::string::String, $crate::__private::Value>,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                ::std::result::Result::Ok(Self {
                    $(
                        $field: $crate::__private::read_field(
                            object,
                            $tag,
                            ::std::stringify!($field),
                        )?,
                    )*
                })
            }

            #[allow(unused_variables)]
            fn encode_fields(
                &self,
                object: &mut $crate::__private::Map<::std::string::String, $crate::__private::Value>,
            ) {
                $(
                    $crate::__private::write_field(object, ::std::stringify!($field), &self.$field);
                )*
            }
        }

        impl $crate::FromJson for $name {
            fn from_json(
                value: &$crate::__private::Value,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                $crate::__private::decode_entity(value)
            }
        }

        impl $crate::ToJson for $name {
            fn to_json(&self) -> $crate::__private::Value {
                $crate::__private::encode_entity(self)
            }
        }

        impl $crate::Object for $name {
            fn type_tag(&self) -> &'static str {
                <Self as $crate::Entity>::TAG
            }
        }

        $crate::__impl_serde!($name);
    };
}

/// Defines an abstract TDLib type as a closed enumeration of entities.
///
/// ```
/// # tdjson_codec::entity! { pub struct MaskPointEyes = "maskPointEyes" {} }
/// # tdjson_codec::entity! { pub struct MaskPointMouth = "maskPointMouth" {} }
/// tdjson_codec::union! {
///     /// Part of the face, relative to which a mask is placed.
///     pub enum MaskPoint = "MaskPoint" {
///         Eyes(MaskPointEyes),
///         Mouth(MaskPointMouth),
///     }
/// }
/// ```
///
/// Each variant wraps a type implementing [`Entity`] (possibly boxed, for
/// recursive types). The expansion implements [`Union`], registering every
/// variant under the tag of the entity it wraps, alongside [`FromJson`],
/// [`ToJson`], [`Object`], serde's traits and `From<Variant>` conversions.
///
/// [`Entity`]: crate::Entity
/// [`Union`]: crate::Union
/// [`FromJson`]: crate::FromJson
/// [`ToJson`]: crate::ToJson
/// [`Object`]: crate::Object
#[macro_export]
macro_rules! union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident = $union_name:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($variant_ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($variant_ty),
            )+
        }

        impl $crate::Union for $name {
            const NAME: &'static str = $union_name;

            fn registry() -> &'static $crate::Registry<Self> {
                static REGISTRY: ::std::sync::OnceLock<$crate::Registry<$name>> =
                    ::std::sync::OnceLock::new();

                REGISTRY.get_or_init(|| {
                    $crate::Registry::<$name>::builder($union_name)
                        $(
                            .variant(<$variant_ty as $crate::Entity>::TAG, |object| {
                                <$variant_ty as $crate::Entity>::decode_fields(object)
                                    .map($name::$variant)
                            })
                        )+
                        .build()
                })
            }

            fn tag(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant(_) => <$variant_ty as $crate::Entity>::TAG,
                    )+
                }
            }
        }

        impl $crate::FromJson for $name {
            fn from_json(
                value: &$crate::__private::Value,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                $crate::decode_required::<Self>(value)
            }
        }

        impl $crate::ToJson for $name {
            fn to_json(&self) -> $crate::__private::Value {
                match self {
                    $(
                        Self::$variant(x) => $crate::ToJson::to_json(x),
                    )+
                }
            }
        }

        impl $crate::Object for $name {
            fn type_tag(&self) -> &'static str {
                $crate::Union::tag(self)
            }
        }

        $crate::__impl_serde!($name);

        $(
            impl ::std::convert::From<$variant_ty> for $name {
                fn from(x: $variant_ty) -> Self {
                    Self::$variant(x)
                }
            }
        )+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_serde {
    ($name:ident) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::__private::deserialize(deserializer)
            }
        }
    };
}
