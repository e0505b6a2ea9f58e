// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the Rust definitions for TDLib's [`types`] and
//! [`functions`] in the form of `struct` and `enum`, as exchanged through
//! its JSON interface.
//!
//! Concrete objects live in [`types`]. Abstract types, which may be any one
//! of several concrete objects, are the `enum` found in [`enums`]. Requests
//! are in [`functions`], and know the type of their response through the
//! [`Function`] trait.
//!
//! Everything implements [`FromJson`] and [`ToJson`], along with serde's
//! `Serialize` and `Deserialize`:
//!
//! ```
//! use tdjson_types::enums::AuthorizationState;
//!
//! let state = tdjson_codec::decode_str::<AuthorizationState>(
//!     r#"{"@type":"authorizationStateWaitPhoneNumber"}"#,
//! )
//! .unwrap();
//!
//! assert!(matches!(state, AuthorizationState::WaitPhoneNumber(_)));
//! ```
//!
//! When the abstract type is only known at runtime, the [`schema`] module can
//! look it up by name.
//!
//! [`FromJson`]: tdjson_codec::FromJson
//! [`ToJson`]: tdjson_codec::ToJson
pub mod enums;
pub mod functions;
pub mod schema;
pub mod types;

pub use tdjson_codec::{Entity, FromJson, Object, ToJson, Union};

/// Structures implementing this trait indicate that they are suitable for
/// use as requests to TDLib, and know what the type of the response will be.
pub trait Function: Entity {
    /// The type of the value TDLib answers with when the request succeeds.
    type Response: FromJson + Send + 'static;

    /// Whether TDLib can answer this request synchronously, without going
    /// through the client's event loop.
    const IS_SYNCHRONOUS: bool = false;
}
