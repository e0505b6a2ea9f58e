// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library is a high-level client over TDLib's JSON interface.
//!
//! The [`Client`] turns typed requests from [`tdjson_types::functions`] into
//! JSON objects, hands them to a [`Transport`] connected to TDLib, and turns
//! the answers back into typed responses. TDLib's `error` objects become
//! [`RemoteError`], never a successfully decoded value.
//!
//! Updates pushed by TDLib are read through the single [`Updates`] stream of
//! each client.
//!
//! This crate does not bind the native library itself: any type able to
//! exchange JSON objects with a TDLib instance can implement [`Transport`].
mod client;
pub mod errors;
pub mod transport;

pub use client::{Client, Config, InitParams, SignInError, Updates};
pub use errors::{InvocationError, RemoteError, TransportError};
pub use tdjson_types as tl;
pub use transport::Transport;
