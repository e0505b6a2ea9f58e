// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The boundary between the client and the TDLib instance it talks to.
use crate::errors::TransportError;
use futures_util::future::BoxFuture;
use serde_json::Value;
use std::sync::Arc;

/// A connection to a TDLib instance, able to exchange JSON objects with it.
///
/// Implementations own whatever native resource stands behind TDLib, and are
/// responsible for pairing each request with its response.
pub trait Transport: Send + Sync {
    /// Send `request` and wait for TDLib's response to it.
    fn send(&self, request: Value) -> BoxFuture<'_, Result<Value, TransportError>>;

    /// Answer `request` synchronously, if the transport can do so.
    fn execute(&self, _request: Value) -> Result<Value, TransportError> {
        Err(TransportError::Unsupported)
    }

    /// Wait for the next object TDLib pushes on its own, such as an update.
    ///
    /// Returns `None` once TDLib has been closed.
    fn receive(&self) -> BoxFuture<'_, Option<Value>>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: Value) -> BoxFuture<'_, Result<Value, TransportError>> {
        (**self).send(request)
    }

    fn execute(&self, request: Value) -> Result<Value, TransportError> {
        (**self).execute(request)
    }

    fn receive(&self) -> BoxFuture<'_, Option<Value>> {
        (**self).receive()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: Value) -> BoxFuture<'_, Result<Value, TransportError>> {
        (**self).send(request)
    }

    fn execute(&self, request: Value) -> Result<Value, TransportError> {
        (**self).execute(request)
    }

    fn receive(&self) -> BoxFuture<'_, Option<Value>> {
        (**self).receive()
    }
}
