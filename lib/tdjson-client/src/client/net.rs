// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Client, ClientInner, Config};
use crate::errors::{InvocationError, RemoteError, TransportError};
use crate::transport::Transport;
use log::{debug, info, trace};
use serde_json::{Map, Value};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tdjson_codec::{Entity, FromJson, TYPE_KEY};
use tdjson_types::{types, Function};

/// Turn TDLib's `error` objects into [`RemoteError`]. Anything else is
/// passed through to be decoded by the caller.
pub(super) fn check_response(tag: &str, response: Value) -> Result<Value, InvocationError> {
    if response.get(TYPE_KEY).and_then(Value::as_str) == Some(types::Error::TAG) {
        let error = RemoteError::from(types::Error::from_json(&response)?);
        debug!("{tag} failed: {error}");
        return Err(error.into());
    }

    trace!("{tag} succeeded: {response}");
    Ok(response)
}

/// Method implementations directly related with exchanging requests.
impl Client {
    /// Creates a new client that will talk to TDLib through the given transport.
    ///
    /// # Examples
    ///
    /// ```
    /// use tdjson_client::{Client, Config, Transport, TransportError};
    /// use futures_util::future::{self, BoxFuture};
    /// use serde_json::Value;
    ///
    /// struct Offline;
    ///
    /// impl Transport for Offline {
    ///     fn send(&self, _: Value) -> BoxFuture<'_, Result<Value, TransportError>> {
    ///         Box::pin(future::ready(Err(TransportError::Closed)))
    ///     }
    ///
    ///     fn receive(&self) -> BoxFuture<'_, Option<Value>> {
    ///         Box::pin(future::ready(None))
    ///     }
    /// }
    ///
    /// // Note: these are example values and are not actually valid.
    /// //       Obtain your own with the developer's phone at https://my.telegram.org.
    /// const API_ID: i32 = 932939;
    /// const API_HASH: &str = "514727c32270b9eb8cc16daf17e21e57";
    ///
    /// let client = Client::new(Offline, Config {
    ///     api_id: API_ID,
    ///     api_hash: API_HASH.to_string(),
    ///     params: Default::default(),
    ///     request_timeout: None,
    /// });
    /// ```
    pub fn new<T: Transport + 'static>(transport: T, config: Config) -> Self {
        info!(
            "creating client for api_id {} (test dc: {})",
            config.api_id, config.params.use_test_dc
        );

        Self(Arc::new(ClientInner {
            transport: Box::new(transport),
            config,
            updates_taken: AtomicBool::new(false),
        }))
    }

    /// The configuration this client was created with.
    pub fn config(&self) -> &Config {
        &self.0.config
    }

    /// Send the request tagged `tag` with the given fields, and return TDLib's raw response.
    ///
    /// If TDLib answers with an `error` object, it is returned as [`InvocationError::Remote`],
    /// before any attempt to interpret the response as something else.
    ///
    /// Dropping the returned future only stops waiting for the response.
    pub async fn call(
        &self,
        tag: &str,
        mut fields: Map<String, Value>,
    ) -> Result<Value, InvocationError> {
        fields.insert(TYPE_KEY.to_string(), Value::String(tag.to_string()));
        self.send(tag, Value::Object(fields)).await
    }

    /// Invoke a typed request, and decode its response.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: tdjson_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use tdjson_client::tl;
    ///
    /// dbg!(client.invoke(&tl::functions::GetAuthorizationState {}).await?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn invoke<F: Function + Sync>(
        &self,
        request: &F,
    ) -> Result<F::Response, InvocationError> {
        let response = self.send(F::TAG, tdjson_codec::encode(request)).await?;
        Ok(F::Response::from_json(&response)?)
    }

    /// Execute a typed request synchronously, without going through TDLib's event loop.
    ///
    /// Only requests that TDLib documents as synchronous can be executed this way. Any other
    /// request fails with [`InvocationError::NotSynchronous`] without reaching the transport.
    pub fn execute<F: Function>(&self, request: &F) -> Result<F::Response, InvocationError> {
        if !F::IS_SYNCHRONOUS {
            return Err(InvocationError::NotSynchronous { tag: F::TAG });
        }

        let request = tdjson_codec::encode(request);
        trace!("executing {}: {}", F::TAG, request);
        let response = self.0.transport.execute(request)?;
        let response = check_response(F::TAG, response)?;
        Ok(F::Response::from_json(&response)?)
    }

    async fn send(&self, tag: &str, request: Value) -> Result<Value, InvocationError> {
        debug!("sending {tag}");
        trace!("sending {tag}: {request}");

        let response = self.0.transport.send(request);
        let response = match self.0.config.request_timeout {
            Some(timeout) => tokio::time::timeout(timeout, response)
                .await
                .map_err(|_| TransportError::Timeout(timeout))??,
            None => response.await?,
        };

        check_response(tag, response)
    }
}
