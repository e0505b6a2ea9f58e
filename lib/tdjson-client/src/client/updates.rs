// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods to deal with and offer access to updates.
use super::net::check_response;
use super::{Client, ClientInner};
use crate::errors::InvocationError;
use futures_util::stream::{self, BoxStream, Stream, StreamExt};
use log::{trace, warn};
use serde_json::Value;
use std::fmt;
use std::pin::Pin;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::task::{Context, Poll};
use tdjson_codec::Union;

/// The stream of objects TDLib pushes without being asked, such as updates.
///
/// The stream ends once TDLib is closed. It cannot be restarted.
pub struct Updates {
    stream: BoxStream<'static, Value>,
}

impl Client {
    /// Take the stream of updates for this client.
    ///
    /// Updates are only delivered once, so there can only be one reader. Calling this method
    /// a second time, on this client or any of its clones, fails with
    /// [`InvocationError::UpdatesTaken`].
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: tdjson_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use tdjson_client::tl::enums::Update;
    ///
    /// let mut updates = client.updates()?;
    /// while let Some(update) = updates.next_update::<Update>().await {
    ///     match update {
    ///         Ok(Update::NewMessage(update)) => println!("{:?}", update.message.content),
    ///         Ok(_) => {}
    ///         Err(e) => eprintln!("ignoring update: {e}"),
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn updates(&self) -> Result<Updates, InvocationError> {
        if self.0.updates_taken.swap(true, Ordering::SeqCst) {
            return Err(InvocationError::UpdatesTaken);
        }

        let stream = stream::unfold(Arc::clone(&self.0), |inner: Arc<ClientInner>| async move {
            let value = inner.transport.receive().await?;
            trace!("received {value}");
            Some((value, inner))
        });

        Ok(Updates {
            stream: stream.boxed(),
        })
    }
}

impl Updates {
    /// The next object as TDLib sent it, or `None` once TDLib is closed.
    pub async fn next_raw(&mut self) -> Option<Value> {
        self.stream.next().await
    }

    /// The next object decoded as the union `U`, or `None` once TDLib is closed.
    ///
    /// `error` objects pushed by TDLib come back as [`InvocationError::Remote`]. Objects that
    /// don't belong to `U` are returned as [`InvocationError::Decode`] rather than skipped, so
    /// that schema differences with the running TDLib version are noticed.
    pub async fn next_update<U: Union>(&mut self) -> Option<Result<U, InvocationError>> {
        let raw = match check_response(U::NAME, self.next_raw().await?) {
            Ok(raw) => raw,
            Err(err) => return Some(Err(err)),
        };

        let update = tdjson_codec::decode_required::<U>(&raw);
        if let Err(err) = &update {
            match err.unknown_tag() {
                Some(tag) => warn!("received unknown {} variant: {}", U::NAME, tag),
                None => warn!("failed to decode {}: {}", U::NAME, err),
            }
        }
        Some(update.map_err(InvocationError::from))
    }
}

impl Stream for Updates {
    type Item = Value;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Value>> {
        self.stream.poll_next_unpin(cx)
    }
}

impl fmt::Debug for Updates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Updates").finish_non_exhaustive()
    }
}
