// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that can occur when talking to TDLib.
use std::error::Error;
use std::fmt;
use std::io;
use std::time::Duration;
use tdjson_codec::DecodeError;
use tdjson_types::types;

/// The error TDLib answers with when a request fails.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteError {
    /// A numerical value similar to HTTP status codes.
    pub code: i32,

    /// The error message, such as `PHONE_CODE_INVALID` or `Not Found`.
    pub message: String,
}

impl Error for RemoteError {}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tdlib error {}: {}", self.code, self.message)
    }
}

impl From<types::Error> for RemoteError {
    fn from(error: types::Error) -> Self {
        Self {
            code: error.code,
            message: error.message,
        }
    }
}

impl RemoteError {
    /// Matches on the message of the error (case-sensitive).
    ///
    /// Useful in `match` arm guards. A single trailing or leading asterisk (`'*'`) is allowed,
    /// and will instead check if the error message starts (or ends with) the input parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// # let request_result = Result::<(), _>::Err(tdjson_client::RemoteError {
    /// #     code: 400, message: "PHONE_CODE_INVALID".to_string() });
    /// #
    /// match request_result {
    ///     Err(err) if err.is("SESSION_PASSWORD_NEEDED") => panic!(),
    ///     Err(err) if err.is("PHONE_CODE_*") => {},
    ///     _ => panic!()
    /// }
    /// ```
    pub fn is(&self, pattern: &str) -> bool {
        if let Some(pattern) = pattern.strip_suffix('*') {
            self.message.starts_with(pattern)
        } else if let Some(pattern) = pattern.strip_prefix('*') {
            self.message.ends_with(pattern)
        } else {
            self.message == pattern
        }
    }
}

/// The error type reported by a [`Transport`](crate::Transport).
#[derive(Debug)]
pub enum TransportError {
    /// TDLib was closed, and no further requests will be answered.
    Closed,

    /// No response arrived in time.
    Timeout(Duration),

    /// The transport cannot answer requests synchronously.
    Unsupported,

    /// Standard I/O error.
    Io(io::Error),

    /// Any other failure, described by the transport.
    Other(String),
}

impl Error for TransportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "transport error: closed"),
            Self::Timeout(after) => write!(f, "transport error: timed out after {after:?}"),
            Self::Unsupported => write!(f, "transport error: synchronous requests unsupported"),
            Self::Io(err) => write!(f, "transport error: {err}"),
            Self::Other(reason) => write!(f, "transport error: {reason}"),
        }
    }
}

impl From<io::Error> for TransportError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

/// This error occurs when a request to TDLib was unsuccessful.
#[derive(Debug)]
pub enum InvocationError {
    /// TDLib answered with an error.
    Remote(RemoteError),

    /// The request could not be delivered, or the response did not arrive.
    Transport(TransportError),

    /// The response arrived but did not match the expected type.
    Decode(DecodeError),

    /// The update stream of this client was already taken.
    UpdatesTaken,

    /// The request was executed synchronously, but TDLib can only answer it
    /// asynchronously.
    NotSynchronous { tag: &'static str },
}

impl Error for InvocationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Remote(err) => Some(err),
            Self::Transport(err) => Some(err),
            Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(err) => write!(f, "request error: {err}"),
            Self::Transport(err) => write!(f, "request error: {err}"),
            Self::Decode(err) => write!(f, "request error: bad response: {err}"),
            Self::UpdatesTaken => write!(f, "request error: updates already taken"),
            Self::NotSynchronous { tag } => {
                write!(f, "request error: {tag} cannot be executed synchronously")
            }
        }
    }
}

impl From<RemoteError> for InvocationError {
    fn from(error: RemoteError) -> Self {
        Self::Remote(error)
    }
}

impl From<TransportError> for InvocationError {
    fn from(error: TransportError) -> Self {
        Self::Transport(error)
    }
}

impl From<DecodeError> for InvocationError {
    fn from(error: DecodeError) -> Self {
        Self::Decode(error)
    }
}

impl InvocationError {
    /// Matches on the message of the remote error (case-sensitive).
    ///
    /// If the error did not come from TDLib, returns `false`. See
    /// [`RemoteError::is`] for the pattern syntax.
    #[inline]
    pub fn is(&self, pattern: &str) -> bool {
        match self {
            Self::Remote(err) => err.is(pattern),
            _ => false,
        }
    }
}
