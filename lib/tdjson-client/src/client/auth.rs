// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to logging in or signing up.
use super::Client;
use crate::errors::InvocationError;
use std::fmt;
use tdjson_codec::Bytes;
use tdjson_types::enums::AuthorizationState;
use tdjson_types::{functions, types};

/// The error type which is returned when signing in fails.
#[derive(Debug)]
pub enum SignInError {
    /// The account does not exist yet, and the terms of service must be accepted by signing up.
    SignUpRequired {
        terms_of_service: types::TermsOfService,
    },
    /// The account has two-factor authentication enabled, and the password must be checked.
    PasswordRequired { hint: String },
    InvalidCode,
    InvalidPassword,
    Other(InvocationError),
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SignInError::*;
        match self {
            SignUpRequired { terms_of_service } => write!(
                f,
                "sign in error: sign up required: {}",
                terms_of_service.text.text
            ),
            PasswordRequired { hint } => {
                write!(f, "sign in error: password required (hint: {hint:?})")
            }
            InvalidCode => write!(f, "sign in error: invalid code"),
            InvalidPassword => write!(f, "sign in error: invalid password"),
            Other(e) => write!(f, "sign in error: {e}"),
        }
    }
}

impl std::error::Error for SignInError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Other(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvocationError> for SignInError {
    fn from(error: InvocationError) -> Self {
        Self::Other(error)
    }
}

/// Method implementations related with the authentication of the user into the API.
impl Client {
    /// Returns the current authorization state of TDLib.
    pub async fn authorization_state(&self) -> Result<AuthorizationState, InvocationError> {
        self.invoke(&functions::GetAuthorizationState {}).await
    }

    /// Returns `true` if the current account is authorized. Otherwise, logging in will be
    /// required before being able to send most requests.
    pub async fn is_authorized(&self) -> Result<bool, InvocationError> {
        Ok(matches!(
            self.authorization_state().await?,
            AuthorizationState::Ready(_)
        ))
    }

    /// Sends the parameters from this client's [`Config`](crate::Config) to TDLib. This must be
    /// done when TDLib reports `authorizationStateWaitTdlibParameters`.
    pub async fn send_tdlib_parameters(&self) -> Result<(), InvocationError> {
        let parameters = self.0.config.tdlib_parameters();
        self.invoke(&functions::SetTdlibParameters { parameters })
            .await
            .map(drop)
    }

    /// Provides the key used to encrypt the local database, when TDLib reports
    /// `authorizationStateWaitEncryptionKey`. An empty key means no encryption.
    pub async fn check_encryption_key(&self, key: &[u8]) -> Result<(), InvocationError> {
        self.invoke(&functions::CheckDatabaseEncryptionKey {
            encryption_key: Bytes::from(key),
        })
        .await
        .map(drop)
    }

    /// Requests the login code for the account associated to the given phone number via another
    /// Telegram application or SMS.
    ///
    /// TDLib then reports `authorizationStateWaitCode`, whose `code_info` says how the code was
    /// sent.
    pub async fn request_login_code(&self, phone: &str) -> Result<(), InvocationError> {
        self.invoke(&functions::SetAuthenticationPhoneNumber {
            phone_number: phone.to_string(),
            settings: None,
        })
        .await
        .map(drop)
    }

    /// Asks TDLib to send the login code again, through the next delivery method.
    pub async fn resend_login_code(&self) -> Result<(), InvocationError> {
        self.invoke(&functions::ResendAuthenticationCode {})
            .await
            .map(drop)
    }

    /// Signs in to the user account with the code received through [`Client::request_login_code`].
    ///
    /// If the account does not exist yet, [`SignInError::SignUpRequired`] is returned along with
    /// the terms of service, and [`Client::sign_up`] should be used. If the account is protected
    /// by a password, [`SignInError::PasswordRequired`] is returned, and
    /// [`Client::check_password`] should be used.
    pub async fn sign_in(&self, code: &str) -> Result<(), SignInError> {
        match self
            .invoke(&functions::CheckAuthenticationCode {
                code: code.to_string(),
            })
            .await
        {
            Ok(_) => {}
            Err(err) if err.is("PHONE_CODE_INVALID") || err.is("PHONE_CODE_EMPTY") => {
                return Err(SignInError::InvalidCode);
            }
            Err(err) => return Err(err.into()),
        }

        match self.authorization_state().await? {
            AuthorizationState::WaitRegistration(state) => Err(SignInError::SignUpRequired {
                terms_of_service: state.terms_of_service,
            }),
            AuthorizationState::WaitPassword(state) => Err(SignInError::PasswordRequired {
                hint: state.password_hint,
            }),
            _ => Ok(()),
        }
    }

    /// Finishes signing in to an account protected by two-factor authentication.
    pub async fn check_password(&self, password: &str) -> Result<(), SignInError> {
        match self
            .invoke(&functions::CheckAuthenticationPassword {
                password: password.to_string(),
            })
            .await
        {
            Ok(_) => Ok(()),
            Err(err) if err.is("PASSWORD_HASH_INVALID") => Err(SignInError::InvalidPassword),
            Err(err) => Err(err.into()),
        }
    }

    /// Signs up a new user account, accepting the terms of service returned by
    /// [`Client::sign_in`].
    pub async fn sign_up(&self, first_name: &str, last_name: &str) -> Result<(), InvocationError> {
        self.invoke(&functions::RegisterUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
        .await
        .map(drop)
    }

    /// Signs out of the account authorized by this client's session, and destroys all local
    /// data.
    pub async fn sign_out(&self) -> Result<(), InvocationError> {
        self.invoke(&functions::LogOut {}).await.map(drop)
    }

    /// Closes TDLib, flushing its databases to disk. The update stream ends once closing is
    /// complete.
    pub async fn close(&self) -> Result<(), InvocationError> {
        self.invoke(&functions::Close {}).await.map(drop)
    }
}
