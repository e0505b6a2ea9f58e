// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::transport::Transport;
use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tdjson_types::types;

/// When no locale is found, use this one instead.
const DEFAULT_LOCALE: &str = "en";

/// Directory used for TDLib's persistent database unless configured otherwise.
const DEFAULT_DATABASE_DIRECTORY: &str = "tdlib";

/// Configuration required to create a [`Client`] instance.
pub struct Config {
    /// Developer's API ID, required to interact with the Telegram's API.
    ///
    /// You may obtain your own in <https://my.telegram.org/auth>.
    pub api_id: i32,

    /// Developer's API hash, required to interact with Telegram's API.
    ///
    /// You may obtain your own in <https://my.telegram.org/auth>.
    pub api_hash: String,

    /// Additional initialization parameters that can have sane defaults.
    pub params: InitParams,

    /// How long to wait for the response to any single request before giving up.
    ///
    /// By default, requests wait as long as TDLib takes to answer.
    ///
    /// The timeout relies on Tokio's timer. When set, requests must be awaited inside a Tokio
    /// runtime with the time driver enabled, or they will panic.
    pub request_timeout: Option<Duration>,
}

/// Optional initialization parameters, sent to TDLib when it asks for them.
pub struct InitParams {
    pub device_model: String,
    pub system_version: String,
    pub app_version: String,
    pub system_lang_code: String,
    /// Use Telegram's test environment instead of the production one.
    pub use_test_dc: bool,
    /// Where TDLib keeps its persistent database.
    pub database_directory: String,
    /// Where TDLib stores downloaded files. If empty, `database_directory` is used.
    pub files_directory: String,
    pub use_file_database: bool,
    pub use_chat_info_database: bool,
    pub use_message_database: bool,
    pub use_secret_chats: bool,
    pub enable_storage_optimizer: bool,
    pub ignore_file_names: bool,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) config: Config,
    pub(crate) updates_taken: AtomicBool,
}

/// A client capable of sending requests to TDLib and receiving its updates.
///
/// This structure is the "entry point" of the library, from which you can start using the rest.
///
/// The client can be freely cloned and moved around tasks to send requests concurrently. All
/// clones share the same transport.
#[derive(Clone)]
pub struct Client(pub(crate) Arc<ClientInner>);

impl Config {
    /// The parameters TDLib needs before it can start, as requested by
    /// `authorizationStateWaitTdlibParameters`.
    pub fn tdlib_parameters(&self) -> types::TdlibParameters {
        let params = &self.params;
        types::TdlibParameters {
            use_test_dc: params.use_test_dc,
            database_directory: params.database_directory.clone(),
            files_directory: params.files_directory.clone(),
            use_file_database: params.use_file_database,
            use_chat_info_database: params.use_chat_info_database,
            use_message_database: params.use_message_database,
            use_secret_chats: params.use_secret_chats,
            api_id: self.api_id,
            api_hash: self.api_hash.clone(),
            system_language_code: params.system_lang_code.clone(),
            device_model: params.device_model.clone(),
            system_version: params.system_version.clone(),
            application_version: params.app_version.clone(),
            enable_storage_optimizer: params.enable_storage_optimizer,
            ignore_file_names: params.ignore_file_names,
        }
    }
}

impl Default for InitParams {
    fn default() -> Self {
        let info = os_info::get();

        let mut system_lang_code = String::new();

        #[cfg(not(target_os = "android"))]
        {
            system_lang_code.push_str(&locate_locale::system());
        }
        if system_lang_code.is_empty() {
            system_lang_code.push_str(DEFAULT_LOCALE);
        }

        Self {
            device_model: format!("{} {}", info.os_type(), info.bitness()),
            system_version: info.version().to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            system_lang_code,
            use_test_dc: false,
            database_directory: DEFAULT_DATABASE_DIRECTORY.to_string(),
            files_directory: String::new(),
            use_file_database: true,
            use_chat_info_database: true,
            use_message_database: true,
            use_secret_chats: false,
            enable_storage_optimizer: true,
            ignore_file_names: false,
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_id", &self.0.config.api_id)
            .field("request_timeout", &self.0.config.request_timeout)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_default_params() {
        let params = InitParams::default();
        assert!(!params.device_model.is_empty());
        assert!(!params.system_lang_code.is_empty());
        assert_eq!(params.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(params.database_directory, "tdlib");
        assert!(!params.use_test_dc);
    }

    #[test]
    fn check_tdlib_parameters() {
        let config = Config {
            api_id: 932939,
            api_hash: "514727c32270b9eb8cc16daf17e21e57".to_string(),
            params: InitParams {
                use_test_dc: true,
                files_directory: "files".to_string(),
                ..Default::default()
            },
            request_timeout: None,
        };

        let parameters = config.tdlib_parameters();
        assert_eq!(parameters.api_id, 932939);
        assert_eq!(parameters.api_hash, "514727c32270b9eb8cc16daf17e21e57");
        assert!(parameters.use_test_dc);
        assert_eq!(parameters.files_directory, "files");
        assert_eq!(parameters.system_language_code, config.params.system_lang_code);
    }
}
