// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to TDLib's options and its own logging.
use super::Client;
use crate::errors::InvocationError;
use tdjson_types::enums::OptionValue;
use tdjson_types::functions;

impl Client {
    /// Returns the value of the option, or `optionValueEmpty` if it is unknown.
    pub async fn get_option(&self, name: &str) -> Result<OptionValue, InvocationError> {
        self.invoke(&functions::GetOption {
            name: name.to_string(),
        })
        .await
    }

    /// Sets the value of a writable option. `None` resets it to its default value.
    pub async fn set_option(
        &self,
        name: &str,
        value: Option<OptionValue>,
    ) -> Result<(), InvocationError> {
        self.invoke(&functions::SetOption {
            name: name.to_string(),
            value,
        })
        .await
        .map(drop)
    }

    /// Changes how much TDLib itself logs, from 0 (fatal errors only) to 1023.
    ///
    /// This is answered synchronously by TDLib.
    pub fn set_log_verbosity_level(&self, level: i32) -> Result<(), InvocationError> {
        self.execute(&functions::SetLogVerbosityLevel {
            new_verbosity_level: level,
        })
        .map(drop)
    }
}
