// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::Client;
use crate::errors::InvocationError;
use tdjson_types::{functions, types};

impl Client {
    /// Returns the instant view of the web page at `url`, if it has one. Unless `full` is
    /// true, TDLib may return only the beginning of the page (see `is_full`).
    pub async fn instant_view(
        &self,
        url: &str,
        full: bool,
    ) -> Result<types::WebPageInstantView, InvocationError> {
        self.invoke(&functions::GetWebPageInstantView {
            url: url.to_string(),
            force_full: full,
        })
        .await
    }
}
