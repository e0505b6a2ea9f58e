// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to downloading files and finding stickers.
use super::Client;
use crate::errors::InvocationError;
use tdjson_types::{functions, types};

/// Priority used when none is given. TDLib accepts values from 1 to 32.
const DEFAULT_PRIORITY: i32 = 1;

/// Method implementations related to files.
impl Client {
    /// Downloads the whole file, returning its state once the download has finished, failed,
    /// or been cancelled.
    ///
    /// The local path of the file, if completed, is found in `file.local.path`.
    pub async fn download_file(&self, file_id: i32) -> Result<types::File, InvocationError> {
        self.invoke(&functions::DownloadFile {
            file_id,
            priority: DEFAULT_PRIORITY,
            offset: 0,
            limit: 0,
            synchronous: true,
        })
        .await
    }

    /// Starts downloading a file in the background, returning its state right away.
    ///
    /// Progress is reported through `updateFile` updates.
    pub async fn start_download(
        &self,
        file_id: i32,
        priority: i32,
    ) -> Result<types::File, InvocationError> {
        self.invoke(&functions::DownloadFile {
            file_id,
            priority: priority.clamp(1, 32),
            offset: 0,
            limit: 0,
            synchronous: false,
        })
        .await
    }

    /// Returns up to `limit` stickers from the installed sets matching the emoji.
    pub async fn stickers_for(
        &self,
        emoji: &str,
        limit: i32,
    ) -> Result<Vec<types::Sticker>, InvocationError> {
        self.invoke(&functions::GetStickers {
            emoji: emoji.to_string(),
            limit,
        })
        .await
        .map(|stickers| stickers.stickers)
    }
}
