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
use tdjson_types::enums::ReplyMarkup;
use tdjson_types::functions;

impl Client {
    /// Votes for the given 0-based options of the poll in the message. Passing no options
    /// retracts the vote.
    pub async fn vote_poll(
        &self,
        chat_id: i64,
        message_id: i64,
        option_ids: Vec<i32>,
    ) -> Result<(), InvocationError> {
        self.invoke(&functions::SetPollAnswer {
            chat_id,
            message_id,
            option_ids,
        })
        .await
        .map(drop)
    }

    /// Closes the poll in the message, optionally replacing its reply markup.
    pub async fn stop_poll(
        &self,
        chat_id: i64,
        message_id: i64,
        reply_markup: Option<ReplyMarkup>,
    ) -> Result<(), InvocationError> {
        self.invoke(&functions::StopPoll {
            chat_id,
            message_id,
            reply_markup,
        })
        .await
        .map(drop)
    }
}
