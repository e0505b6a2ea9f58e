// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to bots: answering callback and inline queries.
use super::Client;
use crate::errors::InvocationError;
use tdjson_types::enums::{CallbackQueryPayload, InputInlineQueryResult};
use tdjson_types::{functions, types};

/// Method implementations related to bots.
impl Client {
    /// Presses a callback button on a message, returning the bot's answer.
    pub async fn press_callback_button(
        &self,
        chat_id: i64,
        message_id: i64,
        payload: CallbackQueryPayload,
    ) -> Result<types::CallbackQueryAnswer, InvocationError> {
        self.invoke(&functions::GetCallbackQueryAnswer {
            chat_id,
            message_id,
            payload,
        })
        .await
    }

    /// Answers a callback query received through `updateNewCallbackQuery`.
    ///
    /// If `alert` is true, the text is shown in a dialog instead of a toast notification.
    pub async fn answer_callback_query(
        &self,
        callback_query_id: i64,
        text: &str,
        alert: bool,
    ) -> Result<(), InvocationError> {
        self.invoke(&functions::AnswerCallbackQuery {
            callback_query_id,
            text: text.to_string(),
            show_alert: alert,
            url: String::new(),
            cache_time: 0,
        })
        .await
        .map(drop)
    }

    /// Answers an inline query with the given results, which may be cached by Telegram for
    /// `cache_time` seconds.
    pub async fn answer_inline_query(
        &self,
        inline_query_id: i64,
        results: Vec<InputInlineQueryResult>,
        cache_time: i32,
    ) -> Result<(), InvocationError> {
        self.invoke(&functions::AnswerInlineQuery {
            inline_query_id,
            is_personal: false,
            results,
            cache_time,
            next_offset: String::new(),
            switch_pm_text: String::new(),
            switch_pm_parameter: String::new(),
        })
        .await
        .map(drop)
    }
}
