// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to sending messages and formatting their text.
use super::Client;
use crate::errors::InvocationError;
use tdjson_types::enums::{InputMessageContent, ReplyMarkup, TextParseMode};
use tdjson_types::{functions, types};

/// Method implementations related to sending messages.
impl Client {
    /// Sends a message with the given content to the chat, and returns the message as TDLib
    /// first stored it.
    ///
    /// The message is returned while still being sent, and its final state arrives later as
    /// an update.
    pub async fn send_message(
        &self,
        chat_id: i64,
        content: InputMessageContent,
    ) -> Result<types::Message, InvocationError> {
        self.send_message_with(chat_id, content, None, None).await
    }

    /// Like [`Client::send_message`], but also setting the sending options and reply markup.
    pub async fn send_message_with(
        &self,
        chat_id: i64,
        content: InputMessageContent,
        options: Option<types::SendMessageOptions>,
        reply_markup: Option<ReplyMarkup>,
    ) -> Result<types::Message, InvocationError> {
        self.invoke(&functions::SendMessage {
            chat_id,
            reply_to_message_id: 0,
            options,
            reply_markup,
            input_message_content: content,
        })
        .await
    }

    /// Sends a plain text message to the chat.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: tdjson_client::Client, chat_id: i64) -> Result<(), Box<dyn std::error::Error>> {
    /// let message = client.send_text(chat_id, "Boring text message :-(").await?;
    /// println!("sent message {}", message.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_text(&self, chat_id: i64, text: &str) -> Result<types::Message, InvocationError> {
        let content = InputMessageContent::Text(types::InputMessageText {
            text: types::FormattedText {
                text: text.to_string(),
                entities: Vec::new(),
            },
            disable_web_page_preview: false,
            clear_draft: true,
        });
        self.send_message(chat_id, content).await
    }

    /// Parses MarkdownV2 text into its plain text and formatting entities.
    ///
    /// This is answered synchronously by TDLib.
    pub fn parse_markdown(&self, text: &str) -> Result<types::FormattedText, InvocationError> {
        self.execute(&functions::ParseTextEntities {
            text: text.to_string(),
            parse_mode: TextParseMode::Markdown(types::TextParseModeMarkdown { version: 2 }),
        })
    }

    /// Parses HTML text into its plain text and formatting entities.
    ///
    /// This is answered synchronously by TDLib.
    pub fn parse_html(&self, text: &str) -> Result<types::FormattedText, InvocationError> {
        self.execute(&functions::ParseTextEntities {
            text: text.to_string(),
            parse_mode: TextParseMode::Html(types::TextParseModeHtml {}),
        })
    }

    /// Finds the mentions, hashtags, bot commands, URLs and similar entities in plain text.
    pub fn text_entities(&self, text: &str) -> Result<Vec<types::TextEntity>, InvocationError> {
        self.execute(&functions::GetTextEntities {
            text: text.to_string(),
        })
        .map(|entities| entities.entities)
    }
}
