// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Requests that can be sent to TDLib, each paired with its response type.
use crate::{enums, types};
use tdjson_codec::Bytes;

/// Defines a request as an entity, plus its [`Function`](crate::Function)
/// implementation. Requests that TDLib can answer synchronously are marked
/// with `synchronous` after the response type.
macro_rules! function {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $tag:literal -> $response:ty, synchronous {
            $($fields:tt)*
        }
    ) => {
        function!(@define $(#[$meta])* $name, $tag, $response, true, { $($fields)* });
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $tag:literal -> $response:ty {
            $($fields:tt)*
        }
    ) => {
        function!(@define $(#[$meta])* $name, $tag, $response, false, { $($fields)* });
    };
    (
        @define $(#[$meta:meta])* $name:ident, $tag:literal, $response:ty, $sync:literal,
        { $($fields:tt)* }
    ) => {
        tdjson_codec::entity! {
            $(#[$meta])*
            pub struct $name = $tag {
                $($fields)*
            }
        }

        impl crate::Function for $name {
            type Response = $response;
            const IS_SYNCHRONOUS: bool = $sync;
        }
    };
}

// Authorization.

function! {
    /// Returns the current authorization state; this is an offline request.
    pub struct GetAuthorizationState = "getAuthorizationState" -> enums::AuthorizationState {}
}

function! {
    /// Sets the parameters for TDLib initialization. Works only when the current
    /// authorization state is `authorizationStateWaitTdlibParameters`.
    pub struct SetTdlibParameters = "setTdlibParameters" -> types::Ok {
        pub parameters: types::TdlibParameters,
    }
}

function! {
    /// Checks the database encryption key for correctness. Works only when the current
    /// authorization state is `authorizationStateWaitEncryptionKey`.
    pub struct CheckDatabaseEncryptionKey = "checkDatabaseEncryptionKey" -> types::Ok {
        pub encryption_key: Bytes,
    }
}

function! {
    /// Sets the phone number of the user and sends an authentication code to the user.
    pub struct SetAuthenticationPhoneNumber = "setAuthenticationPhoneNumber" -> types::Ok {
        pub phone_number: String,
        /// Settings for the authentication of the user's phone number.
        pub settings: Option<types::PhoneNumberAuthenticationSettings>,
    }
}

function! {
    /// Re-sends an authentication code to the user. Works only when the current authorization
    /// state is `authorizationStateWaitCode` and the `next_type` of the code info is not null.
    pub struct ResendAuthenticationCode = "resendAuthenticationCode" -> types::Ok {}
}

function! {
    /// Checks the authentication code.
    pub struct CheckAuthenticationCode = "checkAuthenticationCode" -> types::Ok {
        pub code: String,
    }
}

function! {
    /// Checks the authentication password for correctness.
    pub struct CheckAuthenticationPassword = "checkAuthenticationPassword" -> types::Ok {
        pub password: String,
    }
}

function! {
    /// Finishes user registration.
    pub struct RegisterUser = "registerUser" -> types::Ok {
        /// The first name of the user; 1-64 characters.
        pub first_name: String,
        /// The last name of the user; 0-64 characters.
        pub last_name: String,
    }
}

function! {
    /// Closes the TDLib instance after a proper logout. Requires an available network
    /// connection. All local data will be destroyed.
    pub struct LogOut = "logOut" -> types::Ok {}
}

function! {
    /// Closes the TDLib instance. All databases will be flushed to disk and properly closed.
    pub struct Close = "close" -> types::Ok {}
}

// Options.

function! {
    /// Returns the value of an option by its name.
    pub struct GetOption = "getOption" -> enums::OptionValue {
        pub name: String,
    }
}

function! {
    /// Sets the value of an option. Only writable options can be set.
    pub struct SetOption = "setOption" -> types::Ok {
        pub name: String,
        /// The new value of the option; pass null to reset it to its default value.
        pub value: Option<enums::OptionValue>,
    }
}

function! {
    /// Sets the verbosity level of the internal logging of TDLib.
    pub struct SetLogVerbosityLevel = "setLogVerbosityLevel" -> types::Ok, synchronous {
        /// New value of the verbosity level for logging. Value 0 corresponds to fatal errors,
        /// value 1 to errors, value 2 to warnings and debug warnings, value 3 to informational,
        /// value 4 to debug, value 5 to verbose debug, value greater than 5 and up to 1023 can
        /// be used to enable even more logging.
        pub new_verbosity_level: i32,
    }
}

// Messages.

function! {
    /// Sends a message. Returns the sent message.
    pub struct SendMessage = "sendMessage" -> types::Message {
        /// Target chat.
        pub chat_id: i64,
        /// Identifier of the message to reply to or 0.
        pub reply_to_message_id: i64,
        pub options: Option<types::SendMessageOptions>,
        /// Markup for replying to the message; for bots only.
        pub reply_markup: Option<enums::ReplyMarkup>,
        pub input_message_content: enums::InputMessageContent,
    }
}

function! {
    /// Returns all entities (mentions, hashtags, cashtags, bot commands, bank card numbers,
    /// URLs, and email addresses) contained in the text.
    pub struct GetTextEntities = "getTextEntities" -> types::TextEntities, synchronous {
        pub text: String,
    }
}

function! {
    /// Parses Bold, Italic, Underline, Strikethrough, Code, Pre, PreCode, TextUrl and
    /// MentionName entities contained in the text.
    pub struct ParseTextEntities = "parseTextEntities" -> types::FormattedText, synchronous {
        pub text: String,
        pub parse_mode: enums::TextParseMode,
    }
}

// Files and stickers.

function! {
    /// Downloads a file from the cloud. Download progress and completion of the download
    /// will be notified through `updateFile` updates.
    pub struct DownloadFile = "downloadFile" -> types::File {
        pub file_id: i32,
        /// Priority of the download (1-32). The higher the priority, the earlier the file
        /// will be downloaded.
        pub priority: i32,
        pub offset: i32,
        /// Number of bytes which need to be downloaded starting from the `offset` before the
        /// download will be automatically cancelled; use 0 to download without a limit.
        pub limit: i32,
        /// If false, this request returns file state just after the download has been started.
        /// If true, this request returns file state only after the download has succeeded,
        /// has failed, has been cancelled or a new `downloadFile` request with different
        /// offset/limit parameters was sent.
        pub synchronous: bool,
    }
}

function! {
    /// Returns stickers from the installed sticker sets that correspond to a given emoji.
    pub struct GetStickers = "getStickers" -> types::Stickers {
        pub emoji: String,
        pub limit: i32,
    }
}

// Polls.

function! {
    /// Changes the user answer to a poll. A poll in quiz mode can be answered only once.
    pub struct SetPollAnswer = "setPollAnswer" -> types::Ok {
        pub chat_id: i64,
        pub message_id: i64,
        /// 0-based identifiers of answer options, chosen by the user. The user can choose more
        /// than 1 answer option only if the poll allows multiple answers.
        pub option_ids: Vec<i32>,
    }
}

function! {
    /// Stops a poll. A poll in a message can be stopped when the message has
    /// `can_be_edited` flag set.
    pub struct StopPoll = "stopPoll" -> types::Ok {
        pub chat_id: i64,
        pub message_id: i64,
        pub reply_markup: Option<enums::ReplyMarkup>,
    }
}

// Bots.

function! {
    /// Sends a callback query to a bot and returns an answer. Returns an error with code 502
    /// if the bot fails to answer the query before the query timeout expires.
    pub struct GetCallbackQueryAnswer = "getCallbackQueryAnswer" -> types::CallbackQueryAnswer {
        pub chat_id: i64,
        pub message_id: i64,
        pub payload: enums::CallbackQueryPayload,
    }
}

function! {
    /// Sets the result of a callback query; for bots only.
    pub struct AnswerCallbackQuery = "answerCallbackQuery" -> types::Ok {
        pub callback_query_id: i64,
        pub text: String,
        /// If true, an alert must be shown to the user instead of a toast notification.
        pub show_alert: bool,
        pub url: String,
        /// Time during which the result of the query can be cached, in seconds.
        pub cache_time: i32,
    }
}

function! {
    /// Sets the result of an inline query; for bots only.
    pub struct AnswerInlineQuery = "answerInlineQuery" -> types::Ok {
        pub inline_query_id: i64,
        /// True, if the result of the query can be cached for the specified user.
        pub is_personal: bool,
        pub results: Vec<enums::InputInlineQueryResult>,
        /// Allowed time to cache the results of the query, in seconds.
        pub cache_time: i32,
        /// Offset for the next inline query; pass an empty string if there are no more results.
        pub next_offset: String,
        pub switch_pm_text: String,
        pub switch_pm_parameter: String,
    }
}

// Instant view.

function! {
    /// Returns an instant view version of a web page if available. Returns a 404 error if
    /// the web page has no instant view page.
    pub struct GetWebPageInstantView = "getWebPageInstantView" -> types::WebPageInstantView {
        pub url: String,
        /// If true, the full instant view for the web page will be returned.
        pub force_full: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Function;

    #[test]
    fn check_synchronous_marks() {
        assert!(SetLogVerbosityLevel::IS_SYNCHRONOUS);
        assert!(ParseTextEntities::IS_SYNCHRONOUS);
        assert!(GetTextEntities::IS_SYNCHRONOUS);
        assert!(!SendMessage::IS_SYNCHRONOUS);
        assert!(!GetAuthorizationState::IS_SYNCHRONOUS);
    }
}
