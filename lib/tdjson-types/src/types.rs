// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Concrete TDLib objects, each with a fixed `"@type"` and set of fields.
//!
//! Fields holding one of several objects use the abstract type from
//! [`enums`](crate::enums). Optional fields, which TDLib may send as `null`
//! or leave out, are `Option`.
use crate::enums::{
    AuthenticationCodeType, AuthorizationState, CallbackQueryPayload, ConnectionState,
    InlineKeyboardButtonType, InputFile, InputMessageContent, KeyboardButtonType, MaskPoint,
    MessageContent, MessageSchedulingState, OptionValue, PageBlock, PollType, ReplyMarkup,
    RichText, TextEntityType, ThumbnailFormat, VectorPathCommand,
};
use tdjson_codec::{entity, Bytes};

// Protocol.

entity! {
    /// An object of this type can be returned on every function call, in case of an error.
    pub struct Error = "error" {
        /// Error code; subject to future changes. If the error code is 406, the error message
        /// must not be processed in any way and must not be displayed to the user.
        pub code: i32,
        /// Error message; subject to future changes.
        pub message: String,
    }
}

entity! {
    /// An object of this type is returned on a successful function call for certain functions.
    pub struct Ok = "ok" {}
}

// Authorization.

entity! {
    /// An authentication code is delivered via a private Telegram message.
    pub struct AuthenticationCodeTypeTelegramMessage = "authenticationCodeTypeTelegramMessage" {
        pub length: i32,
    }
}

entity! {
    /// An authentication code is delivered via an SMS message to the specified phone number.
    pub struct AuthenticationCodeTypeSms = "authenticationCodeTypeSms" {
        pub length: i32,
    }
}

entity! {
    /// An authentication code is delivered via a phone call to the specified phone number.
    pub struct AuthenticationCodeTypeCall = "authenticationCodeTypeCall" {
        pub length: i32,
    }
}

entity! {
    /// An authentication code is delivered by an immediately cancelled call to the specified
    /// phone number. The number from which the call was made is the code.
    pub struct AuthenticationCodeTypeFlashCall = "authenticationCodeTypeFlashCall" {
        /// Pattern of the phone number from which the call will be made.
        pub pattern: String,
    }
}

entity! {
    /// Information about the authentication code that was sent.
    pub struct AuthenticationCodeInfo = "authenticationCodeInfo" {
        /// A phone number that is being authenticated.
        pub phone_number: String,
        /// Describes the way the code was sent to the user.
        pub r#type: AuthenticationCodeType,
        /// Describes the way the next code will be sent to the user, if any.
        pub next_type: Option<AuthenticationCodeType>,
        /// Timeout before the code should be re-sent, in seconds.
        pub timeout: i32,
    }
}

entity! {
    /// Contains Telegram terms of service.
    pub struct TermsOfService = "termsOfService" {
        pub text: FormattedText,
        /// The minimum age of a user to be able to accept the terms; 0 if any.
        pub min_user_age: i32,
        /// True, if a blocking popup with terms of service must be shown to the user.
        pub show_popup: bool,
    }
}

entity! {
    /// TDLib needs `TdlibParameters` for initialization.
    pub struct AuthorizationStateWaitTdlibParameters = "authorizationStateWaitTdlibParameters" {}
}

entity! {
    /// TDLib needs an encryption key to decrypt the local database.
    pub struct AuthorizationStateWaitEncryptionKey = "authorizationStateWaitEncryptionKey" {
        pub is_encrypted: bool,
    }
}

entity! {
    /// TDLib needs the user's phone number to authorize.
    pub struct AuthorizationStateWaitPhoneNumber = "authorizationStateWaitPhoneNumber" {}
}

entity! {
    /// TDLib needs the user's authentication code to authorize.
    pub struct AuthorizationStateWaitCode = "authorizationStateWaitCode" {
        pub code_info: AuthenticationCodeInfo,
    }
}

entity! {
    /// The user needs to confirm authorization on another logged in device by scanning a QR
    /// code with the provided link.
    pub struct AuthorizationStateWaitOtherDeviceConfirmation = "authorizationStateWaitOtherDeviceConfirmation" {
        pub link: String,
    }
}

entity! {
    /// The user is unregistered and needs to accept terms of service and enter their first
    /// name and last name to finish registration.
    pub struct AuthorizationStateWaitRegistration = "authorizationStateWaitRegistration" {
        pub terms_of_service: TermsOfService,
    }
}

entity! {
    /// The user has been authorized, but needs to enter a password to start using the
    /// application.
    pub struct AuthorizationStateWaitPassword = "authorizationStateWaitPassword" {
        pub password_hint: String,
        pub has_recovery_email_address: bool,
        /// Pattern of the email address to which the recovery email was sent; empty until a
        /// recovery email has been sent.
        pub recovery_email_address_pattern: String,
    }
}

entity! {
    /// The user has been successfully authorized. TDLib is now ready to answer queries.
    pub struct AuthorizationStateReady = "authorizationStateReady" {}
}

entity! {
    /// The user is currently logging out.
    pub struct AuthorizationStateLoggingOut = "authorizationStateLoggingOut" {}
}

entity! {
    /// TDLib is closing, all subsequent queries will be answered with the error 500.
    pub struct AuthorizationStateClosing = "authorizationStateClosing" {}
}

entity! {
    /// TDLib client is in its final state. All databases are closed and all resources are
    /// released. No other updates will be received after this.
    pub struct AuthorizationStateClosed = "authorizationStateClosed" {}
}

entity! {
    /// Contains parameters for TDLib initialization.
    pub struct TdlibParameters = "tdlibParameters" {
        /// If set to true, the Telegram test environment will be used instead of the
        /// production environment.
        pub use_test_dc: bool,
        /// The path to the directory for the persistent database; if empty, the current
        /// working directory will be used.
        pub database_directory: String,
        /// The path to the directory for storing files; if empty, `database_directory`
        /// will be used.
        pub files_directory: String,
        pub use_file_database: bool,
        pub use_chat_info_database: bool,
        pub use_message_database: bool,
        pub use_secret_chats: bool,
        /// Application identifier for Telegram API access, which can be obtained at
        /// https://my.telegram.org.
        pub api_id: i32,
        /// Application identifier hash for Telegram API access.
        pub api_hash: String,
        /// IETF language tag of the user's operating system language.
        pub system_language_code: String,
        pub device_model: String,
        pub system_version: String,
        pub application_version: String,
        pub enable_storage_optimizer: bool,
        pub ignore_file_names: bool,
    }
}

entity! {
    /// Contains settings for the authentication of the user's phone number.
    pub struct PhoneNumberAuthenticationSettings = "phoneNumberAuthenticationSettings" {
        pub allow_flash_call: bool,
        pub is_current_phone_number: bool,
        pub allow_sms_retriever_api: bool,
    }
}

// Text.

entity! {
    /// A mention of a user by their username.
    pub struct TextEntityTypeMention = "textEntityTypeMention" {}
}

entity! {
    pub struct TextEntityTypeHashtag = "textEntityTypeHashtag" {}
}

entity! {
    pub struct TextEntityTypeCashtag = "textEntityTypeCashtag" {}
}

entity! {
    pub struct TextEntityTypeBotCommand = "textEntityTypeBotCommand" {}
}

entity! {
    pub struct TextEntityTypeUrl = "textEntityTypeUrl" {}
}

entity! {
    pub struct TextEntityTypeEmailAddress = "textEntityTypeEmailAddress" {}
}

entity! {
    pub struct TextEntityTypePhoneNumber = "textEntityTypePhoneNumber" {}
}

entity! {
    pub struct TextEntityTypeBankCardNumber = "textEntityTypeBankCardNumber" {}
}

entity! {
    pub struct TextEntityTypeBold = "textEntityTypeBold" {}
}

entity! {
    pub struct TextEntityTypeItalic = "textEntityTypeItalic" {}
}

entity! {
    pub struct TextEntityTypeUnderline = "textEntityTypeUnderline" {}
}

entity! {
    pub struct TextEntityTypeStrikethrough = "textEntityTypeStrikethrough" {}
}

entity! {
    pub struct TextEntityTypeCode = "textEntityTypeCode" {}
}

entity! {
    /// Text that must be formatted as if inside a `pre` HTML tag.
    pub struct TextEntityTypePre = "textEntityTypePre" {}
}

entity! {
    /// Text that must be formatted as if inside `pre` and `code` HTML tags.
    pub struct TextEntityTypePreCode = "textEntityTypePreCode" {
        /// Programming language of the code; as defined by the sender.
        pub language: String,
    }
}

entity! {
    /// A text description shown instead of a raw URL.
    pub struct TextEntityTypeTextUrl = "textEntityTypeTextUrl" {
        pub url: String,
    }
}

entity! {
    /// A text shows instead of a raw mention of the user (e.g., when the user has no username).
    pub struct TextEntityTypeMentionName = "textEntityTypeMentionName" {
        pub user_id: i64,
    }
}

entity! {
    /// Represents a part of the text that needs to be formatted in some unusual way.
    pub struct TextEntity = "textEntity" {
        /// Offset of the entity, in UTF-16 code units.
        pub offset: i32,
        /// Length of the entity, in UTF-16 code units.
        pub length: i32,
        pub r#type: TextEntityType,
    }
}

entity! {
    /// Contains a list of text entities.
    pub struct TextEntities = "textEntities" {
        pub entities: Vec<TextEntity>,
    }
}

entity! {
    /// A text with some entities.
    pub struct FormattedText = "formattedText" {
        pub text: String,
        /// Entities contained in the text. Entities can be nested, but must not mutually
        /// intersect with each other.
        pub entities: Vec<TextEntity>,
    }
}

entity! {
    /// The text uses Markdown-style formatting.
    pub struct TextParseModeMarkdown = "textParseModeMarkdown" {
        /// Version of the parser: 0 or 1 for Bot API Markdown parse mode, 2 for MarkdownV2.
        pub version: i32,
    }
}

entity! {
    /// The text uses HTML-style formatting. The same as Telegram Bot API "HTML" parse mode.
    pub struct TextParseModeHtml = "textParseModeHTML" {}
}

// Rich text.

entity! {
    /// A plain text.
    pub struct RichTextPlain = "richTextPlain" {
        pub text: String,
    }
}

entity! {
    pub struct RichTextBold = "richTextBold" {
        pub text: RichText,
    }
}

entity! {
    pub struct RichTextItalic = "richTextItalic" {
        pub text: RichText,
    }
}

entity! {
    pub struct RichTextUnderline = "richTextUnderline" {
        pub text: RichText,
    }
}

entity! {
    pub struct RichTextStrikethrough = "richTextStrikethrough" {
        pub text: RichText,
    }
}

entity! {
    /// A fixed-width rich text.
    pub struct RichTextFixed = "richTextFixed" {
        pub text: RichText,
    }
}

entity! {
    /// A rich text URL link.
    pub struct RichTextUrl = "richTextUrl" {
        pub text: RichText,
        pub url: String,
        /// True, if the URL has cached instant view server-side.
        pub is_cached: bool,
    }
}

entity! {
    pub struct RichTextEmailAddress = "richTextEmailAddress" {
        pub text: RichText,
        pub email_address: String,
    }
}

entity! {
    pub struct RichTextSubscript = "richTextSubscript" {
        pub text: RichText,
    }
}

entity! {
    pub struct RichTextSuperscript = "richTextSuperscript" {
        pub text: RichText,
    }
}

entity! {
    pub struct RichTextMarked = "richTextMarked" {
        pub text: RichText,
    }
}

entity! {
    pub struct RichTextPhoneNumber = "richTextPhoneNumber" {
        pub text: RichText,
        pub phone_number: String,
    }
}

entity! {
    /// A rich text anchor.
    pub struct RichTextAnchor = "richTextAnchor" {
        pub name: String,
    }
}

entity! {
    /// A link to an anchor on the same instant view page.
    pub struct RichTextAnchorLink = "richTextAnchorLink" {
        pub text: RichText,
        /// The anchor name. If the name is empty, the link must bring back to the top.
        pub anchor_name: String,
        /// An HTTP URL, opening the anchor.
        pub url: String,
    }
}

entity! {
    /// A concatenation of rich texts.
    pub struct RichTexts = "richTexts" {
        pub texts: Vec<RichText>,
    }
}

// Instant view.

entity! {
    /// Contains a caption of an instant view web page block, consisting of a text and a
    /// trailing credit.
    pub struct PageBlockCaption = "pageBlockCaption" {
        pub text: RichText,
        pub credit: RichText,
    }
}

entity! {
    /// Describes an item of a list page block.
    pub struct PageBlockListItem = "pageBlockListItem" {
        pub label: String,
        pub page_blocks: Vec<PageBlock>,
    }
}

entity! {
    /// The title of a page.
    pub struct PageBlockTitle = "pageBlockTitle" {
        pub title: RichText,
    }
}

entity! {
    pub struct PageBlockSubtitle = "pageBlockSubtitle" {
        pub subtitle: RichText,
    }
}

entity! {
    /// The author and publishing date of a page.
    pub struct PageBlockAuthorDate = "pageBlockAuthorDate" {
        pub author: RichText,
        /// Point in time (Unix timestamp) when the article was published; 0 if unknown.
        pub publish_date: i32,
    }
}

entity! {
    pub struct PageBlockHeader = "pageBlockHeader" {
        pub header: RichText,
    }
}

entity! {
    pub struct PageBlockSubheader = "pageBlockSubheader" {
        pub subheader: RichText,
    }
}

entity! {
    pub struct PageBlockKicker = "pageBlockKicker" {
        pub kicker: RichText,
    }
}

entity! {
    pub struct PageBlockParagraph = "pageBlockParagraph" {
        pub text: RichText,
    }
}

entity! {
    /// A preformatted text paragraph.
    pub struct PageBlockPreformatted = "pageBlockPreformatted" {
        pub text: RichText,
        pub language: String,
    }
}

entity! {
    pub struct PageBlockFooter = "pageBlockFooter" {
        pub footer: RichText,
    }
}

entity! {
    /// An empty block separating a page.
    pub struct PageBlockDivider = "pageBlockDivider" {}
}

entity! {
    /// An invisible anchor on a page, which can be used in a URL to open the page from the
    /// specified anchor.
    pub struct PageBlockAnchor = "pageBlockAnchor" {
        pub name: String,
    }
}

entity! {
    pub struct PageBlockList = "pageBlockList" {
        pub items: Vec<PageBlockListItem>,
    }
}

entity! {
    pub struct PageBlockBlockQuote = "pageBlockBlockQuote" {
        pub text: RichText,
        pub credit: RichText,
    }
}

entity! {
    pub struct PageBlockPullQuote = "pageBlockPullQuote" {
        pub text: RichText,
        pub credit: RichText,
    }
}

entity! {
    /// A page cover.
    pub struct PageBlockCover = "pageBlockCover" {
        pub cover: PageBlock,
    }
}

entity! {
    /// A collapsible block.
    pub struct PageBlockDetails = "pageBlockDetails" {
        pub header: RichText,
        pub page_blocks: Vec<PageBlock>,
        /// True, if the block is open by default.
        pub is_open: bool,
    }
}

entity! {
    /// Describes an instant view page for a web page.
    pub struct WebPageInstantView = "webPageInstantView" {
        pub page_blocks: Vec<PageBlock>,
        /// Number of the instant view views; 0 if unknown.
        pub view_count: i32,
        /// Version of the instant view, currently can be 1 or 2.
        pub version: i32,
        /// True, if the instant view must be shown from right to left.
        pub is_rtl: bool,
        /// True, if the instant view contains the full page. A network request might be
        /// needed to get the full web page instant view.
        pub is_full: bool,
    }
}

// Files.

entity! {
    /// Represents a local file.
    pub struct LocalFile = "localFile" {
        /// Local path to the locally available file part; may be empty.
        pub path: String,
        pub can_be_downloaded: bool,
        pub can_be_deleted: bool,
        pub is_downloading_active: bool,
        pub is_downloading_completed: bool,
        /// Download will be started from this offset.
        pub download_offset: i32,
        /// If `is_downloading_completed` is false, then only some prefix of the file
        /// starting from `download_offset` is ready to be read.
        pub downloaded_prefix_size: i32,
        /// Total downloaded file bytes. Should be used only for calculating download progress.
        pub downloaded_size: i32,
    }
}

entity! {
    /// Represents a remote file.
    pub struct RemoteFile = "remoteFile" {
        /// Remote file identifier; may be empty. Can be used by the current user across
        /// application restarts or even from other devices.
        pub id: String,
        /// Unique file identifier; may be empty if unknown. The unique file identifier which
        /// is the same for the same file even for different users and is persistent over time.
        pub unique_id: String,
        pub is_uploading_active: bool,
        pub is_uploading_completed: bool,
        pub uploaded_size: i32,
    }
}

entity! {
    /// Represents a file.
    pub struct File = "file" {
        /// Unique file identifier.
        pub id: i32,
        /// File size, in bytes; 0 if unknown.
        pub size: i32,
        /// Approximate file size in bytes in case the exact file size is unknown.
        pub expected_size: i32,
        pub local: LocalFile,
        pub remote: RemoteFile,
    }
}

entity! {
    /// A file defined by its unique ID.
    pub struct InputFileId = "inputFileId" {
        pub id: i32,
    }
}

entity! {
    /// A file defined by its remote ID. The remote ID is guaranteed to be usable only if the
    /// corresponding file is still accessible to the user and known to TDLib.
    pub struct InputFileRemote = "inputFileRemote" {
        pub id: String,
    }
}

entity! {
    /// A file defined by a local path.
    pub struct InputFileLocal = "inputFileLocal" {
        pub path: String,
    }
}

entity! {
    /// A file generated by the application.
    pub struct InputFileGenerated = "inputFileGenerated" {
        /// Local path to a file from which the file is generated; may be empty if there is no
        /// such file.
        pub original_path: String,
        /// String specifying the conversion applied to the original file.
        pub conversion: String,
        /// Expected size of the generated file, in bytes; 0 if unknown.
        pub expected_size: i32,
    }
}

entity! {
    /// A thumbnail to be sent along with a file; must be in JPEG or WEBP format for stickers,
    /// and less than 200 KB in size.
    pub struct InputThumbnail = "inputThumbnail" {
        /// Thumbnail file to send. Sending thumbnails by `file_id` is currently not supported.
        pub thumbnail: InputFile,
        /// Thumbnail width, usually shouldn't exceed 320. Use 0 if unknown.
        pub width: i32,
        /// Thumbnail height, usually shouldn't exceed 320. Use 0 if unknown.
        pub height: i32,
    }
}

entity! {
    pub struct ThumbnailFormatJpeg = "thumbnailFormatJpeg" {}
}

entity! {
    pub struct ThumbnailFormatPng = "thumbnailFormatPng" {}
}

entity! {
    pub struct ThumbnailFormatWebp = "thumbnailFormatWebp" {}
}

entity! {
    pub struct ThumbnailFormatGif = "thumbnailFormatGif" {}
}

entity! {
    pub struct ThumbnailFormatTgs = "thumbnailFormatTgs" {}
}

entity! {
    pub struct ThumbnailFormatMpeg4 = "thumbnailFormatMpeg4" {}
}

entity! {
    /// Represents a thumbnail.
    pub struct Thumbnail = "thumbnail" {
        pub format: ThumbnailFormat,
        pub width: i32,
        pub height: i32,
        pub file: File,
    }
}

// Stickers.

entity! {
    pub struct MaskPointForehead = "maskPointForehead" {}
}

entity! {
    pub struct MaskPointEyes = "maskPointEyes" {}
}

entity! {
    pub struct MaskPointMouth = "maskPointMouth" {}
}

entity! {
    pub struct MaskPointChin = "maskPointChin" {}
}

entity! {
    /// Position on a photo where a mask is placed.
    pub struct MaskPosition = "maskPosition" {
        /// Part of the face, relative to which the mask is placed.
        pub point: MaskPoint,
        /// Shift by X-axis measured in widths of the mask scaled to the face size, from left
        /// to right.
        pub x_shift: f64,
        /// Shift by Y-axis measured in heights of the mask scaled to the face size, from top
        /// to bottom.
        pub y_shift: f64,
        /// Mask scaling coefficient. For example, 2.0 means a doubled size.
        pub scale: f64,
    }
}

entity! {
    /// A point on a Cartesian plane.
    pub struct Point = "point" {
        pub x: f64,
        pub y: f64,
    }
}

entity! {
    /// A straight line to a given point.
    pub struct VectorPathCommandLine = "vectorPathCommandLine" {
        pub end_point: Point,
    }
}

entity! {
    /// A cubic Bézier curve to a given point.
    pub struct VectorPathCommandCubicBezierCurve = "vectorPathCommandCubicBezierCurve" {
        pub start_control_point: Point,
        pub end_control_point: Point,
        pub end_point: Point,
    }
}

entity! {
    /// Represents a closed vector path. The path begins at the end point of the last command.
    pub struct ClosedVectorPath = "closedVectorPath" {
        pub commands: Vec<VectorPathCommand>,
    }
}

entity! {
    /// Describes a sticker.
    pub struct Sticker = "sticker" {
        /// The identifier of the sticker set to which the sticker belongs; 0 if none.
        pub set_id: i64,
        pub width: i32,
        pub height: i32,
        /// Emoji corresponding to the sticker.
        pub emoji: String,
        /// True, if the sticker is an animated sticker in TGS format.
        pub is_animated: bool,
        /// True, if the sticker is a mask.
        pub is_mask: bool,
        /// Position where the mask is placed.
        pub mask_position: Option<MaskPosition>,
        /// Sticker's outline represented as a list of closed vector paths; may be empty. The
        /// coordinate system origin is in the upper-left corner.
        pub outline: Vec<ClosedVectorPath>,
        /// Sticker thumbnail in WEBP or JPEG format.
        pub thumbnail: Option<Thumbnail>,
        /// File containing the sticker.
        pub sticker: Option<File>,
    }
}

entity! {
    /// Represents a list of stickers.
    pub struct Stickers = "stickers" {
        pub stickers: Vec<Sticker>,
    }
}

// Polls.

entity! {
    /// A regular poll.
    pub struct PollTypeRegular = "pollTypeRegular" {
        /// True, if multiple answer options can be chosen simultaneously.
        pub allow_multiple_answers: bool,
    }
}

entity! {
    /// A poll in quiz mode, which has exactly one correct answer option and can be answered
    /// only once.
    pub struct PollTypeQuiz = "pollTypeQuiz" {
        /// 0-based identifier of the correct answer option; -1 for a yet unanswered poll.
        pub correct_option_id: i32,
        /// Text that is shown when the user chooses an incorrect answer or taps on the lamp
        /// icon; 0-200 characters with at most 2 line feeds; empty for a yet unanswered poll.
        pub explanation: FormattedText,
    }
}

entity! {
    /// Describes one answer option of a poll.
    pub struct PollOption = "pollOption" {
        pub text: String,
        pub voter_count: i32,
        /// The percentage of votes for this option, 0-100.
        pub vote_percentage: i32,
        /// True, if the option was chosen by the user.
        pub is_chosen: bool,
        /// True, if the option is being chosen by a pending `setPollAnswer` request.
        pub is_being_chosen: bool,
    }
}

entity! {
    /// Describes a poll.
    pub struct Poll = "poll" {
        /// Unique poll identifier.
        pub id: i64,
        pub question: String,
        pub options: Vec<PollOption>,
        pub total_voter_count: i32,
        /// User identifiers of recent voters, if the poll is non-anonymous.
        pub recent_voter_user_ids: Vec<i64>,
        pub is_anonymous: bool,
        pub r#type: PollType,
        /// Amount of time the poll will be active after creation, in seconds.
        pub open_period: i32,
        /// Point in time (Unix timestamp) when the poll will be automatically closed.
        pub close_date: i32,
        pub is_closed: bool,
    }
}

// Keyboards.

entity! {
    /// A simple button, with text that should be sent when the button is pressed.
    pub struct KeyboardButtonTypeText = "keyboardButtonTypeText" {}
}

entity! {
    /// A button that sends the user's phone number when pressed; available only in private chats.
    pub struct KeyboardButtonTypeRequestPhoneNumber = "keyboardButtonTypeRequestPhoneNumber" {}
}

entity! {
    /// A button that sends the user's location when pressed; available only in private chats.
    pub struct KeyboardButtonTypeRequestLocation = "keyboardButtonTypeRequestLocation" {}
}

entity! {
    /// A button that allows the user to create and send a poll when pressed; available only
    /// in private chats.
    pub struct KeyboardButtonTypeRequestPoll = "keyboardButtonTypeRequestPoll" {
        /// If true, only regular polls must be allowed to create.
        pub force_regular: bool,
        /// If true, only polls in quiz mode must be allowed to create.
        pub force_quiz: bool,
    }
}

entity! {
    /// Represents a single button in a bot keyboard.
    pub struct KeyboardButton = "keyboardButton" {
        pub text: String,
        pub r#type: KeyboardButtonType,
    }
}

entity! {
    /// A button that opens a specified URL.
    pub struct InlineKeyboardButtonTypeUrl = "inlineKeyboardButtonTypeUrl" {
        pub url: String,
    }
}

entity! {
    /// A button that opens a specified URL and automatically logs in in the current user.
    pub struct InlineKeyboardButtonTypeLoginUrl = "inlineKeyboardButtonTypeLoginUrl" {
        /// An HTTP URL to open.
        pub url: String,
        /// Unique button identifier.
        pub id: i32,
        /// If non-empty, new text of the button in forwarded messages.
        pub forward_text: String,
    }
}

entity! {
    /// A button that sends a callback query to a bot.
    pub struct InlineKeyboardButtonTypeCallback = "inlineKeyboardButtonTypeCallback" {
        pub data: Bytes,
    }
}

entity! {
    /// A button that asks for password of the current user and then sends a callback query
    /// to a bot.
    pub struct InlineKeyboardButtonTypeCallbackWithPassword = "inlineKeyboardButtonTypeCallbackWithPassword" {
        pub data: Bytes,
    }
}

entity! {
    /// A button with a game that sends a callback query to a bot. This button must be in the
    /// first column and row of the keyboard and can be attached only to a message with content
    /// of the type `messageGame`.
    pub struct InlineKeyboardButtonTypeCallbackGame = "inlineKeyboardButtonTypeCallbackGame" {}
}

entity! {
    /// A button that forces an inline query to the bot to be inserted in the input field.
    pub struct InlineKeyboardButtonTypeSwitchInline = "inlineKeyboardButtonTypeSwitchInline" {
        pub query: String,
        /// True, if the inline query should be sent from the current chat.
        pub in_current_chat: bool,
    }
}

entity! {
    /// A button to buy something. This button must be in the first column and row of the
    /// keyboard and can be attached only to a message with content of the type `messageInvoice`.
    pub struct InlineKeyboardButtonTypeBuy = "inlineKeyboardButtonTypeBuy" {}
}

entity! {
    /// Represents a single button in an inline keyboard.
    pub struct InlineKeyboardButton = "inlineKeyboardButton" {
        pub text: String,
        pub r#type: InlineKeyboardButtonType,
    }
}

entity! {
    /// Instructs application to remove the keyboard once this message has been received.
    pub struct ReplyMarkupRemoveKeyboard = "replyMarkupRemoveKeyboard" {
        /// True, if the keyboard is removed only for the mentioned users or the target user
        /// of a reply.
        pub is_personal: bool,
    }
}

entity! {
    /// Instructs application to force a reply to this message.
    pub struct ReplyMarkupForceReply = "replyMarkupForceReply" {
        pub is_personal: bool,
    }
}

entity! {
    /// Contains a custom keyboard layout to quickly reply to bots.
    pub struct ReplyMarkupShowKeyboard = "replyMarkupShowKeyboard" {
        /// A list of rows of bot keyboard buttons.
        pub rows: Vec<Vec<KeyboardButton>>,
        /// True, if the application needs to resize the keyboard vertically.
        pub resize_keyboard: bool,
        /// True, if the application needs to hide the keyboard after use.
        pub one_time: bool,
        pub is_personal: bool,
    }
}

entity! {
    /// Contains an inline keyboard layout.
    pub struct ReplyMarkupInlineKeyboard = "replyMarkupInlineKeyboard" {
        pub rows: Vec<Vec<InlineKeyboardButton>>,
    }
}

// Callback queries.

entity! {
    /// The payload for a general callback button.
    pub struct CallbackQueryPayloadData = "callbackQueryPayloadData" {
        pub data: Bytes,
    }
}

entity! {
    /// The payload for a callback button requiring password.
    pub struct CallbackQueryPayloadDataWithPassword = "callbackQueryPayloadDataWithPassword" {
        /// The password for the current user.
        pub password: String,
        pub data: Bytes,
    }
}

entity! {
    /// The payload for a game callback button.
    pub struct CallbackQueryPayloadGame = "callbackQueryPayloadGame" {
        /// A short name of the game that was attached to the callback button.
        pub game_short_name: String,
    }
}

entity! {
    /// Contains a bot's answer to a callback query.
    pub struct CallbackQueryAnswer = "callbackQueryAnswer" {
        pub text: String,
        /// True, if an alert must be shown to the user instead of a toast notification.
        pub show_alert: bool,
        /// URL to be opened.
        pub url: String,
    }
}

// Messages.

entity! {
    /// Options to be used when a message content is copied without a link to the original
    /// message.
    pub struct MessageCopyOptions = "messageCopyOptions" {
        /// True, if content of the message needs to be copied without a link to the original
        /// message.
        pub send_copy: bool,
        /// True, if media caption of the message copy needs to be replaced.
        pub replace_caption: bool,
        pub new_caption: Option<FormattedText>,
    }
}

entity! {
    /// A text message.
    pub struct InputMessageText = "inputMessageText" {
        /// Formatted text to be sent; 1-4096 characters.
        pub text: FormattedText,
        /// True, if rich web page previews for URLs in the message text should be disabled.
        pub disable_web_page_preview: bool,
        /// True, if a chat message draft should be deleted.
        pub clear_draft: bool,
    }
}

entity! {
    /// A sticker message.
    pub struct InputMessageSticker = "inputMessageSticker" {
        pub sticker: InputFile,
        /// Sticker thumbnail, if available.
        pub thumbnail: Option<InputThumbnail>,
        pub width: i32,
        pub height: i32,
        /// Emoji used to choose the sticker.
        pub emoji: String,
    }
}

entity! {
    /// A message with a poll. Polls can't be sent to secret chats.
    pub struct InputMessagePoll = "inputMessagePoll" {
        /// Poll question, 1-255 characters (up to 300 characters for bots).
        pub question: String,
        /// List of poll answer options, 2-10 strings 1-100 characters each.
        pub options: Vec<String>,
        pub is_anonymous: bool,
        pub r#type: PollType,
        pub open_period: i32,
        pub close_date: i32,
        /// True, if the poll needs to be sent already closed; for bots only.
        pub is_closed: bool,
    }
}

entity! {
    /// A forwarded message.
    pub struct InputMessageForwarded = "inputMessageForwarded" {
        /// Identifier for the chat this forwarded message came from.
        pub from_chat_id: i64,
        /// Identifier of the message to forward.
        pub message_id: i64,
        /// True, if a game message should be shared within a launched game.
        pub in_game_share: bool,
        /// Options to be used to copy content of the message without a link to the original
        /// message.
        pub copy_options: Option<MessageCopyOptions>,
    }
}

entity! {
    /// A text message.
    pub struct MessageText = "messageText" {
        pub text: FormattedText,
    }
}

entity! {
    /// A sticker message.
    pub struct MessageSticker = "messageSticker" {
        pub sticker: Sticker,
    }
}

entity! {
    /// A message with a poll.
    pub struct MessagePoll = "messagePoll" {
        pub poll: Poll,
    }
}

entity! {
    /// Message content that is not supported in the current TDLib version.
    pub struct MessageUnsupported = "messageUnsupported" {}
}

entity! {
    /// The message will be sent at the specified date.
    pub struct MessageSchedulingStateSendAtDate = "messageSchedulingStateSendAtDate" {
        /// Date the message will be sent. The date must be within 367 days in the future.
        pub send_date: i32,
    }
}

entity! {
    /// The message will be sent when the peer will be online. Applicable to private chats
    /// only and when the exact online status of the peer is known.
    pub struct MessageSchedulingStateSendWhenOnline = "messageSchedulingStateSendWhenOnline" {}
}

entity! {
    /// Options to be used when a message is sent.
    pub struct SendMessageOptions = "sendMessageOptions" {
        /// Pass true to disable notification for the message.
        pub disable_notification: bool,
        /// Pass true if the message is sent from the background.
        pub from_background: bool,
        /// Message scheduling state. Messages sent to a secret chat, live location messages
        /// and self-destructing messages can't be scheduled.
        pub scheduling_state: Option<MessageSchedulingState>,
    }
}

entity! {
    /// Describes a message.
    pub struct Message = "message" {
        /// Message identifier; unique for the chat to which the message belongs.
        pub id: i64,
        /// Identifier of the user who sent the message; 0 if unknown.
        pub sender_user_id: i64,
        pub chat_id: i64,
        /// True, if the message is outgoing.
        pub is_outgoing: bool,
        pub can_be_edited: bool,
        /// Point in time (Unix timestamp) when the message was sent.
        pub date: i32,
        /// Point in time (Unix timestamp) when the message was last edited.
        pub edit_date: i32,
        /// If non-zero, the identifier of the message this message is replying to; can be the
        /// identifier of a deleted message.
        pub reply_to_message_id: i64,
        /// If non-zero, the user identifier of the bot through which this message was sent.
        pub via_bot_user_id: i64,
        /// Information about the scheduling state of the message.
        pub scheduling_state: Option<MessageSchedulingState>,
        pub content: MessageContent,
        /// Reply markup for the message.
        pub reply_markup: Option<ReplyMarkup>,
    }
}

// Inline queries.

entity! {
    /// Represents a link to an article or web page.
    pub struct InputInlineQueryResultArticle = "inputInlineQueryResultArticle" {
        /// Unique identifier of the query result.
        pub id: String,
        pub url: String,
        /// True, if the URL must be not shown.
        pub hide_url: bool,
        pub title: String,
        pub description: String,
        pub thumbnail_url: String,
        pub thumbnail_width: i32,
        pub thumbnail_height: i32,
        /// The message reply markup. Must be of type `replyMarkupInlineKeyboard` or null.
        pub reply_markup: Option<ReplyMarkup>,
        /// The content of the message to be sent. Must be one of the following types:
        /// `inputMessageText`, `inputMessageInvoice`, `inputMessageLocation`,
        /// `inputMessageVenue` or `inputMessageContact`.
        pub input_message_content: InputMessageContent,
    }
}

entity! {
    /// Represents a link to a WEBP or TGS sticker.
    pub struct InputInlineQueryResultSticker = "inputInlineQueryResultSticker" {
        pub id: String,
        /// URL of the sticker thumbnail, if it exists.
        pub thumbnail_url: String,
        /// The URL of the WEBP or TGS sticker (sticker file size must not exceed 5MB).
        pub sticker_url: String,
        pub sticker_width: i32,
        pub sticker_height: i32,
        pub reply_markup: Option<ReplyMarkup>,
        /// The content of the message to be sent. Must be one of the following types:
        /// `inputMessageSticker`, `inputMessageInvoice`, `inputMessageLocation`,
        /// `inputMessageVenue` or `inputMessageContact`.
        pub input_message_content: InputMessageContent,
    }
}

// Options.

entity! {
    /// Represents a boolean option.
    pub struct OptionValueBoolean = "optionValueBoolean" {
        pub value: bool,
    }
}

entity! {
    /// Represents an unknown option or an option which has a default value.
    pub struct OptionValueEmpty = "optionValueEmpty" {}
}

entity! {
    /// Represents an integer option.
    pub struct OptionValueInteger = "optionValueInteger" {
        pub value: i64,
    }
}

entity! {
    /// Represents a string option.
    pub struct OptionValueString = "optionValueString" {
        pub value: String,
    }
}

// Connection state.

entity! {
    /// Currently waiting for the network to become available. Use `setNetworkType` to
    /// change the available network type.
    pub struct ConnectionStateWaitingForNetwork = "connectionStateWaitingForNetwork" {}
}

entity! {
    /// Currently establishing a connection with a proxy server.
    pub struct ConnectionStateConnectingToProxy = "connectionStateConnectingToProxy" {}
}

entity! {
    /// Currently establishing a connection to the Telegram servers.
    pub struct ConnectionStateConnecting = "connectionStateConnecting" {}
}

entity! {
    /// Downloading data received while the application was offline.
    pub struct ConnectionStateUpdating = "connectionStateUpdating" {}
}

entity! {
    /// There is a working connection to the Telegram servers.
    pub struct ConnectionStateReady = "connectionStateReady" {}
}

// Updates.

entity! {
    /// The user authorization state has changed.
    pub struct UpdateAuthorizationState = "updateAuthorizationState" {
        pub authorization_state: AuthorizationState,
    }
}

entity! {
    /// A new message was received; can also be an outgoing message.
    pub struct UpdateNewMessage = "updateNewMessage" {
        pub message: Message,
    }
}

entity! {
    /// Information about a file was updated.
    pub struct UpdateFile = "updateFile" {
        pub file: File,
    }
}

entity! {
    /// A new incoming callback query; for bots only.
    pub struct UpdateNewCallbackQuery = "updateNewCallbackQuery" {
        /// Unique query identifier.
        pub id: i64,
        pub sender_user_id: i64,
        /// Identifier of the chat where the query was sent.
        pub chat_id: i64,
        /// Identifier of the message, from which the query originated.
        pub message_id: i64,
        /// Identifier that uniquely corresponds to the chat to which the message was sent.
        pub chat_instance: i64,
        pub payload: CallbackQueryPayload,
    }
}

entity! {
    /// A poll was updated; for bots only.
    pub struct UpdatePoll = "updatePoll" {
        pub poll: Poll,
    }
}

entity! {
    /// An option changed its value.
    pub struct UpdateOption = "updateOption" {
        pub name: String,
        pub value: OptionValue,
    }
}

entity! {
    /// The connection state has changed. This update must be used only to show a human-readable
    /// description of the connection state.
    pub struct UpdateConnectionState = "updateConnectionState" {
        pub state: ConnectionState,
    }
}
