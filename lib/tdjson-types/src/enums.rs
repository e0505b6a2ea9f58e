// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Abstract TDLib types, each a closed set of the concrete [`types`].
//!
//! Variants whose object contains the union itself are boxed.
use crate::types;
use tdjson_codec::union;

union! {
    /// Provides information about the method by which an authentication code is delivered
    /// to the user.
    pub enum AuthenticationCodeType = "AuthenticationCodeType" {
        TelegramMessage(types::AuthenticationCodeTypeTelegramMessage),
        Sms(types::AuthenticationCodeTypeSms),
        Call(types::AuthenticationCodeTypeCall),
        FlashCall(types::AuthenticationCodeTypeFlashCall),
    }
}

union! {
    /// Represents the current authorization state of the TDLib client.
    pub enum AuthorizationState = "AuthorizationState" {
        WaitTdlibParameters(types::AuthorizationStateWaitTdlibParameters),
        WaitEncryptionKey(types::AuthorizationStateWaitEncryptionKey),
        WaitPhoneNumber(types::AuthorizationStateWaitPhoneNumber),
        WaitCode(types::AuthorizationStateWaitCode),
        WaitOtherDeviceConfirmation(types::AuthorizationStateWaitOtherDeviceConfirmation),
        WaitRegistration(types::AuthorizationStateWaitRegistration),
        WaitPassword(types::AuthorizationStateWaitPassword),
        Ready(types::AuthorizationStateReady),
        LoggingOut(types::AuthorizationStateLoggingOut),
        Closing(types::AuthorizationStateClosing),
        Closed(types::AuthorizationStateClosed),
    }
}

union! {
    /// Represents a part of the text which must be formatted differently.
    pub enum TextEntityType = "TextEntityType" {
        Mention(types::TextEntityTypeMention),
        Hashtag(types::TextEntityTypeHashtag),
        Cashtag(types::TextEntityTypeCashtag),
        BotCommand(types::TextEntityTypeBotCommand),
        Url(types::TextEntityTypeUrl),
        EmailAddress(types::TextEntityTypeEmailAddress),
        PhoneNumber(types::TextEntityTypePhoneNumber),
        BankCardNumber(types::TextEntityTypeBankCardNumber),
        Bold(types::TextEntityTypeBold),
        Italic(types::TextEntityTypeItalic),
        Underline(types::TextEntityTypeUnderline),
        Strikethrough(types::TextEntityTypeStrikethrough),
        Code(types::TextEntityTypeCode),
        Pre(types::TextEntityTypePre),
        PreCode(types::TextEntityTypePreCode),
        TextUrl(types::TextEntityTypeTextUrl),
        MentionName(types::TextEntityTypeMentionName),
    }
}

union! {
    /// Describes the way the text should be parsed for text entities.
    pub enum TextParseMode = "TextParseMode" {
        Markdown(types::TextParseModeMarkdown),
        Html(types::TextParseModeHtml),
    }
}

union! {
    /// Describes a text object inside an instant-view web page.
    pub enum RichText = "RichText" {
        Plain(types::RichTextPlain),
        Bold(Box<types::RichTextBold>),
        Italic(Box<types::RichTextItalic>),
        Underline(Box<types::RichTextUnderline>),
        Strikethrough(Box<types::RichTextStrikethrough>),
        Fixed(Box<types::RichTextFixed>),
        Url(Box<types::RichTextUrl>),
        EmailAddress(Box<types::RichTextEmailAddress>),
        Subscript(Box<types::RichTextSubscript>),
        Superscript(Box<types::RichTextSuperscript>),
        Marked(Box<types::RichTextMarked>),
        PhoneNumber(Box<types::RichTextPhoneNumber>),
        Anchor(types::RichTextAnchor),
        AnchorLink(Box<types::RichTextAnchorLink>),
        Texts(types::RichTexts),
    }
}

union! {
    /// Describes a block of an instant view web page.
    pub enum PageBlock = "PageBlock" {
        Title(types::PageBlockTitle),
        Subtitle(types::PageBlockSubtitle),
        AuthorDate(types::PageBlockAuthorDate),
        Header(types::PageBlockHeader),
        Subheader(types::PageBlockSubheader),
        Kicker(types::PageBlockKicker),
        Paragraph(types::PageBlockParagraph),
        Preformatted(types::PageBlockPreformatted),
        Footer(types::PageBlockFooter),
        Divider(types::PageBlockDivider),
        Anchor(types::PageBlockAnchor),
        List(types::PageBlockList),
        BlockQuote(types::PageBlockBlockQuote),
        PullQuote(types::PageBlockPullQuote),
        Cover(Box<types::PageBlockCover>),
        Details(types::PageBlockDetails),
    }
}

union! {
    /// Points to a file.
    pub enum InputFile = "InputFile" {
        Id(types::InputFileId),
        Remote(types::InputFileRemote),
        Local(types::InputFileLocal),
        Generated(types::InputFileGenerated),
    }
}

union! {
    /// Describes format of the thumbnail.
    pub enum ThumbnailFormat = "ThumbnailFormat" {
        Jpeg(types::ThumbnailFormatJpeg),
        Png(types::ThumbnailFormatPng),
        Webp(types::ThumbnailFormatWebp),
        Gif(types::ThumbnailFormatGif),
        Tgs(types::ThumbnailFormatTgs),
        Mpeg4(types::ThumbnailFormatMpeg4),
    }
}

union! {
    /// Part of the face, relative to which a mask is placed.
    pub enum MaskPoint = "MaskPoint" {
        Forehead(types::MaskPointForehead),
        Eyes(types::MaskPointEyes),
        Mouth(types::MaskPointMouth),
        Chin(types::MaskPointChin),
    }
}

union! {
    /// Represents a vector path command.
    pub enum VectorPathCommand = "VectorPathCommand" {
        Line(types::VectorPathCommandLine),
        CubicBezierCurve(types::VectorPathCommandCubicBezierCurve),
    }
}

union! {
    /// Describes the type of a poll.
    pub enum PollType = "PollType" {
        Regular(types::PollTypeRegular),
        Quiz(types::PollTypeQuiz),
    }
}

union! {
    /// Describes a keyboard button type.
    pub enum KeyboardButtonType = "KeyboardButtonType" {
        Text(types::KeyboardButtonTypeText),
        RequestPhoneNumber(types::KeyboardButtonTypeRequestPhoneNumber),
        RequestLocation(types::KeyboardButtonTypeRequestLocation),
        RequestPoll(types::KeyboardButtonTypeRequestPoll),
    }
}

union! {
    /// Describes the type of an inline keyboard button.
    pub enum InlineKeyboardButtonType = "InlineKeyboardButtonType" {
        Url(types::InlineKeyboardButtonTypeUrl),
        LoginUrl(types::InlineKeyboardButtonTypeLoginUrl),
        Callback(types::InlineKeyboardButtonTypeCallback),
        CallbackWithPassword(types::InlineKeyboardButtonTypeCallbackWithPassword),
        CallbackGame(types::InlineKeyboardButtonTypeCallbackGame),
        SwitchInline(types::InlineKeyboardButtonTypeSwitchInline),
        Buy(types::InlineKeyboardButtonTypeBuy),
    }
}

union! {
    /// Contains a description of a custom keyboard and actions that can be done with it to
    /// quickly reply to bots.
    pub enum ReplyMarkup = "ReplyMarkup" {
        RemoveKeyboard(types::ReplyMarkupRemoveKeyboard),
        ForceReply(types::ReplyMarkupForceReply),
        ShowKeyboard(types::ReplyMarkupShowKeyboard),
        InlineKeyboard(types::ReplyMarkupInlineKeyboard),
    }
}

union! {
    /// Represents a payload of a callback query.
    pub enum CallbackQueryPayload = "CallbackQueryPayload" {
        Data(types::CallbackQueryPayloadData),
        DataWithPassword(types::CallbackQueryPayloadDataWithPassword),
        Game(types::CallbackQueryPayloadGame),
    }
}

union! {
    /// The content of a message to send.
    pub enum InputMessageContent = "InputMessageContent" {
        Text(types::InputMessageText),
        Sticker(types::InputMessageSticker),
        Poll(types::InputMessagePoll),
        Forwarded(types::InputMessageForwarded),
    }
}

union! {
    /// Contains the content of a message.
    pub enum MessageContent = "MessageContent" {
        Text(types::MessageText),
        Sticker(types::MessageSticker),
        Poll(types::MessagePoll),
        Unsupported(types::MessageUnsupported),
    }
}

union! {
    /// Contains information about the time when a scheduled message will be sent.
    pub enum MessageSchedulingState = "MessageSchedulingState" {
        SendAtDate(types::MessageSchedulingStateSendAtDate),
        SendWhenOnline(types::MessageSchedulingStateSendWhenOnline),
    }
}

union! {
    /// Represents a single result of an inline query; for bots only.
    pub enum InputInlineQueryResult = "InputInlineQueryResult" {
        Article(types::InputInlineQueryResultArticle),
        Sticker(types::InputInlineQueryResultSticker),
    }
}

union! {
    /// Represents the value of an option.
    pub enum OptionValue = "OptionValue" {
        Boolean(types::OptionValueBoolean),
        Empty(types::OptionValueEmpty),
        Integer(types::OptionValueInteger),
        String(types::OptionValueString),
    }
}

union! {
    /// Describes the current state of the connection to Telegram servers.
    pub enum ConnectionState = "ConnectionState" {
        WaitingForNetwork(types::ConnectionStateWaitingForNetwork),
        ConnectingToProxy(types::ConnectionStateConnectingToProxy),
        Connecting(types::ConnectionStateConnecting),
        Updating(types::ConnectionStateUpdating),
        Ready(types::ConnectionStateReady),
    }
}

union! {
    /// Contains notifications about data changes.
    pub enum Update = "Update" {
        AuthorizationState(types::UpdateAuthorizationState),
        NewMessage(types::UpdateNewMessage),
        File(types::UpdateFile),
        NewCallbackQuery(types::UpdateNewCallbackQuery),
        Poll(types::UpdatePoll),
        Option(types::UpdateOption),
        ConnectionState(types::UpdateConnectionState),
    }
}
