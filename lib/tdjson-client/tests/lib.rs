// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use futures_util::future::{self, BoxFuture};
use futures_util::StreamExt;
use serde_json::{json, Map, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;
use tdjson_client::tl::enums::{AuthorizationState, OptionValue, Update};
use tdjson_client::tl::{functions, types};
use tdjson_client::{
    Client, Config, InitParams, InvocationError, SignInError, Transport, TransportError,
};
use tdjson_codec::DecodeError;

static LOGGER: Once = Once::new();

fn init_logger() {
    LOGGER.call_once(|| {
        let _ = simple_logger::SimpleLogger::new()
            .with_level(log::LevelFilter::Off)
            .env()
            .init();
    });
}

/// Answers each request by its tag with a canned response. Requests with no
/// response configured never complete.
#[derive(Default)]
struct ScriptedTransport {
    responses: Mutex<HashMap<String, Value>>,
    sync_responses: Mutex<HashMap<String, Value>>,
    pushed: Mutex<VecDeque<Value>>,
    sent: Mutex<Vec<Value>>,
    executed: Mutex<Vec<Value>>,
}

impl ScriptedTransport {
    fn respond(&self, tag: &str, response: Value) {
        self.responses.lock().unwrap().insert(tag.into(), response);
    }

    fn respond_sync(&self, tag: &str, response: Value) {
        self.sync_responses.lock().unwrap().insert(tag.into(), response);
    }

    fn push(&self, value: Value) {
        self.pushed.lock().unwrap().push_back(value);
    }

    fn sent(&self) -> Vec<Value> {
        self.sent.lock().unwrap().clone()
    }
}

fn tag_of(request: &Value) -> String {
    request["@type"].as_str().unwrap_or_default().to_string()
}

impl Transport for ScriptedTransport {
    fn send(&self, request: Value) -> BoxFuture<'_, Result<Value, TransportError>> {
        let response = self.responses.lock().unwrap().get(&tag_of(&request)).cloned();
        self.sent.lock().unwrap().push(request);
        match response {
            Some(response) => Box::pin(future::ready(Ok(response))),
            None => Box::pin(future::pending()),
        }
    }

    fn execute(&self, request: Value) -> Result<Value, TransportError> {
        let response = self.sync_responses.lock().unwrap().get(&tag_of(&request)).cloned();
        self.executed.lock().unwrap().push(request);
        response.ok_or(TransportError::Unsupported)
    }

    fn receive(&self) -> BoxFuture<'_, Option<Value>> {
        let value = self.pushed.lock().unwrap().pop_front();
        Box::pin(future::ready(value))
    }
}

fn client_with(transport: &Arc<ScriptedTransport>, request_timeout: Option<Duration>) -> Client {
    init_logger();
    Client::new(
        Arc::clone(transport),
        Config {
            api_id: 1,
            api_hash: "hash".to_string(),
            params: InitParams {
                database_directory: "db".to_string(),
                ..Default::default()
            },
            request_timeout,
        },
    )
}

#[tokio::test]
async fn test_call_inserts_type() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond("getOption", json!({"@type": "optionValueString", "value": "1.8.0"}));
    let client = client_with(&transport, None);

    let mut fields = Map::new();
    fields.insert("name".into(), json!("version"));
    let response = client.call("getOption", fields).await.unwrap();

    assert_eq!(response["value"], "1.8.0");
    assert_eq!(
        transport.sent(),
        vec![json!({"@type": "getOption", "name": "version"})]
    );
}

#[test]
fn test_call_without_timeout_needs_no_timer() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond("getOption", json!({"@type": "optionValueEmpty"}));
    let client = client_with(&transport, None);

    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let response = runtime.block_on(client.call("getOption", Map::new())).unwrap();
    assert_eq!(response, json!({"@type": "optionValueEmpty"}));
}

#[tokio::test]
async fn test_error_takes_precedence() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        "getAuthorizationState",
        json!({"@type": "error", "code": 500, "message": "Request aborted"}),
    );
    let client = client_with(&transport, None);

    match client.authorization_state().await {
        Err(InvocationError::Remote(err)) => {
            assert_eq!(err.code, 500);
            assert_eq!(err.message, "Request aborted");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_precedence_on_raw_call() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        "checkAuthenticationCode",
        json!({"@type": "error", "code": 400, "message": "PHONE_CODE_INVALID"}),
    );
    let client = client_with(&transport, None);

    let err = client
        .call("checkAuthenticationCode", Map::new())
        .await
        .unwrap_err();
    assert!(err.is("PHONE_CODE_*"));
}

#[tokio::test]
async fn test_invoke_decodes_response() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        "getAuthorizationState",
        json!({"@type": "authorizationStateWaitPassword", "password_hint": "pet", "has_recovery_email_address": false, "recovery_email_address_pattern": ""}),
    );
    let client = client_with(&transport, None);

    let state = client
        .invoke(&functions::GetAuthorizationState {})
        .await
        .unwrap();
    assert!(matches!(
        state,
        AuthorizationState::WaitPassword(types::AuthorizationStateWaitPassword { ref password_hint, .. })
            if password_hint == "pet"
    ));
}

#[tokio::test]
async fn test_invoke_reports_schema_drift() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        "getAuthorizationState",
        json!({"@type": "authorizationStateWaitEmailAddress"}),
    );
    let client = client_with(&transport, None);

    match client.authorization_state().await {
        Err(InvocationError::Decode(err)) => {
            assert_eq!(err.unknown_tag(), Some("authorizationStateWaitEmailAddress"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_request_timeout() {
    let transport = Arc::new(ScriptedTransport::default());
    let client = client_with(&transport, Some(Duration::from_millis(20)));

    match client.get_option("version").await {
        Err(InvocationError::Transport(TransportError::Timeout(after))) => {
            assert_eq!(after, Duration::from_millis(20));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_cancelled_call_leaves_client_usable() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond("getOption", json!({"@type": "optionValueBoolean", "value": true}));
    let client = client_with(&transport, None);

    let pending = client.call("getStickers", Map::new());
    let abandoned = tokio::time::timeout(Duration::from_millis(10), pending).await;
    assert!(abandoned.is_err());

    let value = client.get_option("ignore_inline_thumbnails").await.unwrap();
    assert_eq!(
        value,
        OptionValue::Boolean(types::OptionValueBoolean { value: true })
    );
    assert_eq!(transport.sent().len(), 2);
}

#[tokio::test]
async fn test_sign_in_requires_password() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond("checkAuthenticationCode", json!({"@type": "ok"}));
    transport.respond(
        "getAuthorizationState",
        json!({"@type": "authorizationStateWaitPassword", "password_hint": "", "has_recovery_email_address": true, "recovery_email_address_pattern": "a***@b.c"}),
    );
    let client = client_with(&transport, None);

    assert!(matches!(
        client.sign_in("12345").await,
        Err(SignInError::PasswordRequired { .. })
    ));
}

#[tokio::test]
async fn test_sign_in_invalid_code() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        "checkAuthenticationCode",
        json!({"@type": "error", "code": 400, "message": "PHONE_CODE_INVALID"}),
    );
    let client = client_with(&transport, None);

    assert!(matches!(
        client.sign_in("00000").await,
        Err(SignInError::InvalidCode)
    ));
}

#[tokio::test]
async fn test_send_tdlib_parameters() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond("setTdlibParameters", json!({"@type": "ok"}));
    let client = client_with(&transport, None);

    client.send_tdlib_parameters().await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0]["@type"], "setTdlibParameters");
    assert_eq!(sent[0]["parameters"]["@type"], "tdlibParameters");
    assert_eq!(sent[0]["parameters"]["database_directory"], "db");
    assert_eq!(sent[0]["parameters"]["api_id"], 1);
}

#[test]
fn test_execute_requires_synchronous_function() {
    let transport = Arc::new(ScriptedTransport::default());
    let client = client_with(&transport, None);

    match client.execute(&functions::GetAuthorizationState {}) {
        Err(InvocationError::NotSynchronous { tag }) => {
            assert_eq!(tag, "getAuthorizationState")
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(transport.executed.lock().unwrap().is_empty());
}

#[test]
fn test_execute_synchronous_function() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond_sync(
        "parseTextEntities",
        json!({
            "@type": "formattedText",
            "text": "bold",
            "entities": [{"@type": "textEntity", "offset": 0, "length": 4, "type": {"@type": "textEntityTypeBold"}}],
        }),
    );
    transport.respond_sync(
        "setLogVerbosityLevel",
        json!({"@type": "error", "code": 400, "message": "Wrong new verbosity level specified"}),
    );
    let client = client_with(&transport, None);

    let text = client.parse_markdown("*bold*").unwrap();
    assert_eq!(text.text, "bold");
    assert_eq!(text.entities.len(), 1);

    let err = client.set_log_verbosity_level(2000).unwrap_err();
    assert!(err.is("Wrong new verbosity level*"));

    let executed = transport.executed.lock().unwrap();
    assert_eq!(executed[0]["parse_mode"]["@type"], "textParseModeMarkdown");
    assert_eq!(executed[0]["parse_mode"]["version"], 2);
    assert_eq!(executed[1]["new_verbosity_level"], 2000);
}

#[tokio::test]
async fn test_updates_single_reader() {
    let transport = Arc::new(ScriptedTransport::default());
    let client = client_with(&transport, None);

    let _updates = client.updates().unwrap();
    assert!(matches!(
        client.clone().updates(),
        Err(InvocationError::UpdatesTaken)
    ));
}

#[tokio::test]
async fn test_updates_in_order() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.push(json!({"@type": "updateConnectionState", "state": {"@type": "connectionStateConnecting"}}));
    transport.push(json!({"@type": "updateChatTitle", "chat_id": 1, "title": "new"}));
    transport.push(json!({"@type": "updateConnectionState", "state": {"@type": "connectionStateReady"}}));
    let client = client_with(&transport, None);

    let mut updates = client.updates().unwrap();

    assert!(matches!(
        updates.next_update::<Update>().await,
        Some(Ok(Update::ConnectionState(_)))
    ));
    match updates.next_update::<Update>().await {
        Some(Err(InvocationError::Decode(DecodeError::UnknownVariant { union, tag }))) => {
            assert_eq!(union, "Update");
            assert_eq!(tag, "updateChatTitle");
        }
        other => panic!("unexpected update: {other:?}"),
    }
    assert_eq!(
        updates.next().await,
        Some(json!({"@type": "updateConnectionState", "state": {"@type": "connectionStateReady"}}))
    );
    assert_eq!(updates.next_raw().await, None);
}

#[tokio::test]
async fn test_updates_report_pushed_errors() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.push(json!({"@type": "error", "code": 500, "message": "Request aborted"}));
    transport.push(json!({"@type": "updateConnectionState", "state": {"@type": "connectionStateReady"}}));
    let client = client_with(&transport, None);

    let mut updates = client.updates().unwrap();

    match updates.next_update::<Update>().await {
        Some(Err(InvocationError::Remote(err))) => {
            assert_eq!(err.code, 500);
            assert_eq!(err.message, "Request aborted");
        }
        other => panic!("unexpected update: {other:?}"),
    }
    assert!(matches!(
        updates.next_update::<Update>().await,
        Some(Ok(Update::ConnectionState(_)))
    ));
}
