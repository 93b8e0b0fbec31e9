//! Event, response, and context containers plus the handler contract.
//!
//! Events and responses are structural: only the header map matters here,
//! and every other field rides along untouched in a flattened JSON payload.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::headers::Headers;
use crate::identity::RequestIdentity;

/// Boxed error for handler failures; propagated unchanged, never translated.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The future a handler returns.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<FunctionResponse, BoxError>> + Send>>;

/// An event-driven function handler: async (event, context) -> response.
pub type BoxHandler = Box<dyn Fn(Event, Context) -> HandlerFuture + Send + Sync>;

/// A middleware takes a handler and returns a new handler of the same
/// shape; wrappers compose by nesting.
pub type Middleware = fn(BoxHandler) -> BoxHandler;

/// Inbound event: the header map plus whatever else the trigger supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub headers: Headers,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Outbound response: same structural shape as [`Event`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(default)]
    pub headers: Headers,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Execution context handed to the wrapped handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// The resolved bundle, populated by the identity middleware.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_identity: Option<RequestIdentity>,
}

/// Adapt an async closure into a [`BoxHandler`].
pub fn handler_fn<F, Fut>(f: F) -> BoxHandler
where
    F: Fn(Event, Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<FunctionResponse, BoxError>> + Send + 'static,
{
    Box::new(move |event, ctx| -> HandlerFuture { Box::pin(f(event, ctx)) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_round_trips_extra_fields() {
        let json = r#"{
            "headers": {"x-trace-id": "abc"},
            "body": "hello",
            "isBase64Encoded": false
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.headers.get("x-trace-id"), Some("abc"));
        assert_eq!(event.payload.get("body"), Some(&Value::from("hello")));

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back.get("isBase64Encoded"), Some(&Value::from(false)));
    }

    #[test]
    fn test_event_without_headers_defaults_to_empty_map() {
        let event: Event = serde_json::from_str(r#"{"body": "x"}"#).unwrap();
        assert!(event.headers.is_empty());
    }

    #[test]
    fn test_context_serializes_identity_under_contract_name() {
        let ctx = Context {
            request_identity: Some(RequestIdentity::resolve(&Headers::new())),
        };
        let json = serde_json::to_value(&ctx).unwrap();
        assert!(json.get("requestIdentity").is_some());

        let empty = serde_json::to_value(Context::default()).unwrap();
        assert!(empty.get("requestIdentity").is_none());
    }
}
