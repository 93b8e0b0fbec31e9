//! Identifier bundle resolution: fallback chains and outbound headers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::encoding::{bytes_to_hex_string, bytes_to_uuid, hex_string_to_uuid, uuid_to_hex_string};
use crate::headers::{
    Headers, CORRELATION_ID_KEYS, PARENT_ID_KEYS, REQUEST_ID_KEYS, SESSION_ID_KEYS, SPAN_ID_KEYS,
    TRACE_ID_KEYS,
};

/// The fully-resolved identifier bundle for one invocation.
///
/// Every field except `parent_id` is guaranteed non-empty by the time the
/// bundle reaches the wrapped handler; `parent_id` is carried through only
/// when the caller supplied one and is never synthesized.
///
/// Serializes under the camelCase names the handler contract uses
/// (`correlationId`, `requestId`, ...); an absent `parentId` is omitted
/// rather than emitted as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestIdentity {
    pub correlation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub request_id: String,
    pub session_id: String,
    pub span_id: String,
    pub trace_id: String,
}

impl RequestIdentity {
    /// Resolve a complete bundle from the inbound header map.
    ///
    /// Two fresh 16-byte buffers are drawn up front: a trace-origin buffer
    /// terminating the correlation/request/session/trace chains and a
    /// span-origin buffer terminating the span chain. Sharing the
    /// trace-origin buffer means that with no inbound context at all,
    /// correlation, request, and session ids collapse to one value: one
    /// logical transaction, one identifier. Span ids stay distinct from
    /// trace ids because a trace holds many spans.
    ///
    /// Each chain takes the first non-empty candidate; total absence of
    /// inbound headers is the normal case, not an error.
    pub fn resolve(headers: &Headers) -> Self {
        let trace_seed = Uuid::new_v4().into_bytes();
        let span_seed = Uuid::new_v4().into_bytes();

        let inbound_correlation = headers.first_non_empty(&CORRELATION_ID_KEYS);
        let inbound_trace = headers.first_non_empty(&TRACE_ID_KEYS);

        let correlation_id = inbound_correlation
            .map(str::to_owned)
            .or_else(|| hex_string_to_uuid(inbound_trace))
            .unwrap_or_else(|| bytes_to_uuid(&trace_seed));

        let parent_id = headers.first_non_empty(&PARENT_ID_KEYS).map(str::to_owned);

        let request_id = headers
            .first_non_empty(&REQUEST_ID_KEYS)
            .or(inbound_correlation)
            .map(str::to_owned)
            .or_else(|| hex_string_to_uuid(inbound_trace))
            .unwrap_or_else(|| bytes_to_uuid(&trace_seed));

        let session_id = headers
            .first_non_empty(&SESSION_ID_KEYS)
            .or(inbound_correlation)
            .map(str::to_owned)
            .or_else(|| hex_string_to_uuid(inbound_trace))
            .unwrap_or_else(|| bytes_to_uuid(&trace_seed));

        let span_id = headers
            .first_non_empty(&SPAN_ID_KEYS)
            .map(str::to_owned)
            .unwrap_or_else(|| bytes_to_hex_string(&span_seed[..8]));

        let trace_id = inbound_trace
            .map(str::to_owned)
            .or_else(|| uuid_to_hex_string(inbound_correlation))
            .unwrap_or_else(|| bytes_to_hex_string(&trace_seed));

        Self {
            correlation_id,
            parent_id,
            request_id,
            session_id,
            span_id,
            trace_id,
        }
    }

    /// Build the outbound header entries for this bundle.
    ///
    /// Every field is written under its whole key family so that callers
    /// watching any synonym see the same value. An absent `parent_id`
    /// leaves all three of its keys out of the map entirely.
    pub fn outbound_headers(&self) -> Headers {
        let mut out = Headers::new();
        put_family(&mut out, &CORRELATION_ID_KEYS, &self.correlation_id);
        if let Some(parent) = &self.parent_id {
            put_family(&mut out, &PARENT_ID_KEYS, parent);
        }
        put_family(&mut out, &REQUEST_ID_KEYS, &self.request_id);
        put_family(&mut out, &SESSION_ID_KEYS, &self.session_id);
        put_family(&mut out, &SPAN_ID_KEYS, &self.span_id);
        put_family(&mut out, &TRACE_ID_KEYS, &self.trace_id);
        out
    }
}

fn put_family(out: &mut Headers, keys: &[&str], value: &str) {
    for key in keys {
        out.insert(*key, value);
    }
}
