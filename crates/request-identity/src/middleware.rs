//! The identity-propagation wrapper: resolve, attach, invoke, merge back.

use crate::handler::{BoxHandler, Context, Event, HandlerFuture};
use crate::identity::RequestIdentity;

/// Wrap a handler with request-identity propagation.
///
/// On each invocation the bundle is resolved from the event's headers and
/// attached to the context before the inner handler runs. On success the
/// bundle's outbound headers are merged over the response's headers, so
/// identity values win against anything the handler set under the same
/// names. Handler failures pass through untouched.
pub fn with_request_identity(inner: BoxHandler) -> BoxHandler {
    Box::new(move |event: Event, mut ctx: Context| -> HandlerFuture {
        let identity = RequestIdentity::resolve(&event.headers);
        tracing::debug!(
            correlation_id = %identity.correlation_id,
            trace_id = %identity.trace_id,
            span_id = %identity.span_id,
            "resolved request identity"
        );

        ctx.request_identity = Some(identity.clone());
        let call = inner(event, ctx);

        Box::pin(async move {
            let mut response = call.await?;
            response.headers.extend(identity.outbound_headers());
            Ok(response)
        })
    })
}
