//! Request-identity propagation for event-driven function handlers.
//!
//! Wraps an async handler so that every invocation carries a coherent set
//! of tracing identifiers: correlation, request, session, span, trace, and
//! (when supplied inbound) parent. Sparse inbound headers are completed via
//! per-field fallback chains; the resolved bundle is attached to the
//! handler's context as `requestIdentity` and merged back into the
//! response's headers under plain, `x-` prefixed, and B3 key families.
//!
//! Inbound values are taken as-is: nothing here validates that a supplied
//! identifier is well-formed, and resolution itself cannot fail.
//!
//! ```no_run
//! use request_identity::{handler_fn, with_request_identity, FunctionResponse};
//!
//! let handler = with_request_identity(handler_fn(|_event, ctx| async move {
//!     let identity = ctx.request_identity.expect("attached by the wrapper");
//!     tracing::info!(correlation_id = %identity.correlation_id, "handling event");
//!     Ok(FunctionResponse::default())
//! }));
//! ```

pub mod encoding;
pub mod handler;
pub mod headers;
pub mod identity;
pub mod middleware;

pub use handler::{
    handler_fn, BoxError, BoxHandler, Context, Event, FunctionResponse, HandlerFuture, Middleware,
};
pub use headers::Headers;
pub use identity::RequestIdentity;
pub use middleware::with_request_identity;
