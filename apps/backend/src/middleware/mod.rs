pub mod cors;
pub mod jwt_extract;
pub mod rate_limit;
pub mod request_trace;
pub mod role_guard;
pub mod security_headers;
pub mod structured_logger;
pub mod trace_span;

pub use cors::cors_middleware;
pub use jwt_extract::JwtExtract;
pub use request_trace::RequestTrace;
pub use role_guard::RequireRole;
pub use security_headers::SecurityHeaders;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
