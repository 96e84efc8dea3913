//! Rate limiting configuration helper.
//!
//! The platform throttles all traffic at the boundary: 100 requests per IP
//! per 15-minute window. The limiter itself is assembled in `main.rs`, where
//! the backend store lives; nothing inside the auth core rate-limits.

use std::time::Duration;

use actix_extensible_rate_limit::backend::SimpleInputFunctionBuilder;

/// Global boundary rate limit: 100 requests per 15 minutes per IP address.
pub fn global_rate_limit_config() -> SimpleInputFunctionBuilder {
    SimpleInputFunctionBuilder::new(Duration::from_secs(15 * 60), 100).real_ip_key()
}
