//! REST API: router, handlers, response envelope, error mapping.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
