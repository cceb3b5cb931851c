//! # Domain Layer
//!
//! Route tables and audit records.

pub mod audit;
pub mod route;

pub use audit::{digest_hex, AuditAction, AuditEvent};
pub use route::{
    accept, acknowledge, passthrough, CallbackHandler, InboundHandler, InboundRoute,
    OutboundPreparer, RouteTable,
};
