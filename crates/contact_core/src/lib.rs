//! Shared contact form primitives.
//!
//! This crate owns the submission contract, the validation rule applied on
//! both sides of the wire, the relay response bodies and the outbound email
//! layout. It intentionally excludes AWS SDK, Lambda runtime and UI concerns.

pub mod contract;
pub mod email;
pub mod validation;
