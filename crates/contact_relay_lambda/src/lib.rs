//! AWS-oriented adapters and handlers for the contact relay function.
//!
//! This crate owns runtime integration details (Lambda event handling, the SES
//! adapter and environment configuration). Submission rules and response
//! shapes live in `contact_core` so the form client applies the same ones.

pub mod adapters;
pub mod config;
pub mod handlers;
