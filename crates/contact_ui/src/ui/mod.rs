//! UI modules for the contact form window.

pub mod app_shell;
pub mod constants;
pub mod contact_panel;
