//! Copy and colours used by the contact panel.

use eframe::egui::Color32;

pub const WINDOW_TITLE: &str = "Contact / Hire Me";
pub const INTRO_TEXT: &str = "Have a project in mind? Send a message and I will reply quickly.";
pub const FOOTNOTE_TEXT: &str =
    "* Your message will be sent securely via AWS (API Gateway, Lambda, SES).";

pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(22, 163, 74);
pub const FAILURE_COLOR: Color32 = Color32::from_rgb(220, 38, 38);
