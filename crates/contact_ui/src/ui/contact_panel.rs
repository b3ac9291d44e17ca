use eframe::egui;

use crate::app::{ContactApp, StatusMessage};
use crate::ui::constants::{FAILURE_COLOR, FOOTNOTE_TEXT, INTRO_TEXT, SUCCESS_COLOR, WINDOW_TITLE};

pub(crate) fn render_contact_panel(ui: &mut egui::Ui, app: &mut ContactApp) {
    ui.vertical_centered(|ui| {
        ui.heading(WINDOW_TITLE);
        ui.label(INTRO_TEXT);
    });
    ui.add_space(12.0);

    let editable = !app.form.in_flight();
    ui.label("Name");
    ui.add_enabled(
        editable,
        egui::TextEdit::singleline(&mut app.form.name)
            .hint_text("Your name")
            .desired_width(f32::INFINITY),
    );

    ui.label("Email");
    ui.add_enabled(
        editable,
        egui::TextEdit::singleline(&mut app.form.email)
            .hint_text("you@example.com")
            .desired_width(f32::INFINITY),
    );

    ui.label("Message");
    ui.add_enabled(
        editable,
        egui::TextEdit::multiline(&mut app.form.message)
            .hint_text("Tell me about your project...")
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let label = if app.form.in_flight() {
            "Sending..."
        } else {
            "Send Message"
        };
        if ui
            .add_enabled(!app.form.in_flight(), egui::Button::new(label))
            .clicked()
        {
            app.submit();
        }
        if let Some(address) = &app.mailto {
            ui.hyperlink_to("Or email me", format!("mailto:{address}"));
        }
    });

    if let Some(status) = app.form.last_result() {
        render_status(ui, status);
    }
    ui.add_space(4.0);
    ui.small(FOOTNOTE_TEXT);
}

fn render_status(ui: &mut egui::Ui, status: &StatusMessage) {
    let color = if status.ok {
        SUCCESS_COLOR
    } else {
        FAILURE_COLOR
    };
    ui.colored_label(color, status.text.as_str());
}
