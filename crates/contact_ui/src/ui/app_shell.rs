use std::time::Duration;

use eframe::egui;

use crate::app::ContactApp;
use crate::ui::constants::WINDOW_TITLE;
use crate::ui::contact_panel::render_contact_panel;

pub fn run(app: ContactApp) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([520.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

impl eframe::App for ContactApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_results();

        // Keep polling the result channel while a request is outstanding.
        if self.form.in_flight() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            render_contact_panel(ui, self);
        });
    }
}
