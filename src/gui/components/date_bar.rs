// src/gui/components/date_bar.rs

use eframe::egui::{self, widgets::Spinner};
use egui_extras::DatePickerButton;

use crate::{config::consts::LABEL_SEARCH, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut search = false;

    ui.horizontal(|ui| {
        ui.label("날짜");

        // --- Text field (Enter searches) ---
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.date_text)
                .hint_text("YYYY-MM-DD")
                .desired_width(110.0)
                .font(egui::TextStyle::Monospace),
        );
        if field.changed() {
            app.sync_picker_from_text();
        }
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            logd!("UI: Enter in date field");
            search = true;
        }

        // --- Calendar popup ---
        let before = app.picker_date;
        ui.add(DatePickerButton::new(&mut app.picker_date).id_salt("meal_date"));
        if app.picker_date != before {
            app.sync_text_from_picker();
        }

        // Not disabled while loading: a newer query supersedes the pending one.
        if ui.button(LABEL_SEARCH).clicked() {
            logd!("UI: Search clicked");
            search = true;
        }

        if app.controller.state().is_loading() {
            ui.add(Spinner::new().size(16.0));
        }
    });

    if search {
        app.search(ui.ctx());
    }
}
