// src/gui/components/meal_panel.rs
//
// Draws a `Page` literally: every region is shown iff the page says so.

use eframe::egui::{self, RichText, widgets::Spinner};

use crate::render::{Page, Section};

pub fn draw(ui: &mut egui::Ui, page: &Page) {
    if page.loading.visible {
        ui.horizontal(|ui| {
            ui.add(Spinner::new());
            ui.label(page.loading.text.as_str());
        });
    }

    if page.error.visible {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, page.error.text.as_str());
    }

    if !page.details_visible {
        return;
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        if page.date_display.visible {
            ui.heading(page.date_display.text.as_str());
        }
        if page.status_heading.visible {
            ui.add_space(4.0);
            ui.label(RichText::new(page.status_heading.text.as_str()).strong().size(16.0));
        }

        section(ui, &page.menu, true);
        section(ui, &page.nutrition, false);
    });
}

fn section(ui: &mut egui::Ui, s: &Section, bulleted: bool) {
    if s.is_empty() {
        return;
    }
    ui.add_space(10.0);
    if let Some(h) = &s.heading {
        ui.label(RichText::new(h.as_str()).strong().size(15.0));
        ui.separator();
    }
    for line in &s.lines {
        if bulleted {
            ui.label(format!("• {line}"));
        } else {
            ui.label(line.as_str());
        }
    }
}
