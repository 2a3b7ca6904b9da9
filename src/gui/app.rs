// src/gui/app.rs
use std::{error::Error, sync::Arc, time::Instant};

use chrono::NaiveDate;
use eframe::egui;

use crate::{
    config::{consts::WINDOW_TITLE, state::AppState},
    controller::MealInfoController,
    core::NeisClient,
    date,
    error::MealError,
    render::{self, Page, RenderState},
};

use super::{components, fonts};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, state)?))),
    )?;
    Ok(())
}

pub struct App {
    // settings (UI thread only)
    pub state: AppState,

    // date field text is the source of truth; the picker mirrors it
    pub date_text: String,
    pub picker_date: NaiveDate,

    pub controller: MealInfoController,

    // what is on screen right now
    pub page: Page,

    // one extra cleanup pass shortly after start-up
    cleanup_at: Option<Instant>,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Result<Self, MealError> {
        fonts::install(ctx);

        let client = NeisClient::new(state.options.clone())?;
        let controller = MealInfoController::new(Arc::new(client));

        let date_text = date::default_date();
        let picker_date = date::parse_input(&date_text)
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        logf!(
            "Init: endpoint={} district={} school={} date={}",
            state.options.endpoint,
            state.options.district_code,
            state.options.school_code,
            date_text
        );

        let cleanup_at = Some(Instant::now() + state.gui.cleanup_delay);
        let mut app = Self {
            state,
            date_text,
            picker_date,
            controller,
            page: render::render(&RenderState::Loading),
            cleanup_at,
        };

        // Today's menu on start-up
        app.search(ctx);
        Ok(app)
    }

    /// Button, Enter key and start-up all end up here.
    pub fn search(&mut self, ctx: &egui::Context) {
        let repaint = ctx.clone();
        let state = self.controller.submit(&self.date_text, move || repaint.request_repaint());
        self.page = render::render(state);
    }

    /// Keep the picker in step with a hand-typed date.
    pub fn sync_picker_from_text(&mut self) {
        if let Some(d) = date::parse_input(&self.date_text) {
            self.picker_date = d;
        }
    }

    pub fn sync_text_from_picker(&mut self) {
        self.date_text = date::format_input(self.picker_date);
        logd!("UI: Picker → {}", self.date_text);
    }

    fn run_delayed_cleanup(&mut self, ctx: &egui::Context) {
        let Some(at) = self.cleanup_at else { return };
        let now = Instant::now();
        if now >= at {
            let n = render::scrub_false(&mut self.page);
            logd!("UI: Delayed cleanup pass, suppressed={}", n);
            self.cleanup_at = None;
        } else {
            ctx.request_repaint_after(at - now);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.poll() {
            self.page = render::render(self.controller.state());
        }
        self.run_delayed_cleanup(ctx);

        egui::TopBottomPanel::top("date_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            components::date_bar::draw(ui, self);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::meal_panel::draw(ui, &self.page);
        });
    }
}
