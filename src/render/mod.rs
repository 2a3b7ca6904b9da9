// src/render/mod.rs
//! Presentation: one [`RenderState`] in, one fully populated [`Page`] out.
//!
//! The page is recomputed from scratch for every state; nothing is patched
//! incrementally, so entering a state always hides the others.

mod cleanup;
mod page;
mod state;

pub use cleanup::scrub_false;
pub use page::{Page, Region, Section};
pub use state::RenderState;

use crate::config::consts::*;

/// Lay out the regions for a state. Pure; never emits placeholder text for
/// absent fields.
pub fn present(state: &RenderState) -> Page {
    let mut page = Page::default();
    page.loading.text = s!(MSG_LOADING);

    match state {
        RenderState::Loading => {
            page.loading.visible = true;
        }
        RenderState::Error { message } => {
            page.error = Region::shown(message.clone());
        }
        RenderState::NoData { date } => {
            page.details_visible = true;
            page.date_display = Region::shown(date.display());
            page.status_heading = Region::shown(MSG_NO_MEAL);
        }
        RenderState::MealFound { date, meal } => {
            page.details_visible = true;
            page.date_display = Region::shown(format!("{} {}", date.display(), HEADING_SUFFIX));

            page.menu = Section::titled(HEADING_MENU, meal.menu.clone());

            let mut lines = Vec::with_capacity(meal.nutrition.len() + 1);
            if let Some(cal) = &meal.calories {
                lines.push(join!(CALORIE_PREFIX, cal));
            }
            lines.extend(meal.nutrition.iter().cloned());
            page.nutrition = Section::titled(HEADING_NUTRITION, lines);
        }
    }
    page
}

/// `present` followed by the "false" cleanup pass.
pub fn render(state: &RenderState) -> Page {
    let mut page = present(state);
    let scrubbed = scrub_false(&mut page);
    if scrubbed > 0 {
        logw!("Render: suppressed {} stray \"false\" element(s) in {:?}", scrubbed, state.kind());
    }
    page
}
