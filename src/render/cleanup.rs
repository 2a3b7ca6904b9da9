// src/render/cleanup.rs
//
// Last line of defence against a bare "false" reaching the screen (what a
// naively stringified absent field looks like). `present` should never
// produce one; this pass makes sure. Safe to run any number of times.

use super::page::{Page, Region, Section};

const ARTIFACT: &str = "false";

/// Clear and hide every element whose whole text is `false`.
/// Returns how many elements were suppressed (0 on a clean page).
pub fn scrub_false(page: &mut Page) -> usize {
    let mut n = 0;
    for region in [
        &mut page.loading,
        &mut page.error,
        &mut page.date_display,
        &mut page.status_heading,
    ] {
        n += scrub_region(region);
    }
    n += scrub_section(&mut page.menu);
    n += scrub_section(&mut page.nutrition);
    n
}

fn is_artifact(text: &str) -> bool {
    text.trim() == ARTIFACT
}

fn scrub_region(region: &mut Region) -> usize {
    if !is_artifact(&region.text) {
        return 0;
    }
    region.text.clear();
    region.visible = false;
    1
}

fn scrub_section(section: &mut Section) -> usize {
    let mut n = 0;
    if section.heading.as_deref().is_some_and(is_artifact) {
        section.heading = None;
        n += 1;
    }
    let before = section.lines.len();
    section.lines.retain(|line| !is_artifact(line));
    n + (before - section.lines.len())
}
