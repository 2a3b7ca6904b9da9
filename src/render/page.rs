// src/render/page.rs

/// A single text element that can be shown or hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    pub text: String,
    pub visible: bool,
}

impl Region {
    pub fn shown(text: impl Into<String>) -> Self {
        Self { text: text.into(), visible: true }
    }
}

/// Heading plus lines (menu list items / nutrition paragraphs).
/// `Section::default()` is a cleared section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

impl Section {
    pub fn titled(heading: &str, lines: Vec<String>) -> Self {
        Self { heading: Some(s!(heading)), lines }
    }

    pub fn is_empty(&self) -> bool {
        self.heading.is_none() && self.lines.is_empty()
    }
}

/// Every display region the widget owns.
///
/// `date_display`, `status_heading`, `menu` and `nutrition` live inside the
/// details area and are only on screen while `details_visible` is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub loading: Region,
    pub error: Region,
    pub details_visible: bool,
    pub date_display: Region,
    pub status_heading: Region,
    pub menu: Section,
    pub nutrition: Section,
}

impl Page {
    /// Visible text, top to bottom.
    pub fn text_content(&self) -> Vec<String> {
        let mut out = Vec::new();
        let region = |r: &Region, out: &mut Vec<String>| {
            if r.visible && !r.text.is_empty() {
                out.push(r.text.clone());
            }
        };

        region(&self.loading, &mut out);
        region(&self.error, &mut out);

        if self.details_visible {
            region(&self.date_display, &mut out);
            region(&self.status_heading, &mut out);
            for section in [&self.menu, &self.nutrition] {
                out.extend(section.heading.iter().cloned());
                out.extend(section.lines.iter().cloned());
            }
        }
        out
    }
}
