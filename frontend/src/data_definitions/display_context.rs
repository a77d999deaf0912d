//! Presentation settings handed to components as context instead of read from the DOM.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn page_background(self) -> &'static str {
        match self {
            Theme::Light => "#F5F6F8",
            Theme::Dark => "#0F172A",
        }
    }

    pub fn card_background(self) -> &'static str {
        match self {
            Theme::Light => "white",
            Theme::Dark => "#1E293B",
        }
    }

    pub fn text_color(self) -> &'static str {
        match self {
            Theme::Light => "#111827",
            Theme::Dark => "#E5E7EB",
        }
    }

    pub fn muted_text_color(self) -> &'static str {
        match self {
            Theme::Light => "rgba(0, 0, 0, 0.55)",
            Theme::Dark => "rgba(229, 231, 235, 0.6)",
        }
    }
}

#[derive(Clone, Copy)]
pub struct DisplayContext {
    pub theme: Signal<Theme>,
}
