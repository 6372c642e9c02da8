//! The fixed dark palette of the viewer.
//!
//! Colors mirror the original artwork: a near-black canvas, a slightly
//! lighter side panel, an orange accent for headings and the active filter,
//! and three marker colors keyed by activity class.

use egui::{Color32, Context, Visuals};

use crate::data::record::ActivityClass;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color32,
    pub panel_background: Color32,
    pub separator: Color32,
    pub accent: Color32,
    pub text: Color32,
    pub active: Color32,
    pub dormant: Color32,
    pub other: Color32,
    pub highlight: Color32,
    pub button_idle: Color32,
    pub button_hover: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_gray(10),
            panel_background: Color32::from_gray(25),
            separator: Color32::from_gray(100),
            accent: Color32::from_rgb(251, 86, 7),
            text: Color32::WHITE,
            active: Color32::from_rgba_unmultiplied(255, 89, 94, 200),
            dormant: Color32::from_rgba_unmultiplied(138, 201, 38, 200),
            other: Color32::from_rgba_unmultiplied(150, 150, 150, 200),
            highlight: Color32::WHITE,
            button_idle: Color32::from_gray(20),
            button_hover: Color32::from_gray(50),
        }
    }
}

impl Theme {
    /// Marker color for an activity class.
    pub fn class_color(&self, class: ActivityClass) -> Color32 {
        match class {
            ActivityClass::Active => self.active,
            ActivityClass::Dormant => self.dormant,
            ActivityClass::Other => self.other,
        }
    }

    /// Apply the theme's base visuals to the egui context.
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.override_text_color = Some(self.text);
        ctx.set_visuals(visuals);
    }
}
