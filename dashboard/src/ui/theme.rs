//! # GUI Theme
//!
//! Dark palette and the status colors used by token cards.

use egui::{Color32, Context, Stroke, Visuals};

use crate::controllers::StatusColor;

/// Color palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color32,
    pub panel: Color32,
    pub text: Color32,
    pub dim: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub inactive: Color32,
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(12, 12, 18),
            panel: Color32::from_rgb(22, 22, 32),
            text: Color32::from_rgb(235, 235, 240),
            dim: Color32::from_rgb(150, 150, 160),
            accent: Color32::from_rgb(240, 185, 11),
            success: Color32::from_rgb(46, 204, 113),
            warning: Color32::from_rgb(241, 196, 15),
            error: Color32::from_rgb(231, 76, 60),
            inactive: Color32::from_rgb(120, 120, 130),
            border: Color32::from_rgb(51, 51, 64),
        }
    }
}

impl Theme {
    pub fn status(&self, color: StatusColor) -> Color32 {
        match color {
            StatusColor::Green => self.success,
            StatusColor::Yellow => self.warning,
            StatusColor::Red => self.error,
            StatusColor::Gray => self.inactive,
        }
    }

    /// Green for gains, red for losses
    pub fn change(&self, change: f64) -> Color32 {
        if change >= 0.0 {
            self.success
        } else {
            self.error
        }
    }

    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.panel;
        visuals.extreme_bg_color = self.panel;
        visuals.override_text_color = Some(self.text);
        visuals.selection.bg_fill = self.accent.gamma_multiply(0.4);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.hyperlink_color = self.accent;
        visuals
    }

    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }
}
