//! # Navigation Bar
//!
//! Route links on the left, backend health and refresh on the right.

use crate::app::{App, AppState, Route};
use crate::ui::theme::Theme;

pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.set_height(32.0);
        ui.heading(egui::RichText::new("MemeForge").color(theme.accent).strong());
        ui.add_space(16.0);

        for route in Route::nav_items() {
            let selected = state.route == route;
            if ui.selectable_label(selected, route.title()).clicked() && !selected {
                app.navigate(route);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                app.reload();
                app.refresh_health();
            }

            let color = if state.health.is_online() {
                theme.success
            } else {
                theme.dim
            };
            ui.label(egui::RichText::new(format!("Backend: {}", state.health.label())).color(color));
        });
    });
}
