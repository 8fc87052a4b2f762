//! # Token Details Screen

use crate::app::{App, AppState, PriceTarget, Route};
use crate::controllers::RequestState;
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;
use crate::ui::widgets::token_card::render_token_card;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, notifications: &mut NotificationManager, theme: &Theme) {
    let details = &state.token_details;

    ui.horizontal(|ui| {
        if ui.button("< Back").clicked() {
            app.navigate(Route::Dashboard);
        }
        ui.heading("Token Details");
    });
    ui.add_space(8.0);

    match details.state() {
        RequestState::Idle | RequestState::Pending => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Loading token {}...", details.token_id()));
            });
        }
        RequestState::Failed(_) => {
            ui.label(egui::RichText::new("Token not found").color(theme.dim).size(16.0));
        }
        RequestState::Succeeded(token) => {
            if let Some(card) = details.card() {
                render_token_card(ui, card, PriceTarget::Details, app, notifications, theme);
            }

            ui.add_space(10.0);
            egui::Grid::new("token_details").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                ui.label("Token ID");
                ui.monospace(&token.id);
                ui.end_row();

                if let Some(address) = token.contract_address() {
                    ui.label("Contract");
                    ui.monospace(address);
                    ui.end_row();
                }

                if let Some(hash) = token.transaction_hash.as_deref() {
                    ui.label("Deploy tx");
                    ui.monospace(hash);
                    ui.end_row();
                }

                ui.label("Created");
                ui.label(crate::utils::format::format_timestamp(token.created_at.as_ref()));
                ui.end_row();
            });
        }
    }
}
