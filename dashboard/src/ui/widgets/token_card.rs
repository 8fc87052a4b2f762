//! # Token Card
//!
//! One token with its status, supply, contract address and the price /
//! copy / explorer actions.

use shared::{format_supply, truncate_address};

use crate::app::{App, PriceTarget};
use crate::controllers::{StatusIcon, TokenCardController};
use crate::services::desktop::EguiShell;
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;
use crate::utils::format::{format_change, format_price_usd};

fn icon(icon: StatusIcon) -> &'static str {
    match icon {
        StatusIcon::Check => "✔",
        StatusIcon::Spinner => "⟳",
        StatusIcon::Alert => "⚠",
        StatusIcon::Clock => "⏱",
    }
}

pub fn render_token_card(
    ui: &mut egui::Ui,
    card: &TokenCardController,
    target: PriceTarget,
    app: &mut App,
    notifications: &mut NotificationManager,
    theme: &Theme,
) {
    let token = card.token();
    let status_color = theme.status(card.status_color());

    egui::Frame::group(ui.style())
        .fill(theme.panel)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_width(260.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&token.name).strong().size(16.0));
                ui.label(egui::RichText::new(&token.symbol).color(theme.dim));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} {}", icon(card.status_icon()), token.status))
                            .color(status_color),
                    );
                });
            });

            ui.label(format!("Supply: {}", format_supply(token.total_supply)));
            ui.label(format!("Network: {}", token.network.label()));
            if let Some(tax) = token.tax_rate {
                ui.label(format!("Tax: {}%", tax));
            }

            if let Some(address) = token.contract_address() {
                ui.horizontal(|ui| {
                    ui.monospace(truncate_address(address));
                    if ui.small_button("Copy").clicked() {
                        let mut shell = EguiShell::new(ui.ctx());
                        if card.copy_contract_address(&mut shell) {
                            notifications.copied("Contract address");
                        }
                    }
                });
            }

            if let Some(price) = card.price() {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format_price_usd(price.price_usd)).strong());
                    if let Some(change) = price.change_24h {
                        ui.label(egui::RichText::new(format_change(change)).color(theme.change(change)));
                    }
                });
            }

            ui.horizontal(|ui| {
                if token.is_deployed() {
                    let label = if card.is_loading_price() { "Loading..." } else { "Price" };
                    let button = ui.add_enabled(card.can_fetch_price() && !card.is_loading_price(), egui::Button::new(label));
                    if button.clicked() {
                        app.fetch_price(target.clone());
                    }
                }

                if token.is_deployed() && token.explorer_url().is_some() && ui.button("Explorer").clicked() {
                    let mut shell = EguiShell::new(ui.ctx());
                    card.open_explorer(&mut shell);
                }

                if matches!(target, PriceTarget::Dashboard(_)) && ui.button("Details").clicked() {
                    app.navigate(crate::app::Route::TokenDetails(token.id.clone()));
                }
            });
        });
}
