//! # Dashboard Screen
//!
//! Stats row, the token grid and recent activity.

use shared::DashboardStats;

use crate::app::{App, AppState, PriceTarget, Route};
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;
use crate::ui::widgets::token_card::render_token_card;
use crate::utils::format::{format_price_usd, format_timestamp};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, notifications: &mut NotificationManager, theme: &Theme) {
    let dashboard = &state.dashboard;

    ui.heading("Dashboard");
    ui.add_space(8.0);

    render_stats(ui, dashboard.stats().copied().unwrap_or_default(), theme);
    ui.add_space(12.0);
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Your Tokens");
        ui.add_space(6.0);

        if dashboard.is_loading() && dashboard.cards().is_empty() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading tokens...");
            });
        } else if dashboard.show_empty_state() {
            render_empty_state(ui, app, theme);
        } else {
            ui.horizontal_wrapped(|ui| {
                for card in dashboard.cards() {
                    let target = PriceTarget::Dashboard(card.token().id.clone());
                    render_token_card(ui, card, target, app, notifications, theme);
                }
            });
        }

        ui.add_space(16.0);
        ui.separator();
        render_recent_activity(ui, state, theme);
    });
}

fn render_stats(ui: &mut egui::Ui, stats: DashboardStats, theme: &Theme) {
    ui.columns(4, |columns| {
        stat(&mut columns[0], "Total Tokens", stats.total_tokens, theme);
        stat(&mut columns[1], "Deployed", stats.deployed_tokens, theme);
        stat(&mut columns[2], "Active Strategies", stats.active_strategies, theme);
        stat(&mut columns[3], "Total Trades", stats.total_trades, theme);
    });
}

fn stat(ui: &mut egui::Ui, label: &str, value: u64, theme: &Theme) {
    egui::Frame::group(ui.style()).fill(theme.panel).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(label).color(theme.dim));
        ui.label(egui::RichText::new(value.to_string()).size(22.0).strong());
    });
}

fn render_empty_state(ui: &mut egui::Ui, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.label(egui::RichText::new("No tokens yet").size(18.0).strong());
        ui.label(egui::RichText::new("Create your first memecoin to get started!").color(theme.dim));
        ui.add_space(8.0);
        if ui.button("Create Token").clicked() {
            app.navigate(Route::CreateToken);
        }
        ui.add_space(20.0);
    });
}

fn render_recent_activity(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.heading("Recent Activity");
    ui.add_space(6.0);

    let recent = state.dashboard.recent_tokens();
    if recent.is_empty() {
        ui.label(egui::RichText::new("No tokens created yet").color(theme.dim));
    }
    for token in recent {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&token.symbol).strong());
            ui.label(&token.name);
            ui.label(egui::RichText::new(token.status.as_str()).color(theme.dim));
            ui.label(egui::RichText::new(format_timestamp(token.created_at.as_ref())).color(theme.dim));
        });
    }

    let trades = state.dashboard.recent_trades();
    if !trades.is_empty() {
        ui.add_space(8.0);
        for trade in trades {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&trade.action).strong());
                ui.monospace(shared::truncate_address(&trade.token_address));
                ui.label(format_price_usd(trade.price));
            });
        }
    }
}
