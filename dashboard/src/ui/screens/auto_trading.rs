//! # Auto Trading Screen
//!
//! Strategy form on top, active strategies table below.

use egui_extras::{Column, TableBuilder};
use shared::{truncate_address, Network};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::utils::format::{format_price_usd, format_timestamp};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.heading("Auto Trading");
    ui.add_space(8.0);

    render_form(ui, state, app, theme);

    ui.add_space(16.0);
    ui.separator();
    ui.heading("Active Strategies");
    ui.add_space(6.0);
    render_strategies(ui, state, theme);
}

fn render_form(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let controller = &state.auto_trading;
    let mut form = controller.form.clone();
    let mut selected = form.token_address().to_string();
    let mut trigger_price = form.trigger_price();
    let mut sell_percentage = form.sell_percentage();

    egui::Grid::new("strategy_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
        ui.label("Token");
        let selected_text = controller
            .selected_token()
            .map(|t| format!("{} ({})", t.name, t.symbol))
            .unwrap_or_else(|| "Select a deployed token".to_string());
        egui::ComboBox::from_id_salt("strategy_token")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for token in controller.deployed_tokens() {
                    if let Some(address) = token.contract_address() {
                        let label = format!("{} ({}) {}", token.name, token.symbol, truncate_address(address));
                        ui.selectable_value(&mut selected, address.to_string(), label);
                    }
                }
            });
        ui.end_row();

        ui.label("Network");
        egui::ComboBox::from_id_salt("strategy_network")
            .selected_text(form.network.label())
            .show_ui(ui, |ui| {
                for option in Network::all() {
                    ui.selectable_value(&mut form.network, *option, option.label());
                }
            });
        ui.end_row();

        ui.label("Trigger price (USD)");
        if ui
            .add(egui::DragValue::new(&mut trigger_price).speed(0.0001).max_decimals(8))
            .changed()
        {
            form.set_trigger_price(trigger_price);
        }
        ui.end_row();

        ui.label("Sell percentage");
        if ui
            .add(egui::Slider::new(&mut sell_percentage, 1.0..=100.0).suffix("%"))
            .changed()
        {
            form.set_sell_percentage(sell_percentage);
        }
        ui.end_row();

        ui.label("Enabled");
        ui.checkbox(&mut form.enabled, "");
        ui.end_row();
    });

    if controller.deployed_tokens().is_empty() {
        ui.label(egui::RichText::new("Deploy a token to set up auto-sell.").color(theme.dim));
    }

    if selected != controller.form.token_address() || form != controller.form {
        let mut state = app.state.write();
        state.auto_trading.form = form;
        if selected != state.auto_trading.form.token_address() {
            state.auto_trading.select_token(&selected);
        }
    }

    ui.add_space(8.0);
    let label = if controller.is_submitting() { "Setting up..." } else { "Set Up Auto-Sell" };
    if ui.add_enabled(!controller.submit_disabled(), egui::Button::new(label)).clicked() {
        if let Err(e) = app.submit_auto_sell() {
            tracing::debug!(error = %e, "Auto-sell submit refused");
        }
    }
}

fn render_strategies(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let strategies = state.auto_trading.strategies();
    if strategies.is_empty() {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("No strategies active").strong());
            ui.label(egui::RichText::new("Set up your first auto-sell strategy").color(theme.dim));
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Token", "Network", "Trigger", "Sell %", "Status", "Created"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for strategy in strategies {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.monospace(truncate_address(&strategy.token_address));
                    });
                    row.col(|ui| {
                        ui.label(strategy.network.label());
                    });
                    row.col(|ui| {
                        ui.label(format_price_usd(strategy.trigger_price));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}%", strategy.sell_percentage));
                    });
                    row.col(|ui| {
                        let (text, color) = if strategy.enabled {
                            ("Active", theme.success)
                        } else {
                            ("Paused", theme.dim)
                        };
                        ui.label(egui::RichText::new(text).color(color));
                    });
                    row.col(|ui| {
                        ui.label(format_timestamp(strategy.created_at.as_ref()));
                    });
                });
            }
        });
}
