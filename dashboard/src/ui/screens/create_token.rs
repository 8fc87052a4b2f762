//! # Create Token Screen

use shared::{format_supply, Network};

use crate::app::{App, AppState};
use crate::controllers::{CreateMode, RequestState, SubmitRejected};
use crate::ui::theme::Theme;
use crate::utils::validation::MAX_TAX_RATE;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let controller = &state.create_token;

    ui.heading("Create Memecoin");
    ui.add_space(8.0);

    let mut mode = controller.mode;
    ui.horizontal(|ui| {
        ui.selectable_value(&mut mode, CreateMode::Best, "Best Token (auto)");
        ui.selectable_value(&mut mode, CreateMode::Custom, "Custom Token");
    });
    if mode != controller.mode {
        app.state.write().create_token.mode = mode;
    }
    ui.add_space(8.0);

    let enabled = !controller.is_loading();
    ui.add_enabled_ui(enabled, |ui| match mode {
        CreateMode::Best => render_best_form(ui, state, app, theme),
        CreateMode::Custom => render_custom_form(ui, state, app),
    });

    ui.add_space(10.0);
    let label = if controller.is_loading() { "Creating..." } else { "Create Token" };
    let submit = ui.add_enabled(!controller.submit_disabled(), egui::Button::new(label));
    if controller.is_loading() {
        ui.spinner();
    }
    if submit.clicked() {
        match app.submit_create_token() {
            Ok(()) => {}
            Err(SubmitRejected::Busy) => tracing::debug!("Create already in progress"),
            Err(SubmitRejected::Invalid(e)) => tracing::debug!(error = %e, "Create form rejected"),
        }
    }

    ui.add_space(12.0);
    render_result(ui, controller.state(), theme);
}

fn network_picker(ui: &mut egui::Ui, id: &str, network: &mut Network) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(network.label())
        .show_ui(ui, |ui| {
            for option in Network::all() {
                ui.selectable_value(network, *option, option.label());
            }
        });
}

fn render_best_form(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.label(egui::RichText::new("The backend picks a trending name, symbol and supply.").color(theme.dim));
    let mut network = state.create_token.form.network;
    ui.horizontal(|ui| {
        ui.label("Network");
        network_picker(ui, "best_network", &mut network);
    });
    if network != state.create_token.form.network {
        app.state.write().create_token.form.network = network;
    }
}

fn render_custom_form(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let mut form = state.create_token.form.clone();
    let mut symbol = form.symbol().to_string();
    let mut tax_rate = form.tax_rate();

    egui::Grid::new("custom_token_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
        ui.label("Name");
        ui.text_edit_singleline(&mut form.name);
        ui.end_row();

        ui.label("Symbol");
        if ui.text_edit_singleline(&mut symbol).changed() {
            form.set_symbol(&symbol);
        }
        ui.end_row();

        ui.label("Total supply");
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(&mut form.total_supply).speed(1_000_000.0));
            ui.label(format_supply(form.total_supply));
        });
        ui.end_row();

        ui.label("Network");
        network_picker(ui, "custom_network", &mut form.network);
        ui.end_row();

        ui.label("Tax rate");
        if ui.add(egui::Slider::new(&mut tax_rate, 0..=MAX_TAX_RATE).suffix("%")).changed() {
            form.set_tax_rate(tax_rate);
        }
        ui.end_row();
    });

    if form != state.create_token.form {
        app.state.write().create_token.form = form;
    }
}

fn render_result(ui: &mut egui::Ui, result: &RequestState<shared::Token>, theme: &Theme) {
    match result {
        RequestState::Succeeded(token) => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new("Token created").color(theme.success).strong());
                ui.label(format!("{} ({})", token.name, token.symbol));
                ui.label(format!("Supply: {}", format_supply(token.total_supply)));
                ui.label(format!("Network: {}", token.network.label()));
                ui.label(format!("Status: {}", token.status));
                if let Some(address) = token.contract_address() {
                    ui.monospace(address);
                }
            });
        }
        RequestState::Failed(message) => {
            ui.label(egui::RichText::new(message).color(theme.error));
        }
        RequestState::Idle | RequestState::Pending => {}
    }
}
