//! # GUI Rendering
//!
//! egui front end over [`App`]. Each frame applies pending task results,
//! snapshots [`AppState`] and renders the current route from the snapshot,
//! so no lock is held while drawing.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use crate::app::{App, AppState, Route};
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Repaint while requests may still complete without user input.
const IDLE_REPAINT: Duration = Duration::from_millis(250);

pub struct DashboardUi {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl DashboardUi {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::default(),
            theme,
        }
    }
}

impl eframe::App for DashboardUi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.app.on_tick() > 0 {
            ctx.request_repaint();
        }

        render(ctx, &mut self.app, &mut self.notifications, &self.theme);
        self.notifications.show(ctx);

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}

/// Render one frame.
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager, theme: &Theme) {
    let state: AppState = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        widgets::nav_bar::render_nav_bar(ui, &state, app, theme);
    });

    egui::CentralPanel::default().show(ctx, |ui| match &state.route {
        Route::Dashboard => screens::dashboard::render(ui, &state, app, notifications, theme),
        Route::CreateToken => screens::create_token::render(ui, &state, app, theme),
        Route::AutoTrading => screens::auto_trading::render(ui, &state, app, theme),
        Route::TokenDetails(_) => screens::token_details::render(ui, &state, app, notifications, theme),
    });
}
