//! # Notifications Widget
//!
//! Toasts for clipboard copies and other transient confirmations.

use egui_notify::Toasts;

#[derive(Default)]
pub struct NotificationManager {
    pub toasts: Toasts,
}

impl NotificationManager {
    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.success(message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.toasts.info(message.into());
    }

    pub fn copied(&mut self, what: &str) {
        self.success(format!("{} copied to clipboard", what));
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
