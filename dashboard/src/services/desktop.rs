//! # Desktop Side Effects
//!
//! Clipboard writes and browser launches go through [`DesktopShell`] so the
//! token card logic can be exercised without a window.

/// Host-side effects a view may trigger.
pub trait DesktopShell {
    /// Put `text` on the system clipboard
    fn copy_to_clipboard(&mut self, text: &str);

    /// Open `url` in the default browser
    fn open_url(&mut self, url: &str);
}

/// Shell backed by the egui clipboard and the `open` crate.
pub struct EguiShell<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiShell<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl DesktopShell for EguiShell<'_> {
    fn copy_to_clipboard(&mut self, text: &str) {
        self.ctx.copy_text(text.to_string());
        tracing::debug!(text = %text, "Copied to clipboard");
    }

    fn open_url(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::warn!(error = %e, url = %url, "Failed to open URL in browser");
        }
    }
}

/// Shell that records requested effects instead of performing them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingShell {
    pub copied: Vec<String>,
    pub opened: Vec<String>,
}

impl DesktopShell for RecordingShell {
    fn copy_to_clipboard(&mut self, text: &str) {
        self.copied.push(text.to_string());
    }

    fn open_url(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}
