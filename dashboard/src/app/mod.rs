//! # Application Orchestrator
//!
//! [`App`] ties the screens' controllers to the backend.
//!
//! ```text
//! UI thread (egui)                      Tokio runtime
//! ----------------                      -------------
//! App::navigate / submit_*  --spawn-->  tasks::* (ApiService calls)
//!          ^                                   |
//!          |   on_tick: try_recv()             | AppEvent (unbounded)
//!          +------ handle_event <--------------+
//! ```
//!
//! - User actions lock [`AppState`] briefly to ask a controller for a
//!   ticket, then hand the request to a task.
//! - Task results come back as [`AppEvent`]s and are applied on the UI
//!   thread, one controller slot per event.
//! - Results whose ticket has been superseded are dropped by the
//!   controllers.

mod event_handler;
pub mod events;
pub mod router;
pub mod state;
mod tasks;

pub use events::{AppEvent, PriceTarget};
pub use router::{Route, ROUTES};
pub use state::{AppState, BackendHealth};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use tokio::runtime::Handle;

use crate::controllers::SubmitRejected;
use crate::core::service::ApiService;
use tasks::TaskContext;

pub struct App {
    /// Shared application state. Hold locks only for the duration of a read
    /// or a single update.
    pub state: Arc<RwLock<AppState>>,

    /// Receives task results; drained by [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    runtime: Handle,
}

impl App {
    /// Create the app on the dashboard route and start its first loads
    /// along with a health check.
    ///
    /// `runtime` is where every request runs; it must outlive the app.
    pub fn new(api: Arc<dyn ApiService>, runtime: Handle) -> Self {
        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(AppState::default())),
            event_rx,
            event_tx,
            api,
            runtime,
        };

        app.mount(&Route::Dashboard);
        app.refresh_health();

        tracing::info!("App state initialized");
        app
    }

    fn tasks(&self) -> TaskContext {
        TaskContext {
            api: self.api.clone(),
            runtime: self.runtime.clone(),
            event_tx: self.event_tx.clone(),
        }
    }

    pub fn route(&self) -> Route {
        self.state.read().route.clone()
    }

    /// Switch screens. The previous screen's outstanding loads are abandoned
    /// and the new screen's loads start.
    pub fn navigate(&mut self, route: Route) {
        let previous = {
            let mut state = self.state.write();
            let previous = std::mem::replace(&mut state.route, route.clone());
            match &previous {
                Route::Dashboard => state.dashboard.unmount(),
                Route::AutoTrading => state.auto_trading.unmount(),
                Route::TokenDetails(_) => state.token_details.unmount(),
                Route::CreateToken => {}
            }
            previous
        };

        tracing::info!(from = %previous, to = %route, "Navigate");
        self.mount(&route);
    }

    /// Navigate by path; unknown paths show the dashboard.
    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::parse_or_default(path));
    }

    fn mount(&self, route: &Route) {
        let ctx = self.tasks();
        match route {
            Route::Dashboard => {
                let load = self.state.write().dashboard.mount();
                tasks::dashboard::load_dashboard(&ctx, load);
            }
            Route::AutoTrading => {
                let load = self.state.write().auto_trading.mount();
                tasks::trading::load_trading(&ctx, load);
            }
            Route::TokenDetails(id) => {
                let ticket = self.state.write().token_details.mount(id);
                tasks::tokens::load_token(&ctx, ticket, id.clone());
            }
            Route::CreateToken => {}
        }
    }

    /// Reload whatever the current screen shows.
    pub fn reload(&mut self) {
        let route = self.route();
        self.mount(&route);
    }

    pub fn refresh_health(&self) {
        {
            let mut state = self.state.write();
            if state.health_checking {
                return;
            }
            state.health_checking = true;
        }
        tasks::health::check_health(&self.tasks());
    }

    /// Submit the create-token form in its current mode.
    pub fn submit_create_token(&mut self) -> Result<(), SubmitRejected> {
        let submission = self.state.write().create_token.begin_submit()?;
        tasks::tokens::create_token(&self.tasks(), submission);
        Ok(())
    }

    /// Submit the auto-sell form.
    pub fn submit_auto_sell(&mut self) -> Result<(), SubmitRejected> {
        let submission = self.state.write().auto_trading.begin_setup()?;
        tasks::trading::setup_auto_sell(&self.tasks(), submission);
        Ok(())
    }

    /// Fetch the price for one card. Does nothing for undeployed tokens or
    /// when that card already has a fetch outstanding.
    pub fn fetch_price(&mut self, target: PriceTarget) {
        let fetch = {
            let mut state = self.state.write();
            let card = match &target {
                PriceTarget::Dashboard(token_id) => state.dashboard.card_mut(token_id),
                PriceTarget::Details => state.token_details.card_mut(),
            };
            card.and_then(|card| card.begin_price_fetch())
        };

        if let Some(fetch) = fetch {
            tasks::tokens::fetch_price(&self.tasks(), target, fetch.ticket, fetch.token_id);
        }
    }

    /// Apply every pending task result. Call once per frame.
    pub fn on_tick(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }
}
