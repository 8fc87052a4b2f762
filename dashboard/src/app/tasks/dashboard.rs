//! Dashboard screen loads.

use super::TaskContext;
use crate::app::events::AppEvent;
use crate::controllers::dashboard::DashboardLoad;

/// Fetch the overview and the token list concurrently.
pub(crate) fn load_dashboard(ctx: &TaskContext, load: DashboardLoad) {
    let api = ctx.api.clone();
    ctx.spawn("dashboard_overview", async move {
        AppEvent::OverviewLoaded {
            ticket: load.overview,
            result: api.get_dashboard().await,
        }
    });

    let api = ctx.api.clone();
    ctx.spawn("dashboard_tokens", async move {
        AppEvent::DashboardTokensLoaded {
            ticket: load.tokens,
            result: api.list_tokens().await,
        }
    });
}
