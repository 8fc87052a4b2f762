//! Backend health check.

use super::TaskContext;
use crate::app::events::AppEvent;

pub(crate) fn check_health(ctx: &TaskContext) {
    let api = ctx.api.clone();
    ctx.spawn("health", async move { AppEvent::HealthChecked(api.health().await) });
}
