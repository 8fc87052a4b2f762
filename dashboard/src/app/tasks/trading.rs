//! Auto-trading screen requests.

use super::TaskContext;
use crate::app::events::AppEvent;
use crate::controllers::auto_trading::{SetupSubmission, TradingLoad};
use crate::controllers::Ticket;

/// Fetch tokens and strategies concurrently.
pub(crate) fn load_trading(ctx: &TaskContext, load: TradingLoad) {
    let api = ctx.api.clone();
    ctx.spawn("trading_tokens", async move {
        AppEvent::TradingTokensLoaded {
            ticket: load.tokens,
            result: api.list_tokens().await,
        }
    });

    fetch_strategies(ctx, load.strategies);
}

pub(crate) fn fetch_strategies(ctx: &TaskContext, ticket: Ticket) {
    let api = ctx.api.clone();
    ctx.spawn("strategies", async move {
        AppEvent::StrategiesLoaded {
            ticket,
            result: api.list_strategies().await,
        }
    });
}

pub(crate) fn setup_auto_sell(ctx: &TaskContext, submission: SetupSubmission) {
    let api = ctx.api.clone();
    ctx.spawn("auto_sell", async move {
        AppEvent::AutoSellSubmitted {
            ticket: submission.ticket,
            result: api.setup_auto_sell(&submission.request).await,
        }
    });
}
