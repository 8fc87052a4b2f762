//! Token creation, details and price requests.

use super::TaskContext;
use crate::app::events::{AppEvent, PriceTarget};
use crate::controllers::create_token::Submission;
use crate::controllers::Ticket;

pub(crate) fn create_token(ctx: &TaskContext, submission: Submission) {
    let api = ctx.api.clone();
    ctx.spawn("create_token", async move {
        let result = submission.send(api.as_ref()).await;
        AppEvent::TokenCreated {
            ticket: submission.ticket,
            result,
        }
    });
}

pub(crate) fn load_token(ctx: &TaskContext, ticket: Ticket, token_id: String) {
    let api = ctx.api.clone();
    ctx.spawn("load_token", async move {
        AppEvent::TokenLoaded {
            ticket,
            result: api.get_token(&token_id).await,
        }
    });
}

pub(crate) fn fetch_price(ctx: &TaskContext, target: PriceTarget, ticket: Ticket, token_id: String) {
    let api = ctx.api.clone();
    ctx.spawn("fetch_price", async move {
        AppEvent::PriceLoaded {
            target,
            ticket,
            result: api.get_token_price(&token_id).await,
        }
    });
}
