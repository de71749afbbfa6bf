use crate::http::Server;
use crate::{Error, Result, RESET_VOTE};
use axum::response::Html;
use axum::{Extension, Form};
use counter_store::CounterStore;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize, Debug)]
pub struct VoteForm {
    vote: Option<String>,
}

pub async fn vote_handler<T: CounterStore>(
    Extension(server): Extension<Arc<Server<T>>>,
    Form(form): Form<VoteForm>,
) -> Result<Html<String>> {
    let vote = form.vote.ok_or(Error::MissingVote)?;

    let totals = if vote == RESET_VOTE {
        server.service.reset().await?
    } else {
        server.service.cast_vote(&vote).await?
    };

    Ok(server.render(totals))
}
