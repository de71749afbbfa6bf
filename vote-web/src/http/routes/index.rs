use crate::http::Server;
use crate::Result;
use axum::response::Html;
use axum::Extension;
use counter_store::CounterStore;
use std::sync::Arc;

pub async fn index_handler<T: CounterStore>(
    Extension(server): Extension<Arc<Server<T>>>,
) -> Result<Html<String>> {
    let totals = server.service.totals().await?;
    Ok(server.render(totals))
}
