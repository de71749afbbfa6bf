use super::routes;
use crate::render::{render_page, Page, Tally};
use crate::{Config, Result, Totals, VoteService};
use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Router};
use counter_store::CounterStore;
use std::net::SocketAddr;
use std::sync::Arc;
use sysinfo::System;
use tokio::signal::ctrl_c;
use tracing::{error, info};

pub struct Server<T: CounterStore> {
    pub config: Config,
    pub service: VoteService<T>,
    pub title: String,
}

impl<T: CounterStore> Server<T> {
    pub fn new(config: Config, service: VoteService<T>) -> Server<T> {
        let title = config.page_title(System::host_name);

        Server {
            config,
            service,
            title,
        }
    }

    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route(
                "/",
                get(routes::index_handler::<T>).post(routes::vote_handler::<T>),
            )
            .layer(Extension(self))
    }

    pub async fn start(self) -> Result<()> {
        let server = Arc::new(self);

        let addr: SocketAddr = server.config.server_addr.parse()?;
        let app = Arc::clone(&server).router();

        info!(%addr, title = %server.title, "Starting server");

        hyper::Server::bind(&addr)
            .serve(app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    pub fn render(&self, totals: Totals) -> Html<String> {
        let options = self.service.options();

        Html(render_page(&Page {
            title: &self.title,
            first: Tally {
                label: &options.first.label,
                key: &options.first.key,
                count: totals.first,
            },
            second: Tally {
                label: &options.second.label,
                key: &options.second.key,
                count: totals.second,
            },
        }))
    }
}

async fn shutdown_signal() {
    if let Err(e) = ctrl_c().await {
        error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }

    info!("Shutting down");
}
