use counter_store::{CounterStore, MemoryStore, RedisStore};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use vote_web::{http::Server, Config, Result, StoreBackend, VoteService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    configure_observability(&config);

    match config.store_backend {
        StoreBackend::Redis => {
            info!("Connecting to Redis...");
            let store = RedisStore::connect(&config.redis_uri, config.redis_max_connections)?;
            store.ping().await?;
            run(config, store).await
        }
        StoreBackend::Memory => {
            info!("Using in-memory counters");
            run(config, MemoryStore::new()).await
        }
    }
}

async fn run<T: CounterStore>(config: Config, store: T) -> Result<()> {
    let service = VoteService::new(store, config.options.clone());
    service.initialize().await?;

    let server = Server::new(config, service);
    server.start().await
}

fn configure_observability(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vote_web=info,counter_store=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_log {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
