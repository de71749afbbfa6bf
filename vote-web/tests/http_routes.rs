use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use counter_store::{CounterStore, MemoryStore, StoreError};
use std::sync::Arc;
use tower::ServiceExt;
use vote_web::http::Server;
use vote_web::{Config, EnvConfig, Error, FileConfig, VoteService};

fn config() -> Config {
    let file = FileConfig::parse("TITLE = 'Pet Poll'").unwrap();
    Config::resolve(EnvConfig::default(), file).unwrap()
}

async fn server() -> Arc<Server<MemoryStore>> {
    let config = config();
    let service = VoteService::new(MemoryStore::new(), config.options.clone());
    service.initialize().await.unwrap();

    Arc::new(Server::new(config, service))
}

async fn send<T: CounterStore>(server: &Arc<Server<T>>, request: Request<Body>) -> (StatusCode, String) {
    let response = Arc::clone(server).router().oneshot(request).await.unwrap();
    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn get() -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap()
}

fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn vote(value: &str) -> Request<Body> {
    post(&format!("vote={value}"))
}

#[tokio::test]
async fn test_index_shows_totals() {
    let server = server().await;

    let (status, body) = send(&server, get()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Pet Poll</title>"));
    assert!(body.contains("Cats - 0 | Dogs - 0"));
}

#[tokio::test]
async fn test_votes_update_page() {
    let server = server().await;

    let (status, body) = send(&server, vote("Cats")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Cats - 1 | Dogs - 0"));

    send(&server, vote("Cats")).await;
    let (_, body) = send(&server, vote("Dogs")).await;
    assert!(body.contains("Cats - 2 | Dogs - 1"));

    let (_, body) = send(&server, get()).await;
    assert!(body.contains("Cats - 2 | Dogs - 1"));
    assert_eq!(server.service.store().get("Cats").await.unwrap(), Some(2));
}

#[tokio::test]
async fn test_reset_zeroes_counters() {
    let server = server().await;
    send(&server, vote("Cats")).await;
    send(&server, vote("Dogs")).await;

    let (status, body) = send(&server, vote("reset")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Cats - 0 | Dogs - 0"));
    assert_eq!(server.service.store().get("Dogs").await.unwrap(), Some(0));
}

#[tokio::test]
async fn test_unknown_option_rejected() {
    let server = server().await;
    send(&server, vote("Dogs")).await;

    let (status, body) = send(&server, vote("Birds")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "invalid vote option: Birds");

    let (_, body) = send(&server, get()).await;
    assert!(body.contains("Cats - 0 | Dogs - 1"));
    assert_eq!(server.service.store().get("Birds").await.unwrap(), None);
}

#[tokio::test]
async fn test_missing_vote_field_rejected() {
    let server = server().await;

    let (status, body) = send(&server, post("choice=Cats")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "missing vote field");
}

#[tokio::test]
async fn test_unsupported_method() {
    let server = server().await;

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(&server, request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

struct DisconnectedStore;

#[async_trait]
impl CounterStore for DisconnectedStore {
    async fn get(&self, _: &str) -> counter_store::Result<Option<u64>> {
        StoreError::Disconnected.into()
    }

    async fn get_many(&self, _: &[&str]) -> counter_store::Result<Vec<Option<u64>>> {
        StoreError::Disconnected.into()
    }

    async fn set(&self, _: &str, _: u64) -> counter_store::Result<()> {
        StoreError::Disconnected.into()
    }

    async fn set_many(&self, _: &[(&str, u64)]) -> counter_store::Result<()> {
        StoreError::Disconnected.into()
    }

    async fn init(&self, _: &str) -> counter_store::Result<bool> {
        StoreError::Disconnected.into()
    }

    async fn increment(&self, _: &str) -> counter_store::Result<u64> {
        StoreError::Disconnected.into()
    }

    async fn ping(&self) -> counter_store::Result<()> {
        StoreError::Disconnected.into()
    }
}

#[tokio::test]
async fn test_store_unavailable() {
    let config = config();
    let service = VoteService::new(DisconnectedStore, config.options.clone());
    let server = Arc::new(Server::new(config, service));

    let (status, body) = send(&server, get()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, "Vote store unavailable");

    let (status, _) = send(&server, vote("Cats")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(&server, vote("reset")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_store_failures_surface_from_service() {
    let service = VoteService::new(DisconnectedStore, config().options.clone());

    assert!(matches!(service.initialize().await, Err(Error::StoreUnavailable(_))));
    assert!(matches!(service.totals().await, Err(Error::StoreUnavailable(_))));
    assert!(matches!(service.cast_vote("Cats").await, Err(Error::StoreUnavailable(_))));
    assert!(matches!(service.reset().await, Err(Error::StoreUnavailable(_))));

    // option validation happens before the store is contacted
    assert!(matches!(service.cast_vote("Birds").await, Err(Error::InvalidOption(_))));
}
