mod server;
pub use server::Server;

mod error_response;

mod routes;
