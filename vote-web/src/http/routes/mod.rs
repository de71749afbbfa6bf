mod index;
pub use index::index_handler;

mod vote;
pub use vote::vote_handler;
