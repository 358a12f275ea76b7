//! バックエンドAPI

pub mod backend;

pub use backend::FetchBackend;
