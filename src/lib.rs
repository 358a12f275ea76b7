//! Number Lens CLI
//!
//! ブラウザ版と同じコントローラを端末から動かすクライアント。

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod local;
pub mod output;
pub mod pipeline;
pub mod terminal;
