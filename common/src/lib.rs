//! Number Lens Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態機械・ユーティリティ

pub mod error;
pub mod types;
pub mod validation;
pub mod settings;
pub mod phase;
pub mod view;
pub mod markup;
pub mod controller;
pub mod session;

#[cfg(test)]
mod test_support;

pub use error::{Error, ErrorKind, Result};
pub use types::{decode_process_response, HealthStatus, ProcessData, ResultItem};
pub use validation::{is_accepted_file, media_type_for, FileSource, ImageFile};
pub use settings::Settings;
pub use phase::{ProcessControl, Regions, UiPhase};
pub use view::{ResultRow, ResultsModel, View};
pub use markup::{escape_html, render_results_html};
pub use controller::{Controller, CopyTicket, FeedbackTicket, PreviewTicket, ProcessOutcome, ProcessTicket};
pub use session::{Clipboard, Collaborator, PreviewReader, Shared, Timer};
