//! 端末向けの描画先

use indicatif::{ProgressBar, ProgressStyle};
use number_lens_common::{ProcessControl, ResultsModel, View};
use std::time::Duration;
use tracing::debug;

/// 処理中はスピナーを出し、それ以外の領域はログに残す
///
/// 結果そのものは処理完了後にコントローラから取り出して出力する。
#[derive(Default)]
pub struct TerminalView {
    spinner: Option<ProgressBar>,
    hidden: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// スピナーを出さない（テスト・パイプ出力用）
    pub fn hidden() -> Self {
        Self {
            spinner: None,
            hidden: true,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spinner.is_some()
    }

    fn start_spinner(&mut self) {
        if self.spinner.is_some() {
            return;
        }

        let bar = if self.hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("Processing...");
        bar.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(bar);
    }

    fn stop_spinner(&mut self) {
        if let Some(bar) = self.spinner.take() {
            bar.finish_and_clear();
        }
    }
}

impl View for TerminalView {
    fn upload_prompt(&mut self, visible: bool) {
        debug!(visible, "upload prompt");
    }

    fn preview(&mut self, data_url: Option<&str>) {
        debug!(bytes = data_url.map(str::len).unwrap_or(0), "preview");
    }

    fn process_control(&mut self, control: ProcessControl) {
        debug!(?control, "process control");
        if control.is_disabled() {
            self.start_spinner();
        } else {
            self.stop_spinner();
        }
    }

    fn results(&mut self, results: Option<&ResultsModel>) {
        debug!(rows = results.map(|r| r.rows().len()), "results");
    }

    fn error_banner(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            debug!(%message, "error banner");
        }
    }

    fn reset_file_input(&mut self) {}
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}
