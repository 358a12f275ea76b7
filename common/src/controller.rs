//! アップロード→処理→結果表示のコントローラ
//!
//! 同期的な状態機械。ファイル読み込み・リクエスト・クリップボード書き込みなどの
//! 非同期処理は`begin_*`でチケットを受け取り、完了時にチケットを返して反映する。
//! チケットには選択ID（ファイルを選ぶたびに増える連番）が入っており、
//! 発行後に選択が変わっていれば完了を無視する。

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::Error;
use crate::phase::UiPhase;
use crate::settings::Settings;
use crate::types::ProcessData;
use crate::validation::{is_accepted_file, FileSource, ImageFile};
use crate::view::{ResultsModel, View};

/// プレビュー読み込みのチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    selection: u64,
}

/// 処理リクエストのチケット
#[derive(Debug, Clone)]
pub struct ProcessTicket<F> {
    selection: u64,
    file: F,
}

impl<F> ProcessTicket<F> {
    /// 送信するファイル
    pub fn file(&self) -> &F {
        &self.file
    }
}

/// クリップボード書き込みのチケット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTicket {
    row: usize,
    generation: u64,
    text: String,
}

impl CopyTicket {
    /// コピーする正規化テキスト
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// 「Copied!」表示を戻すためのチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTicket {
    row: usize,
    generation: u64,
    token: u64,
}

/// 処理完了の反映結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// 結果を表示した
    Rendered,
    /// エラーを表示した
    Failed,
    /// 選択が変わっていたため破棄した
    Stale,
}

pub struct Controller<F, V> {
    view: V,
    settings: Settings,
    phase: UiPhase,
    selection: Option<(u64, F)>,
    next_selection: u64,
    /// (選択ID, Data URL)
    preview: Option<(u64, String)>,
    results: Option<ProcessData>,
    /// 結果を差し替えるたびに増える
    generation: u64,
    error: Option<String>,
    /// 処理中リクエストの選択ID
    in_flight: Option<u64>,
    /// 行番号 → 「Copied!」表示中のトークン
    copied: HashMap<usize, u64>,
    next_token: u64,
}

impl<F: ImageFile, V: View> Controller<F, V> {
    /// 初期状態（Idle）で描画して返す
    pub fn new(view: V, settings: Settings) -> Self {
        let mut controller = Self {
            view,
            settings,
            phase: UiPhase::Idle,
            selection: None,
            next_selection: 0,
            preview: None,
            results: None,
            generation: 0,
            error: None,
            in_flight: None,
            copied: HashMap::new(),
            next_token: 0,
        };
        controller.render();
        controller
    }

    pub fn phase(&self) -> UiPhase {
        self.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selection.as_ref().map(|(_, file)| file)
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_ref().map(|(_, url)| url.as_str())
    }

    pub fn results(&self) -> Option<&ProcessData> {
        self.results.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// リクエスト処理中か
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// ファイルを選択（またはドロップ）する
    ///
    /// ドロップの場合のみ形式を検証し、不正ならエラーバナーを出して`Err`を返す。
    /// 成功時は選択スロットを置き換え、プレビュー読み込み用のチケットを返す。
    /// 画面はプレビューの読み込み完了（`preview_ready`）まで変わらない。
    pub fn select_file(&mut self, file: F, source: FileSource) -> Result<PreviewTicket, Error> {
        if source.needs_validation() && !is_accepted_file(&file.media_type(), &file.name()) {
            debug!(name = %file.name(), media_type = %file.media_type(), "rejected dropped file");
            self.show_error(Error::InvalidFileType);
            return Err(Error::InvalidFileType);
        }

        self.next_selection += 1;
        let id = self.next_selection;
        debug!(selection = id, name = %file.name(), ?source, "file selected");
        self.selection = Some((id, file));
        Ok(PreviewTicket { selection: id })
    }

    /// プレビューの読み込み完了
    ///
    /// 現在の選択に対するものでなければ無視して`false`を返す。
    pub fn preview_ready(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if self.selection_id() != Some(ticket.selection) {
            debug!(selection = ticket.selection, "ignoring stale preview");
            return false;
        }

        self.preview = Some((ticket.selection, data_url));
        self.results = None;
        self.copied.clear();
        self.error = None;
        let next = if self.in_flight == Some(ticket.selection) {
            UiPhase::Processing
        } else {
            UiPhase::Previewing
        };
        self.enter(next);
        self.render();
        true
    }

    /// 選択を解除して初期表示に戻す
    pub fn remove(&mut self) {
        if let Some(id) = self.in_flight {
            debug!(selection = id, "abandoning in-flight request");
        }
        self.selection = None;
        self.preview = None;
        self.results = None;
        self.copied.clear();
        self.error = None;
        self.enter(UiPhase::Idle);
        self.view.reset_file_input();
        self.render();
    }

    /// 処理を開始する
    ///
    /// # Returns
    /// * `Some(ticket)` - 送信すべきリクエスト
    /// * `None` - 処理中（無効化されたボタンの再クリック）またはファイル未選択
    pub fn begin_process(&mut self) -> Option<ProcessTicket<F>> {
        if let Some(id) = self.in_flight {
            debug!(selection = id, "process already in flight");
            return None;
        }

        let Some((id, file)) = self.selection.as_ref() else {
            self.show_error(Error::NoFileSelected);
            return None;
        };
        let ticket = ProcessTicket {
            selection: *id,
            file: file.clone(),
        };

        self.in_flight = Some(ticket.selection);
        self.error = None;
        self.results = None;
        self.copied.clear();
        self.enter(UiPhase::Processing);
        self.render();
        Some(ticket)
    }

    /// 処理完了を反映する
    ///
    /// ボタンの有効化は結果に関わらず必ず行う。
    pub fn finish_process(
        &mut self,
        ticket: ProcessTicket<F>,
        outcome: Result<ProcessData, Error>,
    ) -> ProcessOutcome {
        self.in_flight = None;

        if self.selection_id() != Some(ticket.selection) {
            debug!(selection = ticket.selection, "discarding stale process result");
            if self.phase == UiPhase::Processing {
                self.settle_after_stale();
            }
            self.render();
            return ProcessOutcome::Stale;
        }

        let result = match outcome {
            Ok(data) => {
                debug!(count = data.numbers.len(), "process succeeded");
                self.generation += 1;
                self.copied.clear();
                self.results = Some(data);
                self.enter(UiPhase::ShowingResults);
                ProcessOutcome::Rendered
            }
            Err(e) => {
                warn!(error = %e, "process failed");
                self.results = None;
                self.error = Some(e.to_string());
                self.enter(UiPhase::ShowingError);
                ProcessOutcome::Failed
            }
        };
        self.render();
        result
    }

    /// コピーを開始する（行が存在しなければNone）
    pub fn begin_copy(&self, row: usize) -> Option<CopyTicket> {
        if self.phase != UiPhase::ShowingResults {
            return None;
        }
        let item = self.results.as_ref()?.numbers.get(row)?;
        Some(CopyTicket {
            row,
            generation: self.generation,
            text: item.normalized.clone(),
        })
    }

    /// コピー成功: 該当行のラベルを「Copied!」にする
    ///
    /// 結果が差し替わっていればNone。
    pub fn copy_succeeded(&mut self, ticket: &CopyTicket) -> Option<FeedbackTicket> {
        if ticket.generation != self.generation || self.results.is_none() {
            return None;
        }
        self.next_token += 1;
        let token = self.next_token;
        self.copied.insert(ticket.row, token);
        self.render();
        Some(FeedbackTicket {
            row: ticket.row,
            generation: ticket.generation,
            token,
        })
    }

    /// コピー失敗: 結果は残したままエラーバナーを出す
    pub fn copy_failed(&mut self, _ticket: &CopyTicket) {
        self.show_error(Error::Clipboard);
    }

    /// 「Copied!」表示の期限切れ
    ///
    /// 同じ行で後からコピーし直した場合は、後のタイマーだけが表示を戻す。
    pub fn feedback_expired(&mut self, ticket: FeedbackTicket) {
        if ticket.generation != self.generation {
            return;
        }
        if self.copied.get(&ticket.row) == Some(&ticket.token) {
            self.copied.remove(&ticket.row);
            self.render();
        }
    }

    /// エラーバナーに表示する（最新の1件のみ）
    ///
    /// フェーズや他の領域は変えない。
    pub fn show_error(&mut self, error: Error) {
        debug!(kind = ?error.kind(), "showing error");
        self.error = Some(error.to_string());
        self.render();
    }

    /// 破棄した処理の後、現在の選択に見合うフェーズへ戻す
    ///
    /// 新しい選択のプレビューがまだなら、古いプレビューを消してIdleに戻す。
    fn settle_after_stale(&mut self) {
        let current = self.selection_id();
        let previewed = matches!(self.preview, Some((id, _)) if Some(id) == current);
        if previewed {
            self.enter(UiPhase::Previewing);
        } else {
            self.preview = None;
            self.enter(UiPhase::Idle);
        }
    }

    fn selection_id(&self) -> Option<u64> {
        self.selection.as_ref().map(|(id, _)| *id)
    }

    fn enter(&mut self, next: UiPhase) {
        if !self.phase.can_transition_to(next) {
            warn!(from = self.phase.as_str(), to = next.as_str(), "invalid phase transition");
            return;
        }
        if self.phase != next {
            debug!(from = self.phase.as_str(), to = next.as_str(), "phase");
        }
        self.phase = next;
    }

    fn render(&mut self) {
        let regions = self.phase.regions(self.in_flight.is_some());

        let model = if regions.results {
            let copied = &self.copied;
            self.results
                .as_ref()
                .map(|data| ResultsModel::build(&data.numbers, |i| copied.contains_key(&i)))
        } else {
            None
        };
        let preview = if regions.preview {
            self.preview.as_ref().map(|(_, url)| url.as_str())
        } else {
            None
        };

        self.view.upload_prompt(regions.upload_prompt);
        self.view.preview(preview);
        self.view.process_control(regions.process_control);
        self.view.results(model.as_ref());
        self.view.error_banner(self.error.as_deref());
    }
}
