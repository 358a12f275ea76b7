//! 画面フェーズと表示領域
//!
//! 各領域の表示/非表示はフェーズだけから導出する。
//! エラーバナーはフェーズとは独立した1枠。

/// 処理ボタンの通常ラベル
pub const PROCESS_LABEL: &str = "Extract Numbers";

/// 画面フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiPhase {
    #[default]
    Idle,
    Previewing,
    Processing,
    ShowingResults,
    ShowingError,
}

impl UiPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiPhase::Idle => "idle",
            UiPhase::Previewing => "previewing",
            UiPhase::Processing => "processing",
            UiPhase::ShowingResults => "showing-results",
            UiPhase::ShowingError => "showing-error",
        }
    }

    /// 遷移できるか
    ///
    /// 結果/エラー表示に入れるのは処理中からのみ。
    /// それ以外（削除→Idle、プレビュー完了→Previewing、処理開始→Processing）はどこからでも可。
    pub fn can_transition_to(&self, next: UiPhase) -> bool {
        match next {
            UiPhase::ShowingResults | UiPhase::ShowingError => *self == UiPhase::Processing,
            _ => true,
        }
    }

    /// プレビュー済みのファイルがあるフェーズか
    pub fn has_preview(&self) -> bool {
        !matches!(self, UiPhase::Idle)
    }

    pub fn regions(&self, busy: bool) -> Regions {
        let has_preview = self.has_preview();
        let process_control = if !has_preview {
            ProcessControl::Hidden
        } else if busy {
            ProcessControl::Busy
        } else {
            ProcessControl::Ready
        };

        Regions {
            upload_prompt: !has_preview,
            preview: has_preview,
            process_control,
            results: matches!(self, UiPhase::ShowingResults),
        }
    }
}

/// 処理ボタンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessControl {
    Hidden,
    Ready,
    /// 無効化 + ローディング表示
    Busy,
}

impl ProcessControl {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ProcessControl::Hidden)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, ProcessControl::Busy)
    }

    /// ボタンのラベル（Busy中はスピナーのみ）
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ProcessControl::Ready => Some(PROCESS_LABEL),
            _ => None,
        }
    }
}

/// フェーズから導出した各領域の表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub upload_prompt: bool,
    pub preview: bool,
    pub process_control: ProcessControl,
    pub results: bool,
}
