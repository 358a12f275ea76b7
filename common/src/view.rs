//! 描画先のインターフェース
//!
//! コントローラは状態が変わるたびに各領域を`View`へ書き出す。
//! ブラウザではLeptosのシグナル、CLIでは端末出力、テストでは記録用の実装を渡す。

use crate::phase::ProcessControl;
use crate::types::ResultItem;

/// 結果が0件のときの表示
pub const NO_NUMBERS: &str = "No numbers found in the image.";
/// コピーボタンの通常ラベル
pub const COPY_LABEL: &str = "Copy";
/// コピー成功直後のラベル
pub const COPIED_LABEL: &str = "Copied!";

/// 描画先の各領域
pub trait View {
    /// アップロード案内（ドロップ領域）の表示
    fn upload_prompt(&mut self, visible: bool);

    /// プレビュー画像（Noneで非表示）
    fn preview(&mut self, data_url: Option<&str>);

    /// 処理ボタン
    fn process_control(&mut self, control: ProcessControl);

    /// 結果一覧（Noneで非表示）
    fn results(&mut self, results: Option<&ResultsModel>);

    /// エラーバナー（Noneで非表示）
    fn error_banner(&mut self, message: Option<&str>);

    /// ファイル選択の記憶値をクリア（同じファイルを再選択しても変更通知が来るように）
    fn reset_file_input(&mut self);
}

/// 結果一覧の描画内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsModel {
    /// 0件: プレースホルダのみ
    Empty { message: &'static str },
    Rows(Vec<ResultRow>),
}

/// 結果一覧の1行
///
/// `raw`/`normalized`は常にテキストとして描画すること（マークアップとして解釈しない）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultRow {
    pub index: usize,
    pub raw: String,
    pub normalized: String,
    pub copied: bool,
}

impl ResultRow {
    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

impl ResultsModel {
    /// 結果からモデルを構築
    ///
    /// # Arguments
    /// * `items` - 検出順の結果
    /// * `is_copied` - 行番号ごとの「Copied!」表示中フラグ
    pub fn build(items: &[ResultItem], is_copied: impl Fn(usize) -> bool) -> Self {
        if items.is_empty() {
            return ResultsModel::Empty { message: NO_NUMBERS };
        }

        ResultsModel::Rows(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| ResultRow {
                    index,
                    raw: item.raw.clone(),
                    normalized: item.normalized.clone(),
                    copied: is_copied(index),
                })
                .collect(),
        )
    }

    pub fn rows(&self) -> &[ResultRow] {
        match self {
            ResultsModel::Empty { .. } => &[],
            ResultsModel::Rows(rows) => rows,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ResultsModel::Empty { message } => Some(*message),
            ResultsModel::Rows(_) => None,
        }
    }
}
