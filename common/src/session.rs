//! 非同期処理の境界と、それらを使ってコントローラを動かすドライバ
//!
//! ブラウザのイベントループは単一スレッドなので、トレイトはすべて`?Send`。
//! ドライバは`.await`をまたいでコントローラを借用しない。

use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::controller::{Controller, ProcessOutcome};
use crate::error::Result;
use crate::types::ProcessData;
use crate::validation::{FileSource, ImageFile};
use crate::view::View;

/// UIスレッドで共有するコントローラ
pub type Shared<F, V> = Rc<RefCell<Controller<F, V>>>;

/// 画像を受け取って数値を返すバックエンド
#[async_trait(?Send)]
pub trait Collaborator<F> {
    /// `file`フィールドに画像を入れたmultipartリクエストを1回送る
    async fn submit(&self, file: &F) -> Result<ProcessData>;
}

/// プレビュー用にファイルをData URLとして読む
#[async_trait(?Send)]
pub trait PreviewReader<F> {
    async fn read_data_url(&self, file: &F) -> Result<String>;
}

/// システムのクリップボード
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<()>;
}

#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// ファイルを選択し、プレビューを読み込んで表示する
///
/// # Returns
/// プレビューを表示したら`true`（形式エラー・読み込み失敗・後続の選択に追い越された場合は`false`）
pub async fn select_file<F, V, R>(
    controller: &Shared<F, V>,
    reader: &R,
    file: F,
    source: FileSource,
) -> bool
where
    F: ImageFile,
    V: View,
    R: PreviewReader<F> + ?Sized,
{
    let selected = controller.borrow_mut().select_file(file.clone(), source);
    let Ok(ticket) = selected else {
        return false;
    };

    match reader.read_data_url(&file).await {
        Ok(data_url) => controller.borrow_mut().preview_ready(ticket, data_url),
        Err(e) => {
            warn!(name = %file.name(), error = %e, "failed to read preview");
            false
        }
    }
}

/// 選択中のファイルを処理する
///
/// # Returns
/// リクエストを送らなかった場合（未選択・処理中）は`None`
pub async fn process<F, V, C>(controller: &Shared<F, V>, collaborator: &C) -> Option<ProcessOutcome>
where
    F: ImageFile,
    V: View,
    C: Collaborator<F> + ?Sized,
{
    let ticket = controller.borrow_mut().begin_process()?;
    let outcome = collaborator.submit(ticket.file()).await;
    let result = controller.borrow_mut().finish_process(ticket, outcome);
    Some(result)
}

/// 指定行の正規化テキストをクリップボードへコピーする
///
/// 成功時はラベルを「Copied!」にし、設定時間後に戻す。
pub async fn copy_normalized<F, V, C, T>(controller: &Shared<F, V>, clipboard: &C, timer: &T, row: usize)
where
    F: ImageFile,
    V: View,
    C: Clipboard + ?Sized,
    T: Timer + ?Sized,
{
    let ticket = controller.borrow().begin_copy(row);
    let Some(ticket) = ticket else {
        return;
    };

    match clipboard.write_text(ticket.text()).await {
        Ok(()) => {
            let feedback = controller.borrow_mut().copy_succeeded(&ticket);
            let Some(feedback) = feedback else {
                return;
            };
            let delay = controller.borrow().settings().copy_feedback();
            timer.sleep(delay).await;
            controller.borrow_mut().feedback_expired(feedback);
        }
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            controller.borrow_mut().copy_failed(&ticket);
        }
    }
}
