//! 端末からコントローラを一通り動かす

use number_lens_common::session::{self, Collaborator, PreviewReader, Shared};
use number_lens_common::{is_accepted_file, Controller, Error, FileSource, ImageFile, ProcessOutcome, Settings};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, info};

use crate::error::Result;
use crate::local::LocalImage;
use crate::output::Report;
use crate::terminal::TerminalView;

/// 画像形式だけを検証する（ドロップ時と同じ判定）
pub fn check_image(path: &Path) -> Result<LocalImage> {
    let image = LocalImage::open(path)?;
    if !is_accepted_file(&image.media_type(), &image.name()) {
        return Err(Error::InvalidFileType.into());
    }
    Ok(image)
}

/// 選択 → プレビュー → 処理 までを実行し、最終状態を返す
///
/// # Arguments
/// * `image` - 処理する画像
/// * `reader` - プレビューの読み込み
/// * `collaborator` - バックエンド
/// * `settings` - コントローラ設定
/// * `view` - 描画先
pub async fn process_image<R, C>(
    image: LocalImage,
    reader: &R,
    collaborator: &C,
    settings: Settings,
    view: TerminalView,
) -> Report
where
    R: PreviewReader<LocalImage> + ?Sized,
    C: Collaborator<LocalImage> + ?Sized,
{
    let file = image.name();
    let controller: Shared<LocalImage, TerminalView> =
        Rc::new(RefCell::new(Controller::new(view, settings)));

    let previewed = session::select_file(&controller, reader, image, FileSource::Drop).await;
    debug!(previewed, "selection finished");

    let rejected = controller.borrow().error().map(str::to_string);
    if let Some(message) = rejected {
        return Report::failure(file, message);
    }

    let outcome = session::process(&controller, collaborator).await;
    info!(?outcome, file = %file, "process finished");

    let controller = controller.borrow();
    match outcome {
        Some(ProcessOutcome::Rendered) => {
            let data = controller.results().cloned().unwrap_or_default();
            Report::success(file, &data)
        }
        Some(ProcessOutcome::Failed) => {
            let message = controller.error().unwrap_or_default().to_string();
            Report::failure(file, message)
        }
        _ => Report::failure(file, Error::NoFileSelected.to_string()),
    }
}
