//! 画像ファイル → Base64ペイロード変換

use crate::error::{NamecardError, Result};
use namecard_common::ImagePayload;
use std::path::Path;
use tracing::debug;

/// 画像ファイルを読み込み、MIMEタイプ付きのBase64ペイロードにする
///
/// 読み込みは1回のみ。画像として判別できないファイルはエラー。
pub async fn encode_image_file(path: &Path) -> Result<ImagePayload> {
    if !path.is_file() {
        return Err(NamecardError::FileNotFound(path.display().to_string()));
    }

    let bytes = tokio::fs::read(path).await?;
    let mime_type = detect_mime_type(&bytes)
        .ok_or_else(|| NamecardError::ImageLoad(format!("画像形式を判別できません: {}", path.display())))?;

    debug!(path = %path.display(), mime_type, size = bytes.len(), "encoding image");
    Ok(ImagePayload::from_bytes(mime_type, &bytes)?)
}

/// 先頭バイトから画像のMIMEタイプを判定
pub fn detect_mime_type(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes).ok().map(|format| format.to_mime_type())
}
