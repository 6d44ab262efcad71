//! 名刺情報の抽出クライアント

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use namecard_common::{BusinessCardData, ImagePayload};

/// 画像1枚から名刺情報を取り出す
///
/// 1回のリクエストのみ行い、再試行はしない。
/// 失敗はすべて `Error::InvalidApiKey` か `Error::Extraction` で返す。
#[async_trait]
pub trait CardExtractor: Send + Sync {
    async fn extract(&self, image: &ImagePayload) -> namecard_common::Result<BusinessCardData>;
}
