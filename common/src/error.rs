//! エラー型定義

use thiserror::Error;

/// 抽出失敗時にサービスが返す、APIキー不正を示すメッセージ
pub const ENTITY_NOT_FOUND: &str = "Requested entity was not found.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ファイル→Base64変換の失敗
    #[error("Failed to convert file to base64 string.")]
    Conversion,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("API key is not set")]
    MissingApiKey,

    #[error("Failed to extract data: Invalid API key or service issue.")]
    InvalidApiKey,

    #[error("Failed to extract business card data: {0}")]
    Extraction(String),
}

impl Error {
    /// 抽出処理中に発生したエラーを利用者向けの形に包む
    ///
    /// - "Requested entity was not found." を含むものは `InvalidApiKey`
    /// - 既に包まれているものはそのまま
    /// - それ以外は `Extraction` に変換
    pub fn into_extraction_failure(self) -> Error {
        match self {
            Error::InvalidApiKey | Error::Extraction(_) | Error::MissingApiKey => self,
            other => Error::extraction(other.to_string()),
        }
    }

    /// メッセージから抽出エラーを作る
    pub fn extraction(message: impl Into<String>) -> Error {
        let message = message.into();
        if message.contains(ENTITY_NOT_FOUND) {
            Error::InvalidApiKey
        } else if message.trim().is_empty() {
            Error::Extraction("Unknown error".into())
        } else {
            Error::Extraction(message)
        }
    }

    /// APIキーの再選択が必要なエラーか
    pub fn requires_key_selection(&self) -> bool {
        matches!(self, Error::InvalidApiKey)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
