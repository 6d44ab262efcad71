use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamecardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`namecard-ai config --set-api-key YOUR_KEY` または環境変数 GEMINI_API_KEY で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("入力エラー: {0}")]
    InvalidInput(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] namecard_common::Error),
}

pub type Result<T> = std::result::Result<T, NamecardError>;
