//! Gemini API のリクエスト/レスポンス型
//!
//! HTTPの実行はプラットフォーム側（reqwest / fetch）で行い、
//! ここではURL・ボディ組み立てと応答の取り出しのみを扱う

use serde::{Deserialize, Serialize};

use crate::encoding::ImagePayload;
use crate::error::{Error, Result};
use crate::parser::parse_extraction_response;
use crate::prompts::EXTRACTION_PROMPT;
use crate::types::BusinessCardData;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// 既定モデル
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

/// Gemini APIレスポンス
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: ResponseContent,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Google APIのエラー応答 {"error": {"code": 404, "message": "...", "status": "NOT_FOUND"}}
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// generateContent のURL
pub fn endpoint_url(model: &str, api_key: &str) -> String {
    format!("{}/{}:generateContent?key={}", GEMINI_API_BASE, model, api_key)
}

/// 名刺抽出リクエストを作成（画像 → 指示文の順）
pub fn build_extraction_request(image: &ImagePayload) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type.clone(),
                        data: image.data.clone(),
                    },
                },
                Part::Text {
                    text: EXTRACTION_PROMPT.to_string(),
                },
            ],
        }],
        generation_config: GenerationConfig { temperature: 0.1 },
    }
}

impl GeminiResponse {
    /// 最初の候補の最初のテキスト
    pub fn into_text(self) -> Result<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| Error::extraction("Empty response"))
    }
}

/// HTTPエラー応答をメッセージに変換
pub fn api_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => format!("API error {}: {}", status, envelope.error.message),
        Err(_) if body.trim().is_empty() => format!("API error: {}", status),
        Err(_) => format!("API error {}: {}", status, body.trim()),
    }
}

/// 生のレスポンスボディから名刺データを取り出す
pub fn extract_card_from_body(body: &str) -> Result<BusinessCardData> {
    let response: GeminiResponse = serde_json::from_str(body)?;
    let text = response.into_text()?;
    parse_extraction_response(&text)
}
