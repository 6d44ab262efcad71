//! APIレスポンスパーサー
//!
//! Geminiの応答テキストからMarkdownのコードフェンスを外し、
//! BusinessCardDataとしてパースする

use crate::error::{Error, Result};
use crate::types::BusinessCardData;

const JSON_FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// 応答テキストからJSON部分を取り出す
///
/// 1. 前後の空白を除去
/// 2. 先頭の ```json を除去
/// 3. 末尾の ``` を除去
/// 4. 再度空白を除去
///
/// # Examples
/// ```
/// use namecard_common::strip_json_fence;
///
/// let fenced = "```json\n{\"name\": \"A\"}\n```";
/// assert_eq!(strip_json_fence(fenced), "{\"name\": \"A\"}");
/// ```
pub fn strip_json_fence(response: &str) -> &str {
    let mut json = response.trim();
    if let Some(rest) = json.strip_prefix(JSON_FENCE_OPEN) {
        json = rest;
    }
    if let Some(rest) = json.strip_suffix(FENCE_CLOSE) {
        json = rest;
    }
    json.trim()
}

/// 抽出レスポンスをパース
///
/// スキーマ検証はしない。不正なJSONはエラーとなり、部分的なデータは返さない。
pub fn parse_extraction_response(response: &str) -> Result<BusinessCardData> {
    let json_str = strip_json_fence(response);
    serde_json::from_str(json_str).map_err(|e| Error::Parse(e.to_string()))
}
