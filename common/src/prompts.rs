//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有される名刺抽出用プロンプト

/// 名刺抽出プロンプト
///
/// 5項目のキーを持つ純粋なJSONオブジェクトのみを返すよう指示する。
pub const EXTRACTION_PROMPT: &str = r#"Extract the following information from this business card image and return it as a JSON object:
- Name (Tên)
- Title (Chức vụ)
- Company (Công ty)
- Phone Number (Số điện thoại)
- Email (Email)

Ensure the keys in the JSON object are 'name', 'title', 'company', 'phone', and 'email'.
If a field is not found, return an empty string for that field.
The response must be a pure JSON object, without any Markdown formatting or extra text outside the JSON."#;
