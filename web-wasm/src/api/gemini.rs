//! Gemini API連携（fetch）
//!
//! リクエスト組み立てとレスポンス解析は namecard_common::gemini を使用

use gloo::console;
use namecard_common::gemini::{
    api_error_message, build_extraction_request, endpoint_url, extract_card_from_body,
    DEFAULT_MODEL,
};
use namecard_common::{BusinessCardData, Error, ImagePayload};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::platform;

/// ビルド時にホスト環境から埋め込まれるAPIキー
const API_KEY: Option<&str> = match option_env!("GEMINI_API_KEY") {
    Some(key) => Some(key),
    None => option_env!("API_KEY"),
};

/// JsValueのエラーを文字列にする
fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

/// POSTしてレスポンスボディを文字列で受け取る
async fn post_json(url: &str, body: &str) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

async fn request_extraction(api_key: &str, image: &ImagePayload) -> Result<BusinessCardData, Error> {
    let request = build_extraction_request(image);
    let body = serde_json::to_string(&request)?;
    let url = endpoint_url(DEFAULT_MODEL, api_key);

    let (status, text) = post_json(&url, &body)
        .await
        .map_err(|e| Error::extraction(js_error_message(&e)))?;

    if !(200..300).contains(&status) {
        return Err(Error::extraction(api_error_message(status, &text)));
    }

    extract_card_from_body(&text)
}

/// 名刺画像から情報を抽出（1回のみ、再試行なし）
///
/// APIキー不正の場合はキー選択ダイアログを開いてから失敗を返す。
pub async fn extract_business_card(image: &ImagePayload) -> Result<BusinessCardData, Error> {
    platform::ensure_api_key_selected().await;

    let Some(api_key) = API_KEY.filter(|k| !k.trim().is_empty()) else {
        return Err(Error::MissingApiKey);
    };

    match request_extraction(api_key, image).await {
        Ok(card) => Ok(card),
        Err(e) => {
            let e = e.into_extraction_failure();
            if e.requires_key_selection() {
                console::error!("API Key might be invalid or not selected. Please select a valid API key.");
                platform::open_select_key().await;
            } else {
                console::error!("Error extracting business card data:", e.to_string());
            }
            Err(e)
        }
    }
}
