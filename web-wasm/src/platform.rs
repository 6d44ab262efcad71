//! ブラウザ機能（共有シート・クリップボード・APIキー選択）

use gloo::console;
use namecard_common::{ShareOutcome, SHARE_TITLE};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/platform.js")]
extern "C" {
    #[wasm_bindgen(js_name = "hasNativeShare")]
    fn has_native_share_js() -> bool;

    #[wasm_bindgen(js_name = "nativeShare", catch)]
    async fn native_share_js(title: &str, text: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "copyToClipboard", catch)]
    async fn copy_to_clipboard_js(text: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "hasKeySelector")]
    fn has_key_selector_js() -> bool;

    #[wasm_bindgen(js_name = "hasSelectedApiKey", catch)]
    async fn has_selected_api_key_js() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "openSelectKey", catch)]
    async fn open_select_key_js() -> Result<JsValue, JsValue>;
}

/// 共有シート、なければクリップボードへ
///
/// 共有シートがある環境で失敗した場合はクリップボードに切り替えない。
pub async fn share_text(text: &str) -> ShareOutcome {
    if has_native_share_js() {
        match native_share_js(SHARE_TITLE, text).await {
            Ok(_) => ShareOutcome::Shared,
            Err(e) => {
                console::error!("Lỗi khi chia sẻ:", e);
                ShareOutcome::ShareFailed
            }
        }
    } else {
        match copy_to_clipboard_js(text).await {
            Ok(_) => ShareOutcome::Copied,
            Err(e) => {
                console::error!("Không thể sao chép vào clipboard:", e);
                ShareOutcome::CopyFailed
            }
        }
    }
}

/// 利用者への通知
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// APIキーが未選択ならキー選択ダイアログを開く
///
/// 選択結果は確認せずに続行する。
pub async fn ensure_api_key_selected() {
    if !has_key_selector_js() {
        return;
    }
    let selected = has_selected_api_key_js()
        .await
        .map(|v| v.as_bool().unwrap_or(true))
        .unwrap_or(true);
    if !selected {
        console::warn!("API Key not selected. Opening key selection dialog.");
        open_select_key().await;
    }
}

/// キー選択ダイアログを開く
pub async fn open_select_key() {
    if let Err(e) = open_select_key_js().await {
        console::error!("Failed to open key selection:", e);
    }
}
