//! File → Base64ペイロード変換（FileReader.readAsDataURL）

use js_sys::{Function, Promise};
use namecard_common::{Error, ImagePayload};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// ファイルをData URLとして1回だけ読み込む
pub async fn read_as_data_url(file: &File) -> Result<String, Error> {
    let reader = FileReader::new().map_err(|_| Error::Conversion)?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("FileReader error"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(|_| Error::Conversion)?;

    let result = JsFuture::from(promise).await.map_err(|_| Error::Conversion)?;
    result.as_string().ok_or(Error::Conversion)
}

/// ファイルを読み込み、プレビュー用Data URLとAPI用ペイロードを返す
pub async fn read_image(file: &File) -> Result<(String, ImagePayload), Error> {
    let data_url = read_as_data_url(file).await?;
    let payload = ImagePayload::from_data_url(&data_url)?;
    Ok((data_url, payload))
}
