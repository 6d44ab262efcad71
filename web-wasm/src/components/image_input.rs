//! 画像入力コンポーネント
//!
//! 撮影/アップロードした画像をプレビューし、Base64ペイロードを親へ渡す。
//! 抽出処理については関知しない。

use gloo::console;
use leptos::html;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use namecard_common::ImagePayload;
use web_sys::HtmlInputElement;

use crate::file_reader::read_image;

#[component]
pub fn ImageInput<F>(
    is_loading: Signal<bool>,
    on_image_selected: F,
) -> impl IntoView
where
    F: Fn(Option<ImagePayload>) + 'static + Clone + Send + Sync,
{
    let (preview_url, set_preview_url) = signal(None::<String>);
    let camera_ref = NodeRef::<html::Input>::new();
    let upload_ref = NodeRef::<html::Input>::new();

    let handle_file_change = {
        let on_image_selected = on_image_selected.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            let on_image_selected = on_image_selected.clone();

            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                set_preview_url.set(None);
                on_image_selected(None);
                return;
            };

            spawn_local(async move {
                match read_image(&file).await {
                    Ok((data_url, payload)) => {
                        set_preview_url.set(Some(data_url));
                        on_image_selected(Some(payload));
                    }
                    Err(e) => {
                        console::error!("Error converting file to base64:", e.to_string());
                        set_preview_url.set(None);
                        on_image_selected(None);
                    }
                }
            });
        }
    };

    let handle_clear = move |_: ev::MouseEvent| {
        set_preview_url.set(None);
        on_image_selected(None);
        for input_ref in [camera_ref, upload_ref] {
            if let Some(input) = input_ref.get_untracked() {
                input.set_value("");
            }
        }
    };

    view! {
        <div class="panel image-input">
            <h2>"1. Upload or Take Photo of Business Card"</h2>

            <Show when=move || preview_url.get().is_some()>
                <div class="preview">
                    <img
                        src=move || preview_url.get().unwrap_or_default()
                        alt="Business Card Preview"
                    />
                    <button
                        class="btn-remove"
                        title="Remove Image"
                        disabled=move || is_loading.get()
                        on:click=handle_clear.clone()
                    >
                        "×"
                    </button>
                </div>
            </Show>

            <Show when=move || preview_url.get().is_none()>
                <div class="picker-buttons">
                    <label class="btn btn-camera">
                        <input
                            type="file"
                            accept="image/*"
                            capture="environment"
                            class="hidden"
                            node_ref=camera_ref
                            disabled=move || is_loading.get()
                            on:change=handle_file_change.clone()
                        />
                        "Chụp Ảnh"
                    </label>
                    <label class="btn btn-upload">
                        <input
                            type="file"
                            accept="image/*"
                            class="hidden"
                            node_ref=upload_ref
                            disabled=move || is_loading.get()
                            on:change=handle_file_change.clone()
                        />
                        "Tải Ảnh Lên"
                    </label>
                </div>
            </Show>

            <Show when=move || is_loading.get()>
                <div class="loading">
                    <span class="spinner"></span>
                    "Đang xử lý ảnh..."
                </div>
            </Show>
        </div>
    }
}
