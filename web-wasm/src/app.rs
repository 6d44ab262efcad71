//! メインアプリケーションコンポーネント
//!
//! 画面の状態はすべて Session に集約し、画像が選ばれたら抽出を開始する。
//! 抽出結果は開始時の世代番号が最新のときだけ反映される。

use gloo::console;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use namecard_common::{CardField, Completion, ImagePayload, IndustryGroup, Session};

use crate::api::gemini::extract_business_card;
use crate::components::{header::Header, image_input::ImageInput, info_display::InfoDisplay};
use crate::platform;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let view_model = Memo::new(move |_| session.with(Session::view));

    let is_loading = Signal::derive(move || view_model.with(|v| v.show_loading));
    let show_form = move || view_model.with(|v| v.show_form);
    let show_share = move || view_model.with(|v| v.show_share);
    let error = Signal::derive(move || view_model.with(|v| v.error.clone()));
    let card = Signal::derive(move || session.with(|s| s.card().clone()));
    let industry_group = Signal::derive(move || view_model.with(|v| v.industry_group));
    let notes = Signal::derive(move || view_model.with(|v| v.notes.clone()));
    let industry_options = view_model.with_untracked(|v| v.industry_options.clone());

    // 画像選択ハンドラ（Noneは解除）
    let on_image_selected = move |payload: Option<ImagePayload>| {
        let mut ticket = None;
        session.update(|s| ticket = s.select_image(payload));
        let Some(ticket) = ticket else {
            return;
        };

        spawn_local(async move {
            let result = extract_business_card(&ticket.payload).await;
            if let Err(e) = &result {
                console::error!("Error during data extraction:", e.to_string());
            }
            session.update(|s| {
                if s.complete_extraction(ticket.generation, result) == Completion::Stale {
                    console::warn!("Discarded extraction result for a replaced image");
                }
            });
        });
    };

    let on_data_change = move |field: CardField, value: String| {
        session.update(|s| s.set_field(field, value));
    };

    let on_industry_group_change = move |group: IndustryGroup| {
        session.update(|s| s.set_industry_group(group));
    };

    let on_notes_change = move |value: String| {
        session.update(|s| s.set_notes(value));
    };

    // 共有ハンドラ（状態は変更しない）
    let on_share = move |_: ev::MouseEvent| {
        let text = session.with_untracked(|s| s.share_text());
        spawn_local(async move {
            let outcome = platform::share_text(&text).await;
            if !outcome.is_success() {
                console::warn!("Share failed:", format!("{:?}", outcome));
            }
            platform::notify(outcome.message());
        });
    };

    view! {
        <div class="container">
            <Header />

            <ImageInput is_loading=is_loading on_image_selected=on_image_selected />

            <Show when=move || error.get().is_some()>
                <div class="alert" role="alert">
                    <strong>"Lỗi!"</strong>
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=show_form>
                <InfoDisplay
                    card=card
                    on_data_change=on_data_change
                    industry_group=industry_group
                    industry_options=industry_options.clone()
                    on_industry_group_change=on_industry_group_change
                    notes=notes
                    on_notes_change=on_notes_change
                    is_loading=is_loading
                />
            </Show>

            <Show when=show_share>
                <div class="share-bar">
                    <button
                        class="btn btn-share"
                        disabled=move || is_loading.get()
                        on:click=on_share
                    >
                        "Chia sẻ thông tin"
                    </button>
                </div>
            </Show>
        </div>
    }
}
