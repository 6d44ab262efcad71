//! 抽出情報表示コンポーネント
//!
//! 5項目の入力欄、業種選択、メモ欄を表示する（制御コンポーネントのみ）

use leptos::prelude::*;
use namecard_common::{BusinessCardData, CardField, IndustryGroup};

#[component]
pub fn InfoDisplay<FD, FG, FN>(
    card: Signal<BusinessCardData>,
    on_data_change: FD,
    industry_group: Signal<IndustryGroup>,
    industry_options: Vec<IndustryGroup>,
    on_industry_group_change: FG,
    notes: Signal<String>,
    on_notes_change: FN,
    is_loading: Signal<bool>,
) -> impl IntoView
where
    FD: Fn(CardField, String) + 'static + Clone + Send + Sync,
    FG: Fn(IndustryGroup) + 'static + Clone + Send + Sync,
    FN: Fn(String) + 'static + Clone + Send + Sync,
{
    let fields = CardField::ALL
        .into_iter()
        .map(|field| {
            let on_data_change = on_data_change.clone();
            view! {
                <div class="form-group">
                    <label for=field.key()>{field.label()}</label>
                    <input
                        type="text"
                        id=field.key()
                        name=field.key()
                        prop:value=move || card.with(|c| c.get(field).to_string())
                        on:input=move |ev| on_data_change(field, event_target_value(&ev))
                        disabled=move || is_loading.get()
                    />
                </div>
            }
        })
        .collect_view();

    let options = industry_options
        .into_iter()
        .map(|group| {
            view! {
                <option value=group.label() selected=move || industry_group.get() == group>
                    {group.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="panel info-display">
            <h2>"2. Thông Tin Trích Xuất"</h2>
            <div class="form-grid">{fields}</div>

            <h2>"3. Nhóm Ngành Nghề"</h2>
            <select
                id="industryGroup"
                name="industryGroup"
                prop:value=move || industry_group.get().label().to_string()
                disabled=move || is_loading.get()
                on:change=move |ev| {
                    if let Ok(group) = event_target_value(&ev).parse::<IndustryGroup>() {
                        on_industry_group_change(group);
                    }
                }
            >
                {options}
            </select>

            <h2>"4. Ghi Chú (Không bắt buộc)"</h2>
            <textarea
                id="notes"
                name="notes"
                rows="3"
                placeholder="Ví dụ: địa điểm gặp, ngành nghề cụ thể..."
                prop:value=move || notes.get()
                disabled=move || is_loading.get()
                on:input=move |ev| on_notes_change(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
