//! 画面セッションの状態管理
//!
//! 選択画像・抽出データ・業種・メモ・読込中フラグ・エラーを一括で保持する。
//!
//! 状態遷移:
//! - Idle: 画像なし
//! - Loading: 画像選択済み、抽出中
//! - Ready: 抽出完了、編集可能
//! - Error: 抽出失敗（データは空、画像は選択されたまま）
//!
//! 画像を選び直すたびに世代番号を進め、抽出結果は開始時の世代が
//! 現在の世代と一致する場合のみ反映する。

use crate::encoding::ImagePayload;
use crate::error::Result;
use crate::share::build_share_text;
use crate::types::{BusinessCardData, CardField, IndustryGroup};

/// エラーメッセージが空だった場合の表示
pub const DEFAULT_ERROR_MESSAGE: &str = "Đã xảy ra lỗi khi trích xuất thông tin. Vui lòng thử lại.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Error,
}

/// 抽出1回分の引換券
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionTicket {
    pub generation: u64,
    pub payload: ImagePayload,
}

/// 抽出結果の反映結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// 画像が選び直されたため破棄
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    image: Option<ImagePayload>,
    card: BusinessCardData,
    industry_group: IndustryGroup,
    notes: String,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.image, self.loading, &self.error) {
            (None, _, _) => Phase::Idle,
            (Some(_), true, _) => Phase::Loading,
            (Some(_), false, Some(_)) => Phase::Error,
            (Some(_), false, None) => Phase::Ready,
        }
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    pub fn card(&self) -> &BusinessCardData {
        &self.card
    }

    pub fn industry_group(&self) -> IndustryGroup {
        self.industry_group
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 画像の選択（Noneは解除）
    ///
    /// 新しい画像なら抽出用の引換券を返す。業種とメモは保持する。
    pub fn select_image(&mut self, payload: Option<ImagePayload>) -> Option<ExtractionTicket> {
        let Some(payload) = payload else {
            self.clear_image();
            return None;
        };

        self.generation += 1;
        self.image = Some(payload.clone());
        self.loading = true;
        self.error = None;

        Some(ExtractionTicket {
            generation: self.generation,
            payload,
        })
    }

    /// 画像を外し、派生状態をすべて初期化
    pub fn clear_image(&mut self) {
        self.generation += 1;
        self.image = None;
        self.card = BusinessCardData::default();
        self.industry_group = IndustryGroup::default();
        self.notes.clear();
        self.loading = false;
        self.error = None;
    }

    /// 抽出結果を反映
    pub fn complete_extraction(
        &mut self,
        generation: u64,
        result: Result<BusinessCardData>,
    ) -> Completion {
        if generation != self.generation || self.image.is_none() {
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(card) => {
                self.card = card;
                self.error = None;
            }
            Err(e) => {
                let message = e.to_string();
                self.card = BusinessCardData::default();
                self.error = Some(if message.trim().is_empty() {
                    DEFAULT_ERROR_MESSAGE.to_string()
                } else {
                    message
                });
            }
        }
        Completion::Applied
    }

    pub fn set_field(&mut self, field: CardField, value: impl Into<String>) {
        self.card.set(field, value);
    }

    pub fn set_industry_group(&mut self, group: IndustryGroup) {
        self.industry_group = group;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// 共有用テキスト（状態は変えない）
    pub fn share_text(&self) -> String {
        build_share_text(&self.card, self.industry_group, &self.notes)
    }

    pub fn view(&self) -> FormView {
        let show_form = self.image.is_some() && !self.loading;
        FormView {
            show_loading: self.loading,
            show_form,
            show_share: show_form,
            error: self.error.clone(),
            fields: CardField::ALL
                .iter()
                .map(|&field| FieldView {
                    field,
                    label: field.label(),
                    value: self.card.get(field).to_string(),
                })
                .collect(),
            industry_group: self.industry_group,
            industry_options: IndustryGroup::ALL.to_vec(),
            notes: self.notes.clone(),
        }
    }
}

/// 画面表示用のモデル
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub show_loading: bool,
    pub show_form: bool,
    pub show_share: bool,
    pub error: Option<String>,
    pub fields: Vec<FieldView>,
    pub industry_group: IndustryGroup,
    pub industry_options: Vec<IndustryGroup>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: CardField,
    pub label: &'static str,
    pub value: String,
}
