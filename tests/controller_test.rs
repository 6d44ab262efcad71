//! コントローラ（選択→抽出→反映）のテスト
//!
//! 抽出クライアントをモックに差し替えて状態遷移を検証

use async_trait::async_trait;
use namecard_ai::controller::ScanController;
use namecard_ai::extractor::CardExtractor;
use namecard_common::{
    BusinessCardData, CardField, Completion, Error, ImagePayload, IndustryGroup, Phase,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct MockExtractor {
    respond: Box<dyn Fn(&ImagePayload) -> namecard_common::Result<BusinessCardData> + Send + Sync>,
    calls: Arc<AtomicUsize>,
}

impl MockExtractor {
    fn new(
        respond: impl Fn(&ImagePayload) -> namecard_common::Result<BusinessCardData> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl CardExtractor for MockExtractor {
    async fn extract(&self, image: &ImagePayload) -> namecard_common::Result<BusinessCardData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)(image)
    }
}

fn payload(data: &str) -> ImagePayload {
    ImagePayload {
        mime_type: "image/jpeg".to_string(),
        data: data.to_string(),
    }
}

fn sample_card() -> BusinessCardData {
    BusinessCardData {
        name: "Nguyen Van A".to_string(),
        title: String::new(),
        company: "ABC Co".to_string(),
        phone: "0909xxxxxx".to_string(),
        email: String::new(),
    }
}

/// 抽出成功後、5項目がそのまま表示され読込表示が消える
#[tokio::test]
async fn test_scan_renders_extracted_fields() {
    let mut controller = ScanController::new(MockExtractor::new(|_| Ok(sample_card())));

    let completion = controller.scan(payload("AAA")).await;
    assert_eq!(completion, Completion::Applied);

    let view = controller.session().view();
    assert!(!view.show_loading);
    assert!(view.show_form);
    assert_eq!(view.fields.len(), 5);
    assert_eq!(view.fields[0].value, "Nguyen Van A");
    assert_eq!(view.fields[1].value, "");
    assert_eq!(view.fields[2].value, "ABC Co");
    assert_eq!(view.fields[3].value, "0909xxxxxx");
    assert_eq!(view.fields[4].value, "");
    assert_eq!(view.fields[3].label, "Số điện thoại");
    assert_eq!(view.industry_options, IndustryGroup::ALL.to_vec());
    assert_eq!(controller.failure_message(), None);
}

/// 抽出クライアントには選択した画像がそのまま渡る
#[tokio::test]
async fn test_scan_passes_payload() {
    let extractor = MockExtractor::new(|image| {
        assert_eq!(image.data, "iVBORw0KGgo=");
        assert_eq!(image.mime_type, "image/png");
        Ok(BusinessCardData::default())
    });
    let mut controller = ScanController::new(extractor);

    controller
        .scan(ImagePayload {
            mime_type: "image/png".to_string(),
            data: "iVBORw0KGgo=".to_string(),
        })
        .await;
    assert_eq!(controller.session().phase(), Phase::Ready);
}

/// 抽出失敗時はデータを空にし、エラーを表示、画像は保持
#[tokio::test]
async fn test_scan_failure_resets_data() {
    let mut controller = ScanController::new(MockExtractor::new(|image| {
        if image.data == "good" {
            Ok(sample_card())
        } else {
            Err(Error::extraction("API error 404: Requested entity was not found."))
        }
    }));

    controller.scan(payload("good")).await;
    assert_eq!(controller.session().card().name, "Nguyen Van A");

    controller.scan(payload("bad")).await;
    let session = controller.session();
    assert_eq!(session.phase(), Phase::Error);
    assert!(session.card().is_empty());
    assert_eq!(
        session.error(),
        Some("Failed to extract data: Invalid API key or service issue.")
    );
    assert!(session.image().is_some());
    assert!(session.view().show_form);

    // 表示用メッセージは1つにまとまっている
    let message = controller.failure_message().unwrap();
    assert_eq!(
        message,
        "Lỗi! Failed to extract data: Invalid API key or service issue."
    );
    assert_eq!(message.matches("Lỗi!").count(), 1);
}

/// 再選択で再試行できる
#[tokio::test]
async fn test_retry_after_failure() {
    let extractor = MockExtractor::new(|image| {
        if image.data == "retry" {
            Ok(sample_card())
        } else {
            Err(Error::extraction("API error: 500"))
        }
    });
    let mut controller = ScanController::new(extractor);

    controller.scan(payload("first")).await;
    assert_eq!(controller.session().phase(), Phase::Error);

    controller.scan(payload("retry")).await;
    assert_eq!(controller.session().phase(), Phase::Ready);
    assert_eq!(controller.session().error(), None);
}

/// 項目の編集は他の項目に影響しない
#[tokio::test]
async fn test_edit_field_after_scan() {
    let mut controller = ScanController::new(MockExtractor::new(|_| Ok(sample_card())));
    controller.scan(payload("AAA")).await;

    controller.session_mut().set_field(CardField::Phone, "0123456789");

    let card = controller.session().card();
    assert_eq!(card.phone, "0123456789");
    assert_eq!(card.name, "Nguyen Van A");
    assert_eq!(card.company, "ABC Co");
    assert_eq!(card.title, "");
    assert_eq!(card.email, "");
}

/// 画像解除で業種・メモが初期値に戻る
#[tokio::test]
async fn test_clear_resets_session() {
    let mut controller = ScanController::new(MockExtractor::new(|_| Ok(sample_card())));
    controller.scan(payload("AAA")).await;
    controller
        .session_mut()
        .set_industry_group(IndustryGroup::TechnicalConsultingServices);
    controller.session_mut().set_notes("Gặp ở hội thảo");

    controller.clear();

    let session = controller.session();
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.industry_group(), IndustryGroup::Other);
    assert_eq!(session.notes(), "");
    assert!(session.card().is_empty());
    assert!(!session.view().show_share);
}

/// 共有テキストは現在の編集内容を反映する
#[tokio::test]
async fn test_share_text_after_edit() {
    let extractor = MockExtractor::new(|_| Ok(sample_card()));
    let mut controller = ScanController::new(extractor);
    controller.scan(payload("AAA")).await;
    controller.session_mut().set_field(CardField::Email, "a@abc.vn");
    controller
        .session_mut()
        .set_industry_group(IndustryGroup::ConstructionManufacturing);

    let text = controller.session().share_text();
    assert!(text.starts_with("Thông tin danh thiếp:\n"));
    assert!(text.contains("Email: a@abc.vn\n"));
    assert!(text.contains("Nhóm ngành nghề: Thi công và sản xuất\n"));
    assert!(text.ends_with("Ghi chú: Không có"));
}

/// 1回のスキャンでリクエストは1回のみ（再試行なし）
#[tokio::test]
async fn test_single_attempt() {
    let extractor = MockExtractor::new(|_| Err(Error::extraction("API error: 503")));
    let calls = Arc::clone(&extractor.calls);
    let mut controller = ScanController::new(extractor);

    controller.scan(payload("AAA")).await;
    assert_eq!(controller.session().phase(), Phase::Error);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
