//! セッションと抽出クライアントをつなぐコントローラ

use crate::extractor::CardExtractor;
use namecard_common::{Completion, ImagePayload, Session};
use tracing::{debug, info};

pub struct ScanController<E> {
    extractor: E,
    session: Session,
}

impl<E: CardExtractor> ScanController<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// 画像を選択して抽出まで実行
    ///
    /// 成否はセッションの状態（Ready / Error）に反映される。
    pub async fn scan(&mut self, image: ImagePayload) -> Completion {
        let Some(ticket) = self.session.select_image(Some(image)) else {
            return Completion::Stale;
        };
        debug!(generation = ticket.generation, "extraction started");

        let result = self.extractor.extract(&ticket.payload).await;
        let completion = self.session.complete_extraction(ticket.generation, result);
        info!(phase = ?self.session.phase(), ?completion, "extraction finished");
        completion
    }

    /// 抽出失敗時の表示用メッセージ
    pub fn failure_message(&self) -> Option<String> {
        self.session.error().map(|e| format!("Lỗi! {}", e))
    }

    /// 画像を外してセッションを初期化
    pub fn clear(&mut self) {
        self.session.clear_image();
    }
}
