//! 共有テキストの生成

use crate::types::{BusinessCardData, IndustryGroup};

/// 共有シートのタイトル
pub const SHARE_TITLE: &str = "Thông tin Danh thiếp";

/// メモ未入力時の表示
pub const NO_NOTES: &str = "Không có";

/// 名刺情報を固定書式の共有テキストにする
pub fn build_share_text(card: &BusinessCardData, group: IndustryGroup, notes: &str) -> String {
    let notes = if notes.is_empty() { NO_NOTES } else { notes };
    format!(
        "Thông tin danh thiếp:\n\
         Tên: {}\n\
         Chức vụ: {}\n\
         Công ty: {}\n\
         Điện thoại: {}\n\
         Email: {}\n\
         Nhóm ngành nghề: {}\n\
         Ghi chú: {}",
        card.name,
        card.title,
        card.company,
        card.phone,
        card.email,
        group.label(),
        notes
    )
}

/// 共有操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    ShareFailed,
    Copied,
    CopyFailed,
}

impl ShareOutcome {
    /// 利用者に表示するメッセージ
    pub fn message(&self) -> &'static str {
        match self {
            ShareOutcome::Shared => "Đã chia sẻ thành công!",
            ShareOutcome::ShareFailed => "Không thể chia sẻ. Vui lòng thử lại hoặc sao chép thủ công.",
            ShareOutcome::Copied => "Thông tin đã được sao chép vào clipboard!",
            ShareOutcome::CopyFailed => {
                "Trình duyệt của bạn không hỗ trợ chia sẻ hoặc sao chép. Vui lòng sao chép thủ công."
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ShareOutcome::Shared | ShareOutcome::Copied)
    }
}
