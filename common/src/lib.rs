//! Namecard AI Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod encoding;
pub mod prompts;
pub mod parser;
pub mod gemini;
pub mod session;
pub mod share;

pub use types::{BusinessCardData, CardField, IndustryGroup};
pub use error::{Error, Result};
pub use encoding::{ImagePayload, strip_data_url_prefix, mime_type_from_data_url};
pub use prompts::EXTRACTION_PROMPT;
pub use parser::{strip_json_fence, parse_extraction_response};
pub use session::{Completion, ExtractionTicket, FieldView, FormView, Phase, Session};
pub use share::{build_share_text, ShareOutcome, SHARE_TITLE};
