//! 画像ペイロードのBase64エンコード
//!
//! Data URL ("data:image/jpeg;base64,/9j/...") からプレフィックスを外し、
//! APIへ送るBase64本体とMIMEタイプを取り出す

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};

/// MIMEタイプが判別できない場合の既定値
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// APIへ送る画像データ（Data URLプレフィックスなしのBase64）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    /// FileReader.readAsDataURL の結果から作成
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        let data = strip_data_url_prefix(data_url)?;
        Ok(Self {
            mime_type: mime_type_from_data_url(data_url).to_string(),
            data: data.to_string(),
        })
    }

    /// 生バイト列から作成
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::Conversion);
        }
        Ok(Self {
            mime_type: mime_type.to_string(),
            data: STANDARD.encode(bytes),
        })
    }

    /// プレビュー表示用のData URL
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Data URLからBase64データ部分を取り出す
///
/// カンマを含まず "data:" で始まらない入力は、既にBase64本体とみなしてそのまま返す。
pub fn strip_data_url_prefix(data_url: &str) -> Result<&str> {
    let data_url = data_url.trim();
    let data = match data_url.split_once(',') {
        Some((_, data)) => data.trim(),
        None if data_url.starts_with("data:") => return Err(Error::Conversion),
        None => data_url,
    };
    if data.is_empty() {
        return Err(Error::Conversion);
    }
    Ok(data)
}

/// Data URLからMIMEタイプを取り出す（判別不能なら image/jpeg）
pub fn mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .trim()
        .strip_prefix("data:")
        .and_then(|rest| rest.split([';', ',']).next())
        .filter(|mime| !mime.is_empty())
        .unwrap_or(DEFAULT_MIME_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_jpeg_prefix() {
        let data = strip_data_url_prefix("data:image/jpeg;base64,/9j/4AAQSkZJRg==").unwrap();
        assert_eq!(data, "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn test_strip_bare_payload() {
        let data = strip_data_url_prefix("iVBORw0KGgo=").unwrap();
        assert_eq!(data, "iVBORw0KGgo=");
    }

    #[test]
    fn test_strip_prefix_without_payload() {
        assert!(matches!(
            strip_data_url_prefix("data:image/png;base64,"),
            Err(Error::Conversion)
        ));
        assert!(matches!(
            strip_data_url_prefix("data:image/png;base64"),
            Err(Error::Conversion)
        ));
        assert!(strip_data_url_prefix("").is_err());
    }

    #[test]
    fn test_payload_never_contains_prefix() {
        let inputs = [
            "data:image/png;base64,iVBORw0KGgo=",
            "data:application/octet-stream;base64,AAEC",
            "data:;base64,AAEC",
            "AAEC",
        ];
        for input in inputs {
            let payload = ImagePayload::from_data_url(input).unwrap();
            assert!(!payload.data.contains("data:"), "{}", input);
            assert!(!payload.data.contains(";base64"), "{}", input);
            assert!(!payload.data.contains(','), "{}", input);
        }
    }

    #[test]
    fn test_mime_type_from_data_url() {
        assert_eq!(mime_type_from_data_url("data:image/png;base64,xx"), "image/png");
        assert_eq!(mime_type_from_data_url("data:;base64,xx"), "image/jpeg");
        assert_eq!(mime_type_from_data_url("xx"), "image/jpeg");
    }

    #[test]
    fn test_from_bytes_and_data_url() {
        let payload = ImagePayload::from_bytes("image/png", &[0x89, b'P', b'N', b'G']).unwrap();
        assert_eq!(payload.data, "iVBORw==");
        assert_eq!(payload.data_url(), "data:image/png;base64,iVBORw==");

        let back = ImagePayload::from_data_url(&payload.data_url()).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_from_bytes_empty() {
        assert!(matches!(
            ImagePayload::from_bytes("image/png", &[]),
            Err(Error::Conversion)
        ));
    }
}
