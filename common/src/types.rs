//! 名刺データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - BusinessCardData: AIが名刺画像から抽出した5項目
//! - CardField: 各項目の識別子（表示順・ラベル付き）
//! - IndustryGroup: 名刺に付ける業種分類

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 名刺から抽出した情報
///
/// 抽出に成功するたびに丸ごと置き換えられ、ユーザー編集で項目ごとに変更される。
/// キー欠落とnullは空文字、数値・真偽値は文字列化、未知のキーは無視する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessCardData {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
}

/// AIの応答値を文字列に寄せる（null → 空文字、それ以外はJSON表記）
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl BusinessCardData {
    pub fn get(&self, field: CardField) -> &str {
        match field {
            CardField::Name => &self.name,
            CardField::Title => &self.title,
            CardField::Company => &self.company,
            CardField::Phone => &self.phone,
            CardField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: CardField, value: impl Into<String>) {
        let slot = match field {
            CardField::Name => &mut self.name,
            CardField::Title => &mut self.title,
            CardField::Company => &mut self.company,
            CardField::Phone => &mut self.phone,
            CardField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        CardField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// 名刺の項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Name,
    Title,
    Company,
    Phone,
    Email,
}

impl CardField {
    /// 表示順
    pub const ALL: [CardField; 5] = [
        CardField::Name,
        CardField::Title,
        CardField::Company,
        CardField::Phone,
        CardField::Email,
    ];

    /// JSONキー（フォームのid兼用）
    pub fn key(&self) -> &'static str {
        match self {
            CardField::Name => "name",
            CardField::Title => "title",
            CardField::Company => "company",
            CardField::Phone => "phone",
            CardField::Email => "email",
        }
    }

    /// フォームのラベル
    pub fn label(&self) -> &'static str {
        match self {
            CardField::Name => "Tên",
            CardField::Title => "Chức vụ",
            CardField::Company => "Công ty",
            CardField::Phone => "Số điện thoại",
            CardField::Email => "Email",
        }
    }
}

impl FromStr for CardField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        CardField::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| Error::Parse(format!("unknown field: {}", s)))
    }
}

/// 業種分類（固定4種）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndustryGroup {
    #[serde(rename = "Tư vấn và dịch vụ kỹ thuật")]
    TechnicalConsultingServices,
    #[serde(rename = "Vật liệu và công nghệ mới")]
    NewMaterialsTechnology,
    #[serde(rename = "Thi công và sản xuất")]
    ConstructionManufacturing,
    #[default]
    #[serde(rename = "Khác")]
    Other,
}

impl IndustryGroup {
    /// 選択肢の表示順
    pub const ALL: [IndustryGroup; 4] = [
        IndustryGroup::TechnicalConsultingServices,
        IndustryGroup::NewMaterialsTechnology,
        IndustryGroup::ConstructionManufacturing,
        IndustryGroup::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndustryGroup::TechnicalConsultingServices => "Tư vấn và dịch vụ kỹ thuật",
            IndustryGroup::NewMaterialsTechnology => "Vật liệu và công nghệ mới",
            IndustryGroup::ConstructionManufacturing => "Thi công và sản xuất",
            IndustryGroup::Other => "Khác",
        }
    }

    /// CLI引数用の短い名前
    pub fn slug(&self) -> &'static str {
        match self {
            IndustryGroup::TechnicalConsultingServices => "consulting",
            IndustryGroup::NewMaterialsTechnology => "materials",
            IndustryGroup::ConstructionManufacturing => "construction",
            IndustryGroup::Other => "other",
        }
    }
}

impl fmt::Display for IndustryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IndustryGroup {
    type Err = Error;

    /// ラベル・短い名前のどちらも受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        IndustryGroup::ALL
            .into_iter()
            .find(|g| g.label() == s || g.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Parse(format!("unknown industry group: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_card_default() {
        let card = BusinessCardData::default();
        assert!(card.is_empty());
        assert_eq!(card.phone, "");
    }

    #[test]
    fn test_business_card_missing_and_extra_keys() {
        let json = r#"{"name": "Nguyen Van A", "fax": "123"}"#;
        let card: BusinessCardData = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Nguyen Van A");
        assert_eq!(card.email, "");
    }

    #[test]
    fn test_business_card_null_fields_are_empty() {
        let json = r#"{"name":"Nguyen Van A","title":null,"company":"ABC Co","phone":"0909","email":null}"#;
        let card: BusinessCardData = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Nguyen Van A");
        assert_eq!(card.title, "");
        assert_eq!(card.company, "ABC Co");
        assert_eq!(card.phone, "0909");
        assert_eq!(card.email, "");
    }

    #[test]
    fn test_business_card_scalar_values_are_stringified() {
        let json = r#"{"name": "A", "phone": 909123456, "title": true}"#;
        let card: BusinessCardData = serde_json::from_str(json).unwrap();
        assert_eq!(card.phone, "909123456");
        assert_eq!(card.title, "true");
        assert_eq!(card.email, "");
    }

    #[test]
    fn test_business_card_non_object_fails() {
        assert!(serde_json::from_str::<BusinessCardData>(r#"["A", "B"]"#).is_err());
        assert!(serde_json::from_str::<BusinessCardData>(r#""Nguyen Van A""#).is_err());
    }

    #[test]
    fn test_set_only_touches_target() {
        let mut card = BusinessCardData {
            name: "Tran Thi B".into(),
            company: "XYZ".into(),
            ..Default::default()
        };
        card.set(CardField::Phone, "0123456789");
        assert_eq!(card.phone, "0123456789");
        assert_eq!(card.name, "Tran Thi B");
        assert_eq!(card.company, "XYZ");
        assert_eq!(card.title, "");
    }

    #[test]
    fn test_card_field_from_str() {
        assert_eq!("phone".parse::<CardField>().unwrap(), CardField::Phone);
        assert_eq!(" Email ".parse::<CardField>().unwrap(), CardField::Email);
        assert!("fax".parse::<CardField>().is_err());
    }

    #[test]
    fn test_industry_group_default_is_other() {
        assert_eq!(IndustryGroup::default(), IndustryGroup::Other);
        assert_eq!(IndustryGroup::default().label(), "Khác");
    }

    #[test]
    fn test_industry_group_from_label_and_slug() {
        assert_eq!(
            "Thi công và sản xuất".parse::<IndustryGroup>().unwrap(),
            IndustryGroup::ConstructionManufacturing
        );
        assert_eq!(
            "Materials".parse::<IndustryGroup>().unwrap(),
            IndustryGroup::NewMaterialsTechnology
        );
        assert!("finance".parse::<IndustryGroup>().is_err());
    }

    #[test]
    fn test_industry_group_serde_uses_label() {
        let json = serde_json::to_string(&IndustryGroup::TechnicalConsultingServices).unwrap();
        assert_eq!(json, "\"Tư vấn và dịch vụ kỹ thuật\"");
        let back: IndustryGroup = serde_json::from_str("\"Khác\"").unwrap();
        assert_eq!(back, IndustryGroup::Other);
    }
}
