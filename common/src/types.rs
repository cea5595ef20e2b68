//! 抽出結果の型定義
//!
//! - ExtractedFields: 旧ページから抽出したビジネス情報
//! - Phone: 表示用・tel:リンク用に整形した電話番号

use serde::{Deserialize, Serialize};

/// タイトルに業種がない場合の既定値
pub const DEFAULT_BUSINESS_TYPE: &str = "Business";

/// 電話番号
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    /// 数字のみ
    pub raw: String,
    /// 表示用 `(305) 555-0100`
    pub display: String,
    /// tel:リンク用 `+13055550100`
    pub tel: String,
}

impl Phone {
    /// 任意の区切りを含む番号文字列から整形済みの電話番号を作る
    ///
    /// 数字以外は除去する。数字が残らなければ `None`。
    pub fn from_digits(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }

        let national = match digits.len() {
            11 if digits.starts_with('1') => Some(&digits[1..]),
            10 => Some(digits.as_str()),
            _ => None,
        };

        let phone = match national {
            Some(n) => Self {
                display: format!("({}) {}-{}", &n[0..3], &n[3..6], &n[6..]),
                tel: format!("+1{}", n),
                raw: digits.clone(),
            },
            None => Self {
                display: digits.clone(),
                tel: format!("+{}", digits),
                raw: digits,
            },
        };
        Some(phone)
    }
}

/// 旧ページからの抽出結果
///
/// `name` 以外はすべて任意。欠けている項目に対応するブロックは描画しない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub business_type: Option<String>,
    pub phone: Option<Phone>,
    pub place_id: Option<String>,
    pub photo_url: Option<String>,
    pub rating: Option<String>,
    pub review_count: Option<String>,
    pub address: Option<String>,
    pub desc: Option<String>,
    pub api_key: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub hours: Vec<String>,
}

impl ExtractedFields {
    /// 空白のみの名前は抽出できなかったものとして扱う
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    pub fn business_type_or_default(&self) -> &str {
        self.business_type.as_deref().unwrap_or(DEFAULT_BUSINESS_TYPE)
    }

    /// 評価値（数値として解釈できる場合のみ）
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.as_deref().and_then(|r| r.trim().parse::<f64>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_us_with_country_code() {
        let phone = Phone::from_digits("13055550100").unwrap();
        assert_eq!(phone.display, "(305) 555-0100");
        assert_eq!(phone.tel, "+13055550100");
        assert_eq!(phone.raw, "13055550100");
    }

    #[test]
    fn test_phone_grouping_is_irrelevant() {
        let expected = Phone::from_digits("13055550100").unwrap();
        for input in ["1-305-555-0100", "1 (305) 555.0100", "305-555-0100", "(305) 555 0100"] {
            let phone = Phone::from_digits(input).unwrap();
            assert_eq!(phone.display, expected.display, "input: {}", input);
            assert_eq!(phone.tel, expected.tel, "input: {}", input);
        }
    }

    #[test]
    fn test_phone_international_kept_verbatim() {
        let phone = Phone::from_digits("442071234567").unwrap();
        assert_eq!(phone.display, "442071234567");
        assert_eq!(phone.tel, "+442071234567");
    }

    #[test]
    fn test_phone_without_digits() {
        assert!(Phone::from_digits("--").is_none());
    }

    #[test]
    fn test_has_name() {
        let mut fields = ExtractedFields::default();
        assert!(!fields.has_name());
        fields.name = Some("   ".to_string());
        assert!(!fields.has_name());
        fields.name = Some("Joe's".to_string());
        assert!(fields.has_name());
    }

    #[test]
    fn test_rating_value() {
        let fields = ExtractedFields {
            rating: Some("4.7".to_string()),
            ..Default::default()
        };
        assert_eq!(fields.rating_value(), Some(4.7));
        assert_eq!(ExtractedFields::default().rating_value(), None);
    }
}
