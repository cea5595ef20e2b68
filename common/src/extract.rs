//! 旧（v1）ページからのビジネス情報抽出
//!
//! 各項目について最初にマッチしたものを採用する。
//! マッチしない項目は `None` のまま（エラーにはしない）。

use crate::entities::decode_entities;
use crate::types::{ExtractedFields, Phone, DEFAULT_BUSINESS_TYPE};
use regex::Regex;

lazy_static::lazy_static! {
    static ref TITLE_RE: Regex = Regex::new(r"<title>(.+?)(?:\s*—\s*(.+?))?</title>").unwrap();
    static ref CATEGORY_RE: Regex = Regex::new(r#"category">\s*(.+?)\s*<"#).unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"tel:\+?(\d(?:[\d\-. ()]*\d)?)").unwrap();
    static ref PLACE_ID_RE: Regex = Regex::new(r"place_id:([A-Za-z0-9_-]+)").unwrap();
    static ref PHOTO_RE: Regex = Regex::new(r"url\('(https://places\.googleapis\.com[^']+)'\)").unwrap();
    static ref RATING_RE: Regex = Regex::new(r"(\d+\.?\d*)\s*(?:out of 5\s*·|·)\s*([\d,]+)\s*reviews?").unwrap();
    static ref ADDRESS_RE: Regex = Regex::new(r"Address</h3>\s*<p>(.+?)</p>").unwrap();
    static ref DESC_RE: Regex = Regex::new(r#"(?s)class="desc">(.+?)</p>"#).unwrap();
    static ref API_KEY_RE: Regex = Regex::new(r"key=([A-Za-z0-9_-]+)").unwrap();
    static ref WEBSITE_RE: Regex = Regex::new(r#"Website</h3>\s*<p><a href="([^"]+)""#).unwrap();
    static ref HOURS_RE: Regex = Regex::new(r"<li>(.+?)</li>").unwrap();
}

/// 最初のマッチの指定グループを取り出す
fn first_group(re: &Regex, text: &str, group: usize) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str().to_string())
}

/// 前後の空白を除去してからエンティティをデコード
fn clean_text(raw: &str) -> String {
    decode_entities(raw.trim())
}

/// HTMLからビジネス情報を抽出する
///
/// # Arguments
/// * `html` - v1ページのHTML全文
///
/// # Returns
/// 抽出結果。名前が取れなかった場合も `name: None` で返す
pub fn extract_fields(html: &str) -> ExtractedFields {
    let mut fields = ExtractedFields::default();

    // タイトル「名前 — 業種」
    if let Some(caps) = TITLE_RE.captures(html) {
        fields.name = Some(clean_text(&caps[1]));
        fields.business_type = Some(
            caps.get(2)
                .map(|m| clean_text(m.as_str()))
                .unwrap_or_else(|| DEFAULT_BUSINESS_TYPE.to_string()),
        );
    }

    // カテゴリタグがあればタイトルの業種より優先
    if let Some(category) = first_group(&CATEGORY_RE, html, 1) {
        fields.business_type = Some(clean_text(&category));
    }

    fields.phone = first_group(&PHONE_RE, html, 1).and_then(|p| Phone::from_digits(&p));
    fields.place_id = first_group(&PLACE_ID_RE, html, 1);
    fields.photo_url = first_group(&PHOTO_RE, html, 1);

    if let Some(caps) = RATING_RE.captures(html) {
        fields.rating = Some(caps[1].to_string());
        fields.review_count = Some(caps[2].to_string());
    }

    fields.address = first_group(&ADDRESS_RE, html, 1).map(|a| clean_text(&a));
    fields.desc = first_group(&DESC_RE, html, 1).map(|d| clean_text(&d));
    fields.api_key = first_group(&API_KEY_RE, html, 1);
    fields.website = first_group(&WEBSITE_RE, html, 1);

    // 営業時間は全件（文書順）
    fields.hours = HOURS_RE
        .captures_iter(html)
        .map(|caps| decode_entities(&caps[1]))
        .collect();

    fields
}
