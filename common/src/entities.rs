//! HTMLエンティティのデコード・エスケープ
//!
//! - デコードは `html-escape`（HTML5の名前付き参照・数値参照すべて）
//! - `&copy` のような `;` 省略形は旧来の参照名に限り受け付ける
//! - 未知のエンティティはそのまま残す

use regex::{Captures, Regex};
use std::borrow::Cow;

/// `;` なしでも参照として扱う名前（HTML5の旧来互換リスト）
const LEGACY_NAMES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil", "ETH",
    "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT", "Ntilde",
    "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN", "Uacute",
    "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave", "amp",
    "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren", "deg",
    "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34", "gt",
    "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

/// HTMLエンティティをデコードする
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let terminated = terminate_references(text);
    html_escape::decode_html_entities(&terminated).into_owned()
}

/// `;` が省略された参照に `;` を補う
///
/// 旧来の名前は最長一致（`&copy2020` → `&copy;2020`）。
fn terminate_references(text: &str) -> Cow<'_, str> {
    lazy_static::lazy_static! {
        static ref REFERENCE_RE: Regex =
            Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*)(;?)").unwrap();
    }

    REFERENCE_RE.replace_all(text, |caps: &Captures| {
        let body = &caps[1];
        if !caps[2].is_empty() {
            return caps[0].to_string();
        }
        if body.starts_with('#') {
            return format!("&{};", body);
        }

        match LEGACY_NAMES
            .iter()
            .filter(|name| body.starts_with(**name))
            .max_by_key(|name| name.len())
        {
            Some(name) => format!("&{};{}", name, &body[name.len()..]),
            None => caps[0].to_string(),
        }
    })
}

/// HTML特殊文字をエスケープする（属性値・本文の両方で安全）
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
