//! 決済リンクの置換
//!
//! 共通の決済リンクを `<checkout_base>/<サイト名>` に置き換える。

use crate::error::Result;
use crate::scanner::SiteDir;
use crate::site::{Outcome, SkipReason};
use tracing::info;

/// サイト別のチェックアウトURL
pub fn checkout_url(base: &str, slug: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), slug)
}

/// サイト1件のリンクを置換する
pub fn update_checkout_link(site: &SiteDir, old_link: &str, checkout_base: &str) -> Result<Outcome> {
    let index_path = site.index_path();
    if !index_path.is_file() {
        return Ok(Outcome::Skipped(SkipReason::MissingIndex));
    }

    let content = std::fs::read_to_string(&index_path)?;
    if old_link.is_empty() || !content.contains(old_link) {
        return Ok(Outcome::Skipped(SkipReason::LinkNotFound));
    }

    let url = checkout_url(checkout_base, &site.name);
    std::fs::write(&index_path, content.replace(old_link, &url))?;
    info!(site = %site.name, %url, "決済リンクを置換");

    Ok(Outcome::Updated)
}
