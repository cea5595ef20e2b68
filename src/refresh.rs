//! v1 → v2 再生成
//!
//! 1. 状態判定（v2済みならスキップ）
//! 2. 抽出（名前が取れなければスキップ）
//! 3. バックアップ（初回のみ）
//! 4. 生成して上書き

use crate::error::Result;
use crate::scanner::SiteDir;
use crate::site::{write_backup_once, Outcome, SiteState, SkipReason};
use demo_refresh_common::{classify, extract_fields, render_page, Category, ExtractedFields, RenderOptions};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct RefreshOptions {
    pub render: RenderOptions,
    /// 書き込みを行わない
    pub dry_run: bool,
}

/// サイト1件をv2に更新する
pub fn refresh_site(site: &SiteDir, options: &RefreshOptions) -> Result<Outcome> {
    let index_path = site.index_path();
    if !index_path.is_file() {
        return Ok(Outcome::Skipped(SkipReason::MissingIndex));
    }

    let content = std::fs::read_to_string(&index_path)?;

    if SiteState::detect(&content).is_transformed() {
        return Ok(Outcome::Skipped(SkipReason::AlreadyCurrent));
    }

    let fields = extract_fields(&content);
    if !fields.has_name() {
        return Ok(Outcome::Skipped(SkipReason::NoName));
    }

    let category = options
        .render
        .category
        .unwrap_or_else(|| classify(fields.business_type_or_default()));
    debug!(
        site = %site.name,
        name = fields.name.as_deref().unwrap_or_default(),
        business_type = fields.business_type_or_default(),
        %category,
        "抽出完了"
    );

    let page = render_page(&fields, &options.render);

    if options.dry_run {
        debug!(site = %site.name, bytes = page.len(), "ドライランのため書き込みなし");
        return Ok(Outcome::Updated);
    }

    if write_backup_once(&site.backup_path(), &content)? {
        info!(site = %site.name, path = %site.backup_path().display(), "バックアップ作成");
    }

    std::fs::write(&index_path, page)?;
    info!(site = %site.name, path = %index_path.display(), "v2ページを書き込み");

    Ok(Outcome::Updated)
}

/// 抽出結果の確認用レポート
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReport {
    pub site: String,
    pub state: &'static str,
    pub category: Category,
    pub fields: ExtractedFields,
}

/// サイト1件の抽出結果を返す（書き込みなし）
pub fn inspect_site(site: &SiteDir) -> Result<Option<SiteReport>> {
    let index_path = site.index_path();
    if !index_path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&index_path)?;
    let state = SiteState::detect(&content);
    let fields = extract_fields(&content);

    Ok(Some(SiteReport {
        site: site.name.clone(),
        state: if state.is_transformed() { "v2" } else { "v1" },
        category: classify(fields.business_type_or_default()),
        fields,
    }))
}
