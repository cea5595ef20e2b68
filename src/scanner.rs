use crate::error::{DemoError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// サイトの現行ページ
pub const INDEX_FILE: &str = "index.html";
/// 初回変換時に残す元ページ
pub const BACKUP_FILE: &str = "index.v1.html";

#[derive(Debug, Clone)]
pub struct SiteDir {
    pub path: PathBuf,
    /// フォルダ名（チェックアウトURLのスラッグにも使う）
    pub name: String,
}

impl SiteDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path, name }
    }

    pub fn index_path(&self) -> PathBuf {
        self.path.join(INDEX_FILE)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.path.join(BACKUP_FILE)
    }
}

/// `index.html` を持つ直下のサブフォルダを名前順に列挙する
///
/// `filters` が空でなければ、フォルダ名が一致するものだけを返す。
pub fn scan_sites(root: &Path, filters: &[String]) -> Result<Vec<SiteDir>> {
    if !root.is_dir() {
        return Err(DemoError::FolderNotFound(root.display().to_string()));
    }

    let mut sites = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_dir() || !path.join(INDEX_FILE).is_file() {
            continue;
        }

        let site = SiteDir::new(path);
        if filters.is_empty() || filters.iter().any(|f| f == &site.name) {
            sites.push(site);
        }
    }

    // フォルダ名でソート
    sites.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(sites)
}
