//! サイト単位の状態判定とバックアップ
//!
//! ページの状態は v1（未変換）/ v2（変換済み）の2状態のみ。
//! バックアップは初回変換時に一度だけ作り、以後は上書きしない。

use crate::error::Result;
use demo_refresh_common::V2_MARKER;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::warn;

/// ページの世代
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteState {
    /// v1（マーカーなし）
    Untransformed,
    /// v2（マーカーあり）
    Transformed,
}

impl SiteState {
    pub fn detect(content: &str) -> Self {
        if content.contains(V2_MARKER) {
            SiteState::Transformed
        } else {
            SiteState::Untransformed
        }
    }

    pub fn is_transformed(&self) -> bool {
        matches!(self, SiteState::Transformed)
    }
}

/// スキップ理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingIndex,
    AlreadyCurrent,
    NoName,
    NotV2,
    AlreadyHasBanner,
    LinkNotFound,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingIndex => write!(f, "index.htmlなし"),
            SkipReason::AlreadyCurrent => write!(f, "v2済み"),
            SkipReason::NoName => write!(f, "名前を抽出できず"),
            SkipReason::NotV2 => write!(f, "v2ではない"),
            SkipReason::AlreadyHasBanner => write!(f, "バナー済み"),
            SkipReason::LinkNotFound => write!(f, "対象リンクなし"),
        }
    }
}

/// サイト1件の処理結果（エラーは `Err` で別に返す）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Skipped(SkipReason),
}

/// バックアップがなければ作成する
///
/// 既にある場合は何もせず `false`。既存のバックアップは決して上書きしない。
/// 書き込みに失敗した場合は作りかけのファイルを残さない。
pub fn write_backup_once(path: &Path, content: &str) -> Result<bool> {
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    fill_or_discard(file, path, content.as_bytes())?;
    Ok(true)
}

/// `path` に対応する `writer` へ書き込み、失敗したら `path` を削除する
fn fill_or_discard<W: Write>(mut writer: W, path: &Path, bytes: &[u8]) -> Result<()> {
    let written = writer.write_all(bytes).and_then(|_| writer.flush());
    drop(writer);

    if let Err(e) = written {
        if let Err(remove_err) = std::fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove_err, "作りかけのバックアップを削除できません");
        }
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_detect_state() {
        assert_eq!(SiteState::detect("<html><body></body></html>"), SiteState::Untransformed);
        assert_eq!(
            SiteState::detect(r#"<body><nav class="nav"><div></div></nav></body>"#),
            SiteState::Transformed
        );
        assert!(!SiteState::detect(r#"<nav class="navbar">"#).is_transformed());
    }

    #[test]
    fn test_backup_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.v1.html");

        assert!(write_backup_once(&path, "original").unwrap());
        assert!(!write_backup_once(&path, "second").unwrap());

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_backup_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.v1.html");
        fs::write(&path, "<html><bo").unwrap();

        let result = fill_or_discard(FailingWriter, &path, b"original");
        assert!(result.is_err());
        assert!(!path.exists());

        // 次回は正しく作り直せる
        assert!(write_backup_once(&path, "original").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_backup_missing_parent_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.v1.html");

        assert!(write_backup_once(&path, "x").is_err());
    }
}
