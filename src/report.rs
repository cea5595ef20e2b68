//! 一括処理の集計
//!
//! サイトごとの失敗は記録して続行する。処理全体を止めることはない。

use crate::error::Result;
use crate::scanner::SiteDir;
use crate::site::Outcome;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub updated: usize,
    pub skipped: usize,
    /// (サイト名, メッセージ)
    pub errors: Vec<(String, String)>,
}

impl RunSummary {
    /// 最終行 `--- Done: 3 refreshed, 1 skipped, 0 errors ---`
    pub fn summary_line(&self, verb: &str) -> String {
        format!(
            "--- Done: {} {}, {} skipped, {} errors ---",
            self.updated,
            verb,
            self.skipped,
            self.errors.len()
        )
    }
}

/// 各サイトに処理を適用し、経過を表示しながら集計する
pub fn run_sites<F>(sites: &[SiteDir], mut action: F) -> RunSummary
where
    F: FnMut(&SiteDir) -> Result<Outcome>,
{
    let mut summary = RunSummary::default();

    for site in sites {
        match action(site) {
            Ok(Outcome::Updated) => {
                summary.updated += 1;
                println!("✅ {}", site.name);
            }
            Ok(Outcome::Skipped(reason)) => {
                summary.skipped += 1;
                println!("⏭️  {} ({})", site.name, reason);
            }
            Err(e) => {
                warn!(site = %site.name, error = %e, "処理に失敗");
                println!("❌ {}: {}", site.name, e);
                summary.errors.push((site.name.clone(), e.to_string()));
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DemoError;
    use crate::site::SkipReason;

    #[test]
    fn test_failure_does_not_stop_run() {
        let sites: Vec<SiteDir> = ["a", "b", "c", "d"].iter().map(|n| SiteDir::new(*n)).collect();

        let mut seen = Vec::new();
        let summary = run_sites(&sites, |site| {
            seen.push(site.name.clone());
            match site.name.as_str() {
                "b" => Err(DemoError::Config("boom".into())),
                "c" => Ok(Outcome::Skipped(SkipReason::AlreadyCurrent)),
                _ => Ok(Outcome::Updated),
            }
        });

        assert_eq!(seen, vec!["a", "b", "c", "d"]);
        assert_eq!(summary.updated, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].0, "b");
        assert!(summary.errors[0].1.contains("boom"));
    }

    #[test]
    fn test_summary_line() {
        let summary = RunSummary {
            updated: 3,
            skipped: 1,
            errors: vec![],
        };
        assert_eq!(summary.summary_line("refreshed"), "--- Done: 3 refreshed, 1 skipped, 0 errors ---");
    }
}
