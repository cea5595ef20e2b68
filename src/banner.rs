//! プロモバナーの追加
//!
//! v2ページにカウントダウン付きの固定バナーを差し込む。
//! バナー分だけナビとヒーローを下げる。

use crate::error::Result;
use crate::scanner::SiteDir;
use crate::site::{Outcome, SiteState, SkipReason};
use tracing::info;

/// バナー済みかどうかの判定に使うクラス名
pub const BANNER_MARKER: &str = "promo-banner";

const BANNER_CSS: &str = r#"
/* === PROMO BANNER === */
.promo-banner{position:fixed;top:0;left:0;right:0;z-index:200;background:linear-gradient(135deg,#dc2626 0%,#b91c1c 50%,#991b1b 100%);color:#fff;text-align:center;padding:.65rem 1rem;font-size:.95rem;font-weight:600;display:flex;align-items:center;justify-content:center;gap:.75rem;flex-wrap:wrap;box-shadow:0 2px 12px rgba(0,0,0,.2)}
.promo-banner .price-old{text-decoration:line-through;opacity:.7;font-size:.9rem}
.promo-banner .price-new{font-size:1.15rem;font-weight:800;color:#fbbf24}
.promo-banner .countdown{background:rgba(0,0,0,.25);padding:.25rem .6rem;border-radius:6px;font-family:'Courier New',monospace;font-size:.85rem;letter-spacing:1px}
.promo-banner .promo-btn{background:#fbbf24;color:#1a1a2e;padding:.4rem 1.2rem;border-radius:50px;text-decoration:none;font-weight:700;font-size:.85rem;transition:all .2s;white-space:nowrap}
.promo-banner .promo-btn:hover{background:#f59e0b;transform:scale(1.05)}
@media(max-width:600px){.promo-banner{font-size:.8rem;padding:.5rem .75rem;gap:.5rem}.promo-banner .promo-btn{padding:.35rem 1rem;font-size:.8rem}}
"#;

const BANNER_JS: &str = r#"
// Promo countdown timer
(function(){
  const key = 'promo_end_' + location.pathname;
  let end = localStorage.getItem(key);
  if (!end) {
    end = Date.now() + 48 * 60 * 60 * 1000;
    localStorage.setItem(key, end);
  }
  end = parseInt(end);
  const el = document.getElementById('countdown');
  function update() {
    const diff = Math.max(0, end - Date.now());
    const h = Math.floor(diff / 3600000);
    const m = Math.floor((diff % 3600000) / 60000);
    const s = Math.floor((diff % 60000) / 1000);
    el.textContent = String(h).padStart(2,'0') + ':' + String(m).padStart(2,'0') + ':' + String(s).padStart(2,'0');
    if (diff > 0) requestAnimationFrame(update);
    else el.textContent = 'EXPIRED';
  }
  update();
  setInterval(update, 1000);
})();
"#;

/// ナビ・ヒーローの位置調整（置換前, 置換後）
const LAYOUT_SHIFTS: &[(&str, &str)] = &[
    (".nav{position:fixed;top:0;", ".nav{position:fixed;top:40px;"),
    ("padding:6rem 2rem 4rem", "padding:7rem 2rem 4rem"),
    (".nav-links{position:fixed;top:0;", ".nav-links{position:fixed;top:40px;"),
];

fn banner_html(promo_link: &str) -> String {
    format!(
        r#"
<!-- Promo Banner -->
<div class="promo-banner">
  <span>🚀 Launch Your Website — <span class="price-old">$39.99/mo</span> <span class="price-new">$19.99/mo</span></span>
  <span class="countdown" id="countdown">48:00:00</span>
  <a href="{}" class="promo-btn" target="_blank">Claim This Deal →</a>
</div>
"#,
        promo_link
    )
}

/// ページ本文にバナーを差し込む
///
/// バナー済み・v2でない場合は `Err(SkipReason)`。
pub fn inject_banner(content: &str, promo_link: &str) -> std::result::Result<String, SkipReason> {
    if content.contains(BANNER_MARKER) {
        return Err(SkipReason::AlreadyHasBanner);
    }
    if !SiteState::detect(content).is_transformed() {
        return Err(SkipReason::NotV2);
    }

    // 1. CSS
    let mut page = content.replacen("</style>", &format!("{}\n</style>", BANNER_CSS), 1);

    // 2. レイアウト調整
    for (from, to) in LAYOUT_SHIFTS {
        page = page.replace(from, to);
    }

    // 3. バナー本体は<body>直後
    page = page.replacen("<body>", &format!("<body>\n{}", banner_html(promo_link)), 1);

    // 4. カウントダウン
    page = page.replacen("</script>", &format!("{}\n</script>", BANNER_JS), 1);

    Ok(page)
}

/// サイト1件にバナーを追加する
pub fn add_banner(site: &SiteDir, promo_link: &str) -> Result<Outcome> {
    let index_path = site.index_path();
    if !index_path.is_file() {
        return Ok(Outcome::Skipped(SkipReason::MissingIndex));
    }

    let content = std::fs::read_to_string(&index_path)?;
    let page = match inject_banner(&content, promo_link) {
        Ok(page) => page,
        Err(reason) => return Ok(Outcome::Skipped(reason)),
    };

    std::fs::write(&index_path, page)?;
    info!(site = %site.name, "プロモバナーを追加");
    Ok(Outcome::Updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use demo_refresh_common::{render_page, ExtractedFields, RenderOptions};

    const LINK: &str = "https://pay.example/deal";

    fn v2_page() -> String {
        let fields = ExtractedFields {
            name: Some("Banner Test".to_string()),
            ..Default::default()
        };
        render_page(&fields, &RenderOptions::default())
    }

    #[test]
    fn test_inject_banner() {
        let page = inject_banner(&v2_page(), LINK).unwrap();

        assert!(page.contains("<body>\n\n<!-- Promo Banner -->"));
        assert!(page.contains(&format!(r#"<a href="{}" class="promo-btn""#, LINK)));
        assert!(page.contains(".nav{position:fixed;top:40px;"));
        assert!(page.contains(".nav-links{position:fixed;top:40px;"));
        assert!(page.contains("padding:7rem 2rem 4rem"));
        assert!(!page.contains("padding:6rem 2rem 4rem"));
        assert!(page.contains("// Promo countdown timer"));
        assert_eq!(page.matches("/* === PROMO BANNER === */").count(), 1);

        // CSSは</style>の前、JSは</script>の前
        let css_pos = page.find("/* === PROMO BANNER === */").unwrap();
        assert!(css_pos < page.find("</style>").unwrap());
        let js_pos = page.find("// Promo countdown timer").unwrap();
        assert!(js_pos < page.find("</script>").unwrap());
    }

    #[test]
    fn test_inject_banner_is_idempotent() {
        let once = inject_banner(&v2_page(), LINK).unwrap();
        assert_eq!(inject_banner(&once, LINK), Err(SkipReason::AlreadyHasBanner));
    }

    #[test]
    fn test_inject_banner_requires_v2() {
        let v1 = "<html><head><style></style></head><body></body></html>";
        assert_eq!(inject_banner(v1, LINK), Err(SkipReason::NotV2));
    }

    #[test]
    fn test_add_banner_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner-test");
        std::fs::create_dir_all(&path).unwrap();
        std::fs::write(path.join("index.html"), v2_page()).unwrap();
        let site = SiteDir::new(path);

        assert_eq!(add_banner(&site, LINK).unwrap(), Outcome::Updated);
        assert_eq!(
            add_banner(&site, LINK).unwrap(),
            Outcome::Skipped(SkipReason::AlreadyHasBanner)
        );
        let page = std::fs::read_to_string(site.index_path()).unwrap();
        assert_eq!(page.matches(r#"<div class="promo-banner">"#).count(), 1);
    }
}
