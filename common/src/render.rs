//! v2ページの生成
//!
//! 抽出結果とカテゴリのデザイントークンから完全なHTML文書を組み立てる。
//! - 見出しは名前のMD5から決定的に選ぶ（再実行しても同じ見出し）
//! - 欠けている項目のブロックは丸ごと省略する（空のラッパー要素を残さない）
//! - ページ由来のテキストはすべてエスケープ、URLはそのまま埋め込む

use crate::category::{classify, Category, CategoryTokens};
use crate::entities::{decode_entities, escape_html};
use crate::types::ExtractedFields;

/// v2ページであることを示すマーカー
pub const V2_MARKER: &str = r#"<nav class="nav">"#;

/// 評価がこの値以上ならサブ見出しに評価を入れる
const SUBHEADLINE_RATING_THRESHOLD: f64 = 4.5;

/// 半星を付ける小数部の下限
const HALF_STAR_THRESHOLD: f64 = 0.3;

const STAR_SLOTS: usize = 5;

/// ページに差し込む運営側の情報
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// ページ内にキーがない場合に使う Maps Embed API キー
    pub maps_api_key: Option<String>,
    /// 指定時はキーワード判定を使わずこのカテゴリで描画する
    pub category: Option<Category>,
    pub contact_email: String,
    pub agency_name: String,
    pub agency_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            maps_api_key: None,
            category: None,
            contact_email: "carlos@crrelabs.com".into(),
            agency_name: "CRRE Labs".into(),
            agency_url: "https://crrelabs.com".into(),
        }
    }
}

/// 名前から見出し番号（0..3）を決める
///
/// デコード・トリム済みの名前のMD5を128bit整数として読み、3で割った余り。
pub fn headline_index(name: &str) -> usize {
    let clean = decode_entities(name);
    let digest = md5::compute(clean.trim().as_bytes());
    (u128::from_be_bytes(digest.0) % 3) as usize
}

/// 見出しとサブ見出しを作る
pub fn make_value_prop(
    name: &str,
    tokens: &CategoryTokens,
    rating: Option<&str>,
    review_count: Option<&str>,
) -> (String, String) {
    let name_clean = decode_entities(name).trim().to_string();
    let headline = tokens.headlines[headline_index(name)].to_string();

    let mut parts = Vec::new();
    if let Some(rating) = rating {
        let high = rating
            .trim()
            .parse::<f64>()
            .is_ok_and(|r| r >= SUBHEADLINE_RATING_THRESHOLD);
        if high {
            parts.push(format!(
                "Rated {}★ by {}+ customers on Google",
                rating,
                review_count.unwrap_or_default()
            ));
        }
    }
    parts.push(format!("{} — proudly serving the Miami community", name_clean));

    (headline, format!("{}.", parts.join(". ")))
}

/// 星の記号列（常に5文字）
///
/// 評価なしの場合は満点の星を仮置きする。
pub fn render_stars(rating: Option<f64>) -> String {
    let Some(rating) = rating.filter(|r| r.is_finite()) else {
        return "★".repeat(STAR_SLOTS);
    };

    let rating = rating.clamp(0.0, STAR_SLOTS as f64);
    let full = rating.floor() as usize;
    // 4.3 - 4.0 が 0.2999… になるのを避けるため小数第1位で丸める
    let fraction = ((rating - full as f64) * 10.0).round() / 10.0;
    let half = usize::from(full < STAR_SLOTS && fraction >= HALF_STAR_THRESHOLD);

    format!(
        "{}{}{}",
        "★".repeat(full),
        "½".repeat(half),
        "☆".repeat(STAR_SLOTS - full - half)
    )
}

/// `https://` 等を外した表示用URL
fn display_url(url: &str) -> String {
    url.replace("https://", "")
        .replace("http://", "")
        .trim_end_matches('/')
        .to_string()
}

/// 空でないブロックだけを改行でつなぐ
fn join_blocks(blocks: &[String]) -> String {
    blocks
        .iter()
        .filter(|b| !b.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn stylesheet(tokens: &CategoryTokens, photo_url: Option<&str>) -> String {
    let root = format!(
        r#":root{{
  --primary:{primary};
  --primary-dark:{primary_dark};
  --primary-light:{primary_light};
  --text:#1a1a2e;
  --text-muted:#64748b;
  --bg:#ffffff;
  --bg-alt:{section_alt};
  --radius:14px;
  --radius-pill:50px;
  --shadow:0 4px 24px rgba(0,0,0,.06);
  --shadow-hover:0 12px 32px rgba(0,0,0,.12);
  --max-w:1200px;
  --font-heading:{heading_font};
  --font-body:{body_font};
  --heading-weight:{heading_weight};
  --hero-overlay:{hero_overlay};
  --gradient:{gradient};
}}"#,
        primary = tokens.primary,
        primary_dark = tokens.primary_dark,
        primary_light = tokens.primary_light,
        section_alt = tokens.section_alt,
        heading_font = tokens.heading_font,
        body_font = tokens.body_font,
        heading_weight = tokens.heading_weight,
        hero_overlay = tokens.hero_overlay,
        gradient = tokens.gradient,
    );

    let hero_photo = photo_url
        .map(|url| {
            format!(
                ".hero::before{{content:'';position:absolute;inset:0;background:url('{}') center/cover no-repeat;z-index:-1}}\n",
                url
            )
        })
        .unwrap_or_default();

    format!("*{{margin:0;padding:0;box-sizing:border-box}}\n{}\n{}{}", root, hero_photo, BASE_CSS)
}

/// v2ページを生成する
///
/// # Arguments
/// * `fields` - 抽出結果（`name` 以外は任意）
/// * `options` - 運営側の連絡先・APIキー
pub fn render_page(fields: &ExtractedFields, options: &RenderOptions) -> String {
    let business_type = fields.business_type_or_default();
    let category = options.category.unwrap_or_else(|| classify(business_type));
    let tokens = category.tokens();

    let raw_name = fields.name.as_deref().unwrap_or("Business");
    let name = escape_html(raw_name);
    let btype = escape_html(business_type);

    let rating = fields.rating.as_deref();
    let review_count = escape_html(fields.review_count.as_deref().unwrap_or_default());
    let (headline, subheadline) = make_value_prop(raw_name, tokens, rating, fields.review_count.as_deref());
    let headline = escape_html(&headline);
    let subheadline = escape_html(&subheadline);
    let stars = render_stars(fields.rating_value());
    let cta = tokens.cta;
    let cta_heading = escape_html(cta.heading);
    let cta_text = escape_html(cta.text);
    let cta_label = escape_html(cta.label);
    let contact_email = &options.contact_email;
    let agency_name = escape_html(&options.agency_name);
    let agency_url = &options.agency_url;
    let contact_href = format!("mailto:{}?subject=I want my website - {}", contact_email, name);

    let phone = fields.phone.as_ref().map(|p| (p.tel.as_str(), escape_html(&p.display)));
    let rating_text = rating.map(escape_html);

    // --- nav ---
    let mut nav_links = vec![r##"      <a href="#about">About</a>"##.to_string()];
    if fields.place_id.is_some() {
        nav_links.push(r##"      <a href="#contact">Contact</a>"##.to_string());
    }
    if rating.is_some() {
        nav_links.push(r##"      <a href="#reviews">Reviews</a>"##.to_string());
    }
    if let Some((tel, _)) = &phone {
        nav_links.push(format!(r#"      <a href="tel:{}" class="nav-cta">Call Now</a>"#, tel));
    }
    let nav_links = join_blocks(&nav_links);

    // --- hero ---
    let hero_cta = phone
        .as_ref()
        .map(|(tel, display)| {
            format!(r#"    <a href="tel:{}" class="hero-cta">{}: {}</a>"#, tel, cta_label, display)
        })
        .unwrap_or_default();
    let rating_badge = rating_text
        .as_ref()
        .map(|r| {
            format!(
                r#"    <div class="rating-badge"><span class="stars">{}</span><span>{} · {} reviews on Google</span></div>"#,
                stars, r, review_count
            )
        })
        .unwrap_or_default();
    let hero_extras = join_blocks(&[hero_cta, rating_badge]);
    let hero_extras = if hero_extras.is_empty() { hero_extras } else { format!("\n{}", hero_extras) };

    // --- info cards ---
    let location_card = fields
        .address
        .as_deref()
        .map(|address| info_card("📍", "Location", &format!("<p>{}</p>", escape_html(address))))
        .unwrap_or_default();
    let call_card = phone
        .as_ref()
        .map(|(tel, display)| {
            info_card("📞", "Call Us", &format!(r#"<p><a href="tel:{}">{}</a></p>"#, tel, display))
        })
        .unwrap_or_default();
    let rating_card = rating_text
        .as_ref()
        .map(|r| {
            info_card(
                "⭐",
                "Google Rating",
                &format!("<p>{} out of 5 — {} reviews</p>", r, review_count),
            )
        })
        .unwrap_or_default();
    let hours_card = if fields.hours.is_empty() {
        String::new()
    } else {
        let items = fields
            .hours
            .iter()
            .map(|h| format!("          <li>{}</li>", escape_html(h)))
            .collect::<Vec<_>>()
            .join("\n");
        info_card("🕐", "Hours", &format!("<ul class=\"hours-list\">\n{}\n        </ul>", items))
    };
    let website_card = fields
        .website
        .as_deref()
        .map(|url| {
            info_card(
                "🌐",
                "Website",
                &format!(
                    r#"<p><a href="{}" target="_blank">{}</a></p>"#,
                    url,
                    escape_html(&display_url(url))
                ),
            )
        })
        .unwrap_or_default();
    let cards = join_blocks(&[location_card, call_card, rating_card, hours_card, website_card]);
    let info_grid = if cards.is_empty() {
        String::new()
    } else {
        format!("\n    <div class=\"info-grid\">\n{}\n    </div>", cards)
    };

    // --- map ---
    let map_section = fields
        .place_id
        .as_deref()
        .map(|place_id| {
            let key = fields
                .api_key
                .as_deref()
                .or(options.maps_api_key.as_deref())
                .unwrap_or_default();
            format!(
                r#"
<!-- Map -->
<section class="alt" id="contact">
  <div class="container">
    <div class="section-header animate-in">
      <h2>Find Us</h2>
      <p>Stop by anytime — we'd love to see you.</p>
    </div>
    <div class="map-wrap animate-in">
      <iframe src="https://www.google.com/maps/embed/v1/place?key={}&q=place_id:{}" allowfullscreen loading="lazy" referrerpolicy="no-referrer-when-downgrade"></iframe>
    </div>
  </div>
</section>
"#,
                key, place_id
            )
        })
        .unwrap_or_default();

    // --- reviews ---
    let reviews_section = rating_text
        .as_ref()
        .map(|r| {
            format!(
                r#"
<!-- Reviews -->
<section id="reviews">
  <div class="container">
    <div class="section-header animate-in">
      <h2>What Customers Are Saying</h2>
      <p>Don't just take our word for it.</p>
    </div>
    <div class="review-highlight animate-in">
      <div class="big-rating">{}</div>
      <div class="big-stars">{}</div>
      <p class="review-count">Based on {} Google reviews</p>
    </div>
  </div>
</section>
"#,
                r, stars, review_count
            )
        })
        .unwrap_or_default();

    // --- CTA ---
    let cta_button = match &phone {
        Some((tel, display)) => {
            format!(r#"<a href="tel:{}" class="cta-btn">{}: {} →</a>"#, tel, cta_label, display)
        }
        None => format!(r#"<a href="{}" class="cta-btn">Contact {} →</a>"#, contact_href, agency_name),
    };
    let mobile_cta = phone
        .as_ref()
        .map(|(tel, _)| format!("\n<a href=\"tel:{}\" class=\"mobile-cta\">📞 Call Now</a>\n", tel))
        .unwrap_or_default();

    let css = stylesheet(tokens, fields.photo_url.as_deref());
    let google_fonts = tokens.google_fonts;

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{name} — {btype} | Miami, FL</title>
<meta name="description" content="{name} — {btype} in Miami. {subheadline}">
<link rel="preconnect" href="https://fonts.googleapis.com">
<link href="https://fonts.googleapis.com/css2?family={google_fonts}&display=swap" rel="stylesheet">
<style>
{css}</style>
</head>
<body>

<!-- Nav -->
{V2_MARKER}
  <div class="nav-inner">
    <a href="#" class="nav-brand">{name}</a>
    <div class="nav-links" id="navLinks">
{nav_links}
    </div>
    <div class="hamburger" id="hamburger" onclick="document.getElementById('navLinks').classList.toggle('open')">
      <span></span><span></span><span></span>
    </div>
  </div>
</nav>

<!-- Hero -->
<section class="hero">
  <div class="hero-content">
    <p class="category">{btype}</p>
    <h1>{headline}</h1>
    <p class="sub">{subheadline}</p>{hero_extras}
  </div>
</section>

<!-- About / Info -->
<section id="about">
  <div class="container">
    <div class="section-header animate-in">
      <h2>Visit {name}</h2>
      <p>{btype} proudly serving the Miami community.</p>
    </div>{info_grid}
  </div>
</section>
{map_section}{reviews_section}
<!-- CTA -->
<section class="cta-section">
  <h2 class="animate-in">{cta_heading}</h2>
  <p class="animate-in">{cta_text}</p>
  {cta_button}
</section>

<!-- Ready to Go Live -->
<section class="alt">
  <div class="container" style="text-align:center">
    <div class="section-header animate-in">
      <h2>Want a Website Like This?</h2>
      <p>This is a free demo from {agency_name}. We build professional websites for Miami businesses — fast, affordable, and designed to bring in customers.</p>
    </div>
    <a href="{contact_href}" class="cta-btn animate-in" style="background:var(--primary);color:#fff">Get Your Website →</a>
  </div>
</section>

<footer>
  <p>Website by <a href="{agency_url}">{agency_name}</a> · Miami, FL</p>
</footer>
{mobile_cta}
<script>
{SCRIPT}</script>
</body>
</html>"##
    )
}

fn info_card(icon: &str, title: &str, body: &str) -> String {
    format!(
        r#"      <div class="info-card animate-in">
        <div class="icon">{}</div>
        <h3>{}</h3>
        {}
      </div>"#,
        icon, title, body
    )
}

const BASE_CSS: &str = r#"body{font-family:var(--font-body);color:var(--text);line-height:1.6;overflow-x:hidden;background:var(--bg)}

/* === NAV === */
.nav{position:fixed;top:0;left:0;right:0;z-index:100;background:rgba(255,255,255,.92);backdrop-filter:blur(12px);border-bottom:1px solid rgba(0,0,0,.06);transition:all .3s ease;height:72px;display:flex;align-items:center}
.nav.scrolled{height:56px;box-shadow:0 2px 20px rgba(0,0,0,.08)}
.nav-inner{max-width:var(--max-w);margin:0 auto;width:100%;padding:0 2rem;display:flex;align-items:center;justify-content:space-between}
.nav-brand{font-family:var(--font-heading);font-weight:var(--heading-weight);font-size:1.15rem;color:var(--text);text-decoration:none;white-space:nowrap;overflow:hidden;text-overflow:ellipsis;max-width:60%}
.nav-links{display:flex;gap:1.5rem;align-items:center}
.nav-links a{color:var(--text-muted);text-decoration:none;font-size:.9rem;font-weight:500;transition:color .2s}
.nav-links a:hover{color:var(--primary)}
.nav-cta{background:var(--primary);color:#fff!important;padding:.5rem 1.25rem;border-radius:var(--radius-pill);font-weight:600;transition:all .2s}
.nav-cta:hover{background:var(--primary-dark);transform:scale(1.05)}
.hamburger{display:none;flex-direction:column;gap:5px;cursor:pointer;padding:4px}
.hamburger span{width:24px;height:2.5px;background:var(--text);border-radius:2px;transition:all .3s}

/* === HERO === */
.hero{min-height:100vh;display:flex;align-items:center;justify-content:center;text-align:center;color:#fff;padding:6rem 2rem 4rem;background:var(--hero-overlay);position:relative}
.hero-content{max-width:720px}
.hero-content .category{font-size:.85rem;text-transform:uppercase;letter-spacing:4px;opacity:.7;margin-bottom:1rem;font-weight:600}
.hero-content h1{font-family:var(--font-heading);font-weight:var(--heading-weight);font-size:clamp(2.5rem,6vw,4.5rem);margin-bottom:1rem;letter-spacing:-1px;line-height:1.1}
.hero-content .sub{font-size:1.15rem;opacity:.88;max-width:560px;margin:0 auto 2rem;line-height:1.7}
.hero-content .hero-cta{display:inline-block;background:var(--primary);color:#fff;padding:1rem 2.5rem;border-radius:var(--radius-pill);font-size:1.05rem;font-weight:600;text-decoration:none;transition:all .25s;border:2px solid var(--primary)}
.hero-content .hero-cta:hover{background:transparent;color:#fff;border-color:#fff;transform:scale(1.05)}
.rating-badge{display:inline-flex;align-items:center;gap:.5rem;background:rgba(255,255,255,.12);backdrop-filter:blur(10px);border:1px solid rgba(255,255,255,.2);padding:.6rem 1.4rem;border-radius:var(--radius-pill);font-size:.95rem;margin-top:1.5rem}
.rating-badge .stars{color:#fbbf24;font-size:1.15rem}

/* Hero animations */
.hero-content .category{opacity:0;transform:translateY(20px);animation:fadeUp .6s ease .2s forwards}
.hero-content h1{opacity:0;transform:translateY(20px);animation:fadeUp .6s ease .35s forwards}
.hero-content .sub{opacity:0;transform:translateY(20px);animation:fadeUp .6s ease .5s forwards}
.hero-content .hero-cta{opacity:0;transform:translateY(20px);animation:fadeUp .6s ease .65s forwards}
.rating-badge{opacity:0;transform:translateY(20px);animation:fadeUp .6s ease .8s forwards}
@keyframes fadeUp{from{opacity:0;transform:translateY(20px)}to{opacity:1;transform:translateY(0)}}

/* === SECTIONS === */
section{padding:5rem 2rem}
section.alt{background:var(--bg-alt)}
.container{max-width:var(--max-w);margin:0 auto}
.section-header{text-align:center;margin-bottom:3rem}
.section-header h2{font-family:var(--font-heading);font-weight:var(--heading-weight);font-size:clamp(1.8rem,4vw,2.5rem);color:var(--text);margin-bottom:.75rem}
.section-header p{color:var(--text-muted);font-size:1.05rem;max-width:550px;margin:0 auto}

/* === CARDS === */
.info-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(280px,1fr));gap:1.5rem}
.info-card{background:var(--bg);border-radius:var(--radius);padding:2rem;box-shadow:var(--shadow);transition:all .3s ease;text-align:center}
.info-card:hover{transform:translateY(-6px);box-shadow:var(--shadow-hover)}
.info-card .icon{font-size:2.5rem;margin-bottom:1rem}
.info-card h3{font-size:1.05rem;margin-bottom:.5rem;color:var(--text)}
.info-card p,.info-card li{color:var(--text-muted);font-size:.95rem}
.info-card a{color:var(--primary);text-decoration:none;font-weight:500}
.info-card a:hover{text-decoration:underline}
.hours-list{list-style:none;text-align:left;padding-left:.5rem}
.hours-list li{padding:.25rem 0;border-bottom:1px solid rgba(0,0,0,.04);font-size:.9rem}

/* === MAP === */
.map-wrap{border-radius:var(--radius);overflow:hidden;box-shadow:var(--shadow);margin-top:2rem}
.map-wrap iframe{width:100%;height:400px;border:0}

/* === REVIEWS === */
.review-highlight{background:var(--bg);border-radius:var(--radius);padding:3rem;box-shadow:var(--shadow);text-align:center;max-width:500px;margin:0 auto}
.review-highlight .big-rating{font-size:4.5rem;font-weight:800;color:var(--text);line-height:1}
.review-highlight .big-stars{color:#fbbf24;font-size:2rem;margin:.75rem 0}
.review-highlight .review-count{color:var(--text-muted);font-size:1rem}

/* === CTA === */
.cta-section{background:var(--gradient);color:#fff;text-align:center;padding:5rem 2rem}
.cta-section h2{font-family:var(--font-heading);font-weight:var(--heading-weight);font-size:clamp(1.8rem,4vw,2.8rem);margin-bottom:1rem}
.cta-section p{opacity:.85;max-width:520px;margin:0 auto 2rem;font-size:1.1rem;line-height:1.7}
.cta-btn{display:inline-block;background:#fff;color:var(--primary-dark);padding:1rem 2.5rem;border-radius:var(--radius-pill);font-size:1.05rem;font-weight:700;text-decoration:none;transition:all .25s;box-shadow:0 4px 16px rgba(0,0,0,.15)}
.cta-btn:hover{transform:scale(1.05);box-shadow:0 8px 24px rgba(0,0,0,.2)}

/* Pulse animation on CTA */
@keyframes pulse{0%,100%{box-shadow:0 0 0 0 rgba(255,255,255,.3)}50%{box-shadow:0 0 0 12px rgba(255,255,255,0)}}
.cta-btn{animation:pulse 2.5s ease infinite}

/* === FOOTER === */
footer{text-align:center;padding:2.5rem;font-size:.85rem;color:var(--text-muted);border-top:1px solid rgba(0,0,0,.06)}
footer a{color:var(--primary);text-decoration:none;font-weight:500}

/* === SCROLL ANIMATIONS === */
.animate-in{opacity:0;transform:translateY(24px);transition:opacity .6s ease,transform .6s ease}
.animate-in.visible{opacity:1;transform:translateY(0)}
.animate-in:nth-child(2){transition-delay:.1s}
.animate-in:nth-child(3){transition-delay:.2s}
.animate-in:nth-child(4){transition-delay:.3s}

/* === MOBILE === */
.mobile-cta{display:none}

@media(max-width:768px){
  .nav-links{position:fixed;top:0;right:-100%;width:280px;height:100vh;background:var(--bg);flex-direction:column;padding:5rem 2rem 2rem;box-shadow:-4px 0 24px rgba(0,0,0,.1);transition:right .3s ease;gap:1.5rem}
  .nav-links.open{right:0}
  .nav-links a{font-size:1.1rem}
  .hamburger{display:flex}
  .hero{min-height:90vh;padding:5rem 1.5rem 3rem}
  .hero-content h1{font-size:clamp(2rem,8vw,3rem)}
  section{padding:3.5rem 1.5rem}
  .info-grid{grid-template-columns:1fr}
  .map-wrap iframe{height:280px}
  .mobile-cta{display:flex;position:fixed;bottom:0;left:0;right:0;background:var(--primary);color:#fff;text-decoration:none;font-weight:700;font-size:1rem;justify-content:center;align-items:center;padding:1rem;z-index:99;gap:.5rem;box-shadow:0 -4px 16px rgba(0,0,0,.1)}
}
"#;

const SCRIPT: &str = r#"// Sticky nav shrink
const nav = document.querySelector('.nav');
window.addEventListener('scroll', () => {
  nav.classList.toggle('scrolled', window.scrollY > 60);
});

// Scroll reveal
const observer = new IntersectionObserver((entries) => {
  entries.forEach(entry => {
    if (entry.isIntersecting) {
      entry.target.classList.add('visible');
    }
  });
}, { threshold: 0.1 });
document.querySelectorAll('.animate-in').forEach(el => observer.observe(el));

// Close mobile nav on link click
document.querySelectorAll('#navLinks a').forEach(a => {
  a.addEventListener('click', () => document.getElementById('navLinks').classList.remove('open'));
});

// Close mobile nav on outside click
document.addEventListener('click', (e) => {
  const nav = document.getElementById('navLinks');
  const hamburger = document.getElementById('hamburger');
  if (!nav.contains(e.target) && !hamburger.contains(e.target)) {
    nav.classList.remove('open');
  }
});
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_fields;
    use crate::types::Phone;

    fn count_glyphs(stars: &str) -> (usize, usize, usize) {
        (
            stars.matches('★').count(),
            stars.matches('½').count(),
            stars.matches('☆').count(),
        )
    }

    #[test]
    fn test_stars_with_half() {
        assert_eq!(count_glyphs(&render_stars(Some(4.7))), (4, 1, 0));
    }

    #[test]
    fn test_stars_whole_number() {
        assert_eq!(count_glyphs(&render_stars(Some(3.0))), (3, 0, 2));
    }

    #[test]
    fn test_stars_absent_placeholder() {
        assert_eq!(render_stars(None), "★★★★★");
    }

    #[test]
    fn test_stars_fraction_boundary() {
        assert_eq!(count_glyphs(&render_stars(Some(4.3))), (4, 1, 0));
        assert_eq!(count_glyphs(&render_stars(Some(4.2))), (4, 0, 1));
        assert_eq!(count_glyphs(&render_stars(Some(5.0))), (5, 0, 0));
    }

    #[test]
    fn test_stars_always_five_glyphs() {
        for r in [0.0, 0.4, 1.5, 2.29, 3.3, 4.99, 5.0, 7.5, -1.0] {
            assert_eq!(render_stars(Some(r)).chars().count(), 5, "rating {}", r);
        }
    }

    #[test]
    fn test_headline_index_is_deterministic() {
        let first = headline_index("Joe's Pizza");
        for _ in 0..10 {
            assert_eq!(headline_index("Joe's Pizza"), first);
        }
        assert!(first < 3);
    }

    #[test]
    fn test_headline_index_ignores_entities_and_whitespace() {
        assert_eq!(headline_index("  Tom &amp; Jerry "), headline_index("Tom & Jerry"));
    }

    #[test]
    fn test_headline_index_matches_md5_mod_3() {
        // md5("") = d41d8cd98f00b204e9800998ecf8427e
        let value = u128::from_str_radix("d41d8cd98f00b204e9800998ecf8427e", 16).unwrap();
        assert_eq!(headline_index(""), (value % 3) as usize);
    }

    #[test]
    fn test_value_prop_high_rating() {
        let tokens = Category::Restaurant.tokens();
        let (headline, sub) = make_value_prop("Joe's", tokens, Some("4.8"), Some("120"));
        assert!(tokens.headlines.contains(&headline.as_str()));
        assert_eq!(
            sub,
            "Rated 4.8★ by 120+ customers on Google. Joe's — proudly serving the Miami community."
        );
    }

    #[test]
    fn test_value_prop_low_rating() {
        let tokens = Category::Auto.tokens();
        let (_, sub) = make_value_prop("Fix-It", tokens, Some("4.1"), Some("9"));
        assert_eq!(sub, "Fix-It — proudly serving the Miami community.");
    }

    #[test]
    fn test_display_url() {
        assert_eq!(display_url("https://example.com/"), "example.com");
        assert_eq!(display_url("http://example.com/menu/"), "example.com/menu");
    }

    #[test]
    fn test_render_minimal_page() {
        let fields = ExtractedFields {
            name: Some("Solo".to_string()),
            ..Default::default()
        };
        let html = render_page(&fields, &RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains(V2_MARKER));
        assert!(html.contains("<title>Solo — Business | Miami, FL</title>"));

        // 任意ブロックはすべて省略
        for absent in [
            "info-grid\"",
            "class=\"info-card",
            "rating-badge\">",
            "id=\"reviews\"",
            "id=\"contact\"",
            "tel:",
            "hours-list\">",
            "class=\"mobile-cta\"",
            ".hero::before",
        ] {
            assert!(!html.contains(absent), "unexpected: {}", absent);
        }

        // 電話なしならメールのCTA
        assert!(html.contains("mailto:carlos@crrelabs.com?subject=I want my website - Solo"));
        assert_eq!(html.matches("<section").count(), html.matches("</section>").count());
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_extract_then_render_name_only_document() {
        let fields = extract_fields("<title>Solo</title>");
        let html = render_page(&fields, &RenderOptions::default());

        assert!(html.contains(V2_MARKER));
        assert!(html.contains("<title>Solo — Business | Miami, FL</title>"));
        assert!(html.contains("<p class=\"sub\">Solo — proudly serving the Miami community.</p>"));
        for absent in ["None", "tel:", "id=\"contact\"", "hours-list\">", "rating-badge\">"] {
            assert!(!html.contains(absent), "unexpected: {}", absent);
        }
        assert_eq!(html.matches("<section").count(), html.matches("</section>").count());
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_render_full_page() {
        let fields = ExtractedFields {
            name: Some("Joe's <Pizza>".to_string()),
            business_type: Some("Pizza Restaurant".to_string()),
            phone: Phone::from_digits("13055550100"),
            place_id: Some("ChIJabc".to_string()),
            photo_url: Some("https://places.googleapis.com/v1/photo".to_string()),
            rating: Some("4.7".to_string()),
            review_count: Some("1,234".to_string()),
            address: Some("1 Main St & 2nd Ave".to_string()),
            desc: None,
            api_key: Some("PAGEKEY".to_string()),
            website: Some("https://joes.example/".to_string()),
            hours: vec!["Mon: 9–5".to_string(), "Tue: <closed>".to_string()],
        };
        let html = render_page(&fields, &RenderOptions::default());

        assert!(html.contains("Joe&#x27;s &lt;Pizza&gt;"));
        assert!(!html.contains("Joe's <Pizza>"));
        assert!(html.contains(r#"<a href="tel:+13055550100" class="nav-cta">Call Now</a>"#));
        assert!(html.contains("Call to Order: (305) 555-0100"));
        assert!(html.contains("★★★★½"));
        assert!(html.contains("4.7 · 1,234 reviews on Google"));
        assert!(html.contains("1 Main St &amp; 2nd Ave"));
        assert!(html.contains("<li>Tue: &lt;closed&gt;</li>"));
        assert!(html.contains(r#"<a href="https://joes.example/" target="_blank">joes.example</a>"#));
        assert!(html.contains("place?key=PAGEKEY&q=place_id:ChIJabc"));
        assert!(html.contains("url('https://places.googleapis.com/v1/photo')"));
        assert!(html.contains(r#"id="reviews""#));
        assert!(html.contains(r#"class="mobile-cta""#));
        assert!(html.contains("--primary:#c2410c;"));
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_map_key_falls_back_to_options() {
        let fields = ExtractedFields {
            name: Some("Mapped".to_string()),
            place_id: Some("PID".to_string()),
            ..Default::default()
        };
        let options = RenderOptions {
            maps_api_key: Some("CONFIGKEY".to_string()),
            ..Default::default()
        };
        let html = render_page(&fields, &options);
        assert!(html.contains("place?key=CONFIGKEY&q=place_id:PID"));
        assert!(html.contains(r##"<a href="#contact">Contact</a>"##));
    }

    #[test]
    fn test_category_override() {
        let fields = ExtractedFields {
            name: Some("Care Team".to_string()),
            business_type: Some("Home Health Care".to_string()),
            ..Default::default()
        };
        let classified = render_page(&fields, &RenderOptions::default());
        assert!(classified.contains("--primary:#1d4ed8;"));

        let options = RenderOptions {
            category: Some(Category::Health),
            ..Default::default()
        };
        let overridden = render_page(&fields, &options);
        assert!(overridden.contains("--primary:#0891b2;"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let fields = ExtractedFields {
            name: Some("Repeat Cafe".to_string()),
            business_type: Some("Cafe".to_string()),
            ..Default::default()
        };
        let options = RenderOptions::default();
        assert_eq!(render_page(&fields, &options), render_page(&fields, &options));
    }
}
