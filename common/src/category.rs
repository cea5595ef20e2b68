//! 業種カテゴリとデザイントークン
//!
//! カテゴリ表は宣言順に評価する決定リスト。
//! 複数カテゴリのキーワードに該当する場合は先に宣言されたものが勝つ。

use crate::error::{Error, Result};
use serde::Serialize;

/// デザインカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurant,
    Beauty,
    Auto,
    Retail,
    Professional,
    Health,
}

impl Category {
    /// どのキーワードにも該当しない場合のカテゴリ
    pub const FALLBACK: Category = Category::Retail;

    pub fn id(&self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Beauty => "beauty",
            Category::Auto => "auto",
            Category::Retail => "retail",
            Category::Professional => "professional",
            Category::Health => "health",
        }
    }

    /// カテゴリのデザイントークン
    pub fn tokens(&self) -> &'static CategoryTokens {
        CATEGORY_TABLE
            .iter()
            .find(|t| t.category == *self)
            .unwrap_or(&CATEGORY_TABLE[FALLBACK_INDEX])
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().to_lowercase();
        CATEGORY_TABLE
            .iter()
            .map(|t| t.category)
            .find(|c| c.id() == id)
            .ok_or_else(|| Error::Parse(format!("unknown category: {}", s)))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// 締めのCTAセクション文言
#[derive(Debug, Clone, Copy)]
pub struct CallToAction {
    pub heading: &'static str,
    pub text: &'static str,
    pub label: &'static str,
}

/// カテゴリごとの配色・フォント・定型コピー
#[derive(Debug, Clone, Copy)]
pub struct CategoryTokens {
    pub category: Category,
    pub keywords: &'static [&'static str],
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub primary_light: &'static str,
    pub gradient: &'static str,
    pub hero_overlay: &'static str,
    pub section_alt: &'static str,
    pub heading_font: &'static str,
    pub heading_weight: &'static str,
    pub body_font: &'static str,
    /// Google Fonts の `family=` クエリ
    pub google_fonts: &'static str,
    pub headlines: [&'static str; 3],
    pub cta: CallToAction,
}

const FALLBACK_INDEX: usize = 3;

/// カテゴリ表（宣言順が判定順）
pub static CATEGORY_TABLE: [CategoryTokens; 6] = [
    CategoryTokens {
        category: Category::Restaurant,
        keywords: &[
            "restaurant", "food truck", "food", "bakery", "pizza", "grill", "cafe", "coffee",
            "bistro", "taco", "sushi", "diner", "barbecue", "bbq", "chicken", "burger",
            "seafood", "ice cream", "juice", "smoothie", "tea", "pastry", "catering", "arepa",
            "empanada",
        ],
        primary: "#c2410c",
        primary_dark: "#9a3412",
        primary_light: "#fed7aa",
        gradient: "linear-gradient(135deg, #1a0a00 0%, #7c2d12 50%, #c2410c 100%)",
        hero_overlay: "rgba(26,10,0,0.6)",
        section_alt: "#fef3e2",
        heading_font: "'Playfair Display', serif",
        heading_weight: "700",
        body_font: "'DM Sans', sans-serif",
        google_fonts: "Playfair+Display:wght@700&family=DM+Sans:wght@400;500;600;700",
        headlines: [
            "Bold Flavors, Made Fresh — Right Here in Miami",
            "Authentic Taste That Keeps Miami Coming Back",
            "Fresh Ingredients, Unforgettable Flavor",
        ],
        cta: CallToAction {
            heading: "Hungry? Come Find Us",
            text: "Fresh food is waiting — stop by today or give us a call to place your order.",
            label: "Call to Order",
        },
    },
    CategoryTokens {
        category: Category::Beauty,
        keywords: &[
            "nail", "salon", "spa", "beauty", "hair", "barber", "wax", "lash", "brow", "makeup",
            "skincare", "tanning", "massage", "barbershop", "tonsorial",
        ],
        primary: "#9f1239",
        primary_dark: "#881337",
        primary_light: "#fce7f3",
        gradient: "linear-gradient(135deg, #1a0a12 0%, #4a0520 50%, #9f1239 100%)",
        hero_overlay: "rgba(26,10,18,0.6)",
        section_alt: "#fdf2f8",
        heading_font: "'Cormorant Garamond', serif",
        heading_weight: "600",
        body_font: "'Nunito', sans-serif",
        google_fonts: "Cormorant+Garamond:wght@600;700&family=Nunito:wght@400;500;600;700",
        headlines: [
            "Your Beauty Experience, Elevated",
            "Where Miami Comes to Look Amazing",
            "Luxury Meets Artistry — Walk-Ins Welcome",
        ],
        cta: CallToAction {
            heading: "Ready for a New Look?",
            text: "Book your appointment today and experience the difference.",
            label: "Book Now",
        },
    },
    CategoryTokens {
        category: Category::Auto,
        keywords: &[
            "tire", "auto", "car", "mechanic", "body shop", "towing", "oil change",
            "transmission", "wheel", "mobile tire", "car wash", "detailing", "maintenance",
        ],
        primary: "#1d4ed8",
        primary_dark: "#1e3a8a",
        primary_light: "#dbeafe",
        gradient: "linear-gradient(135deg, #0c1929 0%, #1e3a8a 50%, #1d4ed8 100%)",
        hero_overlay: "rgba(12,25,41,0.65)",
        section_alt: "#f0f4ff",
        heading_font: "'Montserrat', sans-serif",
        heading_weight: "800",
        body_font: "'Inter', sans-serif",
        google_fonts: "Montserrat:wght@700;800&family=Inter:wght@400;500;600;700",
        headlines: [
            "Expert Auto Service You Can Trust",
            "Honest Repairs, Fair Prices — Every Time",
            "Miami's Go-To for Reliable Auto Care",
        ],
        cta: CallToAction {
            heading: "Need Service Today?",
            text: "Call now for honest, fast auto service at fair prices.",
            label: "Call for a Quote",
        },
    },
    CategoryTokens {
        category: Category::Retail,
        keywords: &[
            "market", "supermarket", "store", "shop", "jewelry", "boutique", "thrift", "supply",
            "pet store", "smoke shop", "laundry", "coin laundry",
        ],
        primary: "#0f172a",
        primary_dark: "#020617",
        primary_light: "#e2e8f0",
        gradient: "linear-gradient(135deg, #0f172a 0%, #1e293b 50%, #334155 100%)",
        hero_overlay: "rgba(15,23,42,0.6)",
        section_alt: "#f8fafc",
        heading_font: "'Plus Jakarta Sans', sans-serif",
        heading_weight: "700",
        body_font: "'Inter', sans-serif",
        google_fonts: "Plus+Jakarta+Sans:wght@600;700;800&family=Inter:wght@400;500;600;700",
        headlines: [
            "Quality Selection, Everyday Value",
            "Your Neighborhood Destination in Miami",
            "Curated With Care, Priced to Please",
        ],
        cta: CallToAction {
            heading: "Come See Us Today",
            text: "Visit our store and discover what makes us a neighborhood favorite.",
            label: "Get Directions",
        },
    },
    CategoryTokens {
        category: Category::Professional,
        keywords: &[
            "insurance", "legal", "lawyer", "attorney", "accountant", "tax", "finance",
            "consulting", "real estate", "agency", "notary",
        ],
        primary: "#0d4f4f",
        primary_dark: "#064e3b",
        primary_light: "#d1fae5",
        gradient: "linear-gradient(135deg, #022c22 0%, #064e3b 50%, #0d9488 100%)",
        hero_overlay: "rgba(2,44,34,0.65)",
        section_alt: "#f0fdf4",
        heading_font: "'Source Serif 4', serif",
        heading_weight: "700",
        body_font: "'Inter', sans-serif",
        google_fonts: "Source+Serif+4:wght@600;700&family=Inter:wght@400;500;600;700",
        headlines: [
            "Trusted Expertise When It Matters Most",
            "Professional Results, Personal Attention",
            "Your Partner in Smart Decision-Making",
        ],
        cta: CallToAction {
            heading: "Let's Talk About Your Needs",
            text: "Schedule a consultation and discover how we can help.",
            label: "Schedule Consultation",
        },
    },
    CategoryTokens {
        category: Category::Health,
        keywords: &[
            "dental", "doctor", "clinic", "hospital", "veterinary", "vet", "animal", "medical",
            "pharmacy", "health", "chiropractic", "physical therapy", "optician", "eye",
        ],
        primary: "#0891b2",
        primary_dark: "#155e75",
        primary_light: "#cffafe",
        gradient: "linear-gradient(135deg, #0c1929 0%, #155e75 50%, #0891b2 100%)",
        hero_overlay: "rgba(12,25,41,0.6)",
        section_alt: "#ecfeff",
        heading_font: "'Nunito', sans-serif",
        heading_weight: "700",
        body_font: "'Inter', sans-serif",
        google_fonts: "Nunito:wght@600;700;800&family=Inter:wght@400;500;600;700",
        headlines: [
            "Compassionate Care for Your Whole Family",
            "Expert Care in a Warm, Welcoming Space",
            "Where Your Health Comes First",
        ],
        cta: CallToAction {
            heading: "Book Your Visit Today",
            text: "Your health matters — call us or book online to get started.",
            label: "Book Appointment",
        },
    },
];

/// 業種文字列をカテゴリに分類する
///
/// 小文字化した入力に対し、表の宣言順・キーワード順で部分一致を調べ、
/// 最初に一致したカテゴリを返す。
pub fn classify(business_type: &str) -> Category {
    let bt = business_type.to_lowercase();

    CATEGORY_TABLE
        .iter()
        .find(|tokens| tokens.keywords.iter().any(|kw| bt.contains(kw)))
        .map(|tokens| tokens.category)
        .unwrap_or(Category::FALLBACK)
}
