//! Demo Refresh Common Library
//!
//! デモサイト生成の中核ロジック（ファイルI/Oなし）
//! - 旧ページからの情報抽出
//! - 業種カテゴリの判定
//! - v2ページの生成

pub mod entities;
pub mod error;
pub mod types;
pub mod extract;
pub mod category;
pub mod render;

pub use types::{ExtractedFields, Phone};
pub use error::{Error, Result};
pub use extract::extract_fields;
pub use category::{classify, Category, CategoryTokens, CATEGORY_TABLE};
pub use render::{render_page, render_stars, headline_index, RenderOptions, V2_MARKER};
