use crate::error::{DemoError, Result};
use demo_refresh_common::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maps APIキーを上書きする環境変数
pub const MAPS_API_KEY_ENV: &str = "DEMO_MAPS_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub maps_api_key: Option<String>,
    pub contact_email: String,
    pub agency_name: String,
    pub agency_url: String,
    /// バナーに埋め込む決済リンク（checkoutで置換される）
    pub promo_link: String,
    /// サイト別チェックアウトURLのベース
    pub checkout_base: String,
}

impl Default for Config {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            maps_api_key: None,
            contact_email: render.contact_email,
            agency_name: render.agency_name,
            agency_url: render.agency_url,
            promo_link: "https://buy.stripe.com/test_fZu28kbVF7yGeE89zb33W00".into(),
            checkout_base: "https://checkout-zeta-seven.vercel.app".into(),
        }
    }
}

impl Config {
    /// 既定の場所から読み込む（なければ既定値）
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default().with_env())
        }
    }

    /// 指定ファイルから読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DemoError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config.with_env())
    }

    /// 指定ファイルへ保存する（親フォルダがなければ作る）
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DemoError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("demo-refresh").join("config.json"))
    }

    // 環境変数を優先
    fn with_env(mut self) -> Self {
        if let Ok(key) = std::env::var(MAPS_API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.maps_api_key = Some(key);
            }
        }
        self
    }

    /// Maps APIキーを設定し、読み込んだのと同じファイルへ保存する
    pub fn set_maps_api_key(&mut self, key: String, path: &Path) -> Result<()> {
        self.maps_api_key = Some(key);
        self.save_to(path)
    }

    /// 描画オプションに変換
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            maps_api_key: self.maps_api_key.clone(),
            category: None,
            contact_email: self.contact_email.clone(),
            agency_name: self.agency_name.clone(),
            agency_url: self.agency_url.clone(),
        }
    }
}
