use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::nav::NavRoute;

/// Env var naming the JSON post index the server loads at startup.
pub const POSTS_FILE_ENV: &str = "SITE_POSTS_FILE";
pub const DEFAULT_POSTS_FILE: &str = "content/posts.json";

/// Site identity shared by the shell, header and cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    /// Posts by this author link to the local about page.
    pub owner: String,
    pub base_url: String,
    pub theme_color: String,
    pub nav_routes: Vec<NavRoute>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Divine Hycenth".to_string(),
            owner: "Divine Hycenth".to_string(),
            base_url: "https://divinehycenth.com".to_string(),
            theme_color: "#111516".to_string(),
            nav_routes: vec![
                NavRoute::new("/blog", "Blog"),
                NavRoute::new("/about", "About"),
                NavRoute::new("/works", "Works"),
                NavRoute::new("/contact", "contact"),
            ],
        }
    }
}

impl SiteConfig {
    pub fn page_title(&self, page: &str) -> String {
        if page.is_empty() {
            self.title.clone()
        } else {
            format!("{page} - {}", self.title)
        }
    }

    /// Absolute URL of a route on the public site.
    pub fn canonical_url(&self, pathname: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        match pathname.trim_start_matches('/') {
            "" => format!("{base}/"),
            path => format!("{base}/{path}"),
        }
    }
}

pub fn posts_file() -> PathBuf {
    std::env::var_os(POSTS_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_POSTS_FILE))
}
