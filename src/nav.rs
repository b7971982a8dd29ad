use serde::{Deserialize, Serialize};

/// A static navigation entry. Owned by whoever builds the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavRoute {
    pub href: String,
    pub label: String,
}

impl NavRoute {
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
        }
    }
}

/// How a link decides it belongs to the current route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveMatch {
    /// Pathname contains the link group anywhere. `/about` lights up on `/about-me`.
    #[default]
    Substring,
    /// First path segment must equal the link group.
    Segment,
}

/// Second element of `href.split('/')`, i.e. `blog` for `/blog/some-post`.
pub fn link_group(href: &str) -> Option<&str> {
    href.split('/').nth(1).filter(|g| !g.is_empty())
}

pub fn is_active(href: &str, pathname: &str, matching: ActiveMatch) -> bool {
    let Some(group) = link_group(href) else {
        return false;
    };
    match matching {
        ActiveMatch::Substring => pathname.contains(group),
        ActiveMatch::Segment => link_group(pathname) == Some(group),
    }
}
