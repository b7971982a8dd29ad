use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, OnceLock};
use thiserror::Error;

/// Post index served to the pages. Filled once at server start.
pub static POST_INDEX: OnceLock<Vec<Post>> = OnceLock::new();

static SCALE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)/c_scale.*?/").expect("scale segment regex should compile"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeadingLevel {
    Number(u8),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontmatterHeading {
    pub level: HeadingLevel,
    pub text: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontmatterAuthor {
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub name: Option<String>,
    pub website_url: Option<String>,
    pub twitter_username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub date: String,
    pub author: String,
}

/// Metadata block at the top of a post source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub slug: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub edit_url: Option<String>,
    pub image_url: Option<String>,
    pub read_time: Option<String>,
    pub auth: Option<FrontmatterAuthor>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub last_edited: Option<Edit>,
    pub published: Option<Edit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
}

/// What the cards render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub read_time_minutes: f64,
    pub author: Option<Author>,
    pub date: DateTime<Utc>,
}

impl Post {
    /// Whole minutes for the "min read" badge.
    pub fn read_time(&self) -> u32 {
        self.read_time_minutes.round().max(0.0) as u32
    }
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Couldn't read post index {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Couldn't parse post index")]
    Parse(#[from] serde_json::Error),
    #[error("Post index already loaded")]
    AlreadyLoaded,
}

/// Parse a JSON array of posts, newest first. Entries that don't fit the
/// [`Post`] shape are skipped; only a malformed array is an error.
pub fn parse_post_index(json: &str) -> Result<Vec<Post>, ContentError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut posts = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let slug = entry
                .get("slug")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("<no slug>")
                .to_string();
            serde_json::from_value::<Post>(entry)
                .map_err(|e| log::warn!("skipping post #{i} ({slug}): {e}"))
                .ok()
        })
        .collect::<Vec<_>>();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

/// Read the post index from disk into [`POST_INDEX`]. Returns the post count.
pub fn load_post_index(path: &Path) -> Result<usize, ContentError> {
    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_owned(),
        source,
    })?;
    let posts = parse_post_index(&json)?;
    let count = posts.len();
    POST_INDEX
        .set(posts)
        .map_err(|_| ContentError::AlreadyLoaded)?;
    Ok(count)
}

pub fn post_index() -> Option<&'static [Post]> {
    POST_INDEX.get().map(Vec::as_slice)
}

/// Low resolution variant of a Cloudinary image URL, shown while the full one loads.
pub fn fallback_image_src(image_url: &str) -> String {
    let is_gif = image_url
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext == "gif");
    let replacement = if is_gif { "/w_50/" } else { "/c_scale,w_0.01/" };
    SCALE_SEGMENT.replace_all(image_url, replacement).into_owned()
}

/// First `max` characters of `text`, with an ellipsis when something was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", text[..end].trim_end()),
        None => text.to_string(),
    }
}

/// Where clicking an author should lead.
pub fn author_profile(author: &Author, owner: &str) -> String {
    if author.name == owner {
        return "/about".to_string();
    }
    if let Some(site) = author.website_url.as_deref().filter(|s| !s.is_empty()) {
        return format!("{}/about", site.trim_end_matches('/'));
    }
    author
        .github_url
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "#".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INDEX: &str = r#"[
        {
            "slug": "/blog/older",
            "title": "Older",
            "imageUrl": "https://res.cloudinary.com/demo/image/upload/c_scale,w_1200/v1/older.png",
            "readTimeMinutes": 3,
            "date": "2021-03-01T00:00:00Z"
        },
        {
            "slug": "/blog/newer",
            "title": "Newer",
            "description": "Hooks all the way down",
            "imageUrl": "https://res.cloudinary.com/demo/image/upload/c_scale,w_1200/v1/newer.gif",
            "tags": ["react", "rust"],
            "readTimeMinutes": 7,
            "author": {
                "name": "Jane Doe",
                "avatarUrl": "https://example.com/jane.png",
                "githubUrl": "https://github.com/janedoe",
                "websiteUrl": "https://janedoe.dev"
            },
            "date": "2022-06-15T12:00:00Z"
        }
    ]"#;

    #[test]
    fn test_parse_post_index_sorts_newest_first() {
        let posts = parse_post_index(INDEX).expect("index should parse");
        assert_eq!(
            posts.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
            vec!["Newer", "Older"]
        );
        let older = &posts[1];
        assert!(older.tags.is_empty());
        assert!(older.author.is_none());
        assert_eq!(older.description, "");
        assert_eq!(posts[0].read_time(), 7);
    }

    #[test]
    fn test_parse_post_index_skips_bad_entries() {
        let posts = parse_post_index(
            r#"[
                {
                    "slug": "/blog/fine",
                    "title": "Fine",
                    "imageUrl": "https://example.com/fine.png",
                    "readTimeMinutes": 4.5,
                    "date": "2021-05-02T00:00:00Z"
                },
                {
                    "slug": "/blog/date-only",
                    "title": "Date only",
                    "imageUrl": "https://example.com/date.png",
                    "readTimeMinutes": 2,
                    "date": "2021-05-02"
                },
                { "slug": "/blog/untitled" },
                "not even an object"
            ]"#,
        )
        .expect("array should parse");
        assert_eq!(
            posts.iter().map(|p| p.slug.as_str()).collect::<Vec<_>>(),
            vec!["/blog/fine"]
        );
        assert_eq!(posts[0].read_time_minutes, 4.5);
        // rounds half away from zero
        assert_eq!(posts[0].read_time(), 5);
    }

    #[test]
    fn test_parse_post_index_rejects_garbage() {
        assert!(matches!(
            parse_post_index("{not json"),
            Err(ContentError::Parse(_))
        ));
        assert!(matches!(
            parse_post_index(r#"{"slug": "x"}"#),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_load_post_index_missing_file() {
        let err = load_post_index(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn test_frontmatter_shape() {
        let fm: Frontmatter = serde_json::from_str(
            r#"{
                "title": "Hello",
                "readTime": "4",
                "auth": { "name": "Jane", "twitterUsername": "jane" },
                "tags": ["intro"],
                "published": { "date": "2021-01-01", "author": "Jane" }
            }"#,
        )
        .expect("frontmatter should parse");
        assert_eq!(fm.title, "Hello");
        assert_eq!(fm.read_time.as_deref(), Some("4"));
        assert_eq!(
            fm.auth.and_then(|a| a.twitter_username).as_deref(),
            Some("jane")
        );
        assert!(fm.last_edited.is_none());
        assert_eq!(fm.published.map(|p| p.author), Some("Jane".to_string()));

        let fm: Frontmatter = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_heading_level_accepts_number_or_text() {
        let headings: Vec<FrontmatterHeading> = serde_json::from_str(
            r#"[{"level": 2, "text": "Intro", "id": "intro"},
                {"level": "h3", "text": "Details", "id": "details"}]"#,
        )
        .unwrap();
        assert_eq!(headings[0].level, HeadingLevel::Number(2));
        assert_eq!(headings[1].level, HeadingLevel::Text("h3".to_string()));
    }

    #[test]
    fn test_fallback_image_src() {
        assert_eq!(
            fallback_image_src(
                "https://res.cloudinary.com/demo/image/upload/c_scale,w_1200/v1/cover.png"
            ),
            "https://res.cloudinary.com/demo/image/upload/c_scale,w_0.01/v1/cover.png"
        );
        assert_eq!(
            fallback_image_src(
                "https://res.cloudinary.com/demo/image/upload/c_scale,w_1200/v1/loop.gif"
            ),
            "https://res.cloudinary.com/demo/image/upload/w_50/v1/loop.gif"
        );
        // extension match is exact, upper case is treated like any still image
        assert_eq!(
            fallback_image_src(
                "https://res.cloudinary.com/demo/image/upload/c_scale,w_1200/v1/LOOP.GIF"
            ),
            "https://res.cloudinary.com/demo/image/upload/c_scale,w_0.01/v1/LOOP.GIF"
        );
        assert_eq!(
            fallback_image_src("https://example.com/plain.jpg"),
            "https://example.com/plain.jpg"
        );
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly", 7), "exactly");
        assert_eq!(truncate_chars("hello world", 6), "hello...");
        // multi-byte characters are never split
        assert_eq!(truncate_chars("héllo wörld", 4), "héll...");
    }

    #[test]
    fn test_author_profile() {
        let mut author = Author {
            name: "Jane Doe".to_string(),
            avatar_url: None,
            github_url: Some("https://github.com/janedoe".to_string()),
            website_url: Some("https://janedoe.dev/".to_string()),
        };
        assert_eq!(author_profile(&author, "Jane Doe"), "/about");
        assert_eq!(author_profile(&author, "Someone Else"), "https://janedoe.dev/about");

        author.website_url = None;
        assert_eq!(author_profile(&author, "Someone Else"), "https://github.com/janedoe");

        author.github_url = None;
        assert_eq!(author_profile(&author, "Someone Else"), "#");
    }
}
