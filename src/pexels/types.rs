use serde::Deserialize;

/// One page of `/search` results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    pub page: i64,
    pub per_page: i64,
    pub total_results: u64,
    #[serde(default)]
    pub next_page: Option<String>,
    pub photos: Vec<Photo>,
}

impl SearchResult {
    pub fn has_next_page(&self) -> bool {
        has_next_page(&self.next_page)
    }
}

/// One page of the `/curated` feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CuratedResult {
    pub page: i64,
    pub per_page: i64,
    #[serde(default)]
    pub next_page: Option<String>,
    pub photos: Vec<Photo>,
}

impl CuratedResult {
    pub fn has_next_page(&self) -> bool {
        has_next_page(&self.next_page)
    }
}

fn has_next_page(next_page: &Option<String>) -> bool {
    next_page.as_deref().is_some_and(|url| !url.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub src: PhotoSource,

    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub photographer: Option<String>,
    #[serde(default)]
    pub photographer_url: Option<String>,
    #[serde(default)]
    pub avg_color: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Photo {
    /// A photo with a zero id is never returned by a genuine lookup, it means
    /// the payload didn't describe a photo at all.
    pub fn is_blank(&self) -> bool {
        self.id == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoSource {
    pub original: String,
    pub medium: String,
    pub large: String,

    #[serde(default)]
    pub large2x: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub portrait: Option<String>,
    #[serde(default)]
    pub landscape: Option<String>,
    #[serde(default)]
    pub tiny: Option<String>,
}
