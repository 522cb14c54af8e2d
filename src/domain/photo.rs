//! Photo records returned by the Photo Service.
//!
//! This module defines the two record shapes the application works with:
//!
//! - [`ImageSummary`]: the lightweight list-view record shown in the grid
//! - [`ImageDetail`]: the fully-populated record fetched when a tile is selected
//!
//! Both deserialize directly from Unsplash-style JSON. Every field that the
//! service may omit or send as `null` is defaulted so that a sparse payload
//! still decodes; only `id` is required.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Base URL used to build Instagram profile links.
const INSTAGRAM_BASE_URL: &str = "https://www.instagram.com/";

/// Base URL used to build Twitter profile links.
const TWITTER_BASE_URL: &str = "https://www.twitter.com/";

/// One photo in the grid.
///
/// Immutable once received. The displayed list is replaced wholesale on every
/// successful fetch, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSummary {
    pub id: String,
    #[serde(default)]
    pub urls: PhotoUrls,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub user: User,
}

impl ImageSummary {
    /// Like count, treating an absent value as zero.
    #[must_use]
    pub fn like_count(&self) -> u64 {
        self.likes.unwrap_or(0)
    }
}

/// Response envelope of `GET /search/photos`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub results: Vec<ImageSummary>,
}

/// Full record for a single photo, fetched lazily on selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDetail {
    pub id: String,
    #[serde(default)]
    pub urls: PhotoUrls,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    /// Accent color as a `#rrggbb` hex string.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub links: PhotoLinks,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ImageDetail {
    /// Text shown under the image: the description, or the alt text if the
    /// author left the description empty.
    #[must_use]
    pub fn display_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or_else(|| self.alt_description.as_deref().filter(|d| !d.trim().is_empty()))
    }

    /// URL of the large rendition shown in the detail view.
    #[must_use]
    pub fn full_url(&self) -> &str {
        self.urls
            .regular
            .as_deref()
            .or(self.urls.full.as_deref())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn like_count(&self) -> u64 {
        self.likes.unwrap_or(0)
    }

    #[must_use]
    pub fn download_count(&self) -> u64 {
        self.downloads.unwrap_or(0)
    }

    /// Tag titles in service order.
    #[must_use]
    pub fn tag_titles(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.title.as_str()).collect()
    }

    /// Returns a human-readable string describing how long ago the photo was
    /// published, relative to `now`.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    ///
    /// Returns `None` when the service did not send `created_at`.
    #[must_use]
    pub fn published_ago(&self, now: DateTime<Utc>) -> Option<String> {
        let created = self.created_at?;
        let diff = (now - created).num_seconds().max(0);

        Some(if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        })
    }
}

/// Renditions of a photo at different sizes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoUrls {
    pub raw: Option<String>,
    pub full: Option<String>,
    pub regular: Option<String>,
    pub small: Option<String>,
    pub thumb: Option<String>,
}

/// Photo-level links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoLinks {
    pub html: Option<String>,
    pub download: Option<String>,
}

/// A single tag attached to a photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
}

/// The uploader of a photo.
///
/// List responses carry a reduced profile; detail responses fill in the
/// profile image, links and social handles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub username: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub profile_image: ProfileImage,
    pub links: UserLinks,
    pub social: SocialHandles,
}

impl User {
    /// Short name shown on grid tiles: first name, then full name, then
    /// username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.username)
    }

    /// Full name shown in the detail view, falling back to the username.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }

    /// Social profiles the user has linked, in a stable order.
    #[must_use]
    pub fn social_links(&self) -> Vec<SocialLink> {
        let mut links = Vec::new();
        if let Some(handle) = non_empty(self.social.instagram_username.as_deref()) {
            links.push(SocialLink::new(SocialNetwork::Instagram, handle));
        }
        if let Some(handle) = non_empty(self.social.twitter_username.as_deref()) {
            links.push(SocialLink::new(SocialNetwork::Twitter, handle));
        }
        links
    }

    /// Personal website, if the user linked one.
    #[must_use]
    pub fn portfolio_url(&self) -> Option<&str> {
        non_empty(self.social.portfolio_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Avatar renditions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileImage {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
}

/// User-level links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserLinks {
    pub html: Option<String>,
}

/// Optional social handles as sent by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialHandles {
    pub instagram_username: Option<String>,
    pub twitter_username: Option<String>,
    pub portfolio_url: Option<String>,
}

/// Social network of a [`SocialLink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Instagram,
    Twitter,
}

impl SocialNetwork {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
        }
    }

    const fn base_url(self) -> &'static str {
        match self {
            Self::Instagram => INSTAGRAM_BASE_URL,
            Self::Twitter => TWITTER_BASE_URL,
        }
    }
}

/// A resolved social profile link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub handle: String,
    pub url: String,
}

impl SocialLink {
    fn new(network: SocialNetwork, handle: &str) -> Self {
        Self {
            network,
            handle: handle.to_string(),
            url: format!("{}{handle}", network.base_url()),
        }
    }
}
