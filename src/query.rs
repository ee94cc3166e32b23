//! Endpoint construction from filters
//!
//! Filters turn into `key=value` pairs joined with `&`. Empty or unset
//! fields are left out entirely.

use crate::types::{Direction, UserOrder, DEFAULT_PAGE_SIZE};
use url::form_urlencoded;

// ============================================================================
// Query Builder
// ============================================================================

/// Builds an endpoint path plus query string
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    path: String,
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter; empty values are skipped
    #[must_use]
    pub fn param(mut self, key: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if !value.is_empty() {
            self.params.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add a parameter if it is set
    #[must_use]
    pub fn param_opt(self, key: &str, value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Render `path?k=v&k=v`, or just the path when no parameter is set
    pub fn build(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }

        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}={}", encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// Percent-encode a query value, keeping `,` readable for embed lists
fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace("%2C", ",")
}

/// Percent-encode one path segment so `/`, `?` and `#` stay inside it
pub fn path_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Append one parameter to an endpoint that may already carry a query string
pub fn append_param(endpoint: &str, key: &str, value: impl std::fmt::Display) -> String {
    let separator = match endpoint.find('?') {
        None => '?',
        Some(pos) if pos + 1 == endpoint.len() || endpoint.ends_with('&') => {
            return format!("{endpoint}{key}={value}");
        }
        Some(_) => '&',
    };
    format!("{endpoint}{separator}{key}={value}")
}

// ============================================================================
// User Filter
// ============================================================================

/// Filters for user searches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Exact user id; bypasses the search entirely
    pub id: Option<String>,
    /// Case-sensitive exact match on name, URLs or social profiles
    pub lookup: Option<String>,
    /// Case-insensitive substring of the name or URLs
    pub name: Option<String>,
    pub twitch: Option<String>,
    pub hitbox: Option<String>,
    pub twitter: Option<String>,
    pub speedrunslive: Option<String>,
    /// Maximum number of users; 0 means the service default of 20
    pub max: usize,
    pub order_by: Option<UserOrder>,
    pub direction: Option<Direction>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn lookup(mut self, lookup: impl Into<String>) -> Self {
        self.lookup = Some(lookup.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn twitch(mut self, twitch: impl Into<String>) -> Self {
        self.twitch = Some(twitch.into());
        self
    }

    #[must_use]
    pub fn hitbox(mut self, hitbox: impl Into<String>) -> Self {
        self.hitbox = Some(hitbox.into());
        self
    }

    #[must_use]
    pub fn twitter(mut self, twitter: impl Into<String>) -> Self {
        self.twitter = Some(twitter.into());
        self
    }

    #[must_use]
    pub fn speedrunslive(mut self, speedrunslive: impl Into<String>) -> Self {
        self.speedrunslive = Some(speedrunslive.into());
        self
    }

    #[must_use]
    pub fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub fn order_by(mut self, order: UserOrder, direction: Direction) -> Self {
        self.order_by = Some(order);
        self.direction = Some(direction);
        self
    }

    /// Number of users to return
    pub fn effective_max(&self) -> usize {
        if self.max == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.max
        }
    }

    /// Search endpoint without paging parameters (`max`/`offset`)
    pub fn endpoint(&self) -> String {
        QueryBuilder::new("/users")
            .param_opt("lookup", self.lookup.as_ref())
            .param_opt("name", self.name.as_ref())
            .param_opt("twitch", self.twitch.as_ref())
            .param_opt("hitbox", self.hitbox.as_ref())
            .param_opt("twitter", self.twitter.as_ref())
            .param_opt("speedrunslive", self.speedrunslive.as_ref())
            .param_opt("orderby", self.order_by.map(UserOrder::as_param))
            .param_opt("direction", self.direction.map(Direction::as_param))
            .build()
    }
}

// ============================================================================
// Personal Best Filter
// ============================================================================

/// Filters for a user's personal bests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PbFilter {
    /// Only runs placed at or above this rank (1 = world records)
    pub top: Option<u32>,
    /// Series id or abbreviation
    pub series: Option<String>,
    /// Game id or abbreviation
    pub game: Option<String>,
    /// Related resources to embed, e.g. `game`, `category`, `level`
    pub embeds: Vec<String>,
}

impl PbFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    #[must_use]
    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    #[must_use]
    pub fn game(mut self, game: impl Into<String>) -> Self {
        self.game = Some(game.into());
        self
    }

    #[must_use]
    pub fn embed(mut self, embed: impl Into<String>) -> Self {
        self.embeds.push(embed.into());
        self
    }

    /// Personal bests endpoint of one user
    pub fn endpoint(&self, user_id: &str) -> String {
        let top = self.top.filter(|t| *t > 0).map(|t| t.to_string());
        QueryBuilder::new(format!("/users/{}/personal-bests", path_segment(user_id)))
            .param_opt("game", self.game.as_ref())
            .param_opt("series", self.series.as_ref())
            .param_opt("top", top)
            .param("embed", self.embeds.join(","))
            .build()
    }
}
