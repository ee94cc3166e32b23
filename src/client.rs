//! Typed accessors for speedrun.com resources
//!
//! [`SpeedrunClient`] composes the query builder, paginator, transport and
//! decoder, and reshapes decoded envelopes into the public records.

use crate::config::ClientConfig;
use crate::decode::{Embedded, Envelope};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, Request};
use crate::models::{Category, Game, Level, PersonalBest, Platform, Region, Run, User};
use crate::pagination::Paginator;
use crate::query::{path_segment, PbFilter, UserFilter};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Client for the speedrun.com API
#[derive(Debug, Clone)]
pub struct SpeedrunClient {
    http: HttpClient,
}

impl SpeedrunClient {
    /// Create a client against the public API with default settings
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: HttpClient::new()?,
        })
    }

    /// Create a client from an HTTP configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_config(config)?,
        })
    }

    /// Create a client from a loaded configuration file
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_config(config.to_http_config())
    }

    /// Wrap an existing HTTP client
    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Search for users.
    ///
    /// A filter with an `id` fetches that single user and ignores every
    /// other field. Otherwise up to `max` users are returned, fetched
    /// concurrently in pages when `max` exceeds the service's page cap.
    pub async fn users(&self, filter: &UserFilter) -> Result<Vec<User>> {
        if let Some(id) = filter.id.as_deref().filter(|id| !id.is_empty()) {
            return Ok(vec![self.user_by_id(id).await?]);
        }

        let endpoint = filter.endpoint();
        debug!("Searching users: {}", endpoint);
        Paginator::new(&self.http)
            .paginate(&endpoint, filter.effective_max())
            .await
    }

    /// Fetch the user whose name, URL or social profile matches `name` exactly
    pub async fn user(&self, name: &str) -> Result<User> {
        if name.is_empty() {
            return Err(Error::not_found("user with empty name"));
        }
        let users = self.users(&UserFilter::new().lookup(name)).await?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(format!("user '{name}'")))
    }

    /// Fetch a user by id
    pub async fn user_by_id(&self, id: &str) -> Result<User> {
        self.resource("users", id).await
    }

    /// Fetch a user's personal bests
    pub async fn personal_bests(&self, user_id: &str, filter: &PbFilter) -> Result<Vec<PersonalBest>> {
        let request = Request::new(filter.endpoint(user_id));
        let envelope: Envelope<Vec<RawPersonalBest>> = self.http.get_json(&request).await?;
        Ok(envelope
            .data
            .into_iter()
            .map(RawPersonalBest::into_personal_best)
            .collect())
    }

    /// Fetch a user's world records (first-place personal bests)
    pub async fn world_records(&self, user_id: &str) -> Result<Vec<PersonalBest>> {
        self.personal_bests(user_id, &PbFilter::new().top(1)).await
    }

    /// Fetch a user's podium runs (top-3 personal bests)
    pub async fn podiums(&self, user_id: &str) -> Result<Vec<PersonalBest>> {
        self.personal_bests(user_id, &PbFilter::new().top(3)).await
    }

    // ========================================================================
    // Single Resources
    // ========================================================================

    pub async fn run(&self, id: &str) -> Result<Run> {
        self.resource("runs", id).await
    }

    /// Fetch a game by id or abbreviation
    pub async fn game(&self, id: &str) -> Result<Game> {
        self.resource("games", id).await
    }

    pub async fn category(&self, id: &str) -> Result<Category> {
        self.resource("categories", id).await
    }

    pub async fn level(&self, id: &str) -> Result<Level> {
        self.resource("levels", id).await
    }

    pub async fn platform(&self, id: &str) -> Result<Platform> {
        self.resource("platforms", id).await
    }

    pub async fn region(&self, id: &str) -> Result<Region> {
        self.resource("regions", id).await
    }

    async fn resource<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<T> {
        if id.is_empty() {
            return Err(Error::not_found(format!("{collection} with empty id")));
        }
        let request = Request::new(format!("/{collection}/{}", path_segment(id)));
        let envelope: Envelope<T> = self.http.get_json(&request).await?;
        Ok(envelope.into_inner())
    }
}

/// Personal best as the service sends it, with embedded sub-resources
#[derive(Debug, Deserialize)]
struct RawPersonalBest {
    place: u32,
    run: Run,
    #[serde(default)]
    game: Option<Embedded<Game>>,
    #[serde(default)]
    category: Option<Embedded<Category>>,
    #[serde(default)]
    level: Option<Embedded<Level>>,
    #[serde(default)]
    region: Option<Embedded<Region>>,
    #[serde(default)]
    platform: Option<Embedded<Platform>>,
}

impl RawPersonalBest {
    fn into_personal_best(self) -> PersonalBest {
        PersonalBest {
            place: self.place,
            run: self.run,
            game: self.game.and_then(Embedded::into_resource),
            category: self.category.and_then(Embedded::into_resource),
            level: self.level.and_then(Embedded::into_resource),
            region: self.region.and_then(Embedded::into_resource),
            platform: self.platform.and_then(Embedded::into_resource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_raw_personal_best_reshape() {
        let raw: RawPersonalBest = serde_json::from_value(json!({
            "place": 2,
            "run": {"id": "90y6pm7e", "game": "29d30dlp", "category": "wkpn0vdr"},
            "game": {"data": {"id": "29d30dlp", "abbreviation": "sm64"}},
            "category": {"data": {"id": "wkpn0vdr", "name": "120 Star"}},
            "level": {"data": []},
            "platform": "w89rwelk"
        }))
        .unwrap();

        let pb = raw.into_personal_best();
        assert_eq!(pb.place, 2);
        assert_eq!(pb.run.id, "90y6pm7e");
        assert_eq!(pb.game.unwrap().abbreviation, "sm64");
        assert_eq!(pb.category.unwrap().name, "120 Star");
        assert!(pb.level.is_none());
        assert!(pb.region.is_none());
        assert!(pb.platform.is_none());
    }

    #[test]
    fn test_raw_personal_best_null_level() {
        let raw: RawPersonalBest = serde_json::from_value(json!({
            "place": 1,
            "run": {"id": "a"},
            "level": null
        }))
        .unwrap();

        assert!(raw.into_personal_best().level.is_none());
    }
}
