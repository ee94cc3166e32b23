//! Records returned by the speedrun.com API
//!
//! Field names follow the service's JSON (kebab-case and `_t` suffixes are
//! mapped with `#[serde(rename)]`). Fields the service sends as `null` are
//! `Option`. Every record tolerates missing fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Shared Records
// ============================================================================

/// A link to another resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Relation name (e.g. "self", "runs", "personal-bests")
    pub rel: String,
    pub uri: String,
}

/// An image or icon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub uri: Option<String>,
}

/// International and Japanese names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Names {
    /// Name shown on the site
    pub international: String,
    /// Deprecated by the service
    pub japanese: Option<String>,
}

// ============================================================================
// User
// ============================================================================

/// A speedrun.com user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub names: Names,
    pub pronouns: Option<String>,
    /// Profile page
    pub weblink: String,
    #[serde(rename = "name-style")]
    pub name_style: NameStyle,
    pub role: String,
    pub signup: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub twitch: Option<Asset>,
    pub hitbox: Option<Asset>,
    pub youtube: Option<Asset>,
    pub twitter: Option<Asset>,
    pub speedrunslive: Option<Asset>,
    pub assets: UserAssets,
    pub links: Vec<Link>,
}

/// How a user's name is colored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameStyle {
    /// "solid" or "gradient"
    pub style: String,
    /// Set when `style` is "solid"
    pub color: Option<Color>,
    /// Set when `style` is "gradient"
    #[serde(rename = "color-from")]
    pub color_from: Option<Color>,
    #[serde(rename = "color-to")]
    pub color_to: Option<Color>,
}

/// A color in light and dark theme variants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    pub light: String,
    pub dark: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub country: Place,
    pub region: Option<Place>,
}

/// A country or region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    /// ISO 3166-1 alpha-2 code, suffixed with the region code for regions
    pub code: String,
    pub names: Names,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAssets {
    pub icon: Asset,
    pub image: Asset,
}

// ============================================================================
// Run
// ============================================================================

/// A submitted run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Run {
    pub id: String,
    pub weblink: String,
    /// Game id
    pub game: String,
    /// Level id, for individual-level runs
    pub level: Option<String>,
    /// Category id
    pub category: String,
    pub videos: Option<Videos>,
    pub comment: Option<String>,
    pub status: RunStatus,
    pub players: Vec<Player>,
    /// Date the run was played (YYYY-MM-DD)
    pub date: Option<String>,
    pub submitted: Option<DateTime<Utc>>,
    pub times: RunTimes,
    pub system: RunSystem,
    pub splits: Option<Link>,
    /// Variable id to value id
    pub values: HashMap<String, String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Videos {
    pub text: Option<String>,
    pub links: Vec<Asset>,
}

/// Verification status of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunStatus {
    /// "new", "verified" or "rejected"
    pub status: String,
    pub examiner: Option<String>,
    #[serde(rename = "verify-date")]
    pub verify_date: Option<DateTime<Utc>>,
    pub reason: Option<String>,
}

/// A runner: a registered user or a guest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    /// "user" or "guest"
    pub rel: String,
    /// Set for users
    pub id: Option<String>,
    /// Set for guests
    pub name: Option<String>,
    pub uri: String,
}

/// Run times as ISO 8601 durations and seconds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunTimes {
    pub primary: String,
    pub primary_t: f64,
    pub realtime: Option<String>,
    pub realtime_t: f64,
    pub realtime_noloads: Option<String>,
    pub realtime_noloads_t: f64,
    pub ingame: Option<String>,
    pub ingame_t: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSystem {
    pub platform: Option<String>,
    pub emulated: bool,
    pub region: Option<String>,
}

// ============================================================================
// Game
// ============================================================================

/// A game or romhack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: String,
    pub names: GameNames,
    pub abbreviation: String,
    pub weblink: String,
    /// Release year
    pub released: u32,
    #[serde(rename = "release-date")]
    pub release_date: Option<String>,
    pub ruleset: Ruleset,
    pub romhack: bool,
    pub gametypes: Vec<String>,
    pub platforms: Vec<String>,
    pub regions: Vec<String>,
    pub genres: Vec<String>,
    pub engines: Vec<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    /// User id to moderator role
    pub moderators: HashMap<String, String>,
    pub created: Option<DateTime<Utc>>,
    pub assets: GameAssets,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameNames {
    pub international: String,
    pub japanese: Option<String>,
    pub twitch: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    #[serde(rename = "show-milliseconds")]
    pub show_milliseconds: bool,
    #[serde(rename = "require-verification")]
    pub require_verification: bool,
    #[serde(rename = "require-video")]
    pub require_video: bool,
    #[serde(rename = "run-times")]
    pub run_times: Vec<String>,
    #[serde(rename = "default-time")]
    pub default_time: String,
    #[serde(rename = "emulators-allowed")]
    pub emulators_allowed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameAssets {
    pub logo: Option<Asset>,
    #[serde(rename = "cover-tiny")]
    pub cover_tiny: Option<Asset>,
    #[serde(rename = "cover-small")]
    pub cover_small: Option<Asset>,
    #[serde(rename = "cover-medium")]
    pub cover_medium: Option<Asset>,
    #[serde(rename = "cover-large")]
    pub cover_large: Option<Asset>,
    pub icon: Option<Asset>,
    #[serde(rename = "trophy-1st")]
    pub trophy_1st: Option<Asset>,
    #[serde(rename = "trophy-2nd")]
    pub trophy_2nd: Option<Asset>,
    #[serde(rename = "trophy-3rd")]
    pub trophy_3rd: Option<Asset>,
    #[serde(rename = "trophy-4th")]
    pub trophy_4th: Option<Asset>,
    pub background: Option<Asset>,
    pub foreground: Option<Asset>,
}

// ============================================================================
// Category, Level, Region, Platform
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub weblink: String,
    /// "per-game" or "per-level"
    #[serde(rename = "type")]
    pub kind: String,
    pub rules: Option<String>,
    pub players: CategoryPlayers,
    pub miscellaneous: bool,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryPlayers {
    /// "exactly" or "up-to"
    #[serde(rename = "type")]
    pub kind: String,
    pub value: u32,
}

/// An individual level of a game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub weblink: String,
    pub rules: Option<String>,
    pub links: Vec<Link>,
}

/// A game region (e.g. "USA / NTSC")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub id: String,
    pub name: String,
    /// Release year
    pub released: u32,
    pub links: Vec<Link>,
}

// ============================================================================
// Personal Best
// ============================================================================

/// A user's best run in one game/category/level combination.
///
/// The related records are only present when they were requested through
/// `PbFilter::embeds` and are not null on the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalBest {
    /// Leaderboard placement
    pub place: u32,
    pub run: Run,
    pub game: Option<Game>,
    pub category: Option<Category>,
    pub level: Option<Level>,
    pub region: Option<Region>,
    pub platform: Option<Platform>,
}
