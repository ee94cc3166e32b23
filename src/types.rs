//! Common types used throughout the client
//!
//! This module contains shared type definitions, type aliases,
//! and the ordering enums used by query filters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Constants
// ============================================================================

/// Base URL of the speedrun.com REST API
pub const API_BASE_URL: &str = "https://www.speedrun.com/api/v1";

/// Status code the service uses to say "slow down"
pub const RATE_LIMIT_STATUS: u16 = 420;

/// Largest page the service returns for one request
pub const PAGE_SIZE_LIMIT: usize = 200;

/// Most page requests in flight at once
pub const MAX_CONCURRENT_PAGES: usize = 16;

/// Page size the service uses when no `max` is sent
pub const DEFAULT_PAGE_SIZE: usize = 20;

// ============================================================================
// User Ordering
// ============================================================================

/// Field by which user listings are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserOrder {
    /// International name, as shown on the site
    InternationalName,
    /// Japanese name (deprecated by the service)
    JapaneseName,
    /// Signup date
    SignupDate,
    /// Site role
    Role,
}

impl UserOrder {
    /// Value of the `orderby` query parameter
    pub fn as_param(self) -> &'static str {
        match self {
            UserOrder::InternationalName => "name.int",
            UserOrder::JapaneseName => "name.jap",
            UserOrder::SignupDate => "signup",
            UserOrder::Role => "role",
        }
    }
}

// ============================================================================
// Sort Direction
// ============================================================================

/// Sort direction for ordered listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Value of the `direction` query parameter
    pub fn as_param(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}
