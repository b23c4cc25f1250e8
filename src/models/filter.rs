//! Filter criteria applied to an event list.

use super::{event_type::EventType, visibility::Visibility};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EventType),
}

impl TypeFilter {
    pub fn parse(s: &str) -> AppResult<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TypeFilter::All);
        }
        EventType::et_from_str(s)
            .map(TypeFilter::Only)
            .ok_or_else(|| AppError::InvalidEventType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    #[default]
    Upcoming,
    Past,
}

impl StatusFilter {
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "upcoming" => Ok(StatusFilter::Upcoming),
            "past" => Ok(StatusFilter::Past),
            _ => Err(AppError::InvalidStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(AppError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Team constraint. `Any` means the key is unset; `NoTeam` is an explicit
/// "events without a team" and must not be confused with `Any`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamScope {
    #[default]
    Any,
    NoTeam,
    Team(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub kind: TypeFilter,
    pub status: StatusFilter,
    pub search: String,
    pub team: TeamScope,
    pub visibility: Option<Visibility>,
    pub sort: SortOrder,
}
