//! Sample results: the ordered picks of one request.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single pick: an integer from a range or a borrowed list element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pick<'a, T> {
    /// Integer drawn from a range domain.
    Int(i64),
    /// Element drawn from a list domain.
    Item(&'a T),
}

impl<'a, T> Pick<'a, T> {
    /// Returns the integer if this pick came from a range.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Pick::Int(value) => Some(*value),
            Pick::Item(_) => None,
        }
    }

    /// Returns the element if this pick came from a list.
    pub fn as_item(&self) -> Option<&'a T> {
        match self {
            Pick::Int(_) => None,
            Pick::Item(item) => Some(*item),
        }
    }
}

/// Ordered picks of a single request, tagged with a creation timestamp.
///
/// The timestamp exists for display and sorting only.
#[derive(Debug, Clone, Serialize)]
pub struct SampleResult<'a, T> {
    picks: Vec<Pick<'a, T>>,
    created_at: DateTime<Utc>,
}

impl<'a, T> SampleResult<'a, T> {
    /// Wraps picks, stamping them with the current time.
    pub fn new(picks: Vec<Pick<'a, T>>) -> Self {
        Self {
            picks,
            created_at: Utc::now(),
        }
    }

    /// The picks in draw order.
    pub fn picks(&self) -> &[Pick<'a, T>] {
        &self.picks
    }

    /// When the result was produced.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of picks.
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Returns `true` if there are no picks.
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Integer picks, in order.
    pub fn ints(&self) -> Vec<i64> {
        self.picks.iter().filter_map(Pick::as_int).collect()
    }

    /// List picks, in order.
    pub fn items(&self) -> Vec<&'a T> {
        self.picks.iter().filter_map(Pick::as_item).collect()
    }

    /// Consumes the result, returning the picks.
    pub fn into_picks(self) -> Vec<Pick<'a, T>> {
        self.picks
    }
}
