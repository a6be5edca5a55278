//! Component configuration.

use std::time::Duration;

use crate::error::{Result, SelectError};

/// Tunables for a `FilterableSelect`.
///
/// `Default` matches the classic widget: filtering starts at two
/// characters, blur waits 50ms for the list to take focus, and the
/// first list row is a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    /// Minimum search length (in characters) before options are hidden.
    pub min_query_len: usize,

    /// How long an input blur waits before closing, giving the list a
    /// chance to receive focus.
    pub blur_grace: Duration,

    /// Smallest row count the list is ever sized to.
    pub min_rows: usize,

    /// Non-selectable rows at the top of the list, excluded from sizing.
    pub header_rows: usize,

    /// Stacking order applied to the list while open.
    pub overlay_z_index: i32,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            blur_grace: Duration::from_millis(50),
            min_rows: 2,
            header_rows: 1,
            overlay_z_index: 3,
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum search length.
    pub fn min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len;
        self
    }

    /// Set the blur grace delay.
    pub fn blur_grace(mut self, grace: Duration) -> Self {
        self.blur_grace = grace;
        self
    }

    /// Set the minimum row count.
    pub fn min_rows(mut self, rows: usize) -> Self {
        self.min_rows = rows;
        self
    }

    /// Set the number of placeholder rows at the top of the list.
    pub fn header_rows(mut self, rows: usize) -> Self {
        self.header_rows = rows;
        self
    }

    /// Set the stacking order used while the list is open.
    pub fn overlay_z_index(mut self, z: i32) -> Self {
        self.overlay_z_index = z;
        self
    }

    /// Reject values the component cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.min_query_len == 0 {
            return Err(SelectError::InvalidConfig(
                "min_query_len must be at least 1".into(),
            ));
        }
        if self.min_rows == 0 {
            return Err(SelectError::InvalidConfig(
                "min_rows must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Row count for a list with `child_count` children.
    ///
    /// Lists with enough rows show everything except the header; smaller
    /// lists fall back to `min_rows`.
    pub fn row_count(&self, child_count: usize) -> usize {
        if child_count > self.min_rows {
            child_count
                .saturating_sub(self.header_rows)
                .max(self.min_rows)
        } else {
            self.min_rows
        }
    }
}
