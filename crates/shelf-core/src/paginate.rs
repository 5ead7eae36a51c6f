//! Module: paginate
//! Responsibility: limit/offset window parsing and page arithmetic.
//! Does not own: query execution or link rendering; next/previous are
//! offsets for the caller to combine with its own URL surface.

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error as ThisError;

/// Window size applied when the caller sends no `limit`.
pub const DEFAULT_LIMIT: u64 = 20;

/// Hard ceiling on the window size, whatever the caller asks for.
pub const MAX_LIMIT: u64 = 50;

///
/// PageError
///
/// Returned as data, never panicked: a bad `limit` value is malformed
/// client input and maps to a 400-class envelope upstream.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum PageError {
    #[error("invalid limit value: '{value}'")]
    InvalidLimit { value: String },

    #[error("invalid offset value: '{value}'")]
    InvalidOffset { value: String },
}

///
/// PageWindow
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PageWindow {
    pub limit: u64,
    pub offset: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PageWindow {
    /// Parse the raw `limit`/`offset` query values. Absent values fall
    /// back to the defaults; present values must parse as unsigned
    /// integers. Limits above [`MAX_LIMIT`] are clamped, not rejected.
    pub fn from_params(limit: Option<&str>, offset: Option<&str>) -> Result<Self, PageError> {
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| PageError::InvalidLimit {
                value: raw.to_string(),
            })?,
        };

        let offset = match offset {
            None => 0,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| PageError::InvalidOffset {
                    value: raw.to_string(),
                })?,
        };

        Ok(Self {
            limit: limit.min(MAX_LIMIT),
            offset,
        })
    }

    /// Number of pages needed for `count` rows; a zero limit counts as
    /// a single page.
    #[must_use]
    pub const fn page_count(&self, count: u64) -> u64 {
        if self.limit == 0 {
            1
        } else {
            count.div_ceil(self.limit)
        }
    }

    /// Offset of the following window, if any rows remain past it.
    #[must_use]
    pub const fn next_offset(&self, count: u64) -> Option<u64> {
        let next = self.offset.saturating_add(self.limit);
        if next < count { Some(next) } else { None }
    }

    /// Offset of the preceding window, if this is not the first.
    #[must_use]
    pub const fn previous_offset(&self) -> Option<u64> {
        if self.offset == 0 {
            None
        } else {
            Some(self.offset.saturating_sub(self.limit))
        }
    }

    /// Summarize this window against a total row count.
    #[must_use]
    pub const fn info(&self, count: u64) -> PageInfo {
        PageInfo {
            count,
            limit: self.limit,
            offset: self.offset,
            page_count: self.page_count(count),
            next: self.next_offset(count),
            previous: self.previous_offset(),
        }
    }
}

///
/// PageInfo
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PageInfo {
    pub count: u64,
    pub limit: u64,
    pub offset: u64,
    pub page_count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
}

/// Build the paged payload shape: page metadata first, rows under
/// `results`.
#[must_use]
pub fn paged<T: Serialize>(results: &[T], info: PageInfo) -> Value {
    json!({
        "count": info.count,
        "limit": info.limit,
        "offset": info.offset,
        "page_count": info.page_count,
        "next": info.next,
        "previous": info.previous,
        "results": results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_params_fall_back_to_defaults() {
        let window = PageWindow::from_params(None, None).expect("defaults always parse");

        assert_eq!(window, PageWindow::default());
        assert_eq!(window.limit, DEFAULT_LIMIT);
        assert_eq!(window.offset, 0);
    }

    #[test]
    fn oversized_limit_is_clamped() {
        let window = PageWindow::from_params(Some("500"), None).expect("numeric limit parses");

        assert_eq!(window.limit, MAX_LIMIT);
    }

    #[test]
    fn non_numeric_limit_is_returned_as_data() {
        let err = PageWindow::from_params(Some("many"), None).expect_err("must not parse");

        assert_eq!(
            err,
            PageError::InvalidLimit {
                value: "many".to_string()
            }
        );
    }

    #[test]
    fn page_arithmetic_matches_ceiling_division() {
        let window = PageWindow {
            limit: 20,
            offset: 40,
        };

        assert_eq!(window.page_count(0), 0);
        assert_eq!(window.page_count(41), 3);
        assert_eq!(window.next_offset(100), Some(60));
        assert_eq!(window.next_offset(60), None);
        assert_eq!(window.previous_offset(), Some(20));
    }

    #[test]
    fn first_window_has_no_previous() {
        let window = PageWindow::default();

        assert_eq!(window.previous_offset(), None);
    }

    #[test]
    fn paged_payload_carries_rows_under_results() {
        let window = PageWindow::default();
        let payload = paged(&[serde_json::json!({"id": 1})], window.info(1));

        assert_eq!(payload["count"], 1);
        assert_eq!(payload["page_count"], 1);
        assert_eq!(payload["results"][0]["id"], 1);
        assert_eq!(payload["next"], Value::Null);
    }
}
