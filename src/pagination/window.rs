//! Page window selection for paginated listings.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::{ServiceError, ServiceResult};

/// The inclusive range of page numbers exposed as page buttons.
///
/// Page numbers are 1-based. A non-empty window satisfies
/// `1 <= start_page <= end_page <= total_pages`. An empty record set
/// produces the empty window, which has `total_pages == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub start_page: u64,
    pub end_page: u64,
    pub total_pages: u64,
}

impl PageWindow {
    /// The window for a record set with no elements.
    pub fn empty() -> Self {
        Self {
            start_page: 0,
            end_page: 0,
            total_pages: 0,
        }
    }

    /// Returns true when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Number of page slots inside the window.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end_page - self.start_page + 1
        }
    }

    /// Iterates the page numbers of the window in ascending order.
    pub fn pages(&self) -> RangeInclusive<u64> {
        if self.is_empty() {
            // 1..=0 yields nothing
            1..=0
        } else {
            self.start_page..=self.end_page
        }
    }
}

/// Validates the shared pagination arguments.
pub(crate) fn check_arguments(page_size: u64, window_size: u64) -> ServiceResult<()> {
    if page_size == 0 {
        return Err(ServiceError::invalid_argument("page_size must be at least 1"));
    }
    if window_size == 0 {
        return Err(ServiceError::invalid_argument(
            "window_size must be at least 1",
        ));
    }
    Ok(())
}

/// Number of pages needed to hold `total_count` elements.
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    total_count.div_ceil(page_size)
}

/// 1-based page number that contains `offset`.
pub fn current_page(offset: u64, page_size: u64) -> u64 {
    offset / page_size + 1
}

/// Computes which page numbers to show for the page containing `offset`.
///
/// Small sets show every page. Otherwise the window is anchored to the
/// first page while the current page is near the start, anchored to the
/// last page while it is near the end, and centered on it in between.
/// Offsets past the end are not clamped; they select the right-anchored
/// window.
pub fn compute_window(
    total_count: u64,
    page_size: u64,
    offset: u64,
    window_size: u64,
) -> ServiceResult<PageWindow> {
    check_arguments(page_size, window_size)?;

    if total_count == 0 {
        return Ok(PageWindow::empty());
    }

    let total_pages = total_pages(total_count, page_size);
    let current_page = current_page(offset, page_size);
    let half = window_size / 2;

    let (start_page, end_page) = if total_count <= window_size || total_pages <= window_size {
        (1, total_pages)
    } else if current_page <= half + 1 {
        (1, window_size)
    } else if current_page >= total_pages - half {
        (total_pages - window_size + 1, total_pages)
    } else {
        let start_page = current_page - half;
        // Even window sizes keep `window_size` slots, one fewer on the right.
        (start_page, start_page + window_size - 1)
    };

    Ok(PageWindow {
        start_page,
        end_page,
        total_pages,
    })
}
