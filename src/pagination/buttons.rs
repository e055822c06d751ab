//! Pagination button descriptors derived from a page window.

use serde::{Deserialize, Serialize};

use super::window::{compute_window, PageWindow};
use crate::error::ServiceResult;

/// Label used for ellipsis buttons.
pub const ELLIPSIS_LABEL: &str = "...";

/// Kind of pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Page,
    Ellipsis,
}

impl ButtonKind {
    /// CSS class the frontend uses for this kind of button.
    pub fn class_name(&self) -> &'static str {
        match self {
            ButtonKind::Page => "page-button",
            ButtonKind::Ellipsis => "ellipsis-button",
        }
    }
}

/// A single pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationButton {
    pub label: String,
    /// Offset of the first record the button navigates to.
    pub target_offset: u64,
    pub kind: ButtonKind,
}

impl PaginationButton {
    fn page(page: u64, page_size: u64, label_width: usize) -> Self {
        Self {
            label: format!("{:>width$}", page, width = label_width),
            target_offset: (page - 1) * page_size,
            kind: ButtonKind::Page,
        }
    }

    fn ellipsis(target_offset: u64) -> Self {
        Self {
            label: ELLIPSIS_LABEL.to_string(),
            target_offset,
            kind: ButtonKind::Ellipsis,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        self.kind == ButtonKind::Ellipsis
    }
}

/// Computes the window for the request and expands it into buttons.
pub fn generate_buttons(
    total_count: u64,
    page_size: u64,
    offset: u64,
    window_size: u64,
) -> ServiceResult<Vec<PaginationButton>> {
    let window = compute_window(total_count, page_size, offset, window_size)?;
    Ok(buttons_for_window(&window, page_size, offset, window_size))
}

/// Expands an already computed window into an ordered button sequence.
///
/// Pages outside the window are reachable through the first and last page
/// buttons plus an ellipsis on each truncated side. The ellipsis targets
/// are jump shortcuts and are not aligned to the skipped page boundaries.
pub fn buttons_for_window(
    window: &PageWindow,
    page_size: u64,
    offset: u64,
    window_size: u64,
) -> Vec<PaginationButton> {
    if window.is_empty() {
        return Vec::new();
    }

    let label_width = window.total_pages.to_string().len();
    let mut buttons = Vec::with_capacity(window.len() as usize + 4);

    if window.start_page > 1 {
        buttons.push(PaginationButton::page(1, page_size, label_width));
        if window.start_page > 2 {
            let jump_back = offset.saturating_sub(window_size.saturating_mul(page_size));
            buttons.push(PaginationButton::ellipsis(jump_back));
        }
    }

    for page in window.pages() {
        buttons.push(PaginationButton::page(page, page_size, label_width));
    }

    if window.end_page < window.total_pages {
        if window.end_page < window.total_pages - 1 {
            buttons.push(PaginationButton::ellipsis((window.end_page + 1) * page_size));
        }
        buttons.push(PaginationButton::page(
            window.total_pages,
            page_size,
            label_width,
        ));
    }

    buttons
}
