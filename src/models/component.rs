//! Declarative UI components rendered by the frontend.
//!
//! Handlers describe pages as a tree of [`Component`] values; the prebuilt
//! frontend fetches the JSON and does the actual rendering.

use serde::{Deserialize, Serialize};

use super::user::{FieldKind, UserDetail};
use crate::pagination::PaginationButton;

/// Client-side event attached to a clickable component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Event {
    GoTo { url: String },
}

impl Event {
    pub fn go_to(url: impl Into<String>) -> Self {
        Event::GoTo { url: url.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Auto,
    Date,
}

/// Column/row descriptor used by `Table` and `Details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLookup {
    pub field: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<DisplayMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<Event>,
}

/// One node of a page description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Component {
    Page {
        components: Vec<Component>,
    },
    Heading {
        text: String,
        level: u8,
    },
    Text {
        text: String,
    },
    Table {
        data: Vec<UserDetail>,
        columns: Vec<DisplayLookup>,
    },
    Details {
        data: UserDetail,
    },
    Button {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        on_click: Option<Event>,
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },
    Div {
        components: Vec<Component>,
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },
}

impl Component {
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Component::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Component::Text { text: text.into() }
    }

    /// A button that navigates to `url` when clicked.
    pub fn link_button(text: impl Into<String>, url: impl Into<String>) -> Self {
        Component::Button {
            text: text.into(),
            on_click: Some(Event::go_to(url)),
            class_name: None,
        }
    }

    /// Renders a pagination button; `limit` is carried into the target URL.
    pub fn pagination_button(button: &PaginationButton, limit: u64) -> Self {
        Component::Button {
            text: button.label.clone(),
            on_click: Some(Event::go_to(format!(
                "/?offset={}&limit={}",
                button.target_offset, limit
            ))),
            class_name: Some(button.kind.class_name().to_string()),
        }
    }
}

/// Builds one lookup per `UserDetail` field.
///
/// Fields named in `on_click` become links; `{id}` in the URL template is
/// substituted by the frontend with the row's id.
pub fn display_lookups(on_click: &[(&str, &str)]) -> Vec<DisplayLookup> {
    UserDetail::FIELDS
        .iter()
        .map(|field| DisplayLookup {
            field: field.name.to_string(),
            title: field.title.to_string(),
            mode: match field.kind {
                FieldKind::Date => Some(DisplayMode::Date),
                FieldKind::Plain => None,
            },
            on_click: on_click
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, url)| Event::go_to(*url)),
        })
        .collect()
}
