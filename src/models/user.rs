//! User record models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a field's value should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Plain,
    Date,
}

/// Static description of one `UserDetail` field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub kind: FieldKind,
}

const fn plain(name: &'static str, title: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        title,
        kind: FieldKind::Plain,
    }
}

/// A user record. `id` is zero-based and its order defines navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: u64,
    pub name: String,
    pub dob: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

impl UserDetail {
    /// Fields in declaration order, with display titles.
    pub const FIELDS: &'static [FieldSpec] = &[
        plain("id", "Id"),
        plain("name", "Name"),
        FieldSpec {
            name: "dob",
            title: "Date of Birth",
            kind: FieldKind::Date,
        },
        plain("email", "Email"),
        plain("phone", "Phone"),
        plain("address", "Address"),
        plain("city", "City"),
        plain("state", "State"),
        plain("country", "Country"),
        plain("zip_code", "Zip Code"),
    ];
}
