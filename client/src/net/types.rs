//! Wire DTOs for the catalog backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly. Optional fields default so
//! older or trimmed payloads still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Username/password pair posted to the token endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful `POST /api/token/` payload.
///
/// Everything besides `access` and `is_superuser` is kept verbatim in `rest`
/// and becomes the session's raw profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub access: String,
    /// Role flag choosing the admin or user destination.
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// URL of the uploaded review image, if any.
    #[serde(default)]
    pub review_image: Option<String>,
}

/// JSON body for `POST /api/products/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
}

/// JSON body for `PUT /api/products/{id}/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductRename<'a> {
    pub name: &'a str,
}

/// JSON body for the `add_product` / `remove_product` user actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProductRef {
    pub product_id: i64,
}

/// Login account nested inside an [`AccountProfile`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUser {
    #[serde(default)]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Backend user record with its curated product list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: i64,
    pub user: AccountUser,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Login fields of a new account; the password is write-only on the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccountUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// JSON body for `POST /api/users/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub user: NewAccountUser,
    pub telephone: String,
}

/// `POST /api/products/{id}/research/` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResearchReport {
    pub product_name: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    /// Rows of ratings; row 0 lines up with `features`.
    #[serde(default)]
    pub ratings: Vec<Vec<f64>>,
}

/// `{ "status": ... }` acknowledgement returned by user actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
