//! Users
//!
//! Finders for the `users` endpoint, including the authenticated caller.

use serde::{Deserialize, Serialize};

use crate::client::{Params, Reader};
use crate::error::Result;
use crate::resource::{self, Listing, Resource};

/// Flat snapshot of an upstream User
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    // Relation URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memberships: Option<String>,

    // Timestamps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

impl User {
    /// A user known only by its ID, handy for scoping other finders
    pub fn with_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }
}

impl Resource for User {
    const PATH: &'static str = "users";
    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Path alias the API resolves to the authenticated caller
const CURRENT: &str = "current";

/// Every user visible to the caller. `params` are passed along to the API.
pub async fn all<R: Reader>(driver: &R, params: Params) -> Vec<User> {
    resource::all(driver, User::PATH, params).await
}

/// Like [`all`], but reports whether every page was fetched
pub async fn list<R: Reader>(driver: &R, params: Params) -> Listing<User> {
    resource::list(driver, User::PATH, params).await
}

/// A single user by ID
pub async fn find<R: Reader>(driver: &R, id: &str) -> Result<User> {
    resource::find(driver, id).await
}

/// The user that owns the API token
pub async fn current<R: Reader>(driver: &R) -> Result<User> {
    let path = format!("{}/{}", User::PATH, CURRENT);
    resource::find_at(driver, &path).await
}
