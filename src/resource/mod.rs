//! Resource abstraction layer
//!
//! A resource kind is described once through the [`Resource`] trait: where
//! its collection lives, what its envelopes are keyed by, and how many
//! entities a page holds. The generic routines in [`finder`] do the rest.
//!
//! # Module Structure
//!
//! - [`envelope`] - Wrapping and unwrapping of the `{"<name>": ...}` payloads
//! - [`finder`] - Pagination, single find, and update
//!
//! # Example
//!
//! ```ignore
//! use maury::{accounts::Account, client::Params, resource};
//!
//! async fn everything(driver: &maury::Driver) -> Vec<Account> {
//!     resource::all(driver, "accounts", Params::new()).await
//! }
//! ```

pub mod envelope;
pub mod finder;

use serde::de::DeserializeOwned;

pub use finder::{all, find, find_at, list, member_path, nested_path, update, Listing};

/// Default number of entities requested per page
pub const PAGE_SIZE: usize = 100;

/// A kind of upstream resource
pub trait Resource: DeserializeOwned + Send {
    /// Collection path relative to the API root
    const PATH: &'static str;
    /// Envelope key for a single entity
    const SINGULAR: &'static str;
    /// Envelope key for a page of entities
    const PLURAL: &'static str;
    /// Entities requested per page
    const PAGE_SIZE: usize = PAGE_SIZE;

    fn id(&self) -> &str;
}
