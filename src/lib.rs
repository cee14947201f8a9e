//! Client library for the Engine Yard v3 API
//!
//! # Module Structure
//!
//! - [`client`] - HTTP driver and the capability traits finders depend on
//! - [`resource`] - Generic pagination, find and update over any resource kind
//! - [`accounts`] - Account entities, finders and updater
//! - [`users`] - User entities and finders
//! - [`config`] - Base URL and token resolution
//!
//! # Example
//!
//! ```ignore
//! use maury::{accounts, users, client::Params};
//!
//! async fn example() -> maury::Result<()> {
//!     let driver = maury::new_client("https://api.engineyard.com", "token")?;
//!     let me = users::current(&driver).await?;
//!     let mine = accounts::for_user(&driver, &me, Params::new()).await;
//!     println!("{} owns {} accounts", me.id, mine.len());
//!     Ok(())
//! }
//! ```

pub mod accounts;
pub mod client;
pub mod config;
pub mod error;
pub mod resource;
pub mod users;

pub use client::Driver;
pub use error::{Error, Result};

/// Driver configured for the API at `base_url`, authenticating with `token`
pub fn new_client(base_url: &str, token: &str) -> Result<Driver> {
    Driver::new(base_url, token)
}
