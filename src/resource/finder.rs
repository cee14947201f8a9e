//! Generic finders
//!
//! Every resource kind shares the same pagination, find and update logic;
//! only the [`Resource`] constants differ.

use serde::Serialize;

use super::envelope;
use super::Resource;
use crate::client::{Params, Reader, Updater};
use crate::error::Result;

/// Result of a collection traversal
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    /// False when a page request or decode failed and the traversal
    /// stopped before reaching the last page
    pub complete: bool,
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Path of a single member, e.g. `accounts/1234`
pub fn member_path<T: Resource>(id: &str) -> String {
    format!("{}/{}", T::PATH, urlencoding::encode(id))
}

/// Path of a collection nested under a parent, e.g. `users/1234/accounts`
pub fn nested_path<P: Resource, T: Resource>(parent: &P) -> String {
    format!("{}/{}", member_path::<P>(parent.id()), T::PATH)
}

/// Fetch every page of the collection at `path`
///
/// Pages are requested one after another until a page holds fewer than
/// `T::PAGE_SIZE` entities. A failed request or an undecodable page ends the
/// traversal; whatever was gathered so far is returned with
/// `complete == false`.
pub async fn list<T: Resource, R: Reader>(driver: &R, path: &str, mut params: Params) -> Listing<T> {
    let mut items = Vec::new();
    let mut page: usize = 1;

    params.set("per_page", T::PAGE_SIZE.to_string());

    loop {
        params.set("page", page.to_string());

        let result = match driver.get(path, &params).await {
            Ok(body) => envelope::unwrap_many::<T>(&body, T::PLURAL),
            Err(e) => Err(e),
        };

        let batch = match result {
            Ok(batch) => batch,
            Err(e) => {
                tracing::warn!(
                    path = path,
                    page = page,
                    error = %e,
                    "Stopping pagination early, returning partial results"
                );
                return Listing {
                    items,
                    complete: false,
                };
            }
        };

        let count = batch.len();
        tracing::debug!(path = path, page = page, count = count, "Fetched page");
        items.extend(batch);

        if count < T::PAGE_SIZE {
            return Listing {
                items,
                complete: true,
            };
        }

        page += 1;
    }
}

/// Fetch every page of the collection at `path`, discarding the completion flag
pub async fn all<T: Resource, R: Reader>(driver: &R, path: &str, params: Params) -> Vec<T> {
    list(driver, path, params).await.into_items()
}

/// Fetch the single entity at `path`
pub async fn find_at<T: Resource, R: Reader>(driver: &R, path: &str) -> Result<T> {
    let body = driver.get(path, &Params::new()).await?;
    envelope::unwrap_one(&body, T::SINGULAR)
}

/// Fetch one entity by identifier
pub async fn find<T: Resource, R: Reader>(driver: &R, id: &str) -> Result<T> {
    find_at(driver, &member_path::<T>(id)).await
}

/// Send `changes` for `entity` and return the entity the API hands back
///
/// `entity` itself is left untouched.
pub async fn update<T, C, U>(driver: &U, entity: &T, changes: &C) -> Result<T>
where
    T: Resource,
    C: Serialize + ?Sized,
    U: Updater,
{
    let data = envelope::wrap(T::SINGULAR, changes)?;
    let body = driver
        .put(&member_path::<T>(entity.id()), &Params::new(), data)
        .await?;
    envelope::unwrap_one(&body, T::SINGULAR)
}
