//! Accounts
//!
//! Finders and the updater for the `accounts` endpoint.

mod entity;

pub use entity::{Account, AccountChanges};

use crate::client::{Params, Reader, Updater};
use crate::error::Result;
use crate::resource::{self, Listing, Resource};
use crate::users::User;

/// Every account visible to the caller. `params` are passed along to the API.
pub async fn all<R: Reader>(driver: &R, params: Params) -> Vec<Account> {
    resource::all(driver, Account::PATH, params).await
}

/// Like [`all`], but reports whether every page was fetched
pub async fn list<R: Reader>(driver: &R, params: Params) -> Listing<Account> {
    resource::list(driver, Account::PATH, params).await
}

/// Every account the given user belongs to
pub async fn for_user<R: Reader>(driver: &R, user: &User, params: Params) -> Vec<Account> {
    list_for_user(driver, user, params).await.into_items()
}

/// Like [`for_user`], but reports whether every page was fetched
pub async fn list_for_user<R: Reader>(driver: &R, user: &User, params: Params) -> Listing<Account> {
    let path = resource::nested_path::<User, Account>(user);
    resource::list(driver, &path, params).await
}

/// A single account by ID
pub async fn find<R: Reader>(driver: &R, id: &str) -> Result<Account> {
    resource::find(driver, id).await
}

/// Ask the API to apply `changes` to `account`, returning the updated account
pub async fn update<U: Updater>(
    driver: &U,
    account: &Account,
    changes: &AccountChanges,
) -> Result<Account> {
    resource::update(driver, account, changes).await
}
