//! Engine Yard API transport
//!
//! [`Driver`] issues the raw HTTP calls. The finders and updaters in
//! [`crate::resource`] only depend on the narrow [`Reader`] and [`Updater`]
//! capabilities, so tests can substitute an in-memory fake.

mod http;
mod params;

use std::future::Future;

use crate::error::Result;

pub use http::{Driver, MEDIA_TYPE, TOKEN_HEADER, USER_AGENT};
pub use params::Params;

/// Something that can GET a path and hand back the raw response body
pub trait Reader: Send + Sync {
    fn get(
        &self,
        path: &str,
        params: &Params,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Something that can PUT a payload to a path and hand back the raw response body
pub trait Updater: Send + Sync {
    fn put(
        &self,
        path: &str,
        params: &Params,
        data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}
