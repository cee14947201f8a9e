#![allow(dead_code)]

//! In-memory stand-in for the Engine Yard API
//!
//! Responses are keyed by verb and canonical URL. Anything not registered
//! answers with a 404. Every call is recorded so tests can inspect paths,
//! query strings and bodies.

use std::collections::HashMap;
use std::sync::Mutex;

use maury::client::{Params, Reader, Updater};
use maury::Error;

const ROOT: &str = "https://api.engineyard.com";

/// One call made against the fake
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Vec<u8>>,
}

impl Call {
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().unwrap_or_default()).unwrap()
    }
}

#[derive(Default)]
pub struct FakeApi {
    responses: HashMap<String, String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(path: &str, params: &Params) -> String {
        if params.is_empty() {
            format!("{}/{}", ROOT, path)
        } else {
            format!("{}/{}?{}", ROOT, path, params.encode())
        }
    }

    /// Answer GET `path` with `params` using `body`
    pub fn on_get(&mut self, path: &str, params: &Params, body: impl Into<String>) {
        self.responses
            .insert(format!("GET {}", Self::url(path, params)), body.into());
    }

    /// Answer the `page`th listing request for `path`
    pub fn on_page(&mut self, path: &str, page: usize, body: impl Into<String>) {
        self.on_get(path, &page_params(page), body);
    }

    /// Answer PUT `path` using `body`
    pub fn on_put(&mut self, path: &str, body: impl Into<String>) {
        self.responses
            .insert(format!("PUT {}", Self::url(path, &Params::new())), body.into());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, method: &'static str, url: String, body: Option<Vec<u8>>) -> maury::Result<Vec<u8>> {
        let key = format!("{} {}", method, url);
        self.calls.lock().unwrap().push(Call { method, url, body });

        match self.responses.get(&key) {
            Some(response) => Ok(response.as_bytes().to_vec()),
            None => Err(Error::Upstream { status: 404 }),
        }
    }
}

impl Reader for FakeApi {
    async fn get(&self, path: &str, params: &Params) -> maury::Result<Vec<u8>> {
        self.respond("GET", Self::url(path, params), None)
    }
}

impl Updater for FakeApi {
    async fn put(&self, path: &str, params: &Params, data: Vec<u8>) -> maury::Result<Vec<u8>> {
        self.respond("PUT", Self::url(path, params), Some(data))
    }
}

/// The parameters the finders send for `page`
pub fn page_params(page: usize) -> Params {
    let mut params = Params::new();
    params.set("page", page.to_string());
    params.set("per_page", "100");
    params
}

/// A collection envelope holding entities with IDs `start..=finish`
pub fn generate(key: &str, start: usize, finish: usize) -> String {
    let items: Vec<String> = (start..=finish)
        .map(|x| format!(r#"{{"id" : "{}"}}"#, x))
        .collect();

    format!(r#"{{"{}" : [{}]}}"#, key, items.join(","))
}

/// Register pages for a collection of `total` entities, 100 to a page, the
/// way the API would serve them
pub fn serve_collection(api: &mut FakeApi, path: &str, key: &str, total: usize) {
    let mut page = 1;
    let mut start = 1;

    loop {
        let finish = (start + 99).min(total);
        if start > total {
            api.on_page(path, page, format!(r#"{{"{}" : []}}"#, key));
            break;
        }

        api.on_page(path, page, generate(key, start, finish));
        if finish - start + 1 < 100 {
            break;
        }

        start = finish + 1;
        page += 1;
    }
}
