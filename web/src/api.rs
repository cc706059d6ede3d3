// Copyright 2022 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::fmt::Display;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use tracing::{debug, error, instrument};

use client_api::*;
use recipes::Recipe;
use wasm_bindgen::JsValue;

use crate::config::ApiConfig;
use crate::service::{BookmarkApi, RecipeSource};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(String);

impl Error {
    pub fn message(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Error> for String {
    fn from(item: Error) -> Self {
        item.0
    }
}

impl From<JsValue> for Error {
    fn from(item: JsValue) -> Self {
        Error(format!("{:?}", item))
    }
}

impl From<String> for Error {
    fn from(item: String) -> Self {
        Error(item)
    }
}

impl From<&'static str> for Error {
    fn from(item: &'static str) -> Self {
        Error(item.to_owned())
    }
}

impl From<serde_json::Error> for Error {
    fn from(item: serde_json::Error) -> Self {
        Error(format!("{}", item))
    }
}

impl From<gloo_net::Error> for Error {
    fn from(item: gloo_net::Error) -> Self {
        Error(format!("{}", item))
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Turn a non success response into an Error carrying the api's message
/// when it sent one.
async fn error_from_response(resp: Response) -> Error {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message().map(|m| m.to_owned()),
        Err(err) => {
            debug!(?err, "Error response had no readable body");
            None
        }
    };
    error!(status, ?message, "Api request was unsuccessful");
    message
        .map(Error)
        .unwrap_or_else(|| format!("Status: {}", status).into())
}

#[derive(Clone, Debug)]
pub struct HttpStore {
    config: ApiConfig,
}

impl HttpStore {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn recipe_url(&self, recipe_id: &str) -> String {
        self.config.url(&recipe_path(&encode_segment(recipe_id)))
    }

    fn bookmarks_url(&self) -> String {
        self.config.url(&bookmarks_path())
    }

    fn bookmark_url(&self, recipe_id: &str) -> String {
        self.config.url(&bookmark_path(&encode_segment(recipe_id)))
    }
}

#[async_trait(?Send)]
impl RecipeSource for HttpStore {
    #[instrument(skip(self))]
    async fn fetch_recipe(&self, recipe_id: &str) -> Result<Recipe, Error> {
        let path = self.recipe_url(recipe_id);
        let resp = Request::get(&path).send().await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        debug!("We got a valid response back!");
        Ok(resp.json::<Recipe>().await?)
    }
}

// NOTE: Tokens are skipped in every span here. They must never reach the logs.
#[async_trait(?Send)]
impl BookmarkApi for HttpStore {
    #[instrument(skip_all)]
    async fn fetch_bookmarks(&self, token: &str) -> Result<Vec<Bookmark>, Error> {
        let resp = Request::get(&self.bookmarks_url())
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let bookmarks = resp.json::<BookmarkListResponse>().await?;
        debug!(count = bookmarks.len(), "Fetched bookmarks");
        Ok(bookmarks)
    }

    #[instrument(skip(self, token))]
    async fn add_bookmark(&self, recipe_id: &str, token: &str) -> Result<(), Error> {
        let resp = Request::post(&self.bookmarks_url())
            .header("Authorization", &bearer(token))
            .json(&BookmarkCreate::new(recipe_id))?
            .send()
            .await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        debug!("Bookmark added");
        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn remove_bookmark(&self, recipe_id: &str, token: &str) -> Result<(), Error> {
        let resp = Request::delete(&self.bookmark_url(recipe_id))
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        debug!("Bookmark removed");
        Ok(())
    }
}
