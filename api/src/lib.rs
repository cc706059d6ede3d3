// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const API_PREFIX: &'static str = "/api/v1";

pub fn recipe_path(recipe_id: &str) -> String {
    format!("{}/recipes/{}", API_PREFIX, recipe_id)
}

pub fn bookmarks_path() -> String {
    format!("{}/bookmarks/", API_PREFIX)
}

pub fn bookmark_path(recipe_id: &str) -> String {
    format!("{}/bookmarks/{}", API_PREFIX, recipe_id)
}

/// A recipe saved by a user on the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bookmark {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub recipe_id: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Bookmark {
    pub fn new<US: Into<String>, RS: Into<String>>(user_id: US, recipe_id: RS) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            recipe_id: recipe_id.into(),
            created_at: None,
        }
    }
}

pub type BookmarkListResponse = Vec<Bookmark>;

/// True when any bookmark in the list points at `recipe_id`.
pub fn is_bookmarked(bookmarks: &[Bookmark], recipe_id: &str) -> bool {
    bookmarks.iter().any(|b| b.recipe_id == recipe_id)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookmarkCreate {
    pub recipe_id: String,
}

impl BookmarkCreate {
    pub fn new<S: Into<String>>(recipe_id: S) -> Self {
        Self {
            recipe_id: recipe_id.into(),
        }
    }
}

/// The error body the api sends with any non success status.
///
/// `detail` is usually a message but validation failures send a list of
/// objects instead.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Detail>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Detail {
    Message(String),
    Structured(serde_json::Value),
}

impl ErrorBody {
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(Detail::Message(msg)) if !msg.is_empty() => Some(msg.as_str()),
            _ => None,
        }
    }
}
