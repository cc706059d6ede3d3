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
use serde_json::{from_str, to_string, Value};
use tracing::{debug, warn};

use crate::api::Error;
use crate::config::SAVED_RECIPES_KEY;
use crate::js_lib;

/// A string keyed store of string values. Browser local storage in the app.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, Error>;

    fn write(&self, key: &str, value: &str) -> Result<(), Error>;
}

/// The window's local storage, looked up on every call. A browser without
/// one fails the individual read or write, not the page.
#[derive(Clone, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(js_lib::get_storage()?.get_item(key)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        Ok(js_lib::get_storage()?.set_item(key, value)?)
    }
}

/// The recipe ids an anonymous visitor saved on this browser.
///
/// Any id appears at most once no matter how often it gets toggled. Entries
/// that aren't strings are never matched but are written back untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SavedRecipes(Vec<Value>);

impl SavedRecipes {
    /// Reads the list from the store. Missing, unreadable, or malformed
    /// content is an empty list.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.read(SAVED_RECIPES_KEY) {
            Ok(Some(raw)) => Self::parse(&raw),
            Ok(None) => Self::default(),
            Err(err) => {
                warn!(?err, "Unable to read saved recipes");
                Self::default()
            }
        }
    }

    /// Anything but a JSON array is malformed and parses as empty.
    pub fn parse(raw: &str) -> Self {
        match from_str::<Vec<Value>>(raw) {
            Ok(entries) => Self(entries),
            Err(err) => {
                warn!(?err, "Saved recipes were malformed, treating them as empty");
                Self::default()
            }
        }
    }

    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<(), Error> {
        debug!(count = self.0.len(), "Persisting saved recipes");
        store.write(SAVED_RECIPES_KEY, &to_string(&self.0)?)
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.0.iter().any(|entry| is_id(entry, recipe_id))
    }

    pub fn with(mut self, recipe_id: &str) -> Self {
        if !self.contains(recipe_id) {
            self.0.push(Value::String(recipe_id.to_owned()));
        }
        self
    }

    pub fn without(mut self, recipe_id: &str) -> Self {
        self.0.retain(|entry| !is_id(entry, recipe_id));
        self
    }

    /// Removes the id when it is `saved`, appends it otherwise.
    pub fn toggled(self, recipe_id: &str, saved: bool) -> Self {
        if saved {
            self.without(recipe_id)
        } else {
            self.with(recipe_id)
        }
    }
}

fn is_id(entry: &Value, recipe_id: &str) -> bool {
    entry.as_str() == Some(recipe_id)
}
