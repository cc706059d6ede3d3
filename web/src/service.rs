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
use std::rc::Rc;

use async_trait::async_trait;
use sycamore::prelude::*;

use client_api::Bookmark;
use recipes::Recipe;

use crate::api::{Error, HttpStore};
use crate::config::ApiConfig;
use crate::storage::{BrowserStorage, KeyValueStore};

#[async_trait(?Send)]
pub trait RecipeSource {
    async fn fetch_recipe(&self, recipe_id: &str) -> Result<Recipe, Error>;
}

/// The server side bookmark set of an authenticated user.
#[async_trait(?Send)]
pub trait BookmarkApi {
    async fn fetch_bookmarks(&self, token: &str) -> Result<Vec<Bookmark>, Error>;

    async fn add_bookmark(&self, recipe_id: &str, token: &str) -> Result<(), Error>;

    async fn remove_bookmark(&self, recipe_id: &str, token: &str) -> Result<(), Error>;
}

/// Everything the recipe pages talk to, handed down through the scope context.
#[derive(Clone)]
pub struct Services {
    pub recipes: Rc<dyn RecipeSource>,
    pub bookmarks: Rc<dyn BookmarkApi>,
    pub storage: Rc<dyn KeyValueStore>,
}

impl Services {
    pub fn new(
        recipes: Rc<dyn RecipeSource>,
        bookmarks: Rc<dyn BookmarkApi>,
        storage: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            recipes,
            bookmarks,
            storage,
        }
    }

    pub fn browser(config: ApiConfig) -> Self {
        let store = Rc::new(HttpStore::new(config));
        Self::new(store.clone(), store, Rc::new(BrowserStorage))
    }

    pub fn provide_context(cx: Scope, services: Self) {
        provide_context(cx, services);
    }

    pub fn get_from_context(cx: Scope) -> Self {
        use_context::<Self>(cx).clone()
    }
}
