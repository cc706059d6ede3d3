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
use tracing::{error, info, instrument};

use recipes::Recipe;

use crate::service::RecipeSource;

pub const NOT_FOUND_PATH: &'static str = "/404";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Recipe),
    NotFound,
}

/// Fetch one recipe. Every kind of failure is a NotFound; the page redirects
/// on it without retrying.
#[instrument(skip(source))]
pub async fn load_recipe(source: &dyn RecipeSource, recipe_id: &str) -> LoadOutcome {
    if recipe_id.is_empty() {
        error!("Refusing to load a recipe without an id");
        return LoadOutcome::NotFound;
    }
    match source.fetch_recipe(recipe_id).await {
        Ok(mut recipe) => {
            recipe.ensure_id(recipe_id);
            info!(title = %recipe.title, "Loaded recipe");
            LoadOutcome::Loaded(recipe)
        }
        Err(err) => {
            error!(?err, "Failed to load recipe");
            LoadOutcome::NotFound
        }
    }
}
