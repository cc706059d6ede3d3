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
use tracing::{debug, instrument, warn};

use client_api::is_bookmarked;

use crate::api::Error;
use crate::auth::AuthContext;
use crate::service::BookmarkApi;
use crate::storage::{KeyValueStore, SavedRecipes};

pub const GENERIC_BOOKMARK_ERROR: &'static str = "북마크 처리 중 오류 발생";

/// The text to alert with when a toggle fails.
pub fn alert_message(err: &Error) -> &str {
    if err.message().is_empty() {
        GENERIC_BOOKMARK_ERROR
    } else {
        err.message()
    }
}

/// Work out whether `recipe_id` is saved.
///
/// Authenticated visitors ask the bookmark api and a failure there counts as
/// not saved. Everyone else gets the local saved list.
#[instrument(skip(auth, api, store))]
pub async fn synchronize(
    auth: &AuthContext,
    api: &dyn BookmarkApi,
    store: &dyn KeyValueStore,
    recipe_id: &str,
) -> bool {
    match auth.session() {
        Some(token) => match api.fetch_bookmarks(token).await {
            Ok(bookmarks) => is_bookmarked(&bookmarks, recipe_id),
            Err(err) => {
                warn!(?err, "Unable to fetch bookmarks, treating recipe as unsaved");
                false
            }
        },
        None => SavedRecipes::load(store).contains(recipe_id),
    }
}

/// Flip the saved state of `recipe_id` and return the new state.
///
/// Anonymous visitors get their local list updated and the flag flipped
/// without reading anything back. Authenticated visitors get the mutation
/// sent to the api and then the whole bookmark list fetched again; the flag
/// comes from that list. On error nothing about the saved state changed.
#[instrument(skip(auth, api, store))]
pub async fn toggle(
    auth: &AuthContext,
    api: &dyn BookmarkApi,
    store: &dyn KeyValueStore,
    recipe_id: &str,
    saved: bool,
) -> Result<bool, Error> {
    let token = match auth.session() {
        Some(token) => token,
        None => {
            SavedRecipes::load(store)
                .toggled(recipe_id, saved)
                .persist(store)?;
            debug!(saved = !saved, "Updated local saved recipes");
            return Ok(!saved);
        }
    };
    if saved {
        api.remove_bookmark(recipe_id, token).await?;
    } else {
        api.add_bookmark(recipe_id, token).await?;
    }
    let bookmarks = api.fetch_bookmarks(token).await?;
    let now_saved = is_bookmarked(&bookmarks, recipe_id);
    debug!(saved = now_saved, "Re-synchronized bookmarks");
    Ok(now_saved)
}
