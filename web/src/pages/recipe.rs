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
use sycamore::prelude::*;
use tracing::debug;

use crate::{
    app_state::{cancel_on_cleanup, get_state_handler, DetailState, Message, StateMachine},
    auth::AuthContext,
    components::{recipe_detail, RecipeSkeleton},
    service::Services,
    tracker::RequestTracker,
};

#[component(inline_props)]
pub fn RecipePage<G: Html>(cx: Scope, recipe: String) -> View<G> {
    debug!(%recipe, "Rendering recipe page");
    let services = Services::get_from_context(cx);
    let auth = AuthContext::get_from_context(cx);
    let loads = RequestTracker::new();
    let bookmarks = RequestTracker::new();
    cancel_on_cleanup(cx, &loads, &bookmarks);
    let sh = get_state_handler(
        cx,
        DetailState::new(),
        StateMachine::new(services, auth.clone(), loads, bookmarks),
    );
    sh.dispatch(cx, Message::LoadRecipe(recipe));

    let loaded_id = sh.get_selector(cx, |state| state.get().recipe_id().map(|id| id.to_owned()));
    // Re-synchronize whenever a recipe arrives or the visitor logs in or out.
    create_effect(cx, move || {
        auth.track();
        if loaded_id.get().is_some() {
            untrack(|| sh.dispatch(cx, Message::SynchronizeBookmark));
        }
    });

    let loading = sh.get_selector(cx, |state| state.get().loading);
    let loaded = sh.get_selector(cx, |state| state.get().recipe.clone());
    let saved = sh.get_selector(cx, |state| state.get().saved);
    let on_toggle = move || sh.dispatch(cx, Message::ToggleBookmark);
    view! {cx,
        (if *loading.get() {
            view! {cx, RecipeSkeleton() }
        } else {
            match loaded.get().as_ref().clone() {
                Some(recipe) => recipe_detail(cx, recipe, saved, on_toggle),
                // Only seen on the way to the not found page.
                None => View::empty(),
            }
        })
    }
}
