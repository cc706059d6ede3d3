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
use recipes::Recipe;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate_replace;
use sycamore_state::{Handler, MessageMapper};
use tracing::{debug, error, info, instrument};

use crate::auth::AuthContext;
use crate::bookmarks;
use crate::js_lib;
use crate::linear::LinearSignal;
use crate::loader::{load_recipe, LoadOutcome, NOT_FOUND_PATH};
use crate::service::Services;
use crate::tracker::RequestTracker;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub loading: bool,
    pub recipe: Option<Recipe>,
    pub saved: bool,
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            loading: true,
            recipe: None,
            saved: false,
        }
    }

    pub fn recipe_id(&self) -> Option<&str> {
        self.recipe.as_ref().map(|r| r.recipe_id())
    }
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum Message {
    LoadRecipe(String),
    SynchronizeBookmark,
    ToggleBookmark,
}

/// Drives one recipe detail page.
///
/// `loads` tickets the recipe fetch. `bookmarks` tickets synchronizing and
/// toggling, so a toggle supersedes any synchronization still in flight.
pub struct StateMachine {
    services: Services,
    auth: RcSignal<AuthContext>,
    loads: RequestTracker,
    bookmarks: RequestTracker,
}

fn update_state<F>(signal: &Signal<DetailState>, f: F)
where
    F: FnOnce(&mut DetailState),
{
    let mut state = signal.get_untracked().as_ref().clone();
    f(&mut state);
    signal.set(state);
}

impl StateMachine {
    pub fn new(
        services: Services,
        auth: RcSignal<AuthContext>,
        loads: RequestTracker,
        bookmarks: RequestTracker,
    ) -> Self {
        Self {
            services,
            auth,
            loads,
            bookmarks,
        }
    }
}

impl MessageMapper<Message, DetailState> for StateMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<DetailState>) {
        let mut original_copy = original.get_untracked().as_ref().clone();
        match msg {
            Message::LoadRecipe(recipe_id) => {
                original_copy = DetailState::new();
                let ticket = self.loads.begin();
                // Whatever was in flight for the previous recipe is moot now.
                self.bookmarks.cancel();
                let services = self.services.clone();
                spawn_local_scoped(cx, async move {
                    let redirect = {
                        let _loading = LinearSignal::from(original)
                            .guarded(ticket.clone())
                            .update(|state| state.loading = false);
                        match load_recipe(services.recipes.as_ref(), &recipe_id).await {
                            LoadOutcome::Loaded(recipe) => {
                                if ticket.is_current() {
                                    update_state(original, |state| state.recipe = Some(recipe));
                                }
                                false
                            }
                            LoadOutcome::NotFound => ticket.is_current(),
                        }
                    };
                    if redirect {
                        info!(%recipe_id, "Recipe not found, redirecting");
                        navigate_replace(NOT_FOUND_PATH);
                    } else if !ticket.is_current() {
                        debug!(%recipe_id, "Dropped a stale recipe load");
                    }
                });
            }
            Message::SynchronizeBookmark => {
                let recipe_id = match original_copy.recipe_id() {
                    Some(id) => id.to_owned(),
                    None => {
                        debug!("No recipe loaded yet, nothing to synchronize");
                        return;
                    }
                };
                let ticket = self.bookmarks.begin();
                let auth = self.auth.get_untracked().as_ref().clone();
                let services = self.services.clone();
                spawn_local_scoped(cx, async move {
                    let saved = bookmarks::synchronize(
                        &auth,
                        services.bookmarks.as_ref(),
                        services.storage.as_ref(),
                        &recipe_id,
                    )
                    .await;
                    if ticket.is_current() {
                        update_state(original, |state| state.saved = saved);
                    } else {
                        debug!(%recipe_id, "Dropped a stale bookmark synchronization");
                    }
                });
                return;
            }
            Message::ToggleBookmark => {
                let recipe_id = match original_copy.recipe_id() {
                    Some(id) => id.to_owned(),
                    None => return,
                };
                let saved = original_copy.saved;
                let ticket = self.bookmarks.begin();
                let auth = self.auth.get_untracked().as_ref().clone();
                let services = self.services.clone();
                spawn_local_scoped(cx, async move {
                    let result = bookmarks::toggle(
                        &auth,
                        services.bookmarks.as_ref(),
                        services.storage.as_ref(),
                        &recipe_id,
                        saved,
                    )
                    .await;
                    if !ticket.is_current() {
                        debug!(%recipe_id, "Dropped a stale bookmark toggle");
                        return;
                    }
                    match result {
                        Ok(saved) => update_state(original, |state| state.saved = saved),
                        Err(err) => {
                            error!(?err, "Unable to toggle bookmark");
                            js_lib::alert(bookmarks::alert_message(&err));
                        }
                    }
                });
                return;
            }
        }
        original.set(original_copy);
    }
}

/// Make every ticket either tracker handed out stale once `cx` is disposed.
pub fn cancel_on_cleanup(cx: Scope, loads: &RequestTracker, bookmarks: &RequestTracker) {
    let loads = loads.clone();
    let bookmarks = bookmarks.clone();
    on_cleanup(cx, move || {
        debug!("Scope disposed, cancelling requests");
        loads.cancel();
        bookmarks.cancel();
    });
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, DetailState, Message>;

pub fn get_state_handler<'ctx>(
    cx: Scope<'ctx>,
    initial: DetailState,
    machine: StateMachine,
) -> StateHandler<'ctx> {
    Handler::new(cx, initial, machine)
}
