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
use sycamore_router::{HistoryIntegration, Route, Router};
use tracing::{instrument, warn};

use crate::pages::*;

/// Path segments arrive still percent encoded.
pub fn decode_segment(segment: &str) -> String {
    match urlencoding::decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            warn!(?err, segment, "Path segment did not decode to utf-8, using it as is");
            segment.to_owned()
        }
    }
}

#[instrument(skip_all)]
fn route_switch<'a, G: Html>(cx: Scope<'a>, route: &'a ReadSignal<Routes>) -> View<G> {
    // NOTE: Keep the match inside a single dynamic node so leaving a recipe
    // disposes of its page scope.
    view! {cx,
        (match route.get().as_ref() {
            Routes::Recipe(segment) => {
                let id = decode_segment(segment);
                view! {cx,
                    RecipePage(recipe=id)
                }
            },
            Routes::NotFound => view! {cx,
                NotFoundPage()
            },
        })
    }
}

#[derive(Route, Debug)]
pub enum Routes {
    #[to("/recipe/<id>")]
    Recipe(String),
    #[not_found]
    NotFound,
}

#[component]
pub fn Handler<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        Router(
            integration=HistoryIntegration::new(),
            view=route_switch,
        )
    }
}
