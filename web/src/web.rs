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
use tracing::{info, instrument};

use crate::{auth::AuthContext, config::ApiConfig, routing::Handler, service::Services};

/// Provide the services and the visitor's auth context to everything below
/// `cx`. Storage trouble only makes the visitor anonymous.
pub fn provide_app_context(cx: Scope, services: Services) {
    let auth = AuthContext::from_store(services.storage.as_ref());
    info!(authenticated = auth.is_authenticated(), "Starting UI");
    AuthContext::provide_context(cx, auth);
    Services::provide_context(cx, services);
}

#[instrument(skip_all)]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    let config = ApiConfig::from_env();
    info!(root = config.root(), "Using recipe api");
    provide_app_context(cx, Services::browser(config));
    view! {cx,
        div(class="app") {
            Handler()
        }
    }
}
