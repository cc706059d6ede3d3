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

#[component]
pub fn RecipeSkeleton<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        div(class="recipe-detail loading", aria-busy="true") {
            p(class="loading-text") { "로딩 중..." }
            div(class="skeleton skeleton-title") {}
            div(class="skeleton skeleton-line") {}
            div(class="skeleton skeleton-line") {}
            div(class="skeleton-grid") {
                div(class="skeleton skeleton-card") {}
                div(class="skeleton skeleton-card") {}
                div(class="skeleton skeleton-card") {}
                div(class="skeleton skeleton-card") {}
            }
        }
    }
}
