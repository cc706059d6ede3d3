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

use crate::components::RECIPE_LIST_PATH;

#[component]
pub fn NotFoundPage<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        main(class="not-found") {
            h1 { "레시피를 찾을 수 없습니다" }
            p { "요청하신 레시피가 없거나 삭제되었습니다." }
            a(href=RECIPE_LIST_PATH, rel="external") { "레시피 목록으로 돌아가기" }
        }
    }
}
