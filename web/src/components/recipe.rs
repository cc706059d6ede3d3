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
use tracing::{debug, instrument};

use recipes::{BodyType, Recipe};

use crate::components::tabs::*;

pub const RECIPE_LIST_PATH: &'static str = "/recommend_recipes";

pub fn ingredient_list<G: Html>(cx: Scope, ingredients: Vec<String>) -> View<G> {
    let ingredients = create_signal(cx, ingredients);
    view! {cx,
        h3 { "필요한 재료" }
        ul(class="ingredients") {
            Indexed(
                iterable=ingredients,
                view=|cx, item| view! {cx,
                    li(class="ingredient") { (item) }
                }
            )
        }
    }
}

pub fn step_list<G: Html>(cx: Scope, steps: Vec<String>) -> View<G> {
    let numbered = create_signal(
        cx,
        steps
            .into_iter()
            .enumerate()
            .map(|(idx, step)| (idx + 1, step))
            .collect::<Vec<(usize, String)>>(),
    );
    view! {cx,
        h3 { "조리 방법" }
        ol(class="recipe_steps") {
            Indexed(
                iterable=numbered,
                view=|cx, (number, step)| view! {cx,
                    li(class="step") {
                        span(class="step-number") { (number) }
                        div(class="instructions") { (step) }
                    }
                }
            )
        }
    }
}

pub fn body_type_badges<G: Html>(cx: Scope, body_types: Vec<BodyType>) -> View<G> {
    let body_types = create_signal(cx, body_types);
    view! {cx,
        div(class="body-types") {
            Indexed(
                iterable=body_types,
                view=|cx, body_type| {
                    let class = body_type.badge_class();
                    let label = body_type.label().to_owned();
                    view! {cx,
                        span(class=class) { (label) }
                    }
                }
            )
        }
    }
}

fn tag_badges<G: Html>(cx: Scope, tags: Vec<String>) -> View<G> {
    let tags = create_signal(cx, tags);
    view! {cx,
        div(class="tags") {
            Indexed(
                iterable=tags,
                view=|cx, tag| view! {cx,
                    span(class="badge tag") { (tag) }
                }
            )
        }
    }
}

fn meta_item<G: Html>(cx: Scope, label: &'static str, value: String) -> View<G> {
    view! {cx,
        div(class="meta-item") {
            span(class="meta-label") { (label) }
            p(class="meta-value") { (value) }
        }
    }
}

fn nutrition_card<G: Html>(cx: Scope, nutrition: Option<String>) -> View<G> {
    match nutrition {
        Some(nutrition) => view! {cx,
            section(class="nutrition") {
                h2 { "영양 정보" }
                p(class="muted") { "1인분 기준" }
                p { (nutrition) }
            }
        },
        None => View::empty(),
    }
}

fn heart_class(saved: bool) -> &'static str {
    if saved {
        "heart saved"
    } else {
        "heart"
    }
}

fn save_label(saved: bool) -> &'static str {
    if saved {
        "저장됨"
    } else {
        "레시피 저장하기"
    }
}

/// The full detail view of a loaded recipe.
///
/// `on_toggle` runs when either the heart or the save button is clicked.
#[instrument(skip_all, fields(recipe_id = recipe.recipe_id()))]
pub fn recipe_detail<'a, G: Html, F>(
    cx: Scope<'a>,
    recipe: Recipe,
    saved: &'a ReadSignal<bool>,
    on_toggle: F,
) -> View<G>
where
    F: Fn() + Copy + 'a,
{
    debug!("rendering recipe detail");
    let active_tab = create_signal(cx, DetailTab::Ingredients);
    let title = recipe.title.clone();
    let description = recipe.description.clone();
    let category = recipe.category.clone().unwrap_or_default();
    let reason = recipe.reason_text().to_owned();
    let tags = tag_badges(cx, recipe.tags.clone());
    let body_types = body_type_badges(cx, recipe.body_types());
    let meta = View::new_fragment(vec![
        meta_item(cx, "조리 시간", recipe.cook_time.clone()),
        meta_item(cx, "난이도", recipe.difficulty.clone()),
        meta_item(cx, "인분", recipe.servings_label().to_owned()),
    ]);
    let ingredients = recipe.ingredients.clone();
    let steps = recipe.steps.clone();
    let nutrition = nutrition_card(cx, recipe.nutrition().map(|n| n.to_owned()));
    let tabs = tab_list(cx, active_tab);

    view! {cx,
        main(class="recipe-detail") {
            a(href=RECIPE_LIST_PATH, rel="external", class="back-link") {
                "레시피 목록으로 돌아가기"
            }
            article(class="recipe") {
                header(class="recipe-header") {
                    button(type="button", class=heart_class(*saved.get()), aria-label="bookmark", on:click=move |_| on_toggle()) {
                        "♥"
                    }
                    span(class="eyebrow") { "체질 맞춤 레시피" }
                    (tags)
                    h1(class="recipe_title") { (title) }
                    p(class="recipe_description") { (description) }
                    (if category.is_empty() {
                        View::empty()
                    } else {
                        let category = category.clone();
                        view! {cx, span(class="badge category") { (category) } }
                    })
                    div(class="recipe-meta") { (meta) }
                }
                section(class="constitution") {
                    h2 { "체질 맞춤 정보" }
                    p(class="muted") { "당신의 체질에 맞춘 레시피입니다" }
                    (body_types)
                    div(class="reason") {
                        span { "이 레시피가 당신의 체질에 이로운 이유" }
                        p { (reason) }
                    }
                }
                section(class="recipe-tabs") {
                    (tabs)
                    (match *active_tab.get() {
                        DetailTab::Ingredients => ingredient_list(cx, ingredients.clone()),
                        DetailTab::Steps => step_list(cx, steps.clone()),
                    })
                }
                (nutrition)
                div(class="actions") {
                    button(type="button", class=if *saved.get() { "outline saved" } else { "primary" }, on:click=move |_| on_toggle()) {
                        (save_label(*saved.get()))
                    }
                }
            }
        }
    }
}
