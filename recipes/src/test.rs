// Copyright 2021 Jeremy Wall
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
use crate::*;

use serde_json::from_str;

const FULL_RECIPE: &'static str = r#"{
    "id": "123",
    "title": "파 달걀볶음",
    "description": "간단한 아침 반찬",
    "difficulty": "쉬움",
    "cookTime": "10분",
    "ingredients": ["달걀", "파"],
    "image": "",
    "rating": 4.5,
    "suitableFor": "소음인, 태음인",
    "suitableBodyTypes": ["소음인"],
    "reason": "속을 따뜻하게 합니다.",
    "tags": ["아침", "반찬"],
    "steps": ["볶기", "담기"],
    "servings": "2인분",
    "nutritionalInfo": "단백질 12g",
    "category": "한식",
    "keyIngredients": ["달걀"]
}"#;

#[test]
fn test_recipe_deserializes_camel_case_fields() {
    let recipe: Recipe = from_str(FULL_RECIPE).expect("Failed to parse recipe");
    assert_eq!(recipe.recipe_id(), "123");
    assert_eq!(recipe.cook_time, "10분");
    assert_eq!(recipe.ingredients, vec!["달걀", "파"]);
    assert_eq!(recipe.steps, vec!["볶기", "담기"]);
    assert_eq!(recipe.nutrition(), Some("단백질 12g"));
    assert_eq!(recipe.key_ingredients, vec!["달걀"]);
    assert_eq!(recipe.category.as_deref(), Some("한식"));
    assert_eq!(recipe.rating, Some(4.5));
}

#[test]
fn test_sparse_recipe_gets_defaults() {
    let recipe: Recipe = from_str(r#"{"title": "물"}"#).expect("Failed to parse recipe");
    assert_eq!(recipe.id, None);
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.steps.is_empty());
    assert_eq!(recipe.servings_label(), DEFAULT_SERVINGS);
    assert_eq!(recipe.reason_text(), DEFAULT_REASON);
    assert_eq!(recipe.nutrition(), None);
    assert!(recipe.body_types().is_empty());
}

#[test]
fn test_ensure_id_only_fills_missing_ids() {
    let mut missing: Recipe = from_str(r#"{"title": "물"}"#).unwrap();
    missing.ensure_id("42");
    assert_eq!(missing.recipe_id(), "42");

    let mut present = Recipe::new("7", "국");
    present.ensure_id("42");
    assert_eq!(present.recipe_id(), "7");
}

#[test]
fn test_body_type_list_wins_over_delimited_text() {
    let recipe: Recipe = from_str(FULL_RECIPE).unwrap();
    assert_eq!(recipe.body_types(), vec![BodyType::Soeum]);
}

#[test]
fn test_empty_body_type_list_still_wins() {
    let mut recipe = Recipe::new("1", "국");
    recipe.suitable_body_types = Some(Vec::new());
    recipe.suitable_for = Some("태양인".to_owned());
    assert!(recipe.body_types().is_empty());
}

#[test]
fn test_body_types_from_delimited_text() {
    let mut recipe = Recipe::new("1", "국");
    recipe.suitable_for = Some("소음인, 태음인,,목양체질 ".to_owned());
    assert_eq!(
        recipe.body_types(),
        vec![
            BodyType::Soeum,
            BodyType::Taeeum,
            BodyType::Other("목양체질".to_owned()),
        ]
    );
}

#[test]
fn test_badge_lookup() {
    assert_eq!(BodyType::Taeyang.badge_class(), "badge badge-amber");
    assert_eq!(BodyType::General.badge_class(), "badge badge-slate");
    assert_eq!(
        BodyType::from_label("금양체질").badge_class(),
        "badge badge-gray"
    );
    // An Other carrying a known label still finds its badge.
    assert_eq!(
        BodyType::Other("소양인".to_owned()).badge_class(),
        "badge badge-rose"
    );
}

#[test]
fn test_body_type_labels_round_trip_through_display() {
    for label in ["태양인", "태음인", "소양인", "소음인", "일반", "수음체질"] {
        assert_eq!(format!("{}", BodyType::from_label(label)), label);
    }
}

#[test]
fn test_servings_label_prefers_recipe_value() {
    let mut recipe = Recipe::new("1", "국");
    recipe.servings = "3인분".to_owned();
    assert_eq!(recipe.servings_label(), "3인분");
}
