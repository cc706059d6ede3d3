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
pub mod body_type;

use serde::{Deserialize, Serialize};

pub use body_type::BodyType;

pub const DEFAULT_SERVINGS: &'static str = "1인분";
pub const DEFAULT_REASON: &'static str = "체질에 맞는 재료와 조리법이 사용되었습니다. \
체질 특성을 고려한 영양소 균형과 조리 방법으로 건강에 도움을 줍니다.";

/// A Recipe as the recipe api serves it.
///
/// Field names on the wire are camelCase. Anything the api leaves out
/// defaults so that a sparse record still renders.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub cook_time: String,
    pub difficulty: String,
    pub servings: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub nutritional_info: Option<String>,
    pub reason: Option<String>,
    pub suitable_body_types: Option<Vec<String>>,
    pub suitable_for: Option<String>,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub category: Option<String>,
    pub key_ingredients: Vec<String>,
    pub last_edit_reason: Option<String>,
}

impl Recipe {
    pub fn new<IS: Into<String>, TS: Into<String>>(id: IS, title: TS) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_ingredients<Iter, S>(mut self, ingredients: Iter) -> Self
    where
        Iter: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(|i| i.into()));
        self
    }

    pub fn with_steps<Iter, S>(mut self, steps: Iter) -> Self
    where
        Iter: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.extend(steps.into_iter().map(|s| s.into()));
        self
    }

    pub fn with_tags<Iter, S>(mut self, tags: Iter) -> Self
    where
        Iter: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(|t| t.into()));
        self
    }

    pub fn recipe_id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Fill in the id from the path we requested when the api left it out.
    pub fn ensure_id<S: Into<String>>(&mut self, id: S) {
        match &self.id {
            Some(current) if !current.is_empty() => {}
            _ => self.id = Some(id.into()),
        }
    }

    pub fn servings_label(&self) -> &str {
        if self.servings.is_empty() {
            DEFAULT_SERVINGS
        } else {
            self.servings.as_str()
        }
    }

    pub fn reason_text(&self) -> &str {
        match self.reason.as_deref() {
            Some(r) if !r.is_empty() => r,
            _ => DEFAULT_REASON,
        }
    }

    pub fn nutrition(&self) -> Option<&str> {
        self.nutritional_info.as_deref().filter(|n| !n.is_empty())
    }

    /// The body types this recipe suits.
    ///
    /// The explicit list wins whenever the api sent one, even an empty one.
    /// Otherwise the comma delimited `suitableFor` text is used.
    pub fn body_types(&self) -> Vec<BodyType> {
        if let Some(types) = &self.suitable_body_types {
            return types.iter().map(|t| BodyType::from_label(t)).collect();
        }
        match &self.suitable_for {
            Some(text) => text
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(BodyType::from_label)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod test;
