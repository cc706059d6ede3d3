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

/// Storage key holding the token the login flow issued.
pub const ACCESS_TOKEN_KEY: &'static str = "accessToken";
/// Storage key holding the saved recipe ids of an anonymous visitor.
pub const SAVED_RECIPES_KEY: &'static str = "savedRecipes";

/// Where the recipe api lives.
///
/// The root is baked in at build time from `SASANG_API_URL`. An empty root
/// means the api is served from the same origin as the ui.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    root: String,
}

impl ApiConfig {
    pub fn new<S: Into<String>>(root: S) -> Self {
        let mut root = root.into();
        while root.ends_with('/') {
            root.pop();
        }
        Self { root }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("SASANG_API_URL").unwrap_or(""))
    }

    pub fn root(&self) -> &str {
        self.root.as_str()
    }

    pub fn url(&self, path: &str) -> String {
        let mut url = self.root.clone();
        url.push_str(path);
        url
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://api.example.com//");
        assert_eq!(config.root(), "https://api.example.com");
        assert_eq!(
            config.url("/api/v1/recipes/123"),
            "https://api.example.com/api/v1/recipes/123"
        );
    }

    #[test]
    fn test_empty_root_is_same_origin() {
        let config = ApiConfig::new("");
        assert_eq!(config.url("/api/v1/bookmarks/"), "/api/v1/bookmarks/");
    }
}
