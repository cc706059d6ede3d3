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
use std::fmt::Debug;

use sycamore::prelude::*;
use tracing::{debug, warn};

use crate::config::ACCESS_TOKEN_KEY;
use crate::storage::KeyValueStore;

/// Who is looking at the page.
///
/// Issuing tokens is the login flow's job. This only carries the outcome.
#[derive(Clone, PartialEq, Default)]
pub struct AuthContext {
    authenticated: bool,
    token: Option<String>,
}

impl AuthContext {
    pub fn new(authenticated: bool, token: Option<String>) -> Self {
        Self {
            authenticated,
            token,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token<S: Into<String>>(token: S) -> Self {
        Self::new(true, Some(token.into()))
    }

    pub fn from_store(store: &dyn KeyValueStore) -> Self {
        match store.read(ACCESS_TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => {
                debug!("Found an access token");
                Self::with_token(token)
            }
            Ok(_) => Self::anonymous(),
            Err(err) => {
                warn!(?err, "Unable to read the access token");
                Self::anonymous()
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The token to use against the bookmark api. Only present when the
    /// visitor is authenticated *and* holds a non empty token.
    pub fn session(&self) -> Option<&str> {
        if !self.authenticated {
            return None;
        }
        self.token().filter(|t| !t.is_empty())
    }

    pub fn provide_context(cx: Scope, auth: Self) -> &RcSignal<Self> {
        provide_context(cx, create_rc_signal(auth))
    }

    pub fn get_from_context(cx: Scope) -> RcSignal<Self> {
        use_context::<RcSignal<Self>>(cx).clone()
    }
}

// NOTE: The token stays out of Debug output so spans can't leak it.
impl Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("authenticated", &self.authenticated)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}
