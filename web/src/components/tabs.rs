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
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Ingredients,
    Steps,
}

impl DetailTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ingredients => "재료",
            Self::Steps => "조리 방법",
        }
    }
}

const TABLIST: [DetailTab; 2] = [DetailTab::Ingredients, DetailTab::Steps];

/// Tab strip switching `selected` in place.
pub fn tab_list<'a, G: Html>(cx: Scope<'a>, selected: &'a Signal<DetailTab>) -> View<G> {
    let tablist = create_signal(cx, TABLIST.to_vec());
    view! {cx,
        nav {
            ul(class="tabs") {
                Indexed(
                    iterable=tablist,
                    view=move |cx, tab| {
                        let class = move || {
                            if *selected.get() == tab {
                                "no-print selected"
                            } else {
                                "no-print"
                            }
                        };
                        view! {cx,
                            li(class=class()) {
                                button(type="button", on:click=move |_| {
                                    debug!(?tab, "selecting tab");
                                    selected.set(tab);
                                }) { (tab.label()) }
                            }
                        }
                    }
                )
            }
        }
    }
}
