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
use std::fmt::Display;

/// Badge style for each known constitution label.
const BADGE_CLASSES: [(&'static str, &'static str); 5] = [
    ("태양인", "badge badge-amber"),
    ("태음인", "badge badge-emerald"),
    ("소양인", "badge badge-rose"),
    ("소음인", "badge badge-blue"),
    ("일반", "badge badge-slate"),
];

const NEUTRAL_BADGE: &'static str = "badge badge-gray";

/// A Sasang constitution a recipe can be suited to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodyType {
    Taeyang,
    Taeeum,
    Soyang,
    Soeum,
    General,
    Other(String),
}

impl BodyType {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "태양인" => Self::Taeyang,
            "태음인" => Self::Taeeum,
            "소양인" => Self::Soyang,
            "소음인" => Self::Soeum,
            "일반" => Self::General,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Taeyang => "태양인",
            Self::Taeeum => "태음인",
            Self::Soyang => "소양인",
            Self::Soeum => "소음인",
            Self::General => "일반",
            Self::Other(label) => label.as_str(),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        let label = self.label();
        BADGE_CLASSES
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, class)| *class)
            .unwrap_or(NEUTRAL_BADGE)
    }
}

impl Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
