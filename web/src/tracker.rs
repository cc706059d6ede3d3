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
use std::cell::Cell;
use std::rc::Rc;

/// Hands out tickets for in flight requests. Only the newest ticket is
/// current; starting a request or cancelling makes every older one stale.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    generation: Rc<Cell<u64>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let issued = self.bump();
        Ticket {
            generation: self.generation.clone(),
            issued,
        }
    }

    pub fn cancel(&self) {
        self.bump();
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}

#[derive(Clone, Debug)]
pub struct Ticket {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}
