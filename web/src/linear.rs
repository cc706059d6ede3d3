// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use std::ops::Drop;

use sycamore::prelude::*;

use crate::tracker::Ticket;

/// Applies a pending update to a signal exactly once, when dropped.
///
/// A guarded LinearSignal skips the update if its ticket went stale in the
/// meantime; the signal may belong to a scope that is already gone.
pub struct LinearSignal<'ctx, Payload: Clone> {
    pub signal: &'ctx Signal<Payload>,
    ticket: Option<Ticket>,
    nv: Option<Box<dyn FnOnce(&mut Payload) + 'ctx>>,
}

impl<'ctx, Payload: Clone> From<&'ctx Signal<Payload>> for LinearSignal<'ctx, Payload> {
    fn from(signal: &'ctx Signal<Payload>) -> Self {
        LinearSignal {
            signal,
            ticket: None,
            nv: None,
        }
    }
}

impl<'ctx, Payload: Clone> LinearSignal<'ctx, Payload> {
    pub fn update<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Payload) + 'ctx,
    {
        self.nv = Some(Box::new(f));
        self
    }

    pub fn guarded(mut self, ticket: Ticket) -> Self {
        self.ticket = Some(ticket);
        self
    }
}

impl<'ctx, Payload: Clone> Drop for LinearSignal<'ctx, Payload> {
    fn drop(&mut self) {
        let f = match self.nv.take() {
            Some(f) => f,
            None => return,
        };
        if let Some(ticket) = &self.ticket {
            if !ticket.is_current() {
                return;
            }
        }
        let mut val = self.signal.get_untracked().as_ref().clone();
        f(&mut val);
        self.signal.set(val);
    }
}
