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
use tracing::error;
use web_sys::{window, Storage, Window};

use crate::api::Error;

pub fn get_window() -> Result<Window, Error> {
    window().ok_or_else(|| Error::from("No window present"))
}

pub fn get_storage() -> Result<Storage, Error> {
    get_window()?
        .local_storage()?
        .ok_or_else(|| Error::from("No storage available"))
}

/// Show a blocking alert. Failing to show one is only logged.
pub fn alert(msg: &str) {
    let result = get_window().and_then(|w| w.alert_with_message(msg).map_err(Error::from));
    if let Err(err) = result {
        error!(?err, msg, "Unable to show alert");
    }
}
