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

mod login;
mod recipe_detail;

pub use login::*;
pub use recipe_detail::*;

#[component]
pub fn NotFoundPage<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        div(class="centered") {
            p(class="error_text") { "Page not found." }
        }
    }
}
