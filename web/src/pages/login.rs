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
use tracing::{error, info};

use client_api::AUTH_TOKEN_KEY;

use crate::js_lib;

// NOTE(jwall): Obtaining a token is the job of the auth service. This page
// only lets a token be stored so the recipe pages can use it.
#[component]
pub fn LoginForm<G: Html>(cx: Scope) -> View<G> {
    let token = create_signal(cx, "".to_owned());
    let saved = create_signal(cx, false);
    let status = create_memo(cx, move || {
        if *saved.get() {
            "Token saved. Open a recipe to continue.".to_owned()
        } else {
            String::new()
        }
    });
    view! {cx,
        form() {
            label(for="token") { "Bearer token" }
            input(type="password", id="token", bind:value=token)
            input(type="button", value="Save", on:click=move |_| {
                info!("Storing auth token");
                let value = token.get_untracked().trim().to_owned();
                let result = if value.is_empty() {
                    js_lib::remove_item(AUTH_TOKEN_KEY)
                } else {
                    js_lib::set_item(AUTH_TOKEN_KEY, &value)
                };
                match result {
                    Ok(()) => saved.set(!value.is_empty()),
                    Err(err) => error!(?err, "Unable to store auth token"),
                }
            }) {  }
            p(class="login_status") { (status.get()) }
        }
    }
}

#[component]
pub fn LoginPage<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        h1 { "Login" }
        LoginForm()
    }
}
