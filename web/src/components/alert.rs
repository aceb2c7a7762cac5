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
use tracing::{debug, error};
use web_sys::HtmlDialogElement;

use client_api::Alerter;

use crate::js_lib::get_element_by_id;

const DIALOG_ID: &'static str = "alert-dialog";

/// Title and message of the alert currently on screen.
#[derive(Clone)]
pub struct AlertState {
    pub title: RcSignal<String>,
    pub message: RcSignal<String>,
}

impl AlertState {
    pub fn new() -> Self {
        Self {
            title: create_rc_signal(String::new()),
            message: create_rc_signal(String::new()),
        }
    }

    pub fn provide_context(cx: Scope) {
        provide_context(cx, Self::new());
    }

    pub fn get_from_context(cx: Scope) -> Self {
        use_context::<Self>(cx).clone()
    }
}

fn get_alert_dialog() -> Option<HtmlDialogElement> {
    match get_element_by_id::<HtmlDialogElement>(DIALOG_ID) {
        Ok(el) => el,
        Err(el) => {
            error!(?el, "alert-dialog isn't an html dialog element!");
            None
        }
    }
}

fn close_alert() {
    if let Some(el) = get_alert_dialog() {
        el.close();
    }
}

#[component]
pub fn AlertDialog<G: Html>(cx: Scope) -> View<G> {
    let state = AlertState::get_from_context(cx);
    let AlertState { title, message } = state;
    view! {cx,
        dialog(id=DIALOG_ID, class="alert") {
            article {
                header { (title.get()) }
                p { (message.get()) }
                footer {
                    button(type="button", on:click=|_| close_alert()) { "OK" }
                }
            }
        }
    }
}

/// Shows alerts in the modal `alert-dialog`.
pub struct DialogAlerter(AlertState);

impl DialogAlerter {
    pub fn new(state: AlertState) -> Self {
        Self(state)
    }
}

impl Alerter for DialogAlerter {
    fn alert(&self, title: &str, message: &str) {
        debug!(title, message, "Showing alert");
        self.0.title.set(title.to_owned());
        self.0.message.set(message.to_owned());
        match get_alert_dialog() {
            Some(el) => {
                if let Err(err) = el.show_modal() {
                    error!(?err, "Unable to show alert dialog");
                }
            }
            None => error!(message, "No alert-dialog to show the alert in"),
        }
    }
}
