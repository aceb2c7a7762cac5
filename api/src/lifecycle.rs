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
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use recipes::Recipe;
use tracing::{debug, error, info, instrument, warn};

use crate::{DetailError, ViewState, ALERT_TITLE, LOGIN_ROUTE};

// NOTE(jwall): The browser is single threaded so none of these futures need
// to be Send.

/// Read only access to the persisted bearer token.
#[async_trait(?Send)]
pub trait CredentialStore {
    async fn auth_token(&self) -> Option<String>;
}

#[async_trait(?Send)]
pub trait RecipeApi {
    /// Fetch a single recipe. `Ok(None)` means the api answered with a json
    /// `null`.
    async fn recipe_detail(
        &self,
        recipe_id: &str,
        token: &str,
    ) -> Result<Option<Recipe>, DetailError>;
}

pub trait Alerter {
    fn alert(&self, title: &str, message: &str);
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// The collaborators a recipe detail load talks to.
pub struct DetailContext<'a> {
    pub credentials: &'a dyn CredentialStore,
    pub api: &'a dyn RecipeApi,
    pub alerter: &'a dyn Alerter,
    pub navigator: &'a dyn Navigator,
}

/// Hands out [LoadTicket]s for a single mounted view.
///
/// Starting a load for a new recipe id or cancelling the tracker makes every
/// ticket handed out before it stale.
#[derive(Debug, Default)]
pub struct LoadTracker {
    generation: Rc<Cell<u64>>,
    requested: RefCell<Option<Option<String>>>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` if a load for this recipe id was already started.
    pub fn begin(&self, recipe_id: Option<&str>) -> Option<LoadTicket> {
        let recipe_id = recipe_id.map(|id| id.to_owned());
        let mut requested = self.requested.borrow_mut();
        if requested.as_ref() == Some(&recipe_id) {
            debug!(?recipe_id, "load already started for recipe id");
            return None;
        }
        *requested = Some(recipe_id);
        self.generation.set(self.generation.get() + 1);
        Some(LoadTicket {
            generation: self.generation.clone(),
            issued: self.generation.get(),
        })
    }

    pub fn cancel(&self) {
        self.requested.borrow_mut().take();
        self.generation.set(self.generation.get() + 1);
    }
}

#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl LoadTicket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}

fn report(cx: &DetailContext<'_>, err: &DetailError) {
    cx.alerter.alert(ALERT_TITLE, &err.to_string());
}

/// Drive a single recipe detail load to its terminal [ViewState].
///
/// Returns `None` if the ticket went stale while we were waiting on the
/// credential store or the api. A stale load has no further side effects.
/// The login redirect for [ViewState::Unauthenticated] is left to
/// [finish_load].
#[instrument(skip(ticket, cx))]
pub async fn load_recipe_detail(
    ticket: &LoadTicket,
    recipe_id: Option<&str>,
    cx: &DetailContext<'_>,
) -> Option<ViewState> {
    let recipe_id = match recipe_id.filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => {
            warn!("No recipe id in route");
            report(cx, &DetailError::MissingId);
            return Some(ViewState::MissingId);
        }
    };

    let token = cx.credentials.auth_token().await;
    if !ticket.is_current() {
        debug!("Dropping stale load after credential read");
        return None;
    }
    // NOTE(jwall): We do **not** want to record the token in our logs.
    let token = match token.filter(|t| !t.is_empty()) {
        Some(token) => token,
        None => {
            info!("No auth token stored, redirecting to login");
            report(cx, &DetailError::Unauthenticated);
            return Some(ViewState::Unauthenticated);
        }
    };

    debug!("attempting recipe detail request against api.");
    let result = cx.api.recipe_detail(recipe_id, &token).await;
    if !ticket.is_current() {
        debug!("Dropping stale recipe detail response");
        return None;
    }
    match result {
        Ok(recipe) => {
            debug!(found = recipe.is_some(), "We got a valid response back!");
            Some(ViewState::Ready(recipe))
        }
        Err(err) => {
            match &err {
                DetailError::Http { status, body } => {
                    error!(status, body = body.as_str(), "Recipe detail api error response")
                }
                DetailError::Transport(msg) => {
                    error!(err = msg.as_str(), "Error fetching recipe details")
                }
                _ => error!(?err, "Unexpected recipe detail error"),
            }
            report(cx, &err);
            Some(ViewState::Error(err))
        }
    }
}

/// Hand a terminal [ViewState] to the view and redirect to login if it calls
/// for it.
///
/// Navigating away tears down the view that owns the state, so `set_state`
/// always runs first and nothing touches the view after the redirect. A stale
/// ticket skips both.
pub fn finish_load<F>(ticket: &LoadTicket, next: ViewState, cx: &DetailContext<'_>, set_state: F)
where
    F: FnOnce(ViewState),
{
    if !ticket.is_current() {
        debug!("Dropping terminal state for a stale load");
        return;
    }
    let redirect = matches!(next, ViewState::Unauthenticated);
    set_state(next);
    if redirect {
        cx.navigator.navigate(LOGIN_ROUTE);
    }
}
