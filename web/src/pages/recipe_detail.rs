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
use sycamore::{futures::spawn_local_scoped, prelude::*};
use tracing::{debug, info, instrument};

use client_api::{finish_load, load_recipe_detail, DetailContext, LoadTracker, ViewState};

use crate::api::HttpStore;
use crate::components::{AlertState, DialogAlerter, RecipeDetailView};
use crate::js_lib::LocalCredentials;
use crate::routing::RouterNavigator;

#[derive(Prop)]
pub struct RecipeDetailPageProps<'a> {
    pub recipe_id: &'a ReadSignal<Option<String>>,
}

#[instrument(skip_all)]
#[component]
pub fn RecipeDetailPage<'a, G: Html>(cx: Scope<'a>, props: RecipeDetailPageProps<'a>) -> View<G> {
    let recipe_id = props.recipe_id;
    let store = HttpStore::get_from_context(cx);
    let alerts = AlertState::get_from_context(cx);
    let state = create_signal(cx, ViewState::Loading);
    let tracker = create_ref(cx, LoadTracker::new());

    on_cleanup(cx, move || {
        debug!("Recipe detail unmounted, cancelling pending loads");
        tracker.cancel();
    });

    create_effect(cx, move || {
        let recipe_id = recipe_id.get().as_ref().clone();
        let ticket = match tracker.begin(recipe_id.as_deref()) {
            Some(ticket) => ticket,
            None => return,
        };
        info!(?recipe_id, "Loading recipe detail");
        state.set(ViewState::Loading);
        let store = store.clone();
        let alerter = DialogAlerter::new(alerts.clone());
        spawn_local_scoped(cx, async move {
            let detail_cx = DetailContext {
                credentials: &LocalCredentials,
                api: store.as_ref(),
                alerter: &alerter,
                navigator: &RouterNavigator,
            };
            if let Some(next) = load_recipe_detail(&ticket, recipe_id.as_deref(), &detail_cx).await {
                finish_load(&ticket, next, &detail_cx, |next| state.set(next));
            }
        });
    });

    let detail_view = create_memo(cx, move || state.get().render());
    view! {cx,
        div(class="recipe_detail") {
            RecipeDetailView(view=detail_view)
        }
    }
}
