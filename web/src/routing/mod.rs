// Copyright 2022 zaphar
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
use sycamore_router::{navigate, HistoryIntegration, Route, Router};
use tracing::{debug, instrument};

use client_api::Navigator;

use crate::pages::*;

#[derive(Route, Debug, Clone, PartialEq)]
pub enum Routes {
    #[to("/")]
    Login,
    #[to("/recipeDetail/<recipe_id>")]
    RecipeDetail(String),
    #[to("/recipeDetail")]
    MissingRecipeId,
    #[not_found]
    NotFound,
}

impl Routes {
    pub fn recipe_id(&self) -> Option<String> {
        match self {
            Self::RecipeDetail(recipe_id) => Some(recipe_id.clone()),
            _ => None,
        }
    }

    fn page(&self) -> Page {
        match self {
            Self::Login => Page::Login,
            Self::RecipeDetail(_) | Self::MissingRecipeId => Page::RecipeDetail,
            Self::NotFound => Page::NotFound,
        }
    }
}

/// The page a route mounts. Moving between two recipes keeps the same page
/// mounted and only changes its recipe id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Login,
    RecipeDetail,
    NotFound,
}

#[instrument(skip_all)]
fn route_switch<'a, G: Html>(cx: Scope<'a>, route: &'a ReadSignal<Routes>) -> View<G> {
    let page = create_selector(cx, move || route.get().page());
    let recipe_id = create_selector(cx, move || route.get().recipe_id());
    // NOTE(jwall): The page gets its own child scope so that leaving it runs
    // its cleanup.
    View::new_dyn_scoped(cx, move |cx| {
        debug!(page=?page.get(), "Switching page");
        match *page.get() {
            Page::Login => view! {cx,
                LoginPage()
            },
            Page::RecipeDetail => view! {cx,
                RecipeDetailPage(recipe_id=recipe_id)
            },
            Page::NotFound => view! {cx,
                NotFoundPage()
            },
        }
    })
}

#[component]
pub fn Handler<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        Router(
            integration=HistoryIntegration::new(),
            view=route_switch,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        debug!(path, "navigating");
        navigate(path);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_recipe_detail_route() {
        let route = Routes::default().match_path("/recipeDetail/716429");
        assert_eq!(route, Routes::RecipeDetail("716429".to_owned()));
        assert_eq!(route.recipe_id(), Some("716429".to_owned()));
    }

    #[test]
    fn test_missing_recipe_id_route() {
        let route = Routes::default().match_path("/recipeDetail");
        assert_eq!(route, Routes::MissingRecipeId);
        assert_eq!(route.recipe_id(), None);
        assert_eq!(route.page(), Page::RecipeDetail);
    }

    #[test]
    fn test_login_route() {
        assert_eq!(Routes::default().match_path("/"), Routes::Login);
        assert_eq!(Routes::default().match_path("/nowhere/at/all"), Routes::NotFound);
    }
}
