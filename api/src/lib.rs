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
//! The client side contract with the recipe detail api and the lifecycle of
//! the recipe detail view built on top of it.
use thiserror::Error;

mod lifecycle;
mod state;

pub use lifecycle::*;
pub use state::*;

/// Local storage key the bearer token lives under.
pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const RECIPE_DETAIL_PATH: &str = "recipedetail";
/// Where the user is sent when there is no bearer token.
pub const LOGIN_ROUTE: &str = "/";
/// Placeholder used when no api url was configured at build time. It is not
/// routable.
pub const DEFAULT_API_URL: &str = "https://your-api-endpoint.com";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const ALERT_TITLE: &str = "Error";

pub fn recipe_detail_url(base: &str, recipe_id: &str) -> String {
    let mut path = base.trim_end_matches('/').to_owned();
    path.push('/');
    path.push_str(RECIPE_DETAIL_PATH);
    path.push('/');
    path.push_str(recipe_id);
    path
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Everything that can keep the recipe detail view from showing a recipe.
///
/// The display form of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    #[error("No recipe ID provided.")]
    MissingId,
    #[error("Authentication required. Please log in.")]
    Unauthenticated,
    #[error("Failed to fetch recipe: {status}")]
    Http { status: u16, body: String },
    #[error("Failed to load recipe details. Please try again.")]
    Transport(String),
}

/// A fully described `GET` against the recipe detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetailRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl RecipeDetailRequest {
    pub fn new(base: &str, recipe_id: &str, token: &str) -> Self {
        Self {
            url: recipe_detail_url(base, recipe_id),
            headers: vec![
                ("Content-Type", JSON_CONTENT_TYPE.to_owned()),
                ("Authorization", bearer(token)),
            ],
        }
    }
}
