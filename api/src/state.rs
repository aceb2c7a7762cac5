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
use recipes::{Recipe, RecipeDetail};

use crate::DetailError;

/// Lifecycle of the recipe detail view. Exactly one of these is current at
/// any time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    MissingId,
    Unauthenticated,
    Error(DetailError),
    /// `None` when the api answered with a json `null`.
    Ready(Option<Recipe>),
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Loading
    }
}

/// What the view should paint for a given [ViewState].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Spinner,
    NotFound,
    Redirecting,
    Recipe(RecipeDetail),
}

impl ViewState {
    pub fn render(&self) -> DetailView {
        match self {
            Self::Loading => DetailView::Spinner,
            Self::Unauthenticated => DetailView::Redirecting,
            Self::MissingId | Self::Error(_) | Self::Ready(None) => DetailView::NotFound,
            Self::Ready(Some(recipe)) => DetailView::Recipe(RecipeDetail::from_recipe(recipe)),
        }
    }
}
