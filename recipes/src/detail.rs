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
//! The render model for a single recipe.
//!
//! [RecipeDetail::from_recipe] is a pure function of the [Recipe]. The ui
//! layer only maps the result onto nodes.
use std::collections::BTreeSet;

use crate::{Ingredient, Recipe, Step};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub key: String,
    pub thumbnail: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentThumb {
    pub key: String,
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub key: String,
    pub label: String,
    pub text: String,
    pub equipment: Vec<EquipmentThumb>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instructions {
    Steps(Vec<StepView>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub title: String,
    pub image: String,
    pub likes: String,
    pub ready_in: String,
    pub servings: String,
    pub ingredients: Vec<IngredientRow>,
    pub instructions: Instructions,
}

fn count_slot(n: Option<u64>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}

fn synthetic_key(idx: usize) -> String {
    format!("ingredient-{}", idx)
}

/// Row keys for an ingredient list. The ingredient id is preferred, the
/// positional key is the fallback, and the result never contains duplicates.
pub fn ingredient_keys(ingredients: &[Ingredient]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    ingredients
        .iter()
        .enumerate()
        .map(|(idx, ingredient)| {
            let mut key = match &ingredient.id {
                Some(id) if !id.is_blank() => id.to_string(),
                _ => synthetic_key(idx),
            };
            if seen.contains(&key) {
                key = synthetic_key(idx);
            }
            let base = key.clone();
            let mut suffix = 1;
            while seen.contains(&key) {
                key = format!("{}-{}", base, suffix);
                suffix += 1;
            }
            seen.insert(key.clone());
            key
        })
        .collect()
}

fn step_view(idx: usize, step: &Step) -> StepView {
    let equipment = step
        .equipment()
        .iter()
        .enumerate()
        // An equipment entry without an image has nothing to show.
        .filter_map(|(eq_idx, eq)| {
            eq.image.as_ref().map(|url| EquipmentThumb {
                key: format!("equipment-{}-{}", idx, eq_idx),
                url: url.clone(),
                name: eq.name.clone().unwrap_or_default(),
            })
        })
        .collect();
    StepView {
        key: format!("step-{}", idx),
        label: format!(
            "Step {}",
            step.number.map(|n| n.to_string()).unwrap_or_default()
        ),
        text: step.step.clone().unwrap_or_default(),
        equipment,
    }
}

impl RecipeDetail {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let ingredients = recipe.ingredients();
        let ingredients = ingredient_keys(ingredients)
            .into_iter()
            .zip(ingredients.iter())
            .map(|(key, ingredient)| IngredientRow {
                key,
                thumbnail: ingredient.thumbnail_url(),
                text: ingredient.original.clone().unwrap_or_default(),
            })
            .collect();
        let steps = recipe.steps();
        let instructions = if steps.is_empty() {
            Instructions::Empty
        } else {
            Instructions::Steps(
                steps
                    .iter()
                    .enumerate()
                    .map(|(idx, step)| step_view(idx, step))
                    .collect(),
            )
        };
        Self {
            title: recipe.title.clone().unwrap_or_default(),
            image: recipe.image.clone().unwrap_or_default(),
            likes: format!("❤️ {} Likes", count_slot(recipe.aggregate_likes)),
            ready_in: format!("⏳ {} minutes", count_slot(recipe.ready_in_minutes)),
            servings: format!("🍽 {} servings", count_slot(recipe.servings)),
            ingredients,
            instructions,
        }
    }

    pub fn meta_lines(&self) -> [&str; 3] {
        [
            self.likes.as_str(),
            self.ready_in.as_str(),
            self.servings.as_str(),
        ]
    }
}
