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
pub mod detail;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use detail::*;

/// Prefix under which ingredient thumbnails are addressable by bare filename.
pub const CDN_PREFIX: &str = "https://spoonacular.com/cdn/ingredients_100x100/";

/// A recipe record as the recipe detail api returns it.
///
/// Every field is optional. The api is free to send a sparse payload and
/// `null` is treated the same as a missing field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: Option<String>,
    pub image: Option<String>,
    pub aggregate_likes: Option<u64>,
    pub ready_in_minutes: Option<u64>,
    pub servings: Option<u64>,
    pub extended_ingredients: Option<Vec<Ingredient>>,
    pub analyzed_instructions: Option<Vec<InstructionGroup>>,
}

impl Recipe {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_ingredients<Iter>(mut self, ingredients: Iter) -> Self
    where
        Iter: IntoIterator<Item = Ingredient>,
    {
        self.extended_ingredients = Some(ingredients.into_iter().collect());
        self
    }

    pub fn with_steps<Iter>(mut self, steps: Iter) -> Self
    where
        Iter: IntoIterator<Item = Step>,
    {
        self.analyzed_instructions = Some(vec![InstructionGroup {
            steps: Some(steps.into_iter().collect()),
        }]);
        self
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        self.extended_ingredients.as_deref().unwrap_or(&[])
    }

    /// The steps of the first instruction group. Any further groups are
    /// ignored.
    pub fn steps(&self) -> &[Step] {
        self.analyzed_instructions
            .as_ref()
            .and_then(|groups| groups.first())
            .and_then(|group| group.steps.as_deref())
            .unwrap_or(&[])
    }
}

/// Ingredient ids arrive as numbers from the upstream api but we tolerate
/// strings too.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum IngredientId {
    Number(i64),
    Text(String),
}

impl IngredientId {
    /// A zero or empty id does not identify anything.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Ingredient {
    pub id: Option<IngredientId>,
    /// Bare filename relative to [CDN_PREFIX].
    pub image: Option<String>,
    pub original: Option<String>,
}

impl Ingredient {
    pub fn new<S: Into<String>>(id: Option<i64>, image: S, original: S) -> Self {
        Self {
            id: id.map(IngredientId::Number),
            image: Some(image.into()),
            original: Some(original.into()),
        }
    }

    pub fn thumbnail_url(&self) -> String {
        format!("{}{}", CDN_PREFIX, self.image.as_deref().unwrap_or(""))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct InstructionGroup {
    pub steps: Option<Vec<Step>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Step {
    pub number: Option<u32>,
    pub step: Option<String>,
    pub equipment: Option<Vec<Equipment>>,
}

impl Step {
    pub fn new<S: Into<String>>(number: u32, step: S) -> Self {
        Self {
            number: Some(number),
            step: Some(step.into()),
            equipment: None,
        }
    }

    pub fn with_equipment<Iter>(mut self, equipment: Iter) -> Self
    where
        Iter: IntoIterator<Item = Equipment>,
    {
        self.equipment = Some(equipment.into_iter().collect());
        self
    }

    pub fn equipment(&self) -> &[Equipment] {
        self.equipment.as_deref().unwrap_or(&[])
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Equipment {
    pub name: Option<String>,
    /// Absolute url, used verbatim.
    pub image: Option<String>,
}

impl Equipment {
    pub fn new<S: Into<String>>(image: S) -> Self {
        Self {
            name: None,
            image: Some(image.into()),
        }
    }
}

#[cfg(test)]
mod test;
