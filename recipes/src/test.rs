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
use crate::*;

use serde_json::from_str;

const HAPPY_PATH: &str = r#"{
    "title": "Pasta",
    "image": "http://x/p.jpg",
    "aggregateLikes": 10,
    "readyInMinutes": 45,
    "servings": 2,
    "extendedIngredients": [{"id": 1, "image": "tomato.png", "original": "2 tomatoes"}],
    "analyzedInstructions": [{"steps": [
        {"number": 1, "step": "Boil water", "equipment": [{"image": "http://x/pot.jpg"}]}
    ]}]
}"#;

fn parse(json: &str) -> Recipe {
    from_str(json).expect("We expect the recipe payload to parse")
}

#[test]
fn test_happy_path_payload() {
    let recipe = parse(HAPPY_PATH);
    assert_eq!(recipe.title.as_deref(), Some("Pasta"));
    assert_eq!(recipe.aggregate_likes, Some(10));
    assert_eq!(recipe.ready_in_minutes, Some(45));
    assert_eq!(recipe.servings, Some(2));
    assert_eq!(recipe.ingredients().len(), 1);
    assert_eq!(recipe.steps().len(), 1);

    let detail = RecipeDetail::from_recipe(&recipe);
    assert_eq!(detail.title, "Pasta");
    assert_eq!(detail.image, "http://x/p.jpg");
    assert_eq!(
        detail.meta_lines(),
        ["❤️ 10 Likes", "⏳ 45 minutes", "🍽 2 servings"]
    );
    assert_eq!(
        detail.ingredients,
        vec![IngredientRow {
            key: "1".to_owned(),
            thumbnail: "https://spoonacular.com/cdn/ingredients_100x100/tomato.png".to_owned(),
            text: "2 tomatoes".to_owned(),
        }]
    );
    match detail.instructions {
        Instructions::Steps(steps) => {
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].label, "Step 1");
            assert_eq!(steps[0].text, "Boil water");
            assert_eq!(steps[0].equipment.len(), 1);
            assert_eq!(steps[0].equipment[0].url, "http://x/pot.jpg");
        }
        Instructions::Empty => panic!("expected the steps to render"),
    }
}

#[test]
fn test_sparse_payload() {
    let recipe = parse(
        r#"{"title": "X", "image": "http://x/x.jpg", "extendedIngredients": null, "analyzedInstructions": []}"#,
    );
    let detail = RecipeDetail::from_recipe(&recipe);
    assert!(detail.ingredients.is_empty());
    assert_eq!(detail.instructions, Instructions::Empty);
}

#[test]
fn test_empty_object_payload() {
    let recipe = parse("{}");
    assert_eq!(recipe, Recipe::default());
    let detail = RecipeDetail::from_recipe(&recipe);
    assert_eq!(detail.title, "");
    assert_eq!(
        detail.meta_lines(),
        ["❤️  Likes", "⏳  minutes", "🍽  servings"]
    );
    assert!(detail.ingredients.is_empty());
    assert_eq!(detail.instructions, Instructions::Empty);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let recipe = parse(r#"{"title": "Soup", "vegan": true, "nutrition": {"calories": 100}}"#);
    assert_eq!(recipe.title.as_deref(), Some("Soup"));
}

#[test]
fn test_group_without_steps() {
    let recipe = parse(r#"{"analyzedInstructions": [{"steps": null}]}"#);
    assert!(recipe.steps().is_empty());
    assert_eq!(
        RecipeDetail::from_recipe(&recipe).instructions,
        Instructions::Empty
    );
}

#[test]
fn test_only_first_instruction_group_is_read() {
    let recipe = parse(
        r#"{"analyzedInstructions": [
            {"steps": [{"number": 1, "step": "first"}]},
            {"steps": [{"number": 1, "step": "ignored"}, {"number": 2, "step": "ignored"}]}
        ]}"#,
    );
    assert_eq!(recipe.steps().len(), 1);
    assert_eq!(recipe.steps()[0].step.as_deref(), Some("first"));
}

#[test]
fn test_step_label_uses_server_number() {
    let recipe = Recipe::new("Stew").with_steps(vec![Step::new(3, "brown"), Step::new(7, "simmer")]);
    let detail = RecipeDetail::from_recipe(&recipe);
    if let Instructions::Steps(steps) = detail.instructions {
        let labels: Vec<&str> = steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Step 3", "Step 7"]);
        let keys: Vec<&str> = steps.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["step-0", "step-1"]);
    } else {
        panic!("expected the steps to render");
    }
}

#[test]
fn test_step_without_equipment_has_empty_row() {
    let recipe = Recipe::new("Toast").with_steps(vec![
        Step::new(1, "toast the bread"),
        Step::new(2, "butter it").with_equipment(vec![
            Equipment::new("http://x/knife.jpg"),
            Equipment::default(),
        ]),
    ]);
    if let Instructions::Steps(steps) = RecipeDetail::from_recipe(&recipe).instructions {
        assert!(steps[0].equipment.is_empty());
        assert_eq!(steps[1].equipment.len(), 1);
        assert_eq!(steps[1].equipment[0].key, "equipment-1-0");
    } else {
        panic!("expected the steps to render");
    }
}

#[test]
fn test_ingredient_keys_without_ids() {
    let recipe = parse(
        r#"{"extendedIngredients": [
            {"image": "salt.jpg", "original": "a pinch of salt"},
            {"image": "pepper.jpg", "original": "a pinch of pepper"}
        ]}"#,
    );
    let keys: Vec<String> = RecipeDetail::from_recipe(&recipe)
        .ingredients
        .into_iter()
        .map(|row| row.key)
        .collect();
    assert_eq!(keys, vec!["ingredient-0", "ingredient-1"]);
}

#[test]
fn test_ingredient_keys_are_unique() {
    let ingredients = vec![
        Ingredient::new(Some(5), "a.png", "a"),
        Ingredient::new(Some(5), "b.png", "b"),
        Ingredient {
            id: Some(IngredientId::Text("ingredient-1".to_owned())),
            ..Default::default()
        },
        Ingredient::new(Some(0), "d.png", "d"),
        Ingredient::new(None, "e.png", "e"),
    ];
    let keys = ingredient_keys(&ingredients);
    assert_eq!(
        keys,
        vec![
            "5",
            "ingredient-1",
            "ingredient-2",
            "ingredient-3",
            "ingredient-4"
        ]
    );
    let unique: std::collections::BTreeSet<&String> = keys.iter().collect();
    assert_eq!(unique.len(), keys.len());
}

#[test]
fn test_ingredient_key_suffix_on_double_collision() {
    let ingredients = vec![
        Ingredient {
            id: Some(IngredientId::Text("ingredient-1".to_owned())),
            ..Default::default()
        },
        Ingredient {
            id: Some(IngredientId::Text("ingredient-0".to_owned())),
            ..Default::default()
        },
    ];
    assert_eq!(
        ingredient_keys(&ingredients),
        vec!["ingredient-1", "ingredient-0"]
    );
    let ingredients = vec![
        Ingredient {
            id: Some(IngredientId::Text("ingredient-1".to_owned())),
            ..Default::default()
        },
        Ingredient {
            id: Some(IngredientId::Text("ingredient-1".to_owned())),
            ..Default::default()
        },
    ];
    assert_eq!(
        ingredient_keys(&ingredients),
        vec!["ingredient-1", "ingredient-1-1"]
    );
}

#[test]
fn test_string_ids_parse() {
    let recipe = parse(r#"{"extendedIngredients": [{"id": "abc", "original": "x"}]}"#);
    assert_eq!(
        recipe.ingredients()[0].id,
        Some(IngredientId::Text("abc".to_owned()))
    );
    assert_eq!(RecipeDetail::from_recipe(&recipe).ingredients[0].key, "abc");
}

#[test]
fn test_thumbnail_url_is_cdn_prefix_plus_image() {
    let ingredient = Ingredient::new(Some(1), "olive-oil.jpg", "oil");
    assert_eq!(
        ingredient.thumbnail_url(),
        format!("{}olive-oil.jpg", CDN_PREFIX)
    );
    assert_eq!(Ingredient::default().thumbnail_url(), CDN_PREFIX);
}

#[test]
fn test_render_is_deterministic() {
    let recipe = parse(HAPPY_PATH);
    assert_eq!(
        RecipeDetail::from_recipe(&recipe),
        RecipeDetail::from_recipe(&recipe.clone())
    );
}
