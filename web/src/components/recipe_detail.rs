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
use tracing::debug;

use client_api::DetailView;
use recipes::{EquipmentThumb, IngredientRow, Instructions, RecipeDetail, StepView};

#[derive(Prop)]
pub struct StepsProps {
    pub steps: Vec<StepView>,
}

#[component]
pub fn Steps<G: Html>(cx: Scope, props: StepsProps) -> View<G> {
    let steps = create_signal(cx, props.steps);
    view! {cx,
        div(class="recipe_steps") {
            Keyed(
                iterable=steps,
                view=|cx, step| {
                    let StepView { label, text, equipment, .. } = step;
                    let equipment = create_signal(cx, equipment);
                    view! {cx,
                        div(class="step") {
                            h3(class="step_number") { (label) }
                            p(class="step_text") { (text) }
                            div(class="step_images") {
                                Keyed(
                                    iterable=equipment,
                                    view=|cx, thumb| {
                                        let EquipmentThumb { url, name, .. } = thumb;
                                        view! {cx,
                                            img(class="step_image", src=url, alt=name)
                                        }
                                    },
                                    key=|thumb| thumb.key.clone(),
                                )
                            }
                        }
                    }
                },
                key=|step| step.key.clone(),
            )
        }
    }
}

#[derive(Prop)]
pub struct IngredientsProps {
    pub rows: Vec<IngredientRow>,
}

#[component]
pub fn Ingredients<G: Html>(cx: Scope, props: IngredientsProps) -> View<G> {
    let rows = create_signal(cx, props.rows);
    view! {cx,
        ul(class="ingredients") {
            Keyed(
                iterable=rows,
                view=|cx, row| {
                    let IngredientRow { thumbnail, text, .. } = row;
                    view! {cx,
                        li(class="ingredient_item") {
                            img(class="ingredient_image", src=thumbnail)
                            span(class="ingredient_text") { (text) }
                        }
                    }
                },
                key=|row| row.key.clone(),
            )
        }
    }
}

#[derive(Prop)]
pub struct RecipeBodyProps {
    pub detail: RecipeDetail,
}

#[component]
pub fn RecipeBody<G: Html>(cx: Scope, props: RecipeBodyProps) -> View<G> {
    let [likes, ready_in, servings] = props.detail.meta_lines().map(str::to_owned);
    let RecipeDetail {
        title,
        image,
        ingredients,
        instructions,
        ..
    } = props.detail;
    debug!(title = title.as_str(), "Rendering recipe");
    let alt = title.clone();
    let instructions = match instructions {
        Instructions::Steps(steps) => view! {cx, Steps(steps=steps) },
        Instructions::Empty => view! {cx,
            p(class="no_instructions") { "No instructions available." }
        },
    };
    view! {cx,
        div(class="recipe") {
            img(class="recipe_image", src=image, alt=alt)
            h1(class="recipe_title") { (title) }
            p(class="meta") { (likes) }
            p(class="meta") { (ready_in) }
            p(class="meta") { (servings) }
            h2(class="section_title") { "Ingredients" }
            Ingredients(rows=ingredients)
            h2(class="section_title") { "Instructions" }
            (instructions)
        }
    }
}

#[derive(Prop)]
pub struct RecipeDetailViewProps<'a> {
    pub view: &'a ReadSignal<DetailView>,
}

/// Paints whatever the current [DetailView] calls for.
#[component]
pub fn RecipeDetailView<'a, G: Html>(cx: Scope<'a>, props: RecipeDetailViewProps<'a>) -> View<G> {
    let detail_view = props.view;
    View::new_dyn_scoped(cx, move |cx| match detail_view.get().as_ref().clone() {
        DetailView::Spinner => view! {cx,
            div(class="centered") {
                div(class="spinner", role="progressbar")
            }
        },
        DetailView::NotFound => view! {cx,
            div(class="centered") {
                p(class="error_text") { "Recipe not found." }
            }
        },
        DetailView::Redirecting => View::empty(),
        DetailView::Recipe(detail) => view! {cx, RecipeBody(detail=detail) },
    })
}

#[cfg(test)]
mod test {
    use recipes::{Equipment, Ingredient, Recipe, Step};

    use super::*;

    fn render(detail_view: DetailView) -> String {
        sycamore::render_to_string(|cx| {
            let detail_view = create_signal(cx, detail_view);
            view! {cx, RecipeDetailView(view=detail_view) }
        })
    }

    #[test]
    fn test_spinner_while_loading() {
        let html = render(DetailView::Spinner);
        assert!(html.contains("spinner"));
        assert!(!html.contains("Recipe not found."));
    }

    #[test]
    fn test_not_found() {
        let html = render(DetailView::NotFound);
        assert!(html.contains("Recipe not found."));
    }

    #[test]
    fn test_recipe_body() {
        let mut recipe = Recipe::new("Pasta")
            .with_ingredients(vec![Ingredient::new(Some(1), "tomato.png", "2 tomatoes")])
            .with_steps(vec![Step::new(1, "Boil water")
                .with_equipment(vec![Equipment::new("http://x/pot.jpg")])]);
        recipe.aggregate_likes = Some(10);
        let html = render(DetailView::Recipe(RecipeDetail::from_recipe(&recipe)));
        assert!(html.contains("Pasta"));
        assert!(html.contains("10 Likes"));
        assert!(html.contains("Ingredients"));
        assert!(html.contains("https://spoonacular.com/cdn/ingredients_100x100/tomato.png"));
        assert!(html.contains("2 tomatoes"));
        assert!(html.contains("Step 1"));
        assert!(html.contains("Boil water"));
        assert!(html.contains("http://x/pot.jpg"));
        assert!(!html.contains("No instructions available."));
    }

    #[test]
    fn test_recipe_without_steps() {
        let recipe = Recipe::new("X");
        let html = render(DetailView::Recipe(RecipeDetail::from_recipe(&recipe)));
        assert!(html.contains("No instructions available."));
        assert!(!html.contains("Step "));
    }
}
