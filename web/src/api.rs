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
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use sycamore::prelude::*;
use tracing::{debug, instrument};

use client_api::{DetailError, RecipeApi, RecipeDetailRequest};
use recipes::Recipe;

#[derive(Clone, Debug)]
pub struct HttpStore {
    root: String,
}

impl HttpStore {
    pub fn new(root: String) -> Self {
        Self { root }
    }

    pub fn provide_context<S: Into<String>>(cx: Scope, root: S) {
        provide_context(cx, Rc::new(Self::new(root.into())));
    }

    pub fn get_from_context(cx: Scope) -> Rc<Self> {
        use_context::<Rc<Self>>(cx).clone()
    }
}

#[async_trait(?Send)]
impl RecipeApi for HttpStore {
    // NOTE(jwall): We do **not** want to record the token in our logs.
    #[instrument(skip(self, token))]
    async fn recipe_detail(
        &self,
        recipe_id: &str,
        token: &str,
    ) -> Result<Option<Recipe>, DetailError> {
        let request = RecipeDetailRequest::new(&self.root, recipe_id, token);
        let mut builder = Request::get(&request.url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        let resp = builder
            .send()
            .await
            .map_err(|e| DetailError::Transport(format!("{}", e)))?;
        if !resp.ok() {
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => format!("Unreadable response body: {}", e),
            };
            return Err(DetailError::Http {
                status: resp.status(),
                body,
            });
        }
        debug!("We got a valid response back!");
        resp.json::<Option<Recipe>>()
            .await
            .map_err(|e| DetailError::Transport(format!("{}", e)))
    }
}
