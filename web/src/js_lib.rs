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
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Storage};

use client_api::{CredentialStore, AUTH_TOKEN_KEY};

pub fn get_element_by_id<E>(id: &str) -> Result<Option<E>, Element>
where
    E: JsCast,
{
    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        Some(e) => e.dyn_into::<E>().map(|e| Some(e)),
        None => Ok(None),
    }
}

pub fn get_storage() -> Result<Storage> {
    window()
        .ok_or_else(|| anyhow!("No window present"))?
        .local_storage()
        .map_err(|e| anyhow!("Failed to get storage: {:?}", e))?
        .ok_or_else(|| anyhow!("No storage available"))
}

pub fn get_item(key: &str) -> Result<Option<String>> {
    get_storage()?
        .get_item(key)
        .map_err(|e| anyhow!("Failed to read {} from storage: {:?}", key, e))
}

pub fn set_item(key: &str, value: &str) -> Result<()> {
    get_storage()?
        .set_item(key, value)
        .map_err(|e| anyhow!("Failed to write {} to storage: {:?}", key, e))
}

pub fn remove_item(key: &str) -> Result<()> {
    get_storage()?
        .remove_item(key)
        .map_err(|e| anyhow!("Failed to remove {} from storage: {:?}", key, e))
}

/// The bearer token as the login flow left it in local storage.
#[derive(Debug, Clone, Copy)]
pub struct LocalCredentials;

#[async_trait(?Send)]
impl CredentialStore for LocalCredentials {
    async fn auth_token(&self) -> Option<String> {
        match get_item(AUTH_TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                error!(?err, "Unable to read auth token");
                None
            }
        }
    }
}
