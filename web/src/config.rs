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
use client_api::DEFAULT_API_URL;
use tracing::warn;

/// Root of the recipe api, taken from the `API_URL` environment variable at
/// build time.
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

pub fn is_placeholder(url: &str) -> bool {
    url.trim_end_matches('/') == DEFAULT_API_URL
}

pub fn warn_on_placeholder() {
    if is_placeholder(API_URL) {
        warn!(
            api_url = API_URL,
            "API_URL was not set at build time. Recipe requests will not reach a real api."
        );
    }
}
