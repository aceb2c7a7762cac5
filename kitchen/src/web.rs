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
use std::net::SocketAddr;

use axum::{
    handler::Handler,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use mime_guess;
use rust_embed::RustEmbed;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, instrument};

#[derive(RustEmbed)]
#[folder = "../web/dist"]
struct UiAssets;

const INDEX: &str = "index.html";
/// Client side routes. The ui bundle handles these itself so they all get the
/// index page.
const UI_ROUTES: [&str; 1] = ["recipeDetail"];

pub struct StaticFile<T>(pub T);

impl<T> IntoResponse for StaticFile<T>
where
    T: Into<String>,
{
    fn into_response(self) -> Response {
        let path = self.0.into();

        match UiAssets::get(path.as_str()) {
            Some(content) => {
                let mime = mime_guess::from_path(&path).first_or_octet_stream();
                (
                    [(header::CONTENT_TYPE, mime.as_ref().to_owned())],
                    content.data,
                )
                    .into_response()
            }
            None => (StatusCode::NOT_FOUND, "404").into_response(),
        }
    }
}

/// Map a request path onto the embedded asset that answers it.
pub fn asset_path(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    let first_segment = path.split('/').next().unwrap_or("");
    if path.is_empty() || UI_ROUTES.contains(&first_segment) {
        INDEX
    } else {
        path
    }
}

#[instrument]
async fn ui_static_assets(uri: Uri) -> impl IntoResponse {
    info!("Serving ui path");
    let path = asset_path(uri.path());
    debug!(path = path, "Serving transformed path");
    StaticFile(path.to_owned())
}

#[instrument(fields(listen=?listen_socket), skip_all)]
pub async fn ui_main(listen_socket: SocketAddr) {
    let router = Router::new()
        .fallback(ui_static_assets.into_service())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));
    info!(
        http = format!("http://{}", listen_socket),
        "Starting server"
    );
    if let Err(err) = axum::Server::bind(&listen_socket)
        .serve(router.into_make_service())
        .await
    {
        error!(?err, "Server exited with an error");
    }
}
