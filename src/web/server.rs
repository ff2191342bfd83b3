// © 2025 the PolitiqueFR Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pages::app::App;
use super::pages::shell::shell;
use super::state::AppState;
use crate::config::ConfigData;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

/// Serves the site until the listener fails. Failures are logged and returned to the caller.
pub async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let result = serve(&config.web.bind_addr).await;
	if let Err(error) = &result {
		tracing::error!(source = ?error, "Web server failed to run");
	}
	result
}

async fn serve(site_addr: &str) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let app = app_router(web_config.leptos_options);

	tracing::info!("Listening on http://{}", site_addr);
	let listener = TcpListener::bind(site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

fn app_router(leptos_options: LeptosOptions) -> Router {
	let routes = generate_route_list(App);
	let app_state = AppState { leptos_options };

	Router::new()
		.leptos_routes(&app_state, routes, {
			let leptos_options = app_state.leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback(file_and_error_handler)
		.with_state(app_state)
}

async fn file_and_error_handler(uri: Uri, State(state): State<AppState>, request: Request) -> Response {
	let site_root_dir = state.leptos_options.site_root.clone();
	let response = get_static_file(uri.clone(), &site_root_dir).await;
	let response = match response {
		Ok(response) => response,
		Err(error) => return error.into_response(),
	};

	if response.status() == StatusCode::OK {
		return response;
	}

	tracing::debug!(%uri, "No route or file matched; rendering the not found page");
	let leptos_options = state.leptos_options.clone();
	let handler = render_app_to_stream(move || shell(leptos_options.clone()));
	let mut response = handler(request).await.into_response();
	*response.status_mut() = StatusCode::NOT_FOUND;
	response
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
	let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	};

	match ServeDir::new(root).oneshot(request).await {
		Ok(response) => Ok(response.into_response()),
		Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::WebConfig;
	use any_spawner::Executor;
	use tracing::Level;

	const MESSAGE: &str = "Page en cours de développement.";

	async fn get(path: &str) -> (StatusCode, String) {
		let _ = Executor::init_tokio();
		let leptos_options = get_configuration(Some("Cargo.toml")).unwrap().leptos_options;
		let request = Request::builder().uri(path).body(Body::empty()).unwrap();
		let response = app_router(leptos_options).oneshot(request).await.unwrap();
		let status = response.status();
		let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
		(status, String::from_utf8(body.to_vec()).unwrap())
	}

	#[tokio::test]
	async fn unmatched_path_renders_not_found_page_with_404() {
		let (status, body) = get("/nope").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert!(body.contains(MESSAGE));
		assert!(body.contains("<title>NonTrouve - PolitiqueFR</title>"));
	}

	#[tokio::test]
	async fn index_renders_not_found_page_with_200() {
		let (status, body) = get("/").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains(MESSAGE));
	}

	#[tokio::test]
	async fn occupied_address_is_returned_as_error() {
		let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let bind_addr = occupied.local_addr().unwrap().to_string();
		let config = Arc::new(ConfigData {
			web: WebConfig { bind_addr },
			log_level: Level::INFO,
		});
		assert!(run_server(config).await.is_err());
	}
}
