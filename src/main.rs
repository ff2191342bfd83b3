// © 2025 the PolitiqueFR Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use politique_fr::config::{DEFAULT_CONFIG_PATH, parse_config};
	use politique_fr::web::run_server;
	use std::sync::Arc;

	let config_path = std::env::args().nth(1);
	let config_path = config_path.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
	let config = Arc::new(parse_config(config_path).await?);

	tracing_subscriber::fmt().with_max_level(config.log_level).init();
	tracing::debug!(?config, "Loaded configuration");

	run_server(config).await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The client side starts from `hydrate` in lib.rs.
}
