// © 2025 the PolitiqueFR Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlNode};
use miette::{Diagnostic, IntoDiagnostic, NamedSource, SourceSpan};
use std::error::Error;
use std::fmt;
use tokio::fs::read_to_string;
use tracing::Level;

pub const DEFAULT_CONFIG_PATH: &str = "config.kdl";

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub log_level: Level,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

#[derive(Debug, Diagnostic)]
pub struct ConfigError {
	message: String,
	#[source_code]
	source_code: NamedSource<String>,
	#[label("here")]
	span: Option<SourceSpan>,
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

impl Error for ConfigError {}

pub async fn parse_config(config_path: &str) -> miette::Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(config_path, &config_file_contents)
}

pub fn parse_config_document(config_path: &str, contents: &str) -> miette::Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;
	let error = |message: &str, span: Option<SourceSpan>| ConfigError {
		message: message.to_string(),
		source_code: NamedSource::new(config_path, contents.to_string()),
		span,
	};

	let Some(web_node) = document.get("web") else {
		return Err(error("Missing `web` configuration block", None).into());
	};
	let Some(web_children) = web_node.children() else {
		return Err(error("The `web` block must contain settings", Some(web_node.span())).into());
	};
	let Some(bind_addr_node) = web_children.get("bind_addr") else {
		return Err(error("Missing `bind_addr` in the `web` block", Some(web_node.span())).into());
	};
	let bind_addr = string_argument(bind_addr_node).ok_or_else(|| {
		error(
			"`bind_addr` must be a string like \"127.0.0.1:3000\"",
			Some(bind_addr_node.span()),
		)
	})?;

	let log_level = match document.get("log_level") {
		Some(log_level_node) => {
			let level_error = || {
				error(
					"`log_level` must be one of trace, debug, info, warn, or error",
					Some(log_level_node.span()),
				)
			};
			let level = string_argument(log_level_node).ok_or_else(level_error)?;
			level.parse().map_err(|_| level_error())?
		}
		None => Level::INFO,
	};

	Ok(ConfigData {
		web: WebConfig { bind_addr },
		log_level,
	})
}

fn string_argument(node: &KdlNode) -> Option<String> {
	node.get(0)
		.and_then(|value| value.as_string())
		.map(|value| value.to_string())
}
