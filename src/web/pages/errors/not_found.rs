// © 2025 the PolitiqueFR Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::pages::utils::page_title;
use leptos::prelude::*;
use leptos_meta::Title;

const PAGE_NAME: &str = "NonTrouve";
const UNDER_CONSTRUCTION_MESSAGE: &str = "Page en cours de développement.";

/// Placeholder shown for every route that has no content yet.
///
/// The title is registered with the meta context from [`App`](crate::web::pages::app::App); restoring the
/// previous title when this page goes away is left to `leptos_meta`.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<Title text={page_title(PAGE_NAME)} />
		<NotFoundMessage />
	}
}

#[component]
fn NotFoundMessage() -> impl IntoView {
	view! {
		<main id="not_found_page">
			<h1>{PAGE_NAME}</h1>
			<p>{UNDER_CONSTRUCTION_MESSAGE}</p>
		</main>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn render_message() -> String {
		let owner = Owner::new();
		owner.with(|| view! { <NotFoundMessage /> }.to_html())
	}

	#[test]
	fn title_names_page_and_site() {
		assert_eq!(page_title(PAGE_NAME), "NonTrouve - PolitiqueFR");
	}

	#[test]
	fn message_has_one_heading_and_one_paragraph() {
		let html = render_message();
		assert_eq!(html.matches("<h1").count(), 1);
		assert_eq!(html.matches("<p").count(), 1);
		assert!(html.contains("NonTrouve"));
		assert!(html.contains("Page en cours de développement."));
	}

	#[test]
	fn message_is_inside_styled_container() {
		let html = render_message();
		assert!(html.starts_with("<main id=\"not_found_page\""));
		assert!(html.ends_with("</main>"));
	}

	#[test]
	fn rendering_again_gives_the_same_markup() {
		assert_eq!(render_message(), render_message());
	}
}
