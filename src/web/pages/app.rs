// © 2025 the PolitiqueFR Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use super::utils::SITE_NAME;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/politique-fr.css" />
		<Title text=SITE_NAME />

		<Router>
			<Routes fallback=NotFound>
				// The index has no content of its own yet either.
				<Route path=path!("/") view=NotFound />
			</Routes>
		</Router>
	}
}
