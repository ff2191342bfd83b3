// © 2025 the PolitiqueFR Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Name of the site, shown alone as the default document title and after the page name on every page
pub const SITE_NAME: &str = "PolitiqueFR";

/// Makes the document title for a page
pub fn page_title(page_name: &str) -> String {
	format!("{} - {}", page_name, SITE_NAME)
}
