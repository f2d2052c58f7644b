//! Document-type filter owned by the Home page.
//!
//! The filter holds one value and hands it down, by value, to the filter-chip
//! display and the search box. Neither child changes it directly; the chips
//! link back to the Home page with a `doc_type` query, and the page handler
//! calls [`FilterState::set_doc_type`].

use serde::Serialize;

use labnav_common::{DocType, DocTypeAllowList};

use crate::routes::HOME_PATH;

/// Props for the `FilterChips` component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterChipsProps {
    pub selected: String,
    pub options: Vec<ChipOption>,
    /// Href template the chips follow to change the filter; `{value}` is
    /// replaced with the chosen document type.
    pub on_change: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipOption {
    pub value: String,
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// Props for the `AdvancedSearchBox` component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBoxProps {
    pub doc_type: String,
}

#[derive(Debug, Clone)]
pub struct FilterState {
    selected: DocType,
    options: DocTypeAllowList,
}

impl FilterState {
    pub fn new() -> Self {
        Self::with_options(DocTypeAllowList::default())
    }

    pub fn with_options(options: DocTypeAllowList) -> Self {
        Self {
            selected: DocType::all(),
            options,
        }
    }

    /// Accepts any value and forwards it verbatim. Checking against the
    /// allow-list is the caller's job at the request boundary.
    pub fn set_doc_type(&mut self, value: impl Into<String>) {
        self.selected = DocType::unchecked(value);
    }

    pub fn doc_type(&self) -> &DocType {
        &self.selected
    }

    pub fn chip_props(&self) -> FilterChipsProps {
        let options = self
            .options
            .iter()
            .map(|option| ChipOption {
                value: option.to_string(),
                label: option.label(),
                href: change_href(option.as_str()),
                selected: option == &self.selected,
            })
            .collect();

        FilterChipsProps {
            selected: self.selected.to_string(),
            options,
            on_change: format!("{}?doc_type={{value}}", HOME_PATH),
        }
    }

    pub fn search_props(&self) -> SearchBoxProps {
        SearchBoxProps {
            doc_type: self.selected.to_string(),
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

fn change_href(value: &str) -> String {
    if value == DocType::ALL {
        HOME_PATH.to_string()
    } else {
        format!("{}?doc_type={}", HOME_PATH, value)
    }
}
