//! Tag filter selections for the space page.
//!
//! DESIGN
//! ======
//! Filters are grouped by tag type in a fixed order (location, product tag,
//! role, person tag) so a `FilterType` doubles as an index into the group
//! list. Options are matched by `value` (`<id>_<name>`) but persisted and
//! applied by `label`, which is the tag name products and people carry.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use serde::{Deserialize, Serialize};

use crate::net::tags::TagKind;
use crate::net::types::AnyTag;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterType {
    Location,
    ProductTag,
    Role,
    PersonTag,
}

impl FilterType {
    pub const ALL: [Self; 4] = [Self::Location, Self::ProductTag, Self::Role, Self::PersonTag];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Location => 0,
            Self::ProductTag => 1,
            Self::Role => 2,
            Self::PersonTag => 3,
        }
    }

    /// Dropdown label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Location => "Product Location",
            Self::ProductTag => "Product Tags",
            Self::Role => "Role",
            Self::PersonTag => "Person Tags",
        }
    }

    /// Heading of the option group.
    #[must_use]
    pub fn group_label(self) -> &'static str {
        match self {
            Self::Location => "Location Tags:",
            Self::ProductTag => "Product Tags:",
            Self::Role => "Role Tags:",
            Self::PersonTag => "Person Tags:",
        }
    }

    #[must_use]
    pub fn tag_type(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::ProductTag => "product tag",
            Self::Role => "role",
            Self::PersonTag => "person tag",
        }
    }

    #[must_use]
    pub fn tag_name_type(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::ProductTag => "Product Tag",
            Self::Role => "Role",
            Self::PersonTag => "Person Tag",
        }
    }

    /// Field name inside the persisted `filters` object.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Location => "locationTagsFilters",
            Self::ProductTag => "productTagsFilters",
            Self::Role => "roleTagsFilters",
            Self::PersonTag => "personTagsFilters",
        }
    }

    #[must_use]
    pub fn tag_kind(self) -> TagKind {
        match self {
            Self::Location => TagKind::Location,
            Self::ProductTag => TagKind::ProductTag,
            Self::Role => TagKind::Role,
            Self::PersonTag => TagKind::PersonTag,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
    pub selected: bool,
}

impl FilterOption {
    #[must_use]
    pub fn for_tag(id: i64, name: &str, selected: bool) -> Self {
        Self { label: name.to_owned(), value: format!("{id}_{name}"), selected }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterGroup {
    pub filter_type: FilterType,
    pub options: Vec<FilterOption>,
}

impl FilterGroup {
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.filter_type.group_label()
    }

    /// Labels of selected options, in option order.
    #[must_use]
    pub fn selected_labels(&self) -> Vec<String> {
        self.options.iter().filter(|o| o.selected).map(|o| o.label.clone()).collect()
    }
}

/// Selected tag names per filter type, as stored under the `filters` key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedFilters {
    pub location_tags_filters: Vec<String>,
    pub product_tags_filters: Vec<String>,
    pub role_tags_filters: Vec<String>,
    pub person_tags_filters: Vec<String>,
}

impl PersistedFilters {
    #[must_use]
    pub fn get(&self, filter_type: FilterType) -> &[String] {
        match filter_type {
            FilterType::Location => &self.location_tags_filters,
            FilterType::ProductTag => &self.product_tags_filters,
            FilterType::Role => &self.role_tags_filters,
            FilterType::PersonTag => &self.person_tags_filters,
        }
    }

    pub fn set(&mut self, filter_type: FilterType, labels: Vec<String>) {
        let slot = match filter_type {
            FilterType::Location => &mut self.location_tags_filters,
            FilterType::ProductTag => &mut self.product_tags_filters,
            FilterType::Role => &mut self.role_tags_filters,
            FilterType::PersonTag => &mut self.person_tags_filters,
        };
        *slot = labels;
    }
}

/// Tags fetched for each filter type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagsByType {
    pub locations: Vec<AnyTag>,
    pub product_tags: Vec<AnyTag>,
    pub roles: Vec<AnyTag>,
    pub person_tags: Vec<AnyTag>,
}

impl TagsByType {
    #[must_use]
    pub fn get(&self, filter_type: FilterType) -> &[AnyTag] {
        match filter_type {
            FilterType::Location => &self.locations,
            FilterType::ProductTag => &self.product_tags,
            FilterType::Role => &self.roles,
            FilterType::PersonTag => &self.person_tags,
        }
    }

    pub fn set(&mut self, filter_type: FilterType, tags: Vec<AnyTag>) {
        match filter_type {
            FilterType::Location => self.locations = tags,
            FilterType::ProductTag => self.product_tags = tags,
            FilterType::Role => self.roles = tags,
            FilterType::PersonTag => self.person_tags = tags,
        }
    }
}

/// Snapshot of selected filter labels, consumed by the view predicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    pub locations: Vec<String>,
    pub product_tags: Vec<String>,
    pub roles: Vec<String>,
    pub person_tags: Vec<String>,
}

impl ActiveFilters {
    #[must_use]
    pub fn from_groups(groups: &[FilterGroup]) -> Self {
        let mut active = Self::default();
        for group in groups {
            let labels = group.selected_labels();
            match group.filter_type {
                FilterType::Location => active.locations = labels,
                FilterType::ProductTag => active.product_tags = labels,
                FilterType::Role => active.roles = labels,
                FilterType::PersonTag => active.person_tags = labels,
            }
        }
        active
    }

    #[must_use]
    pub fn from_persisted(persisted: &PersistedFilters) -> Self {
        Self {
            locations: persisted.location_tags_filters.clone(),
            product_tags: persisted.product_tags_filters.clone(),
            roles: persisted.role_tags_filters.clone(),
            person_tags: persisted.person_tags_filters.clone(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.product_tags.is_empty() && self.roles.is_empty() && self.person_tags.is_empty()
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// One option per tag, pre-selected when its name was persisted.
#[must_use]
pub fn build_filter_options(tags: &[AnyTag], persisted: &[String]) -> Vec<FilterOption> {
    tags.iter()
        .map(|tag| FilterOption::for_tag(tag.id, &tag.name, persisted.contains(&tag.name)))
        .collect()
}

/// All four groups in `FilterType::ALL` order.
#[must_use]
pub fn build_filter_groups(tags: &TagsByType, persisted: &PersistedFilters) -> Vec<FilterGroup> {
    FilterType::ALL
        .into_iter()
        .map(|filter_type| FilterGroup {
            filter_type,
            options: build_filter_options(tags.get(filter_type), persisted.get(filter_type)),
        })
        .collect()
}

/// Append an unselected option for a newly created tag.
pub fn add_filter_option(groups: &mut [FilterGroup], filter_type: FilterType, tag: &AnyTag) {
    if let Some(group) = groups.iter_mut().find(|g| g.filter_type == filter_type) {
        group.options.push(FilterOption::for_tag(tag.id, &tag.name, false));
    }
}

/// Flip the option whose value matches. Returns whether one was found.
pub fn toggle(groups: &mut [FilterGroup], filter_type: FilterType, value: &str) -> bool {
    let option = groups
        .iter_mut()
        .filter(|g| g.filter_type == filter_type)
        .flat_map(|g| g.options.iter_mut())
        .find(|o| o.value == value);
    match option {
        Some(option) => {
            option.selected = !option.selected;
            true
        }
        None => false,
    }
}

/// Select exactly the options whose label is in `labels`.
pub fn select_labels(groups: &mut [FilterGroup], filter_type: FilterType, labels: &[String]) {
    for group in groups.iter_mut().filter(|g| g.filter_type == filter_type) {
        for option in &mut group.options {
            option.selected = labels.contains(&option.label);
        }
    }
}
