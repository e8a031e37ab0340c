//! Resource Directory
//!
//! Search over the campus resource links, ordered and grouped by category.

use crate::models::resource_link::{ResourceCategory, ResourceGroup, ResourceLink, CATEGORIES, LINKS};
use serde::Serialize;

/// Links shown before "show all"
pub const COLLAPSED_LINK_COUNT: usize = 8;

/// Grouped search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceListing {
    pub groups: Vec<ResourceGroup>,
    pub total_matches: usize,
    pub has_hidden: bool,
}

/// Link catalog with its category ordering
#[derive(Debug, Clone, Copy)]
pub struct ResourceDirectory {
    links: &'static [ResourceLink],
    categories: &'static [ResourceCategory],
}

impl Default for ResourceDirectory {
    fn default() -> Self {
        Self::new(LINKS, CATEGORIES)
    }
}

impl ResourceDirectory {
    pub fn new(links: &'static [ResourceLink], categories: &'static [ResourceCategory]) -> Self {
        Self { links, categories }
    }

    /// Position of the link's category; uncategorized links sort last
    fn category_index(&self, link_name: &str) -> usize {
        self.categories
            .iter()
            .position(|category| category.contains(link_name))
            .unwrap_or(usize::MAX)
    }

    /// Links whose name contains `query` (any case), ordered by category
    pub fn matching(&self, query: &str) -> Vec<ResourceLink> {
        let needle = query.to_lowercase();
        let mut links: Vec<ResourceLink> = self
            .links
            .iter()
            .filter(|link| link.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        links.sort_by_key(|link| self.category_index(link.name));
        links
    }

    /// Filter, order, truncate unless `show_all`, then group by category
    pub fn search(&self, query: &str, show_all: bool) -> ResourceListing {
        let matches = self.matching(query);
        let total_matches = matches.len();
        let shown: &[ResourceLink] = if show_all {
            &matches
        } else {
            &matches[..total_matches.min(COLLAPSED_LINK_COUNT)]
        };

        let groups = self
            .categories
            .iter()
            .map(|category| ResourceGroup {
                name: category.name,
                items: shown
                    .iter()
                    .filter(|link| category.contains(link.name))
                    .cloned()
                    .collect(),
            })
            .filter(|group| !group.items.is_empty())
            .collect();

        ResourceListing {
            groups,
            total_matches,
            has_hidden: shown.len() < total_matches,
        }
    }
}
