//! Category filter for the product grid.
//!
//! Selection `Hạt dinh dưỡng` also pulls in `Trái cây` products. The merge
//! is one-way: selecting `Trái cây` does not pull in nutritional items.

use super::catalog::{Catalog, Product, CATEGORY_FRUIT, CATEGORY_NUTRITIONAL};

/// Label of the "all categories" tab.
pub const ALL_LABEL: &str = "Tất cả";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Category(String),
}

impl FilterSelection {
    pub fn category(label: impl Into<String>) -> Self {
        Self::Category(label.into())
    }

    /// Map a tab label to a selection; the sentinel label selects everything.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Category(label) => label,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => {
                product.category == *selected
                    || (selected == CATEGORY_NUTRITIONAL && product.category == CATEGORY_FRUIT)
            }
        }
    }
}

/// Products to show for `selection`, in catalog order.
pub fn visible_products<'a>(catalog: &'a Catalog, selection: &FilterSelection) -> Vec<&'a Product> {
    catalog.iter().filter(|p| selection.matches(p)).collect()
}

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTab {
    pub selection: FilterSelection,
    pub active: bool,
}

/// The "all" tab followed by one tab per configured category.
pub fn filter_tabs(categories: &[String], current: &FilterSelection) -> Vec<FilterTab> {
    std::iter::once(FilterSelection::All)
        .chain(categories.iter().cloned().map(FilterSelection::Category))
        .map(|selection| FilterTab {
            active: selection == *current,
            selection,
        })
        .collect()
}
