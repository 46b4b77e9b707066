mod data;
mod template;

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub use data::CATEGORIES;
pub use template::{
    Question, Section, Specification, SubSection, TemplateField, find_specification,
    project_creation_template_field, specification_for_product,
};

/// A selectable product category, e.g. "Design" or "Development".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
    pub info: &'static str,
    pub question: &'static str,
    pub id: &'static str,
    pub subtypes: &'static [Subtype],
}

/// A concrete product type under a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtype {
    pub name: &'static str,
    pub brief: &'static str,
    pub details: &'static str,
    pub icon: &'static str,
    pub id: &'static str,
    pub disabled: bool,
}

// Product ids are unique across the whole taxonomy, so a single flat index
// into (category, subtype) positions is enough. Disabled subtypes are indexed
// too; only `find_product_category` filters them out.
static SUBTYPE_INDEX: Lazy<HashMap<&'static str, (usize, usize)>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (ci, category) in CATEGORIES.iter().enumerate() {
        for (si, subtype) in category.subtypes.iter().enumerate() {
            index.insert(subtype.id, (ci, si));
        }
    }
    index
});

fn subtype_entry(product_id: &str) -> Option<(&'static Category, &'static Subtype)> {
    let &(ci, si) = SUBTYPE_INDEX.get(product_id)?;
    let category = &CATEGORIES[ci];
    Some((category, &category.subtypes[si]))
}

/// Resolves a product id to the display name of its subtype.
///
/// The two generic product ids are shortcuts that resolve straight to their
/// category name.
pub fn find_product(product_id: &str) -> Option<&'static str> {
    match product_id {
        "generic_dev" => return Some("Development"),
        "generic_design" => return Some("Design"),
        _ => {}
    }
    subtype_entry(product_id).map(|(_, subtype)| subtype.name)
}

/// Finds the category whose `id` matches.
pub fn find_category(category_id: &str) -> Option<&'static Category> {
    tracing::debug!(category_id, "looking up product category");
    CATEGORIES.iter().find(|category| category.id == category_id)
}

/// Lists the subtypes of the category whose `id` matches, or `None` when no
/// category carries that id.
pub fn find_products_of_category(category_id: &str) -> Option<&'static [Subtype]> {
    CATEGORIES
        .iter()
        .find(|category| category.id == category_id)
        .map(|category| category.subtypes)
}

/// Resolves a product id to the name of its parent category, skipping
/// subtypes flagged as disabled.
pub fn find_product_category(product_id: &str) -> Option<&'static str> {
    match product_id {
        "generic_dev" => return Some("Development"),
        "generic_design" => return Some("Design"),
        _ => {}
    }
    subtype_entry(product_id)
        .filter(|(_, subtype)| !subtype.disabled)
        .map(|(category, _)| category.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subtype_resolves_by_id() {
        for category in CATEGORIES {
            for subtype in category.subtypes {
                // The generic shortcuts resolve to their category name instead
                // of the subtype name.
                let expected = match subtype.id {
                    "generic_dev" => "Development",
                    "generic_design" => "Design",
                    other => {
                        assert_eq!(find_product(other), Some(subtype.name));
                        continue;
                    }
                };
                assert_eq!(find_product(subtype.id), Some(expected));
            }
        }
    }

    #[test]
    fn disabled_subtypes_have_no_selectable_category() {
        for category in CATEGORIES {
            for subtype in category.subtypes {
                let found = find_product_category(subtype.id);
                if subtype.disabled {
                    assert_eq!(found, None, "disabled subtype {} leaked", subtype.id);
                } else {
                    assert_eq!(found, Some(category.name));
                }
            }
        }
    }

    #[test]
    fn category_lookup_by_id() {
        let design = find_category("visual_design").unwrap();
        assert_eq!(design.name, "Design");
        assert!(find_category("no_such_category").is_none());
    }

    #[test]
    fn products_of_category_carry_names() {
        let subtypes = find_products_of_category("app_dev").unwrap();
        let development = CATEGORIES
            .iter()
            .find(|c| c.id == "app_dev")
            .unwrap();
        assert_eq!(subtypes.len(), development.subtypes.len());
        assert!(subtypes.iter().all(|s| !s.name.is_empty()));
        assert!(find_products_of_category("nope").is_none());
    }

    #[test]
    fn generic_shortcuts_bypass_the_index() {
        assert_eq!(find_product("generic_dev"), Some("Development"));
        assert_eq!(find_product("generic_design"), Some("Design"));
        assert_eq!(find_product_category("generic_dev"), Some("Development"));
        assert_eq!(find_product_category("generic_design"), Some("Design"));
    }
}
