//! Integration tests for the product catalog contract.

use phasedeck::catalog::{
    self, CATEGORIES, TemplateField, find_category, find_product, find_product_category,
    find_products_of_category, project_creation_template_field,
};

#[test]
fn every_subtype_round_trips_through_the_lookups() {
    for category in CATEGORIES {
        for subtype in category.subtypes {
            assert!(
                find_product(subtype.id).is_some(),
                "{} did not resolve",
                subtype.id
            );
            match find_product_category(subtype.id) {
                Some(name) => {
                    assert!(!subtype.disabled);
                    assert_eq!(name, category.name);
                }
                None => assert!(subtype.disabled, "{} should resolve", subtype.id),
            }
        }
    }
}

#[test]
fn category_listing_matches_the_taxonomy() {
    for category in CATEGORIES {
        let listed = find_products_of_category(category.id)
            .unwrap_or_else(|| panic!("category {} missing", category.id));
        assert_eq!(listed.len(), category.subtypes.len());
        assert_eq!(find_category(category.id).map(|c| c.name), Some(category.name));
    }
    assert!(find_products_of_category("unknown").is_none());
    assert!(find_category("unknown").is_none());
}

#[test]
fn template_fields_resolve_through_the_product_specification() {
    // The base specification answers when no product is given.
    let field = project_creation_template_field(
        None,
        "appDefinition",
        "questions",
        "details.appDefinition.goal",
    );
    assert!(matches!(field, Some(TemplateField::Question(_))));

    // A product selects its own specification.
    let field = project_creation_template_field(
        Some("watson_chatbot"),
        "appDefinition",
        "questions",
        "details.appDefinition.intents",
    );
    assert!(matches!(field, Some(TemplateField::Question(_))));

    // Every catalog product maps onto an existing specification.
    for category in CATEGORIES {
        for subtype in category.subtypes {
            let spec_id = catalog::specification_for_product(subtype.id)
                .unwrap_or_else(|| panic!("{} unmapped", subtype.id));
            assert!(catalog::find_specification(spec_id).is_some());
        }
    }
}
