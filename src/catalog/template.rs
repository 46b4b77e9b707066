//! Question templates used by the project creation wizard.
//!
//! Each product type maps onto a specification, which is a tree of sections,
//! sub sections, and questions. The `"questions"` sub section id is special:
//! it holds a flat list of questions searched by field name, while any other
//! sub section is itself addressable through its own field name.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specification {
    pub id: &'static str,
    pub basic_sections: &'static [Section],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub sub_sections: &'static [SubSection],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubSection {
    pub id: &'static str,
    pub field_name: Option<&'static str>,
    pub questions: &'static [Question],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub field_name: &'static str,
    pub title: &'static str,
}

/// Result of a template field lookup: either a single question or a whole
/// sub section addressed by field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    Question(&'static Question),
    SubSection(&'static SubSection),
}

const BASE_SPECIFICATION: &str = "portal.v1";

/// Maps a product id to the specification describing its questions.
pub fn specification_for_product(product_id: &str) -> Option<&'static str> {
    let specification = match product_id {
        "application_development" | "website_development" | "visual_prototype"
        | "frontend_dev" | "api_dev" | "generic_dev" => "development.v1",
        "watson_chatbot" => "chatbot.v1",
        "wireframes" | "visual_design_concepts" | "visual_design_prod" | "infographic"
        | "generic_design" => "design.v1",
        "crowd_testing" | "mobility_testing" | "website_performance"
        | "digital_accessability" | "open_source_automation" | "consulting_adivisory" => "qa.v1",
        _ => return None,
    };
    Some(specification)
}

pub fn find_specification(id: &str) -> Option<&'static Specification> {
    SPECIFICATIONS.iter().find(|spec| spec.id == id)
}

/// Finds a field from the project creation template.
///
/// The template is selected by product id, falling back to the base
/// specification when no product is given. Returns `None` when any lookup
/// segment fails to resolve.
pub fn project_creation_template_field(
    product: Option<&str>,
    section_id: &str,
    sub_section_id: &str,
    field_name: &str,
) -> Option<TemplateField> {
    let specification_id = match product {
        Some(product) => specification_for_product(product)?,
        None => BASE_SPECIFICATION,
    };
    let specification = find_specification(specification_id)?;
    let section = specification
        .basic_sections
        .iter()
        .find(|section| section.id == section_id)?;
    let sub_section = section
        .sub_sections
        .iter()
        .find(|sub| sub.id == sub_section_id)?;
    if sub_section_id == "questions" {
        return sub_section
            .questions
            .iter()
            .find(|question| question.field_name == field_name)
            .map(TemplateField::Question);
    }
    (sub_section.field_name == Some(field_name)).then_some(TemplateField::SubSection(sub_section))
}

const SPECIFICATIONS: &[Specification] = &[
    Specification {
        id: "portal.v1",
        basic_sections: &[Section {
            id: "appDefinition",
            title: "Definition",
            sub_sections: &[
                SubSection {
                    id: "projectName",
                    field_name: Some("name"),
                    questions: &[],
                },
                SubSection {
                    id: "questions",
                    field_name: None,
                    questions: &[
                        Question {
                            field_name: "details.appDefinition.goal",
                            title: "What is the goal of your project?",
                        },
                        Question {
                            field_name: "details.appDefinition.users",
                            title: "Who are the users of your project?",
                        },
                    ],
                },
                SubSection {
                    id: "notes",
                    field_name: Some("details.appDefinition.notes"),
                    questions: &[],
                },
            ],
        }],
    },
    Specification {
        id: "development.v1",
        basic_sections: &[Section {
            id: "appDefinition",
            title: "Definition",
            sub_sections: &[
                SubSection {
                    id: "projectName",
                    field_name: Some("name"),
                    questions: &[],
                },
                SubSection {
                    id: "questions",
                    field_name: None,
                    questions: &[
                        Question {
                            field_name: "details.appDefinition.goal",
                            title: "What do you need to develop?",
                        },
                        Question {
                            field_name: "details.appDefinition.platforms",
                            title: "Which platforms should be supported?",
                        },
                        Question {
                            field_name: "details.techStack",
                            title: "Do you have a preferred technology stack?",
                        },
                    ],
                },
                SubSection {
                    id: "notes",
                    field_name: Some("details.appDefinition.notes"),
                    questions: &[],
                },
            ],
        }],
    },
    Specification {
        id: "design.v1",
        basic_sections: &[Section {
            id: "appDefinition",
            title: "Definition",
            sub_sections: &[
                SubSection {
                    id: "projectName",
                    field_name: Some("name"),
                    questions: &[],
                },
                SubSection {
                    id: "questions",
                    field_name: None,
                    questions: &[
                        Question {
                            field_name: "details.appDefinition.goal",
                            title: "What kind of design do you need?",
                        },
                        Question {
                            field_name: "details.designGuidelines",
                            title: "Do you have brand or design guidelines?",
                        },
                    ],
                },
                SubSection {
                    id: "notes",
                    field_name: Some("details.appDefinition.notes"),
                    questions: &[],
                },
            ],
        }],
    },
    Specification {
        id: "chatbot.v1",
        basic_sections: &[Section {
            id: "appDefinition",
            title: "Definition",
            sub_sections: &[
                SubSection {
                    id: "projectName",
                    field_name: Some("name"),
                    questions: &[],
                },
                SubSection {
                    id: "questions",
                    field_name: None,
                    questions: &[Question {
                        field_name: "details.appDefinition.intents",
                        title: "Which intents should the chatbot understand?",
                    }],
                },
            ],
        }],
    },
    Specification {
        id: "qa.v1",
        basic_sections: &[Section {
            id: "appDefinition",
            title: "Definition",
            sub_sections: &[
                SubSection {
                    id: "projectName",
                    field_name: Some("name"),
                    questions: &[],
                },
                SubSection {
                    id: "questions",
                    field_name: None,
                    questions: &[
                        Question {
                            field_name: "details.appDefinition.targets",
                            title: "What should be tested?",
                        },
                        Question {
                            field_name: "details.appDefinition.environments",
                            title: "Which browsers and devices are in scope?",
                        },
                    ],
                },
            ],
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_question_by_field_name() {
        let field = project_creation_template_field(
            None,
            "appDefinition",
            "questions",
            "details.appDefinition.goal",
        );
        match field {
            Some(TemplateField::Question(question)) => {
                assert_eq!(question.field_name, "details.appDefinition.goal");
            }
            other => panic!("expected a question, got {other:?}"),
        }
    }

    #[test]
    fn resolves_sub_section_by_its_own_field_name() {
        let field = project_creation_template_field(
            Some("generic_dev"),
            "appDefinition",
            "notes",
            "details.appDefinition.notes",
        );
        assert!(matches!(field, Some(TemplateField::SubSection(sub)) if sub.id == "notes"));
    }

    #[test]
    fn every_failing_segment_yields_none() {
        // Unknown product.
        assert_eq!(
            project_creation_template_field(Some("nope"), "appDefinition", "questions", "x"),
            None
        );
        // Unknown section.
        assert_eq!(
            project_creation_template_field(None, "pricing", "questions", "x"),
            None
        );
        // Unknown sub section.
        assert_eq!(
            project_creation_template_field(None, "appDefinition", "budget", "x"),
            None
        );
        // Question not present.
        assert_eq!(
            project_creation_template_field(None, "appDefinition", "questions", "details.none"),
            None
        );
        // Sub section addressed with the wrong field name.
        assert_eq!(
            project_creation_template_field(None, "appDefinition", "notes", "details.other"),
            None
        );
    }

    #[test]
    fn every_product_specification_exists() {
        for category in crate::catalog::CATEGORIES {
            for subtype in category.subtypes {
                let spec_id = specification_for_product(subtype.id)
                    .unwrap_or_else(|| panic!("{} has no specification", subtype.id));
                assert!(find_specification(spec_id).is_some(), "{spec_id} missing");
            }
        }
    }
}
