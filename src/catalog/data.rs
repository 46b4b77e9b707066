//! The static product taxonomy.
//!
//! Category and subtype ids are stable identifiers used by the REST API and
//! the question templates; display strings are free to change.

use super::{Category, Subtype};

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "App",
        icon: "product-cat-app",
        info: "Front end prototypes, website and application development, services, and more",
        question: "What do you need to develop?",
        id: "app",
        subtypes: &[Subtype {
            name: "App",
            brief: "Apps",
            details: "Build apps for mobile, web, or wearables",
            icon: "product-app-app",
            id: "application_development",
            disabled: false,
        }],
    },
    Category {
        name: "Website",
        icon: "product-cat-website",
        info: "Front end prototypes, website and application development, services, and more",
        question: "What do you need to develop?",
        id: "website",
        subtypes: &[Subtype {
            name: "Website",
            brief: "Websites",
            details: "Build responsive or regular websites",
            icon: "product-website-website",
            id: "website_development",
            disabled: false,
        }],
    },
    Category {
        name: "Chatbot",
        icon: "product-cat-chatbot",
        info: "Front end prototypes, website and application development, services, and more",
        question: "What do you need to develop?",
        id: "chatbot",
        subtypes: &[Subtype {
            name: "Watson Chatbot",
            brief: "Watson Chatbot",
            details: "Build Chatbot using IBM Watson",
            icon: "product-chatbot-chatbot",
            id: "watson_chatbot",
            disabled: false,
        }],
    },
    Category {
        name: "Design",
        icon: "product-cat-design",
        info: "Wireframe, mockups, visual design, and more",
        question: "What kind of design do you need?",
        id: "visual_design",
        subtypes: &[
            Subtype {
                name: "Wireframes",
                brief: "10-15 screens",
                details: "Plan and explore the navigation and structure of your app",
                icon: "product-design-wireframes",
                id: "wireframes",
                disabled: false,
            },
            Subtype {
                name: "App Visual Design - Concepts",
                brief: "1-15 screens",
                details: "Visualize and test your app requirements and ideas",
                icon: "product-design-app-visual",
                id: "visual_design_concepts",
                disabled: true,
            },
            Subtype {
                name: "Visual Design",
                brief: "1-15 screens",
                details: "Create development-ready designs",
                icon: "product-design-app-visual",
                id: "visual_design_prod",
                disabled: false,
            },
            Subtype {
                name: "Infographic",
                brief: "Infographic",
                details: "Present your data in an easy-to-understand and interesting way",
                icon: "product-design-infographic",
                id: "infographic",
                disabled: true,
            },
            Subtype {
                name: "Other Design",
                brief: "other designs",
                details: "Get help with other types of design",
                icon: "product-design-other",
                id: "generic_design",
                disabled: false,
            },
        ],
    },
    Category {
        name: "Development",
        icon: "product-cat-development",
        info: "Front end prototypes, website and application development, services, and more",
        question: "What do you need to develop?",
        id: "app_dev",
        subtypes: &[
            Subtype {
                name: "Front-end Prototype",
                brief: "3-20 screens",
                details: "Translate designs to a web (HTML/CSS/JavaScript) or mobile prototype",
                icon: "product-dev-prototype",
                id: "visual_prototype",
                disabled: false,
            },
            Subtype {
                name: "Front-end development",
                brief: "",
                details: "Full fledged front end development",
                icon: "product-dev-front-end-dev",
                id: "frontend_dev",
                disabled: false,
            },
            Subtype {
                name: "Integration/API",
                brief: "",
                details: "Build an API for your software",
                icon: "product-dev-integration",
                id: "api_dev",
                disabled: false,
            },
            Subtype {
                name: "Software Development",
                brief: "Tasks or adhoc",
                details: "Get help with any part of your development cycle",
                icon: "product-dev-other",
                id: "generic_dev",
                disabled: false,
            },
        ],
    },
    Category {
        name: "QA",
        icon: "product-cat-qa",
        info: "Test and fix bugs in your software",
        question: "What kind of quality assurance (QA) do you need?",
        id: "quality_assurance",
        subtypes: &[
            Subtype {
                name: "Crowd Testing",
                brief: "TBD",
                details: "Exploratory Testing, Cross browser-device Testing",
                icon: "product-qa-crowd-testing",
                id: "crowd_testing",
                disabled: false,
            },
            Subtype {
                name: "Mobility Testing",
                brief: "TBD",
                details: "App Certification, Lab on Hire, User Sentiment Analysis",
                icon: "product-qa-mobility-testing",
                id: "mobility_testing",
                disabled: false,
            },
            Subtype {
                name: "Website Performance",
                brief: "TBD",
                details: "Webpage rendering effiency, Load, Stress and Endurance Test",
                icon: "product-qa-website-performance",
                id: "website_performance",
                disabled: false,
            },
            Subtype {
                name: "Digital Accessability",
                brief: "TBD",
                details: "Make sure you app or website conforms to all rules and regulations",
                icon: "product-qa-digital-accessability",
                id: "digital_accessability",
                disabled: false,
            },
            Subtype {
                name: "Open Source Automation",
                brief: "TBD",
                details: "Exploratory testing, cross browser testing",
                icon: "product-qa-os-automation",
                id: "open_source_automation",
                disabled: false,
            },
            Subtype {
                name: "Consulting & Adivisory",
                brief: "TBD",
                details: "Expert services to get your project covered end-to-end",
                icon: "product-qa-consulting",
                id: "consulting_adivisory",
                disabled: false,
            },
        ],
    },
];
