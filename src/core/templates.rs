//! Fixed output layout and the text embedded into every generated file.

use crate::domain::model::Template;

pub const RULES_FILE: &str = ".cursorrules";
pub const PROMPTS_DIR: &str = "cursor_vuetify_prompts";
pub const GUIDE_FILE: &str = "rag_integration_guide.md";
pub const EXAMPLES_DIR: &str = "test_layouts";

pub const RULES: &str = include_str!("../../templates/cursorrules.md");

pub const GUIDE: &str = include_str!("../../templates/rag_integration_guide.md");

pub const PROMPT_TEMPLATES: &[Template] = &[
    Template {
        name: "basic_layout_optimization.txt",
        content: include_str!("../../templates/prompts/basic_layout_optimization.txt"),
    },
    Template {
        name: "dashboard_optimization.txt",
        content: include_str!("../../templates/prompts/dashboard_optimization.txt"),
    },
    Template {
        name: "mobile_first_redesign.txt",
        content: include_str!("../../templates/prompts/mobile_first_redesign.txt"),
    },
    Template {
        name: "form_enhancement.txt",
        content: include_str!("../../templates/prompts/form_enhancement.txt"),
    },
    Template {
        name: "ecommerce_conversion.txt",
        content: include_str!("../../templates/prompts/ecommerce_conversion.txt"),
    },
    Template {
        name: "accessibility_audit.txt",
        content: include_str!("../../templates/prompts/accessibility_audit.txt"),
    },
    Template {
        name: "performance_optimization.txt",
        content: include_str!("../../templates/prompts/performance_optimization.txt"),
    },
];

/// Practice layouts, each pointing at the prompt template to pair it with.
pub const EXAMPLE_LAYOUTS: &[Template] = &[
    Template {
        name: "basic_dashboard.vue",
        content: include_str!("../../templates/layouts/basic_dashboard.vue"),
    },
    Template {
        name: "simple_form.vue",
        content: include_str!("../../templates/layouts/simple_form.vue"),
    },
    Template {
        name: "product_page.vue",
        content: include_str!("../../templates/layouts/product_page.vue"),
    },
];

pub fn guide_path() -> String {
    format!("{}/{}", PROMPTS_DIR, GUIDE_FILE)
}

/// Every relative path a run writes, in write order.
pub fn output_paths() -> Vec<String> {
    let mut paths = vec![RULES_FILE.to_string()];
    paths.extend(
        PROMPT_TEMPLATES
            .iter()
            .map(|t| format!("{}/{}", PROMPTS_DIR, t.name)),
    );
    paths.push(guide_path());
    paths.extend(
        EXAMPLE_LAYOUTS
            .iter()
            .map(|t| format!("{}/{}", EXAMPLES_DIR, t.name)),
    );
    paths
}
