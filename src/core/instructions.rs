use crate::core::templates::{EXAMPLES_DIR, GUIDE_FILE, PROMPTS_DIR, RULES_FILE};

pub const REACHABLE_HEADING: &str = "🔥 RAG API INTEGRATION:";
pub const UNREACHABLE_HEADING: &str = "⚠️  RAG API SETUP:";

pub fn render_instructions(service_reachable: bool, service_url: &str, health_url: &str) -> String {
    let service_url = service_url.trim_end_matches('/');
    let mut text = format!(
        r#"

🎉 Setup Complete! Here's how to use your Vuetify UI/UX assistant:

📁 Files Created:
├── {rules} (copy this to your project root)
├── {prompts}/ (ready-to-use chat templates)
├── {examples}/ (sample layouts to practice with)
└── {prompts}/{guide} (how to use your RAG API)

🚀 Quick Start:

1. COPY RULES TO PROJECT:
   cp {rules} /your/project/root/

2. START CURSOR CHAT:
   Open Cursor and start a new chat session

3. TRY A TEMPLATE:
   Copy a prompt from {prompts}/ and paste your layout code

4. GET OPTIMIZED LAYOUT:
   Receive mobile-first, accessible, performant Vuetify code

💡 Example First Prompt:
   Copy {prompts}/basic_layout_optimization.txt
   Paste your layout code where indicated
   Get instant optimization with explanations

"#,
        rules = RULES_FILE,
        prompts = PROMPTS_DIR,
        examples = EXAMPLES_DIR,
        guide = GUIDE_FILE,
    );

    if service_reachable {
        text.push_str(&format!(
            r#"{heading}
Your RAG API is running! For enhanced results:

1. RESEARCH FIRST:
   curl -X POST {service_url}/ask -d '{{"query": "your layout question"}}'

2. USE FINDINGS IN CHAT:
   "Based on my Vuetify documentation research: [paste RAG results]
   Now optimize this layout: [paste your code]"

3. GET ENHANCED RESULTS:
   Cursor will apply documented best practices to your specific layout
"#,
            heading = REACHABLE_HEADING,
        ));
    } else {
        text.push_str(&format!(
            r#"{heading}
To use your RAG API with Cursor chat:

1. START RAG API:
   python cursor_api_server.py

2. TEST CONNECTION:
   curl {health_url}

3. USE ENHANCED PROMPTS:
   See {prompts}/{guide} for detailed examples
"#,
            heading = UNREACHABLE_HEADING,
            prompts = PROMPTS_DIR,
            guide = GUIDE_FILE,
        ));
    }

    text.push_str(&format!(
        r#"
📋 Best Practices:
- Always include your current layout code
- Specify your goals (mobile, accessibility, performance)
- Mention "comprehensive Vuetify documentation" in prompts
- Ask for complete implementations with explanations

🎯 Try These Right Now:
- Use {examples}/basic_dashboard.vue with dashboard_optimization.txt
- Use {examples}/simple_form.vue with form_enhancement.txt
- Use {examples}/product_page.vue with ecommerce_conversion.txt

Your Cursor AI is now a Vuetify UI/UX expert! Start chatting! 🚀
"#,
        examples = EXAMPLES_DIR,
    ));

    text
}
