//! Prompt construction.

use crate::config::{DEFAULT_PROMPT_TEMPLATE, DESCRIPTION_PLACEHOLDER};

/// Fixed instruction wrapped around the user's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Create a template. Every `{description}` is substituted on render.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Embed `description` (trimmed) into the template.
    pub fn render(&self, description: &str) -> String {
        self.template
            .replace(DESCRIPTION_PLACEHOLDER, description.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_embeds_trimmed_description() {
        let prompt = PromptTemplate::default().render("  I missed our meeting yesterday \n");
        assert!(prompt.contains("based on this context: I missed our meeting yesterday."));
        assert!(!prompt.contains(DESCRIPTION_PLACEHOLDER));
    }

    #[test]
    fn default_template_states_length_tone_and_content() {
        let template = PromptTemplate::default();
        let text = template.as_str();
        assert!(text.contains("between 100-300 words"));
        assert!(text.contains("sincere and professional"));
        assert!(text.contains("empathetic"));
        assert!(text.contains("avoiding generic corporate language"));
        assert!(text.contains("take responsibility"));
        assert!(text.contains("offer a solution"));
    }

    #[test]
    fn custom_template() {
        let template = PromptTemplate::new("Apologise for: {description}");
        assert_eq!(template.render("the noise"), "Apologise for: the noise");
    }
}
