//! "Spark an idea" request adapter.
//!
//! Validates the two form fields, builds one natural-language instruction,
//! sends it through a [`TextService`] and turns the numbered-list reply into
//! a list of idea strings. The adapter holds no state between calls.

use crate::error::IdeaError;
use crate::i18n::Language;

/// Outbound text-generation endpoint.
#[allow(async_fn_in_trait)]
pub trait TextService {
    async fn generate_text(&self, prompt: &str) -> anyhow::Result<String>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdeaRequest {
    pub business_type: String,
    pub goal: String,
    pub language: Language,
}

impl IdeaRequest {
    /// Both fields must be non-empty after trimming.
    pub fn new(business_type: &str, goal: &str, language: Language) -> Result<Self, IdeaError> {
        let business_type = business_type.trim();
        let goal = goal.trim();
        if business_type.is_empty() || goal.is_empty() {
            return Err(IdeaError::Validation);
        }
        Ok(Self {
            business_type: business_type.to_string(),
            goal: goal.to_string(),
            language,
        })
    }

    pub fn prompt(&self) -> String {
        format!(
            "You are a creative digital strategist for a web agency. A potential client has a \"{}\" \
             and their main goal is to \"{}\". Generate 3 concise, innovative, and actionable ideas \
             for their website or digital system. Each idea should be a single sentence. Frame the \
             ideas as solutions. Respond ONLY with a numbered list. Respond in {}.",
            self.business_type,
            self.goal,
            self.language.prompt_name()
        )
    }
}

/// Split a numbered-list reply into ideas: one per non-blank line, with any
/// leading `N.` marker and the whitespace after it removed.
pub fn parse_ideas(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| strip_ordinal(line).to_string())
        .collect()
}

fn strip_ordinal(line: &str) -> &str {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && line[digits..].starts_with('.') {
        line[digits + 1..].trim_start()
    } else {
        line
    }
}

pub struct IdeaAdapter<S> {
    service: S,
}

impl<S: TextService> IdeaAdapter<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn generate(
        &self,
        business_type: &str,
        goal: &str,
        language: Language,
    ) -> Result<Vec<String>, IdeaError> {
        let request = IdeaRequest::new(business_type, goal, language)?;
        match self.service.generate_text(&request.prompt()).await {
            Ok(text) => {
                let ideas = parse_ideas(&text);
                log::info!("[idea] received {} ideas", ideas.len());
                Ok(ideas)
            }
            Err(e) => {
                log::error!("[idea] generation failed: {e:?}");
                Err(IdeaError::Service)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ordinal_only_removes_leading_number_and_dot() {
        assert_eq!(strip_ordinal("12.   Launch a loyalty app."), "Launch a loyalty app.");
        assert_eq!(strip_ordinal("2024 plan"), "2024 plan");
        assert_eq!(strip_ordinal("- bullet"), "- bullet");
    }

    #[test]
    fn prompt_names_language() {
        let req = IdeaRequest::new("bakery", "more orders", Language::Es).unwrap();
        let prompt = req.prompt();
        assert!(prompt.contains("\"bakery\""));
        assert!(prompt.contains("\"more orders\""));
        assert!(prompt.ends_with("Respond in Spanish."));
    }
}
