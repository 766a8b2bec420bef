use crate::msg;

/// Describes a handler step that did not complete, with hints for the user.
pub struct ErrorContext {
    pub operation: &'static str,
    pub subject: Option<String>,
    pub suggestions: &'static [&'static str],
}

impl ErrorContext {
    pub fn display(&self) -> String {
        let mut result = match &self.subject {
            Some(subject) => msg!(
                "Could not {operation} {subject}",
                operation = self.operation,
                subject = subject.as_str()
            ),
            None => msg!("{operation} did not complete", operation = self.operation),
        };

        if !self.suggestions.is_empty() {
            result.push_str("\n\nTry:");
            for suggestion in self.suggestions {
                result.push_str(&format!("\n  • {suggestion}"));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_subject_and_suggestions() {
        let ctx = ErrorContext {
            operation: "install",
            subject: Some("Next.js".to_string()),
            suggestions: &["Install Node.js from https://nodejs.org"],
        };
        let text = ctx.display();
        assert!(text.starts_with("Could not install Next.js"));
        assert!(text.contains("\n  • Install Node.js from https://nodejs.org"));
    }

    #[test]
    fn test_display_without_subject() {
        let ctx = ErrorContext {
            operation: "Tailwind setup",
            subject: None,
            suggestions: &[],
        };
        assert_eq!(ctx.display(), "Tailwind setup did not complete");
    }
}
