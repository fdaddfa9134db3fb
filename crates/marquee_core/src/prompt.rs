//! Prompt rendering shared by every domain.
//!
//! A prompt is the domain's task sentence followed by one `Label: value` line
//! per request field. Rendering is pure: the same request always yields the
//! same text.

use crate::{Domain, StructuredResponse};

/// One labelled line of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptField<'a> {
    /// Text before the colon.
    pub label: &'static str,
    /// Caller-supplied value.
    pub value: &'a str,
    /// Shown instead of `value` when the value is blank. `None` for fields
    /// the caller must always fill in.
    pub placeholder: Option<&'static str>,
}

impl<'a> PromptField<'a> {
    /// A field the caller must fill in.
    pub fn required(label: &'static str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: None,
        }
    }

    /// A field that falls back to `placeholder` when blank.
    pub fn optional(label: &'static str, value: &'a str, placeholder: &'static str) -> Self {
        Self {
            label,
            value,
            placeholder: Some(placeholder),
        }
    }

    /// The text that appears after the label.
    pub fn rendered_value(&self) -> &'a str {
        let trimmed = self.value.trim();
        match self.placeholder {
            Some(placeholder) if trimmed.is_empty() => placeholder,
            _ => trimmed,
        }
    }
}

/// A typed request that can be turned into a structured generation call.
///
/// Implementors only describe their data; the task sentence, system
/// instruction and schema come from [`Self::DOMAIN`].
pub trait StructuredRequest {
    /// The response this request decodes into.
    type Response: StructuredResponse;

    /// Which domain table row drives this request.
    const DOMAIN: Domain;

    /// Every field of the request, in prompt order.
    fn prompt_fields(&self) -> Vec<PromptField<'_>>;

    /// Render the complete prompt text.
    fn prompt(&self) -> String {
        build_prompt(Self::DOMAIN, &self.prompt_fields())
    }
}

/// Render a domain's task followed by its fields, one per line.
///
/// # Examples
///
/// ```
/// use marquee_core::{Domain, PromptField, build_prompt};
///
/// let prompt = build_prompt(
///     Domain::Event,
///     &[
///         PromptField::required("Event Name", "Jazz Night"),
///         PromptField::optional("Target Audience", "", "General Public"),
///     ],
/// );
/// assert_eq!(
///     prompt,
///     "Create promotional content for a local event.\nEvent Name: Jazz Night\nTarget Audience: General Public"
/// );
/// ```
pub fn build_prompt(domain: Domain, fields: &[PromptField<'_>]) -> String {
    let mut prompt = String::from(domain.task());
    for field in fields {
        prompt.push('\n');
        prompt.push_str(field.label);
        prompt.push_str(": ");
        prompt.push_str(&flatten_line(field.rendered_value()));
    }
    prompt
}

// A value spanning several lines would read as extra labels. Other spacing
// is the user's and is kept as typed.
fn flatten_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_uses_placeholder() {
        let field = PromptField::optional("Notes", "   ", "None");
        assert_eq!(field.rendered_value(), "None");
    }

    #[test]
    fn filled_optional_is_trimmed() {
        let field = PromptField::optional("Notes", "  spicy ", "None");
        assert_eq!(field.rendered_value(), "spicy");
    }

    #[test]
    fn multi_line_values_stay_on_one_line() {
        let prompt = build_prompt(
            Domain::Menu,
            &[PromptField::required("Ingredients", "kale\r\nlemon\n\nfeta")],
        );
        assert_eq!(prompt.lines().count(), 2);
        assert!(prompt.ends_with("Ingredients: kale lemon  feta"));
    }

    #[test]
    fn inner_spacing_is_preserved() {
        let prompt = build_prompt(
            Domain::Menu,
            &[PromptField::required("Ingredients", "mushrooms,   truffle oil\tbrioche")],
        );
        assert!(prompt.ends_with("Ingredients: mushrooms,   truffle oil\tbrioche"));
    }
}
