use crate::{ReqflowError, Result, SharedState};
use regex::Regex;
use std::sync::OnceLock;

/// Regex pattern to match template placeholders like {variable}.
/// Matches {+[^{}]*}+ to handle nested braces.
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{+[^{}]*\}+").expect("Invalid regex pattern"))
}

/// Checks if a string is a valid identifier.
/// Must start with a letter or underscore, followed by letters, digits, or underscores.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_alphabetic() && first != '_' {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// A placeholder occurrence in a template, after brace trimming.
///
/// `{name}` is required; `{name?}` is optional and renders as the empty
/// string when unbound. A brace run whose interior is not a valid
/// identifier (JSON snippets, doubled braces) is literal text, not a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Placeholder {
    name: String,
    optional: bool,
}

fn parse_placeholder(match_str: &str) -> Option<Placeholder> {
    let var_name = match_str.trim_matches(|c| c == '{' || c == '}').trim();

    let (var_name, optional) = match var_name.strip_suffix('?') {
        Some(name) => (name, true),
        None => (var_name, false),
    };

    if is_identifier(var_name) {
        Some(Placeholder { name: var_name.to_string(), optional })
    } else {
        None
    }
}

/// A named, parameterized prompt template.
///
/// Immutable once constructed. The set of placeholder variables is
/// enumerated up front so a pipeline can verify, before any model call,
/// that every stage's reads are covered by earlier writes.
///
/// Rendering is strict: a required placeholder with no binding in shared
/// state fails with [`ReqflowError::MissingVariable`] rather than leaking
/// the literal `{NAME}` token into the prompt.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: String,
    required: Vec<String>,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut required = Vec::new();
        for m in placeholder_regex().find_iter(&text) {
            if let Some(p) = parse_placeholder(m.as_str()) {
                if !p.optional && !required.contains(&p.name) {
                    required.push(p.name);
                }
            }
        }
        Self { text, required }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Variable names that must be bound for [`render`](Self::render) to succeed.
    pub fn required_variables(&self) -> &[String] {
        &self.required
    }

    /// Renders the template against shared state.
    ///
    /// # Errors
    ///
    /// Returns [`ReqflowError::MissingVariable`] if a required placeholder
    /// has no binding.
    pub fn render(&self, state: &SharedState) -> Result<String> {
        let regex = placeholder_regex();
        let mut result = String::with_capacity(self.text.len());
        let mut last_end = 0;

        for m in regex.find_iter(&self.text) {
            let range = m.range();
            result.push_str(&self.text[last_end..range.start]);

            match parse_placeholder(m.as_str()) {
                Some(p) => match state.text(&p.name) {
                    Some(value) => result.push_str(&value),
                    None if p.optional => {}
                    None => return Err(ReqflowError::MissingVariable(p.name)),
                },
                // Not a valid variable name - keep the original match as literal
                None => result.push_str(m.as_str()),
            }

            last_end = range.end;
        }

        result.push_str(&self.text[last_end..]);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("valid_name"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("name123"));
        assert!(!is_identifier("123invalid"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("with-dash"));
    }

    #[test]
    fn test_required_variables_enumerated_at_construction() {
        let template = PromptTemplate::new("Analyze {USER_REQUEST} for {user_id}, see {notes?}");
        assert_eq!(template.required_variables(), ["USER_REQUEST", "user_id"]);
    }

    #[test]
    fn test_duplicate_placeholder_listed_once() {
        let template = PromptTemplate::new("{x} and {x} again");
        assert_eq!(template.required_variables(), ["x"]);
    }

    #[test]
    fn test_json_example_is_not_a_placeholder() {
        let template = PromptTemplate::new(r#"Output: {"priority": "high"} from {REQUEST}"#);
        assert_eq!(template.required_variables(), ["REQUEST"]);
    }
}
