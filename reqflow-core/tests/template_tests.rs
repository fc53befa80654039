use reqflow_core::{PromptTemplate, ReqflowError, SharedState};
use serde_json::json;

fn state() -> SharedState {
    SharedState::new()
        .with("user_name", "Alice")
        .with("role", "admin")
        .with("score", 100)
}

#[test]
fn test_simple_substitution() {
    let template = PromptTemplate::new("Hello {user_name}, welcome back!");
    let result = template.render(&state()).unwrap();
    assert_eq!(result, "Hello Alice, welcome back!");
}

#[test]
fn test_multiple_substitutions() {
    let template = PromptTemplate::new("User {user_name} has role {role}.");
    let result = template.render(&state()).unwrap();
    assert_eq!(result, "User Alice has role admin.");
}

#[test]
fn test_non_string_value_substitution() {
    let template = PromptTemplate::new("Score: {score}");
    let result = template.render(&state()).unwrap();
    assert_eq!(result, "Score: 100");
}

#[test]
fn test_optional_substitution_exists() {
    let template = PromptTemplate::new("Role: {role?}");
    let result = template.render(&state()).unwrap();
    assert_eq!(result, "Role: admin");
}

#[test]
fn test_optional_substitution_missing() {
    let template = PromptTemplate::new("Group: {group?}");
    let result = template.render(&state()).unwrap();
    assert_eq!(result, "Group: ");
}

#[test]
fn test_missing_variable_error() {
    let template = PromptTemplate::new("Group: {group}");
    let result = template.render(&state());
    assert!(matches!(result, Err(ReqflowError::MissingVariable(name)) if name == "group"));
}

#[test]
fn test_fail_fast_lists_missing_variable_up_front() {
    // The strict check works from construction-time enumeration, so a
    // caller can verify coverage before any external call is made.
    let template = PromptTemplate::new("Analyze: {USER_REQUEST}");
    assert_eq!(template.required_variables(), ["USER_REQUEST"]);
    assert!(template.render(&SharedState::new()).is_err());
}

#[test]
fn test_covering_bindings_leave_no_unresolved_tokens() {
    let template = PromptTemplate::new("{a} then {b}, maybe {c?}");
    let state = SharedState::new().with("a", "1").with("b", "2");
    let rendered = template.render(&state).unwrap();
    assert!(!rendered.contains('{'));
    assert!(!rendered.contains('}'));
    assert_eq!(rendered, "1 then 2, maybe ");
}

#[test]
fn test_json_literal_passthrough() {
    // Prompt bodies embed JSON output examples; brace runs that are not
    // valid identifiers must survive rendering untouched.
    let template = PromptTemplate::new(
        "Respond as:\n```json\n{\"summary\": \"text\", \"priority\": \"high\"}\n```\nfor {USER_REQUEST}",
    );
    let state = SharedState::new().with("USER_REQUEST", "a web shop");
    let result = template.render(&state).unwrap();
    assert!(result.contains(r#"{"summary": "text", "priority": "high"}"#));
    assert!(result.contains("for a web shop"));
}

#[test]
fn test_array_value_substitution() {
    let template = PromptTemplate::new("Tags: {tags}");
    let state = SharedState::new().with("tags", json!(["web", "mobile"]));
    assert_eq!(template.render(&state).unwrap(), r#"Tags: ["web","mobile"]"#);
}

#[test]
fn test_complex_mix() {
    let template = PromptTemplate::new("{user_name} ({role}) scored {score}. Notes: {notes?}");
    let result = template.render(&state()).unwrap();
    assert_eq!(result, "Alice (admin) scored 100. Notes: ");
}
