//! Instruction templates for the requirements-driven development workflow.
//!
//! Placeholders like `{USER_REQUEST}` are resolved from shared state at
//! render time; the embedded JSON examples are literal text and pass
//! through rendering untouched.

/// Shared-state key seeded by the caller.
pub const KEY_USER_REQUEST: &str = "USER_REQUEST";
/// Output key of the requirements analysis stage.
pub const KEY_REQUIREMENTS_ANALYSIS: &str = "REQUIREMENTS_ANALYSIS";
/// Output key of the architecture design stage.
pub const KEY_ARCHITECTURE_DESIGN: &str = "ARCHITECTURE_DESIGN";
/// Output key of the code generation stage.
pub const KEY_GENERATED_CODE: &str = "GENERATED_CODE";
/// Output key of the review and test planning stage.
pub const KEY_REVIEW_AND_TESTS: &str = "REVIEW_AND_TESTS";

pub const ANALYSIS_INSTRUCTION: &str = r#"
# Requirements Analysis Agent

## Goal
Analyze the user's requirement description and produce a detailed
requirement specification that later design and development stages can
build on.

## Input
User request: {USER_REQUEST}

## Analysis dimensions
Analyze the request along the following dimensions:

### 1. Functional requirements
- Core feature list
- Feature priorities (high, medium, low)
- Dependencies between features
- User interaction flows

### 2. Technical requirements
- Suggested technology stack
- Recommended architecture pattern
- Performance requirements
- Security requirements
- Compatibility requirements

### 3. Constraints
- Time constraints
- Resource constraints
- Budget constraints
- Technical limitations

### 4. Quality attributes
- Availability requirements
- Maintainability requirements
- Scalability requirements
- Testability requirements

### 5. Risk assessment
- Technical risks
- Business risks
- Schedule risks
- Suggested mitigations

## Output format
Return the analysis as JSON:

```json
{
  "overview": {
    "project_name": "project name",
    "description": "a short description of the project",
    "target_users": "intended user groups",
    "expected_value": "the value the project is expected to deliver"
  },
  "functional_requirements": {
    "core_features": [
      {
        "name": "feature name",
        "description": "detailed description",
        "priority": "high | medium | low",
        "acceptance_criteria": ["criterion 1", "criterion 2"]
      }
    ],
    "secondary_features": [
      {
        "name": "feature name",
        "description": "detailed description",
        "priority": "high | medium | low"
      }
    ]
  },
  "technical_requirements": {
    "recommended_stack": {
      "frontend": ["technology 1", "technology 2"],
      "backend": ["technology 1", "technology 2"],
      "database": ["database type"],
      "deployment": ["deployment approach"]
    },
    "architecture_pattern": "recommended architecture pattern",
    "performance": "performance targets",
    "security": ["security requirement 1", "security requirement 2"]
  },
  "constraints": {
    "time": "time limits",
    "resources": "resource limits",
    "technical": ["constraint 1", "constraint 2"]
  },
  "implementation_plan": {
    "phases": [
      {
        "name": "phase 1",
        "tasks": ["task 1", "task 2"],
        "estimated_duration": "duration estimate",
        "milestone": "milestone description"
      }
    ],
    "stack_rationale": "reasoning behind the technology choices",
    "risks": [
      {
        "description": "risk description",
        "impact": "high | medium | low",
        "mitigation": "concrete mitigation"
      }
    ]
  },
  "next_steps": [
    "action item 1: a concrete next step",
    "action item 2: a concrete next step"
  ]
}
```

Keep the analysis detailed and accurate, and make the advice actionable.
"#;

pub const ARCHITECT_INSTRUCTION: &str = r#"
Design the system architecture from the requirements analysis below.

# Requirements analysis
{REQUIREMENTS_ANALYSIS}

# Tasks
1. Design the overall system architecture
2. Define the module breakdown
3. Design the data model
4. Define the interface contracts
5. Lay out the technical implementation plan

# Output format
Provide a detailed architecture design document covering:
- A description of the system architecture diagram
- Module design
- Database design
- API design
- Technical implementation plan
"#;

pub const CODER_INSTRUCTION: &str = r#"
Generate a concrete implementation from the requirements analysis and
architecture design below.

# Requirements analysis
{REQUIREMENTS_ANALYSIS}

# Architecture design
{ARCHITECTURE_DESIGN}

# Tasks
1. Generate the core module code
2. Implement the key features
3. Add the necessary tests
4. Provide deployment configuration
5. Generate documentation

# Code quality requirements
- Clear code structure
- Complete comments
- Follows established best practices
- Easy to maintain and extend
"#;

pub const REVIEWER_INSTRUCTION: &str = r#"
Review the generated code and produce a test plan.

# Requirements analysis
{REQUIREMENTS_ANALYSIS}

# Generated code
{GENERATED_CODE}

# Tasks
1. Code quality review
2. Security check
3. Performance improvement suggestions
4. Test case design
5. Deployment verification plan

# Output
- Code review report
- Improvement suggestions
- Detailed test plan
- Acceptance criteria
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use reqflow_core::PromptTemplate;

    #[test]
    fn test_analysis_instruction_reads_only_user_request() {
        let template = PromptTemplate::new(ANALYSIS_INSTRUCTION);
        assert_eq!(template.required_variables(), [KEY_USER_REQUEST]);
    }

    #[test]
    fn test_coder_instruction_reads_analysis_and_design() {
        let template = PromptTemplate::new(CODER_INSTRUCTION);
        assert_eq!(
            template.required_variables(),
            [KEY_REQUIREMENTS_ANALYSIS, KEY_ARCHITECTURE_DESIGN]
        );
    }

    #[test]
    fn test_json_example_survives_rendering() {
        use reqflow_core::SharedState;

        let template = PromptTemplate::new(ANALYSIS_INSTRUCTION);
        let state = SharedState::new().with(KEY_USER_REQUEST, "an online task manager");
        let rendered = template.render(&state).unwrap();

        assert!(rendered.contains("User request: an online task manager"));
        assert!(rendered.contains(r#""priority": "high | medium | low""#));
    }
}
