//! Prompt templates for MCP server

use std::sync::LazyLock;

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Predefined prompt templates for coaching workflows
pub static PROMPT_TEMPLATES: LazyLock<Vec<PromptTemplate>> = LazyLock::new(|| {
    vec![
        PromptTemplate {
            name: "triage".to_string(),
            description: "Build a prioritized outreach plan from the pending coaching worklist"
                .to_string(),
            template: r#"You are **Spotter Triage**, helping a coach work through their pending caseload.

# Viewer Role
{role}

# Your Task
Turn the current worklist into a concrete outreach plan using Spotter's MCP tools.

## Step 1: Pull the Worklist
Call `list_tasks` with the viewer role above (if the placeholder was left unfilled, use "professional"). The worklist arrives sorted by priority:
- ▲ High: past the urgency threshold, act today
- ● Medium: inside the normal window
- ○ Low: routine follow-ups

## Step 2: Add Purchase Context
Call `list_purchases` with status "active" to map tasks back to their purchases, then `show_purchase` for any purchase whose tasks need more context. The feature checklist in the purchase view shows what has already been delivered.

## Step 3: Produce the Outreach Plan
For each task, write one line with:
- Who to contact (the name in the task title)
- The concrete next action (first contact, plan delivery, or follow-up message)
- The due date from the task

Keep the worklist's priority order. Call out anything past its due date explicitly."#
                .to_string(),
            arguments: vec![PromptTemplateArg {
                name: "role".to_string(),
                description:
                    "Viewer role to build the worklist for: 'professional' or 'client' \
                     (defaults to professional)"
                        .to_string(),
                required: false,
            }],
        },
        PromptTemplate {
            name: "handoff".to_string(),
            description: "Summarize a purchase and its outstanding work for a coach taking it over"
                .to_string(),
            template: r#"You are preparing a coaching handoff summary for a colleague taking over a purchase.

# Purchase
Purchase ID: {purchase_id}

## Step 1: Review the Purchase
Call `show_purchase` with the ID above. Note the service plan, the buyer, the lifecycle status, and which plan features are already checked off.

## Step 2: Review Outstanding Work
Call `list_tasks` with role "professional" and pick out the tasks whose action link points at this purchase's buyer and plan.

## Step 3: Write the Handoff
Produce a short summary covering:
- The client's name and the plan they bought
- What has been delivered so far (completed features)
- What is still pending, with priorities and due dates
- The single most urgent next action for the new coach

Keep it under 200 words. The goal is that the new coach can act without reading the full history."#
                .to_string(),
            arguments: vec![PromptTemplateArg {
                name: "purchase_id".to_string(),
                description: "The ID of the purchase to summarize".to_string(),
                required: true,
            }],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_reference_their_arguments() {
        for template in PROMPT_TEMPLATES.iter() {
            for arg in &template.arguments {
                let placeholder = format!("{{{}}}", arg.name);
                assert!(
                    template.template.contains(&placeholder),
                    "prompt '{}' never uses argument '{}'",
                    template.name,
                    arg.name
                );
            }
        }
    }

    #[test]
    fn test_template_names_are_unique() {
        let mut names: Vec<_> = PROMPT_TEMPLATES.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), PROMPT_TEMPLATES.len());
    }
}
