//! System prompts for script generation.

use explainer_core::ClientProfile;

const PRODUCT_BRIEF: &str = "\
=== PRODUCT ===
Nova is an AI orchestration layer for product development. Specialized agents \
carry business context from strategy into research, score discovered problems \
across eleven dimensions with evidence trails, let stakeholders vote with \
structured credits, design and build solutions with analytics instrumented \
from day one, and feed real-world outcomes back into the next cycle. Each \
agent can run fully autonomous, agent-assisted, or human-led.

=== PROOF POINTS ===
- Solution discovery compressed from 17-24 weeks to 3 weeks (6-8x)
- Every decision carries its evidence trail
- Institutional knowledge stays when people leave
";

const JSON_SCHEMA: &str = r#"Return ONLY valid JSON:
{
  "sections": [
    {
      "id": "hook",
      "label": "Opening Hook",
      "durationSeconds": 10,
      "narration": "The spoken text",
      "visualCue": "What should appear on screen",
      "onScreenText": "Short overlay (8 words max) or null"
    }
  ]
}"#;

/// System prompt for a 60-90 second product explainer.
pub fn generic_system_prompt() -> String {
    format!(
        "You are a video script writer for Nova. Write a compelling 60-90 second explainer.

{PRODUCT_BRIEF}
=== SCRIPT INSTRUCTIONS ===
Write these sections in order:
1. hook (8-12s): an opening insight about what the best product teams do differently. Frame positively.
2. opportunity (15-20s): teams already have good tools; the opportunity is connecting them.
3. solution (20-25s): walk through the continuous pipeline from strategy to measured outcomes.
4. proof (10-15s): acceleration metrics and evidence for every decision.
5. cta (5-8s): a partnership-oriented close.

{JSON_SCHEMA}
"
    )
}

/// System prompt for a 90-120 second explainer tailored to `client`.
///
/// Industry, pain points and use cases are mentioned only when present.
pub fn personalized_system_prompt(client: &ClientProfile) -> String {
    let name = &client.name;
    let mut context = Vec::new();
    if let Some(industry) = &client.industry {
        context.push(format!("The client operates in {}.", industry));
    }
    if !client.pain_points.is_empty() {
        context.push(format!("Known challenges: {}.", client.pain_points.join("; ")));
    }
    if !client.use_cases.is_empty() {
        context.push(format!(
            "Relevant Nova capabilities: {}.",
            client.use_cases.join("; ")
        ));
    }
    let context = context.join(" ");

    format!(
        "You are a video script writer creating a personalized explainer for {name}. {context}

Write a 90-120 second video tailored to {name}.

{PRODUCT_BRIEF}
=== SCRIPT INSTRUCTIONS ===
Write these sections in order:
1. hook (10-15s): an ambition or opportunity specific to {name}'s world.
2. mirror (15-20s): show understanding of their scale and the challenges of their industry.
3. solution (25-30s): the four or five parts of the agent chain most relevant to {name}.
4. workflow (20-25s): a concrete day-in-the-life scenario for {name}'s team.
5. outcomes (15-20s): expected results and the intelligence loop.
6. cta (5-10s): a \"let's build this together\" close.

{JSON_SCHEMA}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personalized_prompt_mentions_profile_details() {
        let mut client = ClientProfile::new("Acme Logistics");
        client.industry = Some("freight".to_string());
        client.pain_points = vec!["manual routing".to_string(), "slow quotes".to_string()];

        let prompt = personalized_system_prompt(&client);

        assert!(prompt.contains("personalized explainer for Acme Logistics"));
        assert!(prompt.contains("operates in freight"));
        assert!(prompt.contains("manual routing; slow quotes"));
        assert!(!prompt.contains("Relevant Nova capabilities"));
    }

    #[test]
    fn test_generic_prompt_asks_for_json_sections() {
        let prompt = generic_system_prompt();
        assert!(prompt.contains("\"sections\""));
        assert!(prompt.contains("durationSeconds"));
    }
}
