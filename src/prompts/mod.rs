// Prompt templates for the idea-generation pipeline
//
// The system instruction is static and independent of user input; every
// value interpolated into the user prompt arrives through PromptInputs,
// so the template can never reach outside its own parameter list.

use crate::domain::Technology;

/// Fixed system instruction describing the response structure expected
/// from the completion service.
pub const SYSTEM_INSTRUCTIONS: &str = "\
You are an expert AI researcher and developer.

First, summarize the articles provided by the user. Based on the summary, \
list the problems for all stakeholders. Then, clearly explain how each \
stakeholder's needs can be met.

Suggest some creative project ideas to address the community problem and \
incorporate the selected technologies.

For each of the selected technologies, provide an example of how the \
project could be implemented in real life.

Finally, provide sample datasets related to the community problem \
formatted in a table. Organize the information using bolded headings, add \
bullet points, and incorporate emojis.

Provide consistent output for the user every time.";

/// Everything the user prompt template may reference.
#[derive(Debug, Clone)]
pub struct PromptInputs {
    pub problem: String,
    pub technologies: Vec<Technology>,
    pub other_technologies: String,
    pub articles: String,
    pub datasets: String,
}

/// Renders the selected technology labels, folding in any free-text
/// additions, as a single comma-separated list.
fn render_technologies(technologies: &[Technology], other: &str) -> String {
    let mut labels: Vec<&str> = technologies.iter().map(Technology::label).collect();
    let other = other.trim();
    if !other.is_empty() {
        labels.push(other);
    }
    labels.join(", ")
}

/// Builds the user prompt forwarded to the completion service.
///
/// The caller is responsible for validation; no escaping or length
/// limiting happens here.
pub fn assemble_user_prompt(inputs: &PromptInputs) -> String {
    format!(
        "For a community member solving {} who is interested in experimenting \
         with {}, reading {}, and plans to use {}",
        inputs.problem,
        render_technologies(&inputs.technologies, &inputs.other_technologies),
        inputs.articles,
        inputs.datasets,
    )
}
