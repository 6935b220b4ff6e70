//! Prompt templates for the narrative generators
//!
//! Templates are minijinja; every dynamic value is formatted to a display
//! string before rendering so the templates stay free of logic. Missing
//! indicators render as "n/a" and the prompts instruct the model to
//! acknowledge the gap rather than invent a number.

pub mod advisory;
pub mod report;

use crate::error::Result;
use minijinja::Environment;

pub use advisory::{ADVISORY_SYSTEM_PROMPT, advisory_prompt};
pub use report::{REPORT_SYSTEM_PROMPT, report_prompt};

/// Render a single template against a context value
pub(crate) fn render(template: &str, ctx: minijinja::Value) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("prompt", template)?;
    let rendered = env.get_template("prompt")?.render(ctx)?;
    Ok(rendered)
}
