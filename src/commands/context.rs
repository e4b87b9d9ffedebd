use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::assistant::fallback_answer;
use crate::catalog::{load_catalog, resolve_metadata_paths};
use crate::config::AppConfig;
use crate::matching::{BuiltContext, ContextBuilder};
use crate::webui::default_search_roots;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContextReport<'a> {
    matched_tool_id: Option<&'a str>,
    selected: Vec<&'a str>,
    context: &'a str,
    fallback_answer: String,
}

impl<'a> From<&'a BuiltContext<'a>> for ContextReport<'a> {
    fn from(built: &'a BuiltContext<'a>) -> Self {
        Self {
            matched_tool_id: built.matched_tool.map(|c| c.id.as_str()),
            selected: built.selected.iter().map(|c| c.id.as_str()).collect(),
            context: &built.context_text,
            fallback_answer: fallback_answer(built.matched_tool),
        }
    }
}

/// Print the prompt context a chat request would see, without calling a model.
pub fn run(
    query: String,
    current_tool: Option<String>,
    metadata_dir: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = AppConfig::load();
    let metadata_dir = metadata_dir.or(config.metadata_dir);
    let paths = resolve_metadata_paths(metadata_dir.as_deref(), &default_search_roots())?;
    let catalog = load_catalog(&paths)?;

    let built = ContextBuilder::default().build(&catalog, query.trim(), current_tool.as_deref());
    let report = ContextReport::from(&built);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "{} {}",
        "Matched tool:".bright_black(),
        report.matched_tool_id.unwrap_or("none").yellow().bold()
    );
    println!(
        "{} {}",
        "Selected:".bright_black(),
        report.selected.join(", ")
    );
    println!("{}", "─".repeat(60).bright_black());
    println!("{}", report.context);
    println!("{}", "─".repeat(60).bright_black());
    println!("{} {}", "Fallback:".bright_black(), report.fallback_answer);
    Ok(())
}
