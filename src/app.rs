use crate::config::Command;
use crate::utils::dates::{subtract_days, valid_date};
use crate::utils::error::Result;
use crate::utils::lists::remove_list_items;
use crate::utils::validation::valid_name;
use serde_json::{json, Value};

pub fn run(command: &Command) -> Result<Value> {
    let result = match command {
        Command::SubtractDays { date, ndays } => json!(subtract_days(date, *ndays)?),
        Command::ValidDate { date } => json!(valid_date(date)?),
        Command::ValidName { name } => json!(valid_name(name)),
        Command::RemoveItems { remove, items } => json!(remove_list_items(remove, items)),
    };
    Ok(result)
}

/// Plain output: strings as-is, lists comma separated, everything else as JSON text.
pub fn render_text(result: &Value) -> String {
    match result {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).unwrap_or_else(|| item.to_string()))
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

pub fn render_json(command: &Command, result: &Value) -> Result<String> {
    let output = json!({ "command": command.name(), "result": result });
    Ok(serde_json::to_string(&output)?)
}
