use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub use table::Table;

/// Render a serializable response to a string in the requested format.
///
/// Table mode falls back to a generic key/value layout; commands with a
/// dedicated layout build [`Table`]s and call [`output_tables`] instead.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a response: its tables in table mode, the serialized value otherwise.
pub fn output_with_tables<T, F>(value: &T, format: OutputFormat, tables: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> Vec<Table>,
{
    if format == OutputFormat::Table {
        output_tables(&tables(value));
        Ok(())
    } else {
        output(value, format)
    }
}

pub fn output_tables(tables: &[Table]) {
    let rendered = tables
        .iter()
        .map(|table| table.render(options()))
        .collect::<Vec<_>>()
        .join("\n\n");
    println!("{rendered}");
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    let table = match value {
        Value::Object(map) => {
            let mut table = Table::new(["key", "value"]);
            for (key, value) in map {
                table.push_row([key.clone(), value_to_cell(value)]);
            }
            table
        }
        Value::Array(items) => {
            let mut table = Table::new(["value"]);
            for item in items {
                table.push_row([value_to_cell(item)]);
            }
            table
        }
        scalar => {
            let mut table = Table::new(["value"]);
            table.push_row([value_to_cell(scalar)]);
            table
        }
    };
    Ok(table.render(options()))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        topic: &'static str,
        total_words: u64,
        percentage: Option<f64>,
    }

    fn example() -> Example {
        Example {
            topic: "english",
            total_words: 1200,
            percentage: None,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["topic"], "english");
        assert_eq!(parsed["total_words"], 1200);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["topic"], "english");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("key"));
        assert!(lines[0].contains("value"));
        assert!(out.contains("total_words"));
        assert!(lines.iter().any(|line| line.starts_with("percentage") && line.ends_with('-')));
    }
}
