use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui::table_options;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a dataset table with its columns in file order.
///
/// JSON keeps the `{columns, rows}` shape so column order survives; raw
/// output is the table as CSV.
pub fn render_dataset(dataset: &sigma_data::Table, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(dataset)?),
        OutputFormat::Raw => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(dataset.columns())?;
            for row in dataset.rows() {
                writer.write_record(row.iter().map(ToString::to_string))?;
            }
            let bytes = writer.into_inner().map_err(|error| error.into_error())?;
            Ok(String::from_utf8(bytes)?.trim_end().to_string())
        }
        OutputFormat::Table => {
            if dataset.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            let headers: Vec<&str> = dataset.columns().iter().map(String::as_str).collect();
            let rows: Vec<Vec<String>> = dataset
                .rows()
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect();
            Ok(table::render_rows(&headers, &rows, table_options()))
        }
    }
}

/// Print a dataset table in the requested format.
pub fn output_dataset(dataset: &sigma_data::Table, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_dataset(dataset, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) => render_array_table(items),
        Value::Object(map) => {
            let rows: Vec<Vec<String>> = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect();
            table::render_rows(&["key", "value"], &rows, table_options())
        }
        scalar => value_to_cell(scalar),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows: Vec<Vec<String>> = items.iter().map(|item| vec![value_to_cell(item)]).collect();
        return table::render_rows(&["value"], &rows, table_options());
    }

    // Keys keep struct field order; later records only add missing keys.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(String::new, value_to_cell))
                .collect()
        })
        .collect();

    table::render_rows(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => format_float(float),
            _ => number.to_string(),
        },
        Value::String(v) => v.clone(),
        Value::Object(map) => map
            .get("verdict")
            .or_else(|| map.get("conclusion").and_then(|conclusion| conclusion.get("verdict")))
            .map_or_else(|| compact(value), value_to_cell),
        Value::Array(_) => compact(value),
    }
}

/// Floats print with at most four decimals and no trailing zeros.
fn format_float(value: f64) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { String::from("0") } else { text.to_string() }
}

fn compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>"))
}
