//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;

// ── Stored resources ─────────────────────────────────────────────────

/// A resource spec paired with the id the API assigned it.
#[derive(Debug, Serialize)]
pub struct Stored<T> {
    pub id: i64,
    #[serde(flatten)]
    pub spec: T,
}

impl<T> Stored<T> {
    pub fn new(id: i64, spec: T) -> Self {
        Self { id, spec }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since single-item detail views don't use `Tabled` derive.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Status line on stderr, suppressed by `--quiet`.
pub fn notice(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

fn render_yaml<T: Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::Value;

    use super::*;

    #[derive(Serialize)]
    struct Thing {
        name: String,
    }

    #[derive(Tabled)]
    struct ThingRow {
        #[tabled(rename = "Name")]
        name: String,
    }

    #[test]
    fn stored_flattens_spec_next_to_id() {
        let stored = Stored::new(
            7,
            Thing {
                name: "home".into(),
            },
        );
        let out = render_single(&OutputFormat::JsonCompact, &stored, |_| String::new(), |s| {
            s.id.to_string()
        });
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!({ "id": 7, "name": "home" }));
    }

    #[test]
    fn plain_lists_one_identifier_per_line() {
        let things = vec![
            Thing { name: "a".into() },
            Thing { name: "b".into() },
        ];
        let out = render_list(
            &OutputFormat::Plain,
            &things,
            |t| ThingRow {
                name: t.name.clone(),
            },
            |t| t.name.clone(),
        );
        assert_eq!(out, "a\nb");

        let table = render_list(
            &OutputFormat::Table,
            &things,
            |t| ThingRow {
                name: t.name.clone(),
            },
            |t| t.name.clone(),
        );
        assert!(table.contains("Name"));
    }
}
