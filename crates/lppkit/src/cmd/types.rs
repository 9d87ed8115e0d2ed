use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use lppkit_types::{registry, TypeDescriptor};
use serde::Serialize;

use crate::cmd::TypesArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct TypeRow {
    id: u8,
    name: &'static str,
    dimension: usize,
    size: usize,
    widths: Vec<u8>,
    scales: Vec<u32>,
    signed: Vec<bool>,
}

impl From<&'static TypeDescriptor> for TypeRow {
    fn from(desc: &'static TypeDescriptor) -> Self {
        Self {
            id: desc.id,
            name: desc.name,
            dimension: desc.dimension(),
            size: desc.total_width(),
            widths: desc.field_widths().collect(),
            scales: desc.field_scales().collect(),
            signed: desc.field_signs().collect(),
        }
    }
}

#[derive(Serialize)]
struct TypesOutput {
    schema_id: &'static str,
    types: Vec<TypeRow>,
}

pub fn run(_args: TypesArgs, format: OutputFormat) -> CliResult<i32> {
    let rows: Vec<TypeRow> = registry::iter().map(TypeRow::from).collect();

    match format {
        OutputFormat::Json => {
            let out = TypesOutput {
                schema_id: "https://schemas.3leaps.dev/lppkit/cli/v1/types.schema.json",
                types: rows,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "NAME", "DIM", "SIZE", "SCALE", "SIGNED"]);
            for row in &rows {
                table.add_row(vec![
                    row.id.to_string(),
                    row.name.to_string(),
                    row.dimension.to_string(),
                    row.size.to_string(),
                    join(&row.scales),
                    join(&row.signed),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for row in &rows {
                println!("{:>3}  {}  ({} bytes)", row.id, row.name, row.size);
            }
        }
    }

    Ok(SUCCESS)
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}
