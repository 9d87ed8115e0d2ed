use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use lppkit_frame::Frame;
use lppkit_json::TypeLabel;
use serde::Serialize;
use serde_json::Value;

use crate::exit::{frame_error, json_error, CliResult};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct DecodedOutput {
    schema_id: &'static str,
    size: usize,
    items: Value,
}

pub fn print_frame(frame: &Frame, label: TypeLabel, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let out = DecodedOutput {
                schema_id: "https://schemas.3leaps.dev/lppkit/cli/v1/decoded-frame.schema.json",
                size: frame.size(),
                items: lppkit_json::to_value(frame, label)
                    .map_err(|err| json_error("render failed", err))?,
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
                .set_header(vec!["CHANNEL", "TYPE", "ID", "VALUES"]);
            for item in frame {
                table.add_row(vec![
                    item.channel().to_string(),
                    item.name().to_string(),
                    item.type_id().to_string(),
                    item.values().to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for item in frame {
                println!("{item}");
            }
        }
        OutputFormat::Raw => {
            let bytes = frame
                .to_bytes()
                .map_err(|err| frame_error("render failed", err))?;
            print_raw(&bytes);
        }
    }
    Ok(())
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}
