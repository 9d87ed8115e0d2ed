use std::fs;

use lppkit_frame::Frame;

use crate::cmd::{EncodeArgs, PayloadEncoding};
use crate::exit::{frame_error, io_error, json_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_raw, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let input = resolve_input(&args)?;
    let frame =
        lppkit_json::from_json(&input, args.max_size).map_err(|err| json_error("encode failed", err))?;
    tracing::debug!(
        items = frame.len(),
        size = frame.size(),
        max_size = frame.max_size(),
        "readings encoded"
    );

    if matches!(format, OutputFormat::Raw) {
        let bytes = frame
            .to_bytes()
            .map_err(|err| frame_error("encode failed", err))?;
        print_raw(&bytes);
        return Ok(SUCCESS);
    }

    let payload = render_payload(&frame, args.output)?;
    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "schema_id": "https://schemas.3leaps.dev/lppkit/cli/v1/encoded-payload.schema.json",
                "encoding": encoding_name(args.output),
                "size": frame.size(),
                "payload": payload,
            });
            println!("{out}");
        }
        _ => println!("{payload}"),
    }
    Ok(SUCCESS)
}

fn resolve_input(args: &EncodeArgs) -> CliResult<String> {
    if let Some(json) = &args.json {
        return Ok(json.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::new(USAGE, "one of --json or --file is required"))
}

pub(crate) fn render_payload(frame: &Frame, encoding: PayloadEncoding) -> CliResult<String> {
    match encoding {
        PayloadEncoding::Hex => frame
            .to_bytes()
            .map(hex::encode_upper)
            .map_err(|err| frame_error("encode failed", err)),
        PayloadEncoding::Base64 => {
            lppkit_json::to_base64(frame).map_err(|err| json_error("encode failed", err))
        }
    }
}

fn encoding_name(encoding: PayloadEncoding) -> &'static str {
    match encoding {
        PayloadEncoding::Hex => "hex",
        PayloadEncoding::Base64 => "base64",
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::exit::DATA_INVALID;

    use super::*;

    fn args(json: Option<&str>, file: Option<PathBuf>) -> EncodeArgs {
        EncodeArgs {
            json: json.map(str::to_string),
            file,
            output: PayloadEncoding::Hex,
            max_size: 0,
        }
    }

    #[test]
    fn renders_hex_and_base64() {
        let frame = lppkit_json::from_json(r#"[{"channel":1,"type":103,"value":-4.1}]"#, 0).unwrap();
        assert_eq!(render_payload(&frame, PayloadEncoding::Hex).unwrap(), "0167FFD7");
        assert_eq!(render_payload(&frame, PayloadEncoding::Base64).unwrap(), "AWf/1w==");
    }

    #[test]
    fn missing_input_is_usage() {
        let err = resolve_input(&args(None, None)).unwrap_err();
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn inline_json_wins() {
        let input = resolve_input(&args(Some("[]"), None)).unwrap();
        assert_eq!(input, "[]");
    }

    #[test]
    fn budget_overflow_is_data_invalid() {
        let err = lppkit_json::from_json(
            r#"[{"channel":1,"type":103,"value":1.0},{"channel":2,"type":103,"value":2.0}]"#,
            6,
        )
        .map_err(|err| json_error("encode failed", err))
        .unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }
}
