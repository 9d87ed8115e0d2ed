use std::io::Read;

use lppkit_frame::Frame;
use lppkit_json::TypeLabel;

use crate::cmd::{DecodeArgs, PayloadEncoding};
use crate::exit::{frame_error, io_error, json_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_frame, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let text = resolve_payload(&args.payload)?;
    let frame = decode_payload(&text, args.input)?;
    tracing::debug!(items = frame.len(), size = frame.size(), "payload decoded");

    let label = if args.type_names {
        TypeLabel::Name
    } else {
        TypeLabel::Id
    };
    print_frame(&frame, label, format)?;
    Ok(SUCCESS)
}

fn resolve_payload(payload: &str) -> CliResult<String> {
    if payload != "-" {
        return Ok(payload.to_string());
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| io_error("failed reading stdin", err))?;
    Ok(text)
}

pub(crate) fn decode_payload(text: &str, encoding: PayloadEncoding) -> CliResult<Frame> {
    match encoding {
        PayloadEncoding::Hex => {
            let raw = parse_hex(text)?;
            Frame::from_bytes(&raw).map_err(|err| frame_error("decode failed", err))
        }
        PayloadEncoding::Base64 => {
            lppkit_json::from_base64(text).map_err(|err| json_error("decode failed", err))
        }
    }
}

/// Accepts an optional `0x` prefix and ignores whitespace between digits.
fn parse_hex(text: &str) -> CliResult<Vec<u8>> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&digits)
        .map_err(|err| CliError::new(DATA_INVALID, format!("payload is not valid hex: {err}")))
}
