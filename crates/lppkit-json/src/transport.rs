//! Base64 framing as used by LoRaWAN network servers for uplink payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use lppkit_frame::Frame;

use crate::error::Result;

/// Decode a base64 payload (standard alphabet, padded) into a frame.
pub fn from_base64(input: &str) -> Result<Frame> {
    let raw = STANDARD.decode(input.trim())?;
    Ok(Frame::from_bytes(&raw)?)
}

/// Encode a frame as a base64 payload.
pub fn to_base64(frame: &Frame) -> Result<String> {
    let raw = frame.to_bytes()?;
    Ok(STANDARD.encode(raw))
}
