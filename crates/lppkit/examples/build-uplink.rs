//! Build an uplink payload from a handful of sensor readings.
//!
//! Run with:
//!   cargo run --example build-uplink
//!
//! Decode the printed payload again with:
//!   cargo run --features cli -- decode --input base64 <PAYLOAD>

use lppkit::json::{to_base64, to_json, ProjectionConfig, TypeLabel};
use lppkit::Frame;

// Smallest LoRaWAN application payload (DR0 in the EU868 plan).
const MAX_PAYLOAD: usize = 51;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut frame = Frame::with_max_size(MAX_PAYLOAD);
    frame.add_temperature(3, 27.2)?;
    frame.add_humidity(4, 61.5)?;
    frame.add_barometer(5, 1013.2)?;
    frame.add_gps(1, 53.5747, 10.0483, 21.5)?;
    frame.add_digital_input(2, 1.0)?;

    eprintln!("{frame}");
    println!("{}", to_base64(&frame)?);

    let config = ProjectionConfig {
        type_label: TypeLabel::Name,
        pretty: true,
    };
    eprintln!("{}", to_json(&frame, &config)?);
    Ok(())
}
