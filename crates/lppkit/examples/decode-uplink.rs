//! Decode a base64 uplink the way a network server delivers it.
//!
//! Run with:
//!   cargo run --example decode-uplink -- AYgILMMBiIMAAAACAAY=

use lppkit::json::from_base64;
use lppkit::types::registry::GPS_LOCATION;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let payload = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "AYgILMMBiIMAAAACAAY=".to_string());
    let frame = from_base64(&payload)?;

    for item in &frame {
        println!("{item}");
    }

    if let Some(fix) = frame.filter_by_type(GPS_LOCATION.into()).first() {
        let values = fix.values();
        println!(
            "position fix on channel {}: lat={} lon={} alt={}m",
            fix.channel(),
            values[0],
            values[1],
            values[2]
        );
    }
    Ok(())
}
