//! CayenneLPP payload encoder and decoder for constrained IoT links.
//!
//! lppkit packs typed sensor readings into the Cayenne Low Power Payload
//! format used on LoRaWAN and similar radio links, and unpacks them again
//! byte for byte.
//!
//! # Crate Structure
//!
//! - [`types`]: Closed type registry and fixed-point value codec
//! - [`frame`]: Data items and size-bounded frames
//! - [`json`]: JSON projection and base64 adapter (behind `json` feature)
//!
//! ```
//! use lppkit::Frame;
//!
//! let mut frame = Frame::with_max_size(51);
//! frame.add_temperature(1, -4.1).unwrap();
//! assert_eq!(frame.to_bytes().unwrap().as_ref(), &[0x01, 0x67, 0xFF, 0xD7]);
//! ```

/// Re-export registry types.
pub mod types {
    pub use lppkit_types::*;
}

/// Re-export frame types.
pub mod frame {
    pub use lppkit_frame::*;
}

/// Re-export JSON and base64 helpers (requires `json` feature).
#[cfg(feature = "json")]
pub mod json {
    pub use lppkit_json::*;
}

pub use lppkit_frame::{DataItem, Frame, FrameError};
pub use lppkit_types::{TypeDescriptor, TypeError, Values};
