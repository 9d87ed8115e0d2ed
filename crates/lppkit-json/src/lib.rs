//! JSON projection and base64 transport adapter for CayenneLPP frames.
//!
//! Network servers usually hand uplinks over as base64 strings, and
//! dashboards want readings as JSON. This crate converts between both and
//! [`lppkit_frame::Frame`]:
//!
//! ```json
//! [{"channel": 1, "type": 103, "value": -4.1},
//!  {"channel": 2, "type": "GPS Location", "value": [42.3519, -87.9094, 10.0]}]
//! ```

pub mod config;
pub mod error;
pub mod projection;
pub mod transport;

pub use config::{ProjectionConfig, TypeLabel};
pub use error::{JsonError, Result};
pub use projection::{from_json, from_value, to_json, to_value};
pub use transport::{from_base64, to_base64};
