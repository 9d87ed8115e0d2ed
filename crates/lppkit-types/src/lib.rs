//! CayenneLPP type registry and fixed-point value codec.
//!
//! Every data type in the Cayenne Low Power Payload format has a fixed
//! payload layout: one or more big-endian integer fields, each with a byte
//! width, a fixed-point scale and a signedness flag. This crate holds the
//! closed table of those layouts and converts between payload bytes and
//! [`Values`].
//!
//! ```
//! use bytes::BytesMut;
//! use lppkit_types::registry::{self, TEMPERATURE};
//!
//! let mut buf = BytesMut::new();
//! registry::encode(TEMPERATURE.into(), &[-4.1], &mut buf).unwrap();
//! assert_eq!(buf.as_ref(), &[0xFF, 0xD7]);
//! ```

pub mod descriptor;
pub mod error;
pub mod registry;
pub mod values;

pub use descriptor::{Field, TypeDescriptor};
pub use error::{Result, TypeError};
pub use registry::{decode, encode, lookup, lookup_by_name};
pub use values::{Values, MAX_DIMENSION};
