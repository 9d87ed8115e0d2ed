//! CayenneLPP data items and size-bounded frames.
//!
//! A payload is a flat concatenation of items, each framed with:
//! - A 1-byte channel number
//! - A 1-byte data type identifier
//! - A fixed-width payload whose layout comes from the type registry
//!
//! There is no length prefix, delimiter or checksum; item boundaries follow
//! from each type's payload width.

pub mod error;
pub mod frame;
pub mod item;
pub mod sensors;

pub use error::{FrameError, Result};
pub use frame::Frame;
pub use item::{DataItem, HEADER_SIZE};
