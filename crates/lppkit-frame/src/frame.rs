use std::fmt;

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

use crate::error::{FrameError, Result};
use crate::item::DataItem;

/// An ordered sequence of data items with an optional byte budget.
///
/// A `max_size` of `0` means unlimited. When non-zero, [`size`](Self::size)
/// never exceeds it: appends that would overflow are rejected and leave the
/// frame untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    items: Vec<DataItem>,
    max_size: usize,
    size: usize,
}

impl Frame {
    /// Create an empty, unbounded frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty frame with a byte budget.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    /// Create a frame from existing items.
    ///
    /// Fails if the items do not fit a non-zero budget.
    pub fn with_items(items: impl IntoIterator<Item = DataItem>, max_size: usize) -> Result<Self> {
        let mut frame = Self::with_max_size(max_size);
        for item in items {
            frame.append(item)?;
        }
        Ok(frame)
    }

    /// Decode a complete payload.
    ///
    /// Either every byte is consumed into items or the whole decode fails.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        let mut frame = Self::new();
        let mut offset = 0usize;
        while offset < buf.len() {
            let (item, consumed) = DataItem::from_bytes(&buf[offset..]).inspect_err(|err| {
                debug!(offset, error = %err, "payload decode failed");
            })?;
            trace!(offset, channel = item.channel(), type_id = item.type_id(), "decoded item");
            offset += consumed;
            frame.size += consumed;
            frame.items.push(item);
        }

        debug!(items = frame.items.len(), size = frame.size, "decoded payload");
        Ok(frame)
    }

    /// Append the encoded frame to `dst`.
    ///
    /// On error `dst` is left as it was.
    pub fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        let start = dst.len();
        dst.reserve(self.size);
        for item in &self.items {
            if let Err(err) = item.encode(dst) {
                dst.truncate(start);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Encode the frame into a new buffer.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(self.size);
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Append an item, enforcing the byte budget.
    pub fn append(&mut self, item: DataItem) -> Result<()> {
        let size = self.size + item.wire_size();
        if self.max_size > 0 && size > self.max_size {
            debug!(size, max = self.max_size, "item rejected by frame budget");
            return Err(FrameError::BudgetExceeded {
                size,
                max: self.max_size,
            });
        }
        self.size = size;
        self.items.push(item);
        Ok(())
    }

    /// Build an item from its parts and append it.
    pub fn add(&mut self, type_id: u16, channel: u8, values: &[f64]) -> Result<()> {
        let item = DataItem::new(channel, type_id, values)?;
        self.append(item)
    }

    /// Change the byte budget.
    ///
    /// `0` removes the limit. Negative values and budgets below the current
    /// size are rejected.
    pub fn set_max_size(&mut self, max_size: i64) -> Result<()> {
        if max_size < 0 {
            return Err(FrameError::NegativeBudget(max_size));
        }
        let max = usize::try_from(max_size).unwrap_or(usize::MAX);
        if max > 0 && max < self.size {
            return Err(FrameError::BudgetTooSmall {
                max,
                size: self.size,
            });
        }
        self.max_size = max;
        Ok(())
    }

    /// Byte budget, `0` when unlimited.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Remove all items. The budget is kept.
    pub fn reset(&mut self) {
        self.items.clear();
        self.size = 0;
    }

    /// Encoded size of all items in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[DataItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataItem> {
        self.items.iter()
    }

    /// Items of the given data type, in frame order.
    pub fn filter_by_type(&self, type_id: u16) -> Vec<&DataItem> {
        self.items
            .iter()
            .filter(|item| u16::from(item.type_id()) == type_id)
            .collect()
    }

    /// Items whose type name starts with `prefix` (case-insensitive).
    pub fn filter_by_name(&self, prefix: &str) -> Vec<&DataItem> {
        let prefix = prefix.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name().to_lowercase().starts_with(&prefix))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a DataItem;
    type IntoIter = std::slice::Iter<'a, DataItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame(items={}, size={}", self.items.len(), self.size)?;
        if self.max_size > 0 {
            write!(f, ", max={}", self.max_size)?;
        }
        write!(f, ")")?;
        for item in &self.items {
            write!(f, "\n  {item}")?;
        }
        Ok(())
    }
}
