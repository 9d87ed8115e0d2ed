use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use lppkit_types::{registry, TypeDescriptor, TypeError, Values};

use crate::error::{FrameError, Result};

/// Item header: channel (1) + type (1) = 2 bytes.
pub const HEADER_SIZE: usize = 2;

/// One sensor reading on a channel.
///
/// Wire format:
/// ```text
/// ┌──────────┬──────────┬──────────────────────────────┐
/// │ Channel  │ Type     │ Payload                      │
/// │ (1B)     │ (1B)     │ (descriptor total width)     │
/// └──────────┴──────────┴──────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataItem {
    channel: u8,
    descriptor: &'static TypeDescriptor,
    values: Values,
}

impl DataItem {
    /// Create a validated data item.
    ///
    /// Rejects unknown types, empty or wrongly sized value lists, and
    /// negative values on unsigned fields. Range checks happen on encode.
    pub fn new(channel: u8, type_id: u16, values: &[f64]) -> Result<Self> {
        let descriptor = registry::lookup(type_id).ok_or(TypeError::UnknownType(type_id))?;
        let values = descriptor.checked_values(values)?;

        Ok(Self {
            channel,
            descriptor,
            values,
        })
    }

    /// Parse one item from the start of `buf`.
    ///
    /// Returns the item and the number of bytes it occupied.
    pub fn from_bytes(buf: &[u8]) -> Result<(Self, usize)> {
        if buf.len() < HEADER_SIZE {
            return Err(FrameError::BufferTooShort {
                needed: HEADER_SIZE,
                available: buf.len(),
            });
        }

        let channel = buf[0];
        let type_id = u16::from(buf[1]);
        let descriptor = registry::lookup(type_id).ok_or(TypeError::UnknownType(type_id))?;

        let end = HEADER_SIZE + descriptor.total_width();
        if buf.len() < end {
            return Err(FrameError::BufferTooShort {
                needed: end,
                available: buf.len(),
            });
        }

        let values = descriptor.decode(&buf[HEADER_SIZE..end])?;
        Ok((
            Self {
                channel,
                descriptor,
                values,
            },
            end,
        ))
    }

    /// Append the encoded item to `dst`.
    ///
    /// On error `dst` is left as it was.
    pub fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        let start = dst.len();
        dst.reserve(self.wire_size());
        dst.put_u8(self.channel);
        dst.put_u8(self.descriptor.id);
        if let Err(err) = self.descriptor.encode(&self.values, dst) {
            dst.truncate(start);
            return Err(err.into());
        }
        Ok(())
    }

    /// Encode the item into a new buffer.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(self.wire_size());
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Encoded size in bytes, header included.
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.descriptor.total_width()
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn type_id(&self) -> u8 {
        self.descriptor.id
    }

    pub fn descriptor(&self) -> &'static TypeDescriptor {
        self.descriptor
    }

    /// Name of the item's data type.
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn values(&self) -> &Values {
        &self.values
    }
}

impl fmt::Display for DataItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "channel={} type={} values={}",
            self.channel, self.descriptor.name, self.values
        )
    }
}

#[cfg(test)]
mod tests {
    use lppkit_types::registry::{ACCELEROMETER, GPS_LOCATION, TEMPERATURE, VOLTAGE};

    use super::*;

    #[test]
    fn temperature_from_bytes_round_trips() {
        let wire = [0x01, 0x67, 0xFF, 0xD7];
        let (item, consumed) = DataItem::from_bytes(&wire).unwrap();

        assert_eq!(consumed, 4);
        assert_eq!(item.channel(), 1);
        assert_eq!(item.type_id(), TEMPERATURE);
        assert_eq!(item.values().as_slice(), &[-4.1]);
        assert_eq!(item.to_bytes().unwrap().as_ref(), &wire);
    }

    #[test]
    fn accelerometer_from_bytes() {
        let wire = [0x06, 0x71, 0x04, 0xD2, 0xFB, 0x2E, 0x00, 0x00];
        let (item, _) = DataItem::from_bytes(&wire).unwrap();

        assert_eq!(item.channel(), 6);
        assert_eq!(item.type_id(), ACCELEROMETER);
        assert_eq!(item.values().as_slice(), &[1.234, -1.234, 0.0]);
        assert_eq!(item.to_bytes().unwrap().as_ref(), &wire);
    }

    #[test]
    fn gps_from_bytes() {
        let wire = [
            0x01, 0x88, 0x06, 0x76, 0x5F, 0xF2, 0x96, 0x0A, 0x00, 0x03, 0xE8,
        ];
        let (item, consumed) = DataItem::from_bytes(&wire).unwrap();

        assert_eq!(consumed, wire.len());
        assert_eq!(item.type_id(), GPS_LOCATION);
        assert_eq!(item.values().as_slice(), &[42.3519, -87.9094, 10.0]);
        assert_eq!(item.to_bytes().unwrap().as_ref(), &wire);
    }

    #[test]
    fn from_bytes_consumes_only_one_item() {
        let wire = [0x01, 0x67, 0x01, 0x10, 0x05, 0x67];
        let (item, consumed) = DataItem::from_bytes(&wire).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(item.values().as_slice(), &[27.2]);
    }

    #[test]
    fn from_bytes_short_header() {
        let err = DataItem::from_bytes(&[0x01]).unwrap_err();
        assert!(matches!(
            err,
            FrameError::BufferTooShort {
                needed: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn from_bytes_short_payload() {
        let err = DataItem::from_bytes(&[0x01, 0x67, 0xFF]).unwrap_err();
        assert!(matches!(
            err,
            FrameError::BufferTooShort {
                needed: 4,
                available: 3
            }
        ));
    }

    #[test]
    fn from_bytes_unknown_type() {
        let err = DataItem::from_bytes(&[0x00, 0x99]).unwrap_err();
        assert!(matches!(
            err.type_error(),
            Some(TypeError::UnknownType(0x99))
        ));
    }

    #[test]
    fn new_validates_shape() {
        assert!(matches!(
            DataItem::new(0, 999, &[1.0]).unwrap_err().type_error(),
            Some(TypeError::UnknownType(999))
        ));
        assert!(matches!(
            DataItem::new(0, TEMPERATURE.into(), &[]).unwrap_err().type_error(),
            Some(TypeError::EmptyValue { .. })
        ));
        assert!(matches!(
            DataItem::new(0, ACCELEROMETER.into(), &[1.0, 2.0])
                .unwrap_err()
                .type_error(),
            Some(TypeError::DimensionMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
        assert!(matches!(
            DataItem::new(0, ACCELEROMETER.into(), &[1.0, 2.0, 3.0, 4.0])
                .unwrap_err()
                .type_error(),
            Some(TypeError::DimensionMismatch {
                expected: 3,
                actual: 4,
                ..
            })
        ));
        assert!(matches!(
            DataItem::new(0, VOLTAGE.into(), &[-25.0])
                .unwrap_err()
                .type_error(),
            Some(TypeError::NegativeValueNotAllowed { .. })
        ));
    }

    #[test]
    fn out_of_range_surfaces_on_encode() {
        let item = DataItem::new(3, TEMPERATURE.into(), &[5000.0]).unwrap();
        let mut buf = BytesMut::from(&[0xAA][..]);
        let err = item.encode(&mut buf).unwrap_err();

        assert!(matches!(
            err.type_error(),
            Some(TypeError::ValueOutOfRange { .. })
        ));
        assert_eq!(buf.as_ref(), &[0xAA]);
    }

    #[test]
    fn wire_size_matches_encoding() {
        let item = DataItem::new(8, GPS_LOCATION.into(), &[1.234, -1.234, 0.0]).unwrap();
        assert_eq!(item.wire_size(), 11);
        assert_eq!(item.to_bytes().unwrap().len(), item.wire_size());
    }

    #[test]
    fn display_names_the_type() {
        let item = DataItem::new(2, TEMPERATURE.into(), &[12.5]).unwrap();
        assert_eq!(item.to_string(), "channel=2 type=Temperature values=(12.5)");
    }
}
