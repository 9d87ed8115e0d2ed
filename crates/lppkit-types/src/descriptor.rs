use bytes::{Buf, BufMut, BytesMut};

use crate::error::{Result, TypeError};
use crate::values::Values;

/// Layout of one value field inside a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Width in bytes (1 to 4).
    pub width: u8,
    /// Fixed-point divisor applied on decode, multiplier on encode.
    pub scale: u32,
    /// Two's-complement signed when true.
    pub signed: bool,
}

impl Field {
    pub const fn unsigned(width: u8, scale: u32) -> Self {
        Self {
            width,
            scale,
            signed: false,
        }
    }

    pub const fn signed(width: u8, scale: u32) -> Self {
        Self {
            width,
            scale,
            signed: true,
        }
    }

    fn bits(&self) -> u32 {
        u32::from(self.width) * 8
    }

    /// Smallest raw integer the field can carry.
    pub fn min_raw(&self) -> i64 {
        if self.signed {
            -(1i64 << (self.bits() - 1))
        } else {
            0
        }
    }

    /// Largest raw integer the field can carry.
    pub fn max_raw(&self) -> i64 {
        if self.signed {
            (1i64 << (self.bits() - 1)) - 1
        } else {
            (1i64 << self.bits()) - 1
        }
    }

    /// Read a big-endian field and apply sign extension and scale.
    ///
    /// `src` must hold at least `width` bytes.
    fn decode(&self, src: &mut &[u8]) -> f64 {
        let raw = src.get_uint(usize::from(self.width));
        let mut value = raw as i64;
        if self.signed && value >= 1i64 << (self.bits() - 1) {
            value -= 1i64 << self.bits();
        }
        value as f64 / f64::from(self.scale)
    }

    /// Scale and truncate toward zero, then range-check.
    ///
    /// Products within a few ulps of an integer snap to it, so a decoded
    /// value always re-encodes to the raw integer it came from.
    /// Returns `None` when the result does not fit the field.
    fn to_raw(self, value: f64) -> Option<i64> {
        let product = value * f64::from(self.scale);
        let nearest = product.round();
        let scaled = if (product - nearest).abs() <= 4.0 * f64::EPSILON * nearest.abs().max(1.0) {
            nearest
        } else {
            product.trunc()
        };
        if !scaled.is_finite() || scaled < self.min_raw() as f64 || scaled > self.max_raw() as f64
        {
            return None;
        }
        Some(scaled as i64)
    }

    /// The value the wire carries for `value`: scaled, truncated and scaled
    /// back. `None` when it does not fit the field.
    pub fn quantize(self, value: f64) -> Option<f64> {
        self.to_raw(value)
            .map(|raw| raw as f64 / f64::from(self.scale))
    }

    fn encode_raw(&self, raw: i64, dst: &mut BytesMut) {
        let mask = (1u64 << self.bits()) - 1;
        dst.put_uint(raw as u64 & mask, usize::from(self.width));
    }
}

/// Static description of one registered data type.
#[derive(Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Type identifier as it appears on the wire.
    pub id: u8,
    /// Human-readable name.
    pub name: &'static str,
    /// Field layout, in wire order.
    pub fields: &'static [Field],
}

impl TypeDescriptor {
    /// Number of values a reading of this type carries.
    pub fn dimension(&self) -> usize {
        self.fields.len()
    }

    /// Encoded payload width in bytes (excluding the item header).
    pub fn total_width(&self) -> usize {
        self.fields.iter().map(|f| usize::from(f.width)).sum()
    }

    pub fn field_widths(&self) -> impl Iterator<Item = u8> + '_ {
        self.fields.iter().map(|f| f.width)
    }

    pub fn field_scales(&self) -> impl Iterator<Item = u32> + '_ {
        self.fields.iter().map(|f| f.scale)
    }

    pub fn field_signs(&self) -> impl Iterator<Item = bool> + '_ {
        self.fields.iter().map(|f| f.signed)
    }

    /// Check arity and sign without encoding.
    pub fn validate(&self, values: &[f64]) -> Result<()> {
        if values.is_empty() {
            return Err(TypeError::EmptyValue { type_id: self.id });
        }
        if values.len() != self.dimension() {
            return Err(TypeError::DimensionMismatch {
                type_id: self.id,
                expected: self.dimension(),
                actual: values.len(),
            });
        }
        for (field, (spec, &value)) in self.fields.iter().zip(values).enumerate() {
            if !spec.signed && value < 0.0 {
                return Err(TypeError::NegativeValueNotAllowed {
                    type_id: self.id,
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Validate `values` and copy them into a [`Values`].
    pub fn checked_values(&self, values: &[f64]) -> Result<Values> {
        self.validate(values)?;
        let mut out = Values::default();
        for &value in values {
            out.push(value);
        }
        Ok(out)
    }

    /// Decode a payload into values.
    ///
    /// `src` must be exactly [`total_width`](Self::total_width) bytes long.
    pub fn decode(&self, src: &[u8]) -> Result<Values> {
        if src.len() != self.total_width() {
            return Err(TypeError::InvalidBufferLength {
                type_id: self.id,
                expected: self.total_width(),
                actual: src.len(),
            });
        }

        let mut cursor = src;
        let mut values = Values::default();
        for field in self.fields {
            values.push(field.decode(&mut cursor));
        }
        Ok(values)
    }

    /// Encode values as a payload appended to `dst`.
    ///
    /// Nothing is written unless every field encodes.
    pub fn encode(&self, values: &[f64], dst: &mut BytesMut) -> Result<()> {
        self.validate(values)?;

        let mut raw = [0i64; crate::values::MAX_DIMENSION];
        for (field, (spec, &value)) in self.fields.iter().zip(values).enumerate() {
            raw[field] = spec.to_raw(value).ok_or(TypeError::ValueOutOfRange {
                type_id: self.id,
                field,
                value,
            })?;
        }

        dst.reserve(self.total_width());
        for (spec, &raw) in self.fields.iter().zip(&raw) {
            spec.encode_raw(raw, dst);
        }
        Ok(())
    }
}
