use std::fmt;
use std::ops::Deref;

/// Largest dimension of any registered data type.
pub const MAX_DIMENSION: usize = 3;

/// The values of one reading, stored inline.
///
/// Single-field types hold one value; accelerometer, gyrometer, colour and
/// GPS readings hold three.
#[derive(Clone, Copy, Default)]
pub struct Values {
    buf: [f64; MAX_DIMENSION],
    len: usize,
}

impl Values {
    /// Copy values from a slice.
    ///
    /// Returns `None` if the slice holds more than [`MAX_DIMENSION`] values.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        if values.len() > MAX_DIMENSION {
            return None;
        }
        let mut out = Self::default();
        out.buf[..values.len()].copy_from_slice(values);
        out.len = values.len();
        Some(out)
    }

    pub(crate) fn push(&mut self, value: f64) {
        debug_assert!(self.len < MAX_DIMENSION);
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no values are held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.buf[..self.len]
    }
}

impl Deref for Values {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl PartialEq for Values {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl From<f64> for Values {
    fn from(value: f64) -> Self {
        let mut out = Self::default();
        out.push(value);
        out
    }
}

impl From<[f64; MAX_DIMENSION]> for Values {
    fn from(buf: [f64; MAX_DIMENSION]) -> Self {
        Self {
            buf,
            len: MAX_DIMENSION,
        }
    }
}

impl fmt::Debug for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}
