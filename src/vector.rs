//! Fixed-length f32 vector.

use std::fmt;
use std::ops::{Add, Index};

use crate::error::{self, LanesumError};
use crate::simd;

const VECTOR_LEN: usize = 8;

/// Eight IEEE-754 binary32 values.
///
/// Addition goes through the lane adder into a stack array, so `a + b` never
/// allocates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatVector([f32; VECTOR_LEN]);

impl FloatVector {
    pub const LEN: usize = VECTOR_LEN;

    pub const fn new(values: [f32; Self::LEN]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub const fn to_array(self) -> [f32; Self::LEN] {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.0.iter()
    }
}

impl From<[f32; VECTOR_LEN]> for FloatVector {
    fn from(values: [f32; VECTOR_LEN]) -> Self {
        Self(values)
    }
}

impl TryFrom<&[f32]> for FloatVector {
    type Error = LanesumError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        let values: [f32; Self::LEN] = slice
            .try_into()
            .map_err(|_| error::invalid_length(Self::LEN, slice.len()))?;
        Ok(Self(values))
    }
}

impl Index<usize> for FloatVector {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a FloatVector {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Add for FloatVector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = [0.0f32; Self::LEN];
        simd::add_into(&self.0, &rhs.0, &mut sum);
        Self(sum)
    }
}

/// Values separated by single spaces, in `f32`'s default formatting.
impl fmt::Display for FloatVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
