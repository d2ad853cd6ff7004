use std::fmt::{self, Display};

use crate::{RandError, RandResult, hash::fnv1a32};

/// Anything a generator can be seeded from. Only the derived 32-bit value
/// outlives construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Seed {
    Int(i64),
    Uint(u64),
    Text(String),
}

impl Seed {
    /// Integers keep their low 32 bits (two's complement for negatives),
    /// text goes through FNV-1a.
    pub fn to_u32(&self) -> u32 {
        match self {
            Seed::Int(i) => *i as u32,
            Seed::Uint(u) => *u as u32,
            Seed::Text(s) => fnv1a32(s),
        }
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Int(i) => write!(f, "{}", i),
            Seed::Uint(u) => write!(f, "{}", u),
            Seed::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Seed::Int(value as i64)
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed::Int(value)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Seed::Uint(value as u64)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Uint(value)
    }
}

impl From<usize> for Seed {
    fn from(value: usize) -> Self {
        Seed::Uint(value as u64)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_owned())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}

/// Integral finite floats widen to `Seed::Int`, so `12.0` seeds like `12` and
/// not like the text `"12.0"`. NaN, infinities, fractions and values outside
/// `i64` are rejected.
impl TryFrom<f64> for Seed {
    type Error = RandError;

    fn try_from(value: f64) -> RandResult<Self> {
        // i64::MAX rounds up to 2^63 as f64, hence the strict bound
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Ok(Seed::Int(value as i64))
        } else {
            Err(RandError::InvalidSeed(value.to_string()))
        }
    }
}
