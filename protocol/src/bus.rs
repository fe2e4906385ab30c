//! Values sampled from a range of pins


use alloc::{
    string::String,
    vec,
    vec::Vec,
};
use core::{
    fmt,
    str::FromStr,
};

use crate::pin::Logic;


/// The value of a contiguous range of pins
///
/// Bit 0 is the least significant bit, which corresponds to the lowest pin
/// index of the sampled range.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BusValue {
    bits: Vec<Logic>,
}

impl BusValue {
    /// Create a value of the given width from the low bits of `value`
    ///
    /// Bits beyond 64 are zero.
    pub fn from_u64(value: u64, width: usize) -> Self {
        let bits = (0..width)
            .map(|i| Logic::from(i < 64 && value >> i & 1 == 1))
            .collect();

        Self {
            bits,
        }
    }

    /// Create a value where every bit is `logic`
    pub fn uniform(logic: Logic, width: usize) -> Self {
        Self {
            bits: vec![logic; width],
        }
    }

    /// Create a value from bits, least significant first
    pub fn from_bits(bits: Vec<Logic>) -> Self {
        Self {
            bits,
        }
    }

    /// The number of bits in this value
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// The bits of this value, least significant first
    pub fn bits(&self) -> &[Logic] {
        &self.bits
    }

    /// Returns the bit at `index`, if it exists
    pub fn bit(&self, index: usize) -> Option<Logic> {
        self.bits.get(index).copied()
    }

    /// Overwrite the bit at `index`
    pub fn set_bit(&mut self, index: usize, logic: Logic)
        -> Result<(), RangeError>
    {
        let width = self.width();
        let bit = self.bits.get_mut(index)
            .ok_or(RangeError { high: index, low: index, width })?;
        *bit = logic;
        Ok(())
    }

    /// Returns bits `low` to `high` (inclusive) as a new value
    pub fn slice(&self, high: usize, low: usize) -> Result<Self, RangeError> {
        if high < low || high >= self.width() {
            return Err(RangeError { high, low, width: self.width() });
        }

        Ok(Self::from_bits(self.bits[low..=high].to_vec()))
    }

    /// Renders the value as a bit string, most significant bit first
    ///
    /// The string has exactly one character per bit.
    pub fn binstr(&self) -> String {
        self.bits.iter().rev().map(|bit| bit.as_char()).collect()
    }

    /// Interpret the value as an unsigned integer
    ///
    /// Fails, if any bit is `x` or `z`, or if the value doesn't fit into 64
    /// bits.
    pub fn integer(&self) -> Result<u64, UnresolvedError> {
        if self.width() > 64 {
            return Err(UnresolvedError::TooWide { width: self.width() });
        }

        let mut value = 0;
        for (index, &logic) in self.bits.iter().enumerate() {
            if !logic.is_resolved() {
                return Err(UnresolvedError::Unresolved { index, logic });
            }
            if logic == Logic::One {
                value |= 1 << index;
            }
        }

        Ok(value)
    }
}

impl fmt::Display for BusValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for bit in self.bits.iter().rev() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl FromStr for BusValue {
    type Err = ParseError;

    /// Parses a bit string, most significant bit first
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut bits = Vec::with_capacity(s.len());
        for c in s.chars().rev() {
            let logic = Logic::try_from(c)
                .map_err(|err| ParseError::InvalidChar(err.0))?;
            bits.push(logic);
        }

        Ok(Self::from_bits(bits))
    }
}


/// A bit range that doesn't fit the value it was applied to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RangeError {
    pub high:  usize,
    pub low:   usize,
    pub width: usize,
}

/// A value can't be interpreted as an integer
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnresolvedError {
    /// The bit at `index` is neither `0` nor `1`
    Unresolved { index: usize, logic: Logic },

    /// The value has more bits than the integer type
    TooWide { width: usize },
}

/// Error parsing a bit string
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    Empty,
    InvalidChar(char),
}
