//! Logic levels of a single pin


use core::fmt;


/// The value observed on a single simulated pin
///
/// Apart from the two resolved levels, a simulated pin can be driven to an
/// unknown value, or not driven at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Logic {
    Zero,
    One,

    /// Driven, but to an unknown value (`x`)
    Unknown,

    /// Not driven by anything (`z`)
    HighImpedance,
}

impl Logic {
    /// Indicates whether this is one of the two resolved levels
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Zero | Self::One)
    }

    /// The character that represents this value in a bit string
    pub fn as_char(self) -> char {
        match self {
            Self::Zero          => '0',
            Self::One           => '1',
            Self::Unknown       => 'x',
            Self::HighImpedance => 'z',
        }
    }
}

impl From<bool> for Logic {
    fn from(level: bool) -> Self {
        if level { Self::One } else { Self::Zero }
    }
}

impl TryFrom<char> for Logic {
    type Error = InvalidLogicChar;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0'       => Ok(Self::Zero),
            '1'       => Ok(Self::One),
            'x' | 'X' => Ok(Self::Unknown),
            'z' | 'Z' => Ok(Self::HighImpedance),
            c         => Err(InvalidLogicChar(c)),
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}


/// A character that doesn't represent a logic value
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidLogicChar(pub char);
