//! Error types

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// The error returned when a hierarchy description cannot be sized
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LengthError {
    /// The declared level count was zero or exceeded
    /// [`MAX_HSS_LEVELS`](crate::constants::MAX_HSS_LEVELS)
    InvalidLevelCount(usize),
    /// A per-level typecode slice had fewer entries than the declared level
    /// count
    MissingParameterArray,
    /// The typecode supplied for `level` is not a registered LMS or LM-OTS
    /// parameter set
    UnrecognizedParameterId {
        /// Hierarchy level of the offending typecode, 0 = topmost tree
        level: usize,
        /// The typecode as supplied by the caller
        id: u32,
    },
    /// The running byte count exceeded the representable range
    SizeOverflow,
}

impl Display for LengthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidLevelCount(levels) => {
                write!(f, "level count {levels} is outside [1, 8]")
            }
            Self::MissingParameterArray => {
                write!(f, "fewer per-level typecodes than declared levels")
            }
            Self::UnrecognizedParameterId { level, id } => {
                write!(f, "typecode {id:#010x} at level {level} is not registered")
            }
            Self::SizeOverflow => {
                write!(f, "accumulated length overflows the byte counter")
            }
        }
    }
}

impl Error for LengthError {}
