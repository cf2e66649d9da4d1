use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Which hasher backs a `Visited` set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hashing {
    /// Buckets are the packed state value itself.
    Packed,
    /// The packed value is run through FNV first.
    Fnv,
}

impl Default for Hashing {
    fn default() -> Self {
        Hashing::Packed
    }
}

impl Display for Hashing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Hashing::Packed => write!(f, "packed"),
            Hashing::Fnv => write!(f, "fnv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHashing(pub String);

impl Display for UnknownHashing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown hashing: {} (expected packed or fnv)", self.0)
    }
}

impl Error for UnknownHashing {}

impl FromStr for Hashing {
    type Err = UnknownHashing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "packed" => Ok(Hashing::Packed),
            "fnv" => Ok(Hashing::Fnv),
            _ => Err(UnknownHashing(s.to_owned())),
        }
    }
}
