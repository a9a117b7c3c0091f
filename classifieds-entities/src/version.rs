use std::fmt;

pub type VersionNumberValue = u64;

/// Sequence number of an ad version, unique per ad.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VersionNumber(VersionNumberValue);

impl VersionNumber {
    pub const fn initial() -> Self {
        Self(1)
    }

    pub fn is_initial(self) -> bool {
        self == Self::initial()
    }
}

impl From<VersionNumber> for VersionNumberValue {
    fn from(from: VersionNumber) -> Self {
        from.0
    }
}

impl From<VersionNumberValue> for VersionNumber {
    fn from(from: VersionNumberValue) -> Self {
        Self(from)
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
