use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumCount, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    pub const fn default() -> Self {
        Self::Pending
    }

    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    /// Approval and rejection are terminal.
    pub fn is_terminal(self) -> bool {
        !self.is_pending()
    }
}
