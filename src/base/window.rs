use crate::base;

/// Length in days of a trailing summarization window. Zero means all history.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    derive_more::From,
    derive_more::Into,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Window(pub u32);

impl Window {
    pub const ALL: Self = Self(0);
    pub const WEEK: Self = Self(7);

    pub fn is_all(self) -> bool {
        self == Self::ALL
    }

    /// Dates summarized when the window ends on `today`.
    pub fn interval(self, today: base::Date) -> base::Interval {
        if self.is_all() {
            base::Interval::MAX
        } else {
            base::Interval::trailing(today, self.0)
        }
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => f.write_str("all time"),
            1 => f.write_str("last 1 day"),
            n => write!(f, "last {} days", n),
        }
    }
}

impl std::str::FromStr for Window {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}
