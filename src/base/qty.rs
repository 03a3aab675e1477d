/// A non-negative stock quantity, counted in whatever unit the form uses.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Qty(pub u64);

impl Qty {
    pub const ZERO: Self = Self(0);

    /// Reads a quantity out of free text by keeping only its ASCII digits.
    ///
    /// Units and separators are discarded, so `"2 dus"` reads as 2 and
    /// `"1.5 roll"` reads as 15. Text without digits, or with more digits
    /// than fit in a `u64`, reads as 0.
    pub fn from_text(s: &str) -> Self {
        let digits = s.chars().filter(char::is_ascii_digit).collect::<String>();
        if digits.is_empty() {
            return Self::ZERO;
        }
        match digits.parse::<u64>() {
            Ok(n) => Self(n),
            Err(e) => {
                tracing::warn!(text = s, error = %e, "quantity does not fit, reading as 0");
                Self::ZERO
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the quantity as a signed value, saturating at `i64::MAX`.
    pub fn signed(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }
}

impl std::fmt::Display for Qty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
