/// A calendar date without time or timezone information. Values are
/// guaranteed to be between `0000-01-01` and `9999-12-31`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Date(time::Date);

const ISO: &[time::format_description::BorrowedFormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Date(time::macros::date!(0000 - 01 - 01));

    /// 9999-12-31
    pub const MAX: Self = Date(time::macros::date!(9999 - 12 - 31));

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    /// Returns the local date.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self::new(now.date()).unwrap_or(Self::MAX)
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2015, 3, 30).expect("'today' for tests should be valid")
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    /// Indonesian weekday name, as written to the store's `Hari` column.
    pub fn weekday_name(self) -> &'static str {
        match self.0.weekday() {
            time::Weekday::Monday => "Senin",
            time::Weekday::Tuesday => "Selasa",
            time::Weekday::Wednesday => "Rabu",
            time::Weekday::Thursday => "Kamis",
            time::Weekday::Friday => "Jumat",
            time::Weekday::Saturday => "Sabtu",
            time::Weekday::Sunday => "Minggu",
        }
    }

    /// Parses a `yyyy-mm-dd` date, without the relative forms accepted by
    /// `from_str`.
    pub fn parse_iso(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        time::Date::parse(s, ISO)
            .map_err(ParseError::BadFormat)
            .and_then(|x| Self::new(x).ok_or(ParseError::OutOfRange))
    }

    /// Offsets the date by `days`, returning `None` if the result is out of
    /// bounds.
    pub fn shift_days(self, days: i64) -> Option<Self> {
        // Wider than the whole valid range, and small enough not to overflow
        // `time::Duration`.
        if days.unsigned_abs() > 4_000_000 {
            return None;
        }
        self.0
            .checked_add(time::Duration::days(days))
            .and_then(Self::new)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error(transparent)]
    BadFormat(#[from] time::error::Parse),
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
    #[error("first character is not 'd' or 'D'")]
    InvalidFirstChar,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`
    /// - `dn` where `d` is either `d` or `D` and `n` is an optional day offset
    ///   from today
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.as_bytes()[0].is_ascii_digit() {
            return Self::parse_iso(s);
        }

        if !matches!(s.as_bytes()[0], b'd' | b'D') {
            return Err(Self::Err::InvalidFirstChar);
        }
        let rest = &s[1..];
        let offset = if rest.is_empty() {
            0
        } else {
            rest.parse::<i64>()?
        };
        Self::today()
            .shift_days(offset)
            .ok_or(Self::Err::OutOfRange)
    }
}

impl TryFrom<String> for Date {
    type Error = ParseError;

    /// Serialized dates are always absolute.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_iso(&value)
    }
}

impl TryFrom<&str> for Date {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
