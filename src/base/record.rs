use crate::base;

/// One stock movement. Built once at submission time and never changed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    #[serde(rename = "c")]
    category: base::Category,
    #[serde(rename = "d")]
    date: base::Date,
    #[serde(rename = "s")]
    shift: String,
    #[serde(rename = "o", skip_serializing_if = "base::Qty::is_zero", default)]
    outbound: base::Qty,
    #[serde(rename = "i", skip_serializing_if = "base::Qty::is_zero", default)]
    inbound: base::Qty,
}

impl Record {
    pub fn new(
        category: base::Category,
        date: base::Date,
        shift: String,
        outbound: base::Qty,
        inbound: base::Qty,
    ) -> Self {
        Self {
            category,
            date,
            shift,
            outbound,
            inbound,
        }
    }

    pub fn category(&self) -> &base::Category {
        &self.category
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    /// Derived from the date, kept for display.
    pub fn weekday(&self) -> &'static str {
        self.date.weekday_name()
    }

    pub fn shift(&self) -> &str {
        &self.shift
    }

    pub fn outbound(&self) -> base::Qty {
        self.outbound
    }

    pub fn inbound(&self) -> base::Qty {
        self.inbound
    }

    /// Inbound minus outbound.
    pub fn movement(&self) -> i64 {
        self.inbound.signed().saturating_sub(self.outbound.signed())
    }

    pub fn to_row(&self) -> base::Row {
        base::Row {
            category: self.category.to_string(),
            date: self.date.to_string(),
            weekday: self.weekday().to_string(),
            shift: self.shift.clone(),
            outbound: self.outbound,
            inbound: self.inbound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("invalid category")]
    Category(#[from] base::category::ParseError),
    #[error("invalid date '{0}'")]
    Date(String, #[source] base::date::ParseError),
}

impl TryFrom<base::Row> for Record {
    type Error = RowError;

    /// The stored weekday is ignored and derived again from the date.
    fn try_from(row: base::Row) -> Result<Self, Self::Error> {
        let category = row.category.parse::<base::Category>()?;
        let date = match base::Date::parse_iso(row.date.trim()) {
            Ok(dt) => dt,
            Err(e) => return Err(RowError::Date(row.date, e)),
        };
        Ok(Self::new(
            category,
            date,
            row.shift,
            row.outbound,
            row.inbound,
        ))
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Record {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
