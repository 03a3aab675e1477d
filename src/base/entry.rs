use crate::base;

/// Which way stock moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Direction {
    #[strum(serialize = "out")]
    Outbound,
    #[strum(serialize = "in")]
    Inbound,
}

impl Direction {
    /// Substring of a combined label naming this direction.
    pub const fn marker(self) -> &'static str {
        match self {
            Direction::Outbound => "Pengeluaran",
            Direction::Inbound => "Pemasukan",
        }
    }

    /// Finds the direction named in `label`. Outbound is checked first.
    pub fn infer(label: &str) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|d| label.contains(d.marker()))
    }
}

/// How the form captures a transaction's direction and quantity.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum InputMode {
    /// A label such as "Pengeluaran Tissue Roll" plus a free-text quantity.
    #[default]
    CombinedLabel,
    /// A bare category plus separate outbound and inbound quantities.
    SplitFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    Text(String),
    Split {
        outbound: base::Qty,
        inbound: base::Qty,
    },
}

impl Quantity {
    pub fn mode(&self) -> InputMode {
        match self {
            Quantity::Text(_) => InputMode::CombinedLabel,
            Quantity::Split { .. } => InputMode::SplitFields,
        }
    }
}

/// A transaction as captured by the form, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub label: String,
    pub date: base::Date,
    pub shift: String,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(
        "label names no direction, expected '{}' or '{}'",
        Direction::Outbound.marker(),
        Direction::Inbound.marker()
    )]
    MissingDirection,
    #[error("transaction moves no stock in either direction")]
    NoMovement,
    #[error("transaction moves stock in both directions")]
    BothDirections,
    #[error(transparent)]
    Category(#[from] base::category::ParseError),
}

impl RawEntry {
    /// Normalizes the entry into a record.
    ///
    /// A combined label's quantity never fails to parse, it degrades to 0
    /// (see [`base::Qty::from_text`]).
    pub fn parse(self) -> Result<base::Record, ValidationError> {
        let (category, outbound, inbound) = match self.quantity {
            Quantity::Text(ref text) => {
                let direction =
                    Direction::infer(&self.label).ok_or(ValidationError::MissingDirection)?;
                let category = self
                    .label
                    .replacen(direction.marker(), "", 1)
                    .parse::<base::Category>()?;
                let qty = base::Qty::from_text(text);
                if qty.is_zero() {
                    tracing::warn!(label = %self.label, text = %text, "quantity reads as 0");
                }
                match direction {
                    Direction::Outbound => (category, qty, base::Qty::ZERO),
                    Direction::Inbound => (category, base::Qty::ZERO, qty),
                }
            }
            Quantity::Split { outbound, inbound } => {
                match (outbound.is_zero(), inbound.is_zero()) {
                    (true, true) => return Err(ValidationError::NoMovement),
                    (false, false) => return Err(ValidationError::BothDirections),
                    _ => {}
                }
                (self.label.parse::<base::Category>()?, outbound, inbound)
            }
        };
        Ok(base::Record::new(
            category, self.date, self.shift, outbound, inbound,
        ))
    }
}
