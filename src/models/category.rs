//! Transaction category
//!
//! Every ledger row is either income or an expense. Stored labels are
//! normalized on the way in and on the way out, so `" income"`, `"INCOME"`
//! and `"Income"` all mean the same thing.

use std::fmt;

/// Category of a ledger row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Expense,
    /// A label found in the file that is neither of the two known ones.
    /// Kept title-cased; it never counts toward a total.
    Other(String),
}

impl Category {
    /// Normalize a raw label: trim, then title-case (first letter upper,
    /// rest lower)
    pub fn normalize(raw: &str) -> Self {
        let label = title_case(raw.trim());
        match label.as_str() {
            "Income" => Self::Income,
            "Expense" => Self::Expense,
            _ => Self::Other(label),
        }
    }

    /// The label as written to the ledger file
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Other(label) => label,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-case the first character and lower-case the rest
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
