//! Payment methods

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Credit,
    Debit,
    Cash,
}

impl PaymentMethod {
    /// Every method, in form order. The first one is the form default.
    pub const ALL: [PaymentMethod; 3] = [Self::Credit, Self::Debit, Self::Cash];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Credit => "Credit",
            Self::Debit => "Debit",
            Self::Cash => "Cash",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    /// The next method, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous method, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" | "credit card" => Ok(Self::Credit),
            "debit" | "debit card" => Ok(Self::Debit),
            "cash" => Ok(Self::Cash),
            other => Err(format!(
                "Unknown payment method '{}'. Expected one of: Credit, Debit, Cash",
                other
            )),
        }
    }
}
