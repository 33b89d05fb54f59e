//! Expense categories
//!
//! A fixed vocabulary. The serialized form is the display name, so data
//! files read `"category": "Food & Dining"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an expense is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Transportation,
    Entertainment,
    Utilities,
    Shopping,
    Healthcare,
    Education,
    Travel,
    Other,
}

impl Category {
    /// Every category, in form order. The first one is the form default.
    pub const ALL: [Category; 9] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Entertainment,
        Category::Utilities,
        Category::Shopping,
        Category::Healthcare,
        Category::Education,
        Category::Travel,
        Category::Other,
    ];

    /// Display name, identical to the serialized value
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// The next category, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous category, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive; "food" and "dining" are accepted for Food & Dining
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if let Some(category) = Self::ALL
            .iter()
            .find(|c| c.name().to_lowercase() == needle)
        {
            return Ok(*category);
        }
        match needle.as_str() {
            "food" | "dining" | "food and dining" => Ok(Self::FoodAndDining),
            _ => Err(format!(
                "Unknown category '{}'. Expected one of: {}",
                s.trim(),
                Self::ALL.map(|c| c.name()).join(", ")
            )),
        }
    }
}
