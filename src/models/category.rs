//! Transaction categories
//!
//! A closed set of classifications used for filtering and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PennywiseError;

/// Classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Bills,
    Rent,
    Utilities,
    Salary,
    Misc,
    Other,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Bills,
        Category::Rent,
        Category::Utilities,
        Category::Salary,
        Category::Misc,
        Category::Other,
    ];

    /// Upper-case name, as shown to users
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Transport => "TRANSPORT",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Bills => "BILLS",
            Self::Rent => "RENT",
            Self::Utilities => "UTILITIES",
            Self::Salary => "SALARY",
            Self::Misc => "MISC",
            Self::Other => "OTHER",
        }
    }

    /// Comma-separated list of all names, for prompts
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = PennywiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                PennywiseError::validation(format!(
                    "Unknown category '{}' (expected one of {})",
                    wanted,
                    Self::names()
                ))
            })
    }
}
