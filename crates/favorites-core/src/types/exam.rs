//! Exam scopes. Each exam has its own independent favorites tree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The exam a favorites tree belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exam {
    /// Suomi toisena kielenä ja kirjallisuus.
    Suko,
    /// Lukiodiplomit.
    Ld,
    /// Puheviestintä.
    Puhvi,
}

impl Exam {
    /// All exams, in display order.
    pub const ALL: [Exam; 3] = [Exam::Suko, Exam::Ld, Exam::Puhvi];

    /// The wire code of the exam.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suko => "SUKO",
            Self::Ld => "LD",
            Self::Puhvi => "PUHVI",
        }
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exam {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUKO" => Ok(Self::Suko),
            "LD" => Ok(Self::Ld),
            "PUHVI" => Ok(Self::Puhvi),
            other => Err(format!("Unknown exam: {other}")),
        }
    }
}
