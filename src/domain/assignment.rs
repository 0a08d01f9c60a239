//! Problem assignment. The trailing digit of a registration number picks the question.

use std::fmt;

/// Problem statement for even registration numbers (Question 2).
pub const EVEN_PROBLEM_URL: &str =
    "https://drive.google.com/file/d/1P_O1ZvmDqAZJv77XRY_sV_ben11W_p2HV_b/view?usp=sharing";

/// Problem statement for odd registration numbers (Question 1).
pub const ODD_PROBLEM_URL: &str =
    "https://drive.google.com/file/d/1q8F8g0EpyNzd5BWk-voe5CKbsxoskJWY/view?usp=sharing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemAssignment {
    Even,
    Odd,
    Unknown,
}

impl ProblemAssignment {
    pub fn label(self) -> &'static str {
        match self {
            ProblemAssignment::Even => "Even",
            ProblemAssignment::Odd => "Odd",
            ProblemAssignment::Unknown => "Unknown",
        }
    }

    pub fn question(self) -> Option<&'static str> {
        match self {
            ProblemAssignment::Even => Some("Question 2"),
            ProblemAssignment::Odd => Some("Question 1"),
            ProblemAssignment::Unknown => None,
        }
    }

    /// Link to the problem statement. `Unknown` has none.
    pub fn reference_link(self) -> Option<&'static str> {
        match self {
            ProblemAssignment::Even => Some(EVEN_PROBLEM_URL),
            ProblemAssignment::Odd => Some(ODD_PROBLEM_URL),
            ProblemAssignment::Unknown => None,
        }
    }
}

impl fmt::Display for ProblemAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.question() {
            Some(q) => write!(f, "{} ({})", self.label(), q),
            None => f.write_str(self.label()),
        }
    }
}

/// Derive the assignment from the last character of `registration_number`.
/// Only ASCII digits count; anything else (including an empty string) is `Unknown`.
pub fn assignment_for(registration_number: &str) -> ProblemAssignment {
    match registration_number
        .chars()
        .next_back()
        .and_then(|c| c.to_digit(10))
    {
        Some(d) if d % 2 == 0 => ProblemAssignment::Even,
        Some(_) => ProblemAssignment::Odd,
        None => ProblemAssignment::Unknown,
    }
}
