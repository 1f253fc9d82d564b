use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
	CapacityExceeded { max: usize },
}

impl fmt::Display for SimError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SimError::CapacityExceeded { max } => {
				write!(f, "particle capacity exceeded (max {})", max)
			}
		}
	}
}

impl std::error::Error for SimError {}
