//! Team-size budget.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::pizza::TeamSize;
use crate::error::{Result, SearchError};

/// Number of available teams for each size bucket.
///
/// # Examples
///
/// ```
/// use pizza_meta::model::{TeamBudget, TeamSize};
///
/// let budget = TeamBudget::new(1, 2, 1);
/// assert_eq!(budget.get(TeamSize::Three), 2);
/// assert_eq!(budget.total(), 4);
///
/// assert!(TeamBudget::try_from_counts(&[1, -1, 0]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TeamBudget {
    counts: [usize; 3],
}

impl TeamBudget {
    pub fn new(two: usize, three: usize, four: usize) -> Self {
        Self {
            counts: [two, three, four],
        }
    }

    /// Builds a budget from raw counts for sizes 2, 3 and 4, in that order.
    pub fn try_from_counts(counts: &[i64]) -> Result<Self> {
        if counts.len() != 3 {
            return Err(SearchError::BudgetLength(counts.len()));
        }
        let mut out = [0usize; 3];
        for (bucket, &count) in counts.iter().enumerate() {
            out[bucket] = usize::try_from(count).map_err(|_| SearchError::NegativeBudget {
                size: bucket + 2,
                count,
            })?;
        }
        Ok(Self { counts: out })
    }

    pub fn get(&self, size: TeamSize) -> usize {
        self.counts[size.bucket()]
    }

    pub fn counts(&self) -> [usize; 3] {
        self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Maximum number of pizzas the budget can absorb.
    pub fn capacity(&self) -> usize {
        TeamSize::ALL
            .iter()
            .map(|&s| self.get(s) * s.members())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_counts() {
        let budget = TeamBudget::try_from_counts(&[1, 2, 3]).unwrap();
        assert_eq!(budget.counts(), [1, 2, 3]);
        assert_eq!(budget.capacity(), 2 + 6 + 12);
    }

    #[test]
    fn test_missing_bucket() {
        assert_eq!(
            TeamBudget::try_from_counts(&[1, 2]),
            Err(SearchError::BudgetLength(2))
        );
    }

    #[test]
    fn test_negative_bucket() {
        assert_eq!(
            TeamBudget::try_from_counts(&[0, 0, -2]),
            Err(SearchError::NegativeBudget { size: 4, count: -2 })
        );
    }
}
