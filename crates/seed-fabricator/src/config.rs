//! Fabrication parameters.

use crate::fabricator::FabricatorError;

pub const DEFAULT_USER_COUNT: usize = 20;
pub const DEFAULT_RESTAURANT_COUNT: usize = 20;
pub const DEFAULT_REVIEWS_PER_RESTAURANT: usize = 20;
pub const DEFAULT_MAX_YUMS_PER_REVIEW: usize = 20;

/// How much data one fabrication run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FabricatorConfig {
    /// Number of users (N)
    pub users: usize,
    /// Number of restaurants (M)
    pub restaurants: usize,
    /// Reviews generated for every restaurant (K)
    pub reviews_per_restaurant: usize,
    /// Exclusive upper bound of yums per review (L). Must not exceed `users`.
    pub max_yums_per_review: usize,
}

impl Default for FabricatorConfig {
    fn default() -> Self {
        Self {
            users: DEFAULT_USER_COUNT,
            restaurants: DEFAULT_RESTAURANT_COUNT,
            reviews_per_restaurant: DEFAULT_REVIEWS_PER_RESTAURANT,
            max_yums_per_review: DEFAULT_MAX_YUMS_PER_REVIEW,
        }
    }
}

impl FabricatorConfig {
    /// Check the invariants generation relies on.
    ///
    /// Yum authors are taken positionally from the user list, so a review can
    /// never be given more yums than there are users.
    pub fn validate(&self) -> Result<(), FabricatorError> {
        if self.max_yums_per_review > self.users {
            return Err(FabricatorError::Config(format!(
                "max yums per review ({}) exceeds user count ({})",
                self.max_yums_per_review, self.users
            )));
        }
        if self.users == 0 && self.restaurants > 0 {
            return Err(FabricatorError::Config(
                "at least one user is required to own restaurants and author reviews"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Number of reviews a run produces.
    pub fn review_count(&self) -> usize {
        self.restaurants * self.reviews_per_restaurant
    }
}
