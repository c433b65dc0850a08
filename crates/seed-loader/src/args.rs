//! Common CLI argument definitions shared by all seed targets.

use clap::Args;
use seed_fabricator::config::{
    DEFAULT_MAX_YUMS_PER_REVIEW, DEFAULT_RESTAURANT_COUNT, DEFAULT_REVIEWS_PER_RESTAURANT,
    DEFAULT_USER_COUNT,
};
use seed_fabricator::FabricatorConfig;

/// Arguments shared by every `populate` target.
#[derive(Args, Clone, Debug)]
pub struct CommonSeedArgs {
    /// Number of users to generate
    #[arg(long, default_value_t = DEFAULT_USER_COUNT)]
    pub users: usize,

    /// Number of restaurants to generate
    #[arg(long, default_value_t = DEFAULT_RESTAURANT_COUNT)]
    pub restaurants: usize,

    /// Reviews generated per restaurant
    #[arg(long, default_value_t = DEFAULT_REVIEWS_PER_RESTAURANT)]
    pub reviews_per_restaurant: usize,

    /// Exclusive upper bound of yums per review (must not exceed --users)
    #[arg(long, default_value_t = DEFAULT_MAX_YUMS_PER_REVIEW)]
    pub max_yums_per_review: usize,

    /// Random seed for the fabricator's choices (identifiers are always fresh)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fabricate and build the batch without committing it
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error when the commit fails instead of only logging it
    #[arg(long)]
    pub strict: bool,
}

impl CommonSeedArgs {
    pub fn fabricator_config(&self) -> FabricatorConfig {
        FabricatorConfig {
            users: self.users,
            restaurants: self.restaurants,
            reviews_per_restaurant: self.reviews_per_restaurant,
            max_yums_per_review: self.max_yums_per_review,
        }
    }
}
