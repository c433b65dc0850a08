//! Builds a consistent in-memory [`Dataset`].

use crate::config::FabricatorConfig;
use crate::pools;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{new_id, Dataset, InvalidRating, Rating, Restaurant, Review, User, Yum};
use tracing::{debug, info};

/// Error type for fabrication.
#[derive(Debug, thiserror::Error)]
pub enum FabricatorError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A rating outside 1..=5 was drawn
    #[error(transparent)]
    InvalidRating(#[from] InvalidRating),
}

/// Generates users, restaurants, reviews and yums.
///
/// Randomness comes from the injected RNG; identifiers and timestamps do
/// not, so every run produces fresh identifiers regardless of the seed.
pub struct Fabricator<R = StdRng> {
    config: FabricatorConfig,
    rng: R,
    photos: Vec<String>,
}

impl Fabricator<StdRng> {
    /// Create a fabricator whose random choices are reproducible for `seed`.
    pub fn with_seed(config: FabricatorConfig, seed: u64) -> Result<Self, FabricatorError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Create a fabricator seeded from the operating system.
    pub fn from_entropy(config: FabricatorConfig) -> Result<Self, FabricatorError> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Fabricator<R> {
    /// Create a fabricator with the given random source.
    ///
    /// Fails immediately if the configuration is invalid.
    pub fn new(config: FabricatorConfig, rng: R) -> Result<Self, FabricatorError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            photos: pools::photos(),
        })
    }

    /// Run all generation stages and return the finished dataset.
    pub fn generate(&mut self) -> Result<Dataset, FabricatorError> {
        let users = self.generate_users();
        debug!("Generated {} users", users.len());

        let mut restaurants = self.generate_restaurants(&users);
        debug!("Generated {} restaurants", restaurants.len());

        let mut reviews = self.generate_reviews(&users, &mut restaurants)?;
        debug!("Generated {} reviews", reviews.len());

        let yums = self.generate_yums(&users, &mut reviews);
        debug!("Generated {} yums", yums.len());

        info!(
            "Fabricated {} users, {} restaurants, {} reviews, {} yums",
            users.len(),
            restaurants.len(),
            reviews.len(),
            yums.len()
        );

        Ok(Dataset {
            users,
            restaurants,
            reviews,
            yums,
        })
    }

    fn generate_users(&self) -> Vec<User> {
        (0..self.config.users).map(|_| User::new()).collect()
    }

    fn generate_restaurants(&mut self, users: &[User]) -> Vec<Restaurant> {
        (0..self.config.restaurants)
            .map(|_| Restaurant {
                restaurant_id: new_id(),
                owner_id: pools::pick(users, &mut self.rng).user_id.clone(),
                name: pools::pick(pools::NAMES, &mut self.rng).to_string(),
                category: pools::pick(pools::CATEGORIES, &mut self.rng).to_string(),
                city: pools::pick(pools::CITIES, &mut self.rng).to_string(),
                price: *pools::pick(pools::PRICES, &mut self.rng),
                review_count: 0,
                average_rating: 0.0,
                photo: pools::pick(&self.photos, &mut self.rng).clone(),
            })
            .collect()
    }

    /// Generate reviews restaurant by restaurant, folding each rating into
    /// its restaurant's aggregate as soon as the review exists.
    fn generate_reviews(
        &mut self,
        users: &[User],
        restaurants: &mut [Restaurant],
    ) -> Result<Vec<Review>, FabricatorError> {
        let mut reviews = Vec::with_capacity(self.config.review_count());

        for restaurant in restaurants.iter_mut() {
            for _ in 0..self.config.reviews_per_restaurant {
                let rating = Rating::try_from(self.rng.gen_range(1..=5i64))?;
                let author = pools::pick(users, &mut self.rng).clone();

                reviews.push(Review {
                    review_id: new_id(),
                    restaurant_id: restaurant.restaurant_id.clone(),
                    rating,
                    author,
                    text: rating.comment().to_string(),
                    date: Utc::now(),
                    yum_count: 0,
                });
                restaurant.record_rating(rating);
            }
        }

        Ok(reviews)
    }

    /// The i-th yum on a review is authored by the i-th user, so no user
    /// yums the same review twice.
    fn generate_yums(&mut self, users: &[User], reviews: &mut [Review]) -> Vec<Yum> {
        let mut yums = Vec::new();

        for review in reviews.iter_mut() {
            let count = if self.config.max_yums_per_review == 0 {
                0
            } else {
                self.rng.gen_range(0..self.config.max_yums_per_review)
            };

            for user in &users[..count] {
                yums.push(Yum {
                    user_id: user.user_id.clone(),
                    review_id: review.review_id.clone(),
                });
                review.yum_count += 1;
            }
        }

        yums
    }
}
