//! The complete in-memory output of a fabrication run.

use crate::model::{Restaurant, Review, User, Yum};

/// All four entity collections, handed from the fabricator to the loader.
///
/// Nothing mutates a `Dataset` after fabrication; the loader only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub restaurants: Vec<Restaurant>,
    pub reviews: Vec<Review>,
    pub yums: Vec<Yum>,
}

impl Dataset {
    /// Total number of documents this dataset turns into.
    pub fn document_count(&self) -> usize {
        self.users.len() + self.restaurants.len() + self.reviews.len() + self.yums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document_count() == 0
    }

    /// Reviews referencing the given restaurant.
    pub fn reviews_for<'a>(&'a self, restaurant_id: &'a str) -> impl Iterator<Item = &'a Review> {
        self.reviews
            .iter()
            .filter(move |review| review.restaurant_id == restaurant_id)
    }

    /// Yums referencing the given review.
    pub fn yums_for<'a>(&'a self, review_id: &'a str) -> impl Iterator<Item = &'a Yum> {
        self.yums
            .iter()
            .filter(move |yum| yum.review_id == review_id)
    }
}
