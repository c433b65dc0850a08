//! Entities of the restaurant-review domain.

use crate::values::{Document, ToDocument};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Collection holding [`User`] documents.
pub const USERS_COLLECTION: &str = "users";
/// Collection holding [`Restaurant`] documents.
pub const RESTAURANTS_COLLECTION: &str = "restaurants";
/// Collection holding [`Review`] documents.
pub const REVIEWS_COLLECTION: &str = "reviews";
/// Collection holding [`Yum`] documents.
pub const YUMS_COLLECTION: &str = "yums";

/// Generate a fresh, never reused identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Error returned when an integer outside `1..=5` is used as a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid rating {0}: expected a value between 1 and 5")]
pub struct InvalidRating(pub i64);

/// A star rating between one and five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rating {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Canned review text for this rating tier.
    pub fn comment(self) -> &'static str {
        match self {
            Rating::Five => "Amazing!!",
            Rating::Four => "Tasty…",
            Rating::Three => "Food was good but…",
            Rating::Two => "The ketchup was too spicy",
            Rating::One => "There is a bug in my soup",
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = InvalidRating;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::One),
            2 => Ok(Rating::Two),
            3 => Ok(Rating::Three),
            4 => Ok(Rating::Four),
            5 => Ok(Rating::Five),
            other => Err(InvalidRating(other)),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub user_id: String,
}

impl User {
    pub fn new() -> Self {
        Self { user_id: new_id() }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

impl ToDocument for User {
    fn to_document(&self) -> Document {
        Document::new().with("userID", self.user_id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub restaurant_id: String,
    pub owner_id: String,
    pub name: String,
    pub category: String,
    pub city: String,
    pub price: u32,
    pub review_count: u32,
    pub average_rating: f64,
    pub photo: String,
}

impl Restaurant {
    /// Fold one more rating into the running aggregate.
    ///
    /// `average_rating` and `review_count` stay consistent with the ratings
    /// recorded so far.
    pub fn record_rating(&mut self, rating: Rating) {
        let count = self.review_count as f64;
        self.average_rating =
            (self.average_rating * count + rating.value() as f64) / (count + 1.0);
        self.review_count += 1;
    }
}

impl ToDocument for Restaurant {
    fn to_document(&self) -> Document {
        Document::new()
            .with("restaurantID", self.restaurant_id.as_str())
            .with("ownerID", self.owner_id.as_str())
            .with("name", self.name.as_str())
            .with("category", self.category.as_str())
            .with("city", self.city.as_str())
            .with("price", self.price)
            .with("reviewCount", self.review_count)
            .with("averageRating", self.average_rating)
            .with("photo", self.photo.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: String,
    pub restaurant_id: String,
    pub rating: Rating,
    pub author: User,
    pub text: String,
    pub date: DateTime<Utc>,
    pub yum_count: u32,
}

impl ToDocument for Review {
    fn to_document(&self) -> Document {
        Document::new()
            .with("reviewID", self.review_id.as_str())
            .with("restaurantID", self.restaurant_id.as_str())
            .with("rating", i64::from(self.rating.value()))
            .with("userInfo", self.author.to_document())
            .with("text", self.text.as_str())
            .with("date", self.date)
            .with("yumCount", self.yum_count)
    }
}

/// A user's endorsement of a review. Unique per (user, review).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Yum {
    pub user_id: String,
    pub review_id: String,
}

impl ToDocument for Yum {
    fn to_document(&self) -> Document {
        Document::new()
            .with("userID", self.user_id.as_str())
            .with("reviewID", self.review_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant() -> Restaurant {
        Restaurant {
            restaurant_id: new_id(),
            owner_id: new_id(),
            name: "Best Grill".to_string(),
            category: "Burgers".to_string(),
            city: "Austin".to_string(),
            price: 2,
            review_count: 0,
            average_rating: 0.0,
            photo: "food_1.png".to_string(),
        }
    }

    #[test]
    fn test_rating_from_valid_values() {
        for value in 1..=5i64 {
            let rating = Rating::try_from(value).unwrap();
            assert_eq!(i64::from(rating.value()), value);
        }
    }

    #[test]
    fn test_rating_rejects_out_of_range() {
        assert_eq!(Rating::try_from(0), Err(InvalidRating(0)));
        assert_eq!(Rating::try_from(6), Err(InvalidRating(6)));
        assert_eq!(Rating::try_from(-3), Err(InvalidRating(-3)));
    }

    #[test]
    fn test_comment_table() {
        assert_eq!(Rating::Five.comment(), "Amazing!!");
        assert_eq!(Rating::Four.comment(), "Tasty…");
        assert_eq!(Rating::Three.comment(), "Food was good but…");
        assert_eq!(Rating::Two.comment(), "The ketchup was too spicy");
        assert_eq!(Rating::One.comment(), "There is a bug in my soup");
    }

    #[test]
    fn test_record_rating_keeps_running_average() {
        let mut r = restaurant();
        r.record_rating(Rating::Five);
        assert_eq!(r.review_count, 1);
        assert_eq!(r.average_rating, 5.0);

        r.record_rating(Rating::One);
        assert_eq!(r.review_count, 2);
        assert_eq!(r.average_rating, 3.0);

        r.record_rating(Rating::Three);
        assert_eq!(r.review_count, 3);
        assert!((r.average_rating - 3.0).abs() < 1e-9);

        r.record_rating(Rating::Four);
        assert!((r.average_rating - 3.25).abs() < 1e-9);
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = User::new();
        let b = User::new();
        assert_ne!(a.user_id, b.user_id);
    }

    #[test]
    fn test_review_document_fields() {
        let author = User::new();
        let review = Review {
            review_id: new_id(),
            restaurant_id: "r1".to_string(),
            rating: Rating::Four,
            author: author.clone(),
            text: Rating::Four.comment().to_string(),
            date: Utc::now(),
            yum_count: 7,
        };

        let doc = review.to_document();
        assert_eq!(doc.get_str("reviewID"), Some(review.review_id.as_str()));
        assert_eq!(doc.get_str("restaurantID"), Some("r1"));
        assert_eq!(doc.get_i64("rating"), Some(4));
        assert_eq!(doc.get_str("text"), Some("Tasty…"));
        assert_eq!(doc.get_i64("yumCount"), Some(7));
        assert!(doc.get("date").and_then(|d| d.as_datetime()).is_some());
        assert_eq!(
            doc.get_document("userInfo")
                .and_then(|u| u.get_str("userID")),
            Some(author.user_id.as_str())
        );
    }

    #[test]
    fn test_restaurant_document_fields() {
        let r = restaurant();
        let doc = r.to_document();
        assert_eq!(doc.get_str("restaurantID"), Some(r.restaurant_id.as_str()));
        assert_eq!(doc.get_str("ownerID"), Some(r.owner_id.as_str()));
        assert_eq!(doc.get_i64("price"), Some(2));
        assert_eq!(doc.get_i64("reviewCount"), Some(0));
        assert_eq!(doc.get_f64("averageRating"), Some(0.0));
        assert_eq!(doc.len(), 9);
    }

    #[test]
    fn test_user_and_yum_documents() {
        let user = User::new();
        assert_eq!(
            user.to_document().get_str("userID"),
            Some(user.user_id.as_str())
        );

        let yum = Yum {
            user_id: "u1".to_string(),
            review_id: "rv1".to_string(),
        };
        let doc = yum.to_document();
        assert_eq!(doc.get_str("userID"), Some("u1"));
        assert_eq!(doc.get_str("reviewID"), Some("rv1"));
    }
}
