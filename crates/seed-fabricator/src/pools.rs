//! Fixed candidate pools for restaurant attributes.

use rand::Rng;

pub const NAMES: &[&str] = &[
    "Best Bar",
    "Fire Grill",
    "Drive Thru Place",
    "Prime Spot",
    "Eatin' Corner",
    "Golden Fork",
    "Blue Door Kitchen",
    "The Rusty Spoon",
    "Happy Noodle",
    "Little Saigon",
    "Casa Verde",
    "Smokehouse 42",
];

pub const CATEGORIES: &[&str] = &[
    "Brunch",
    "Burgers",
    "Coffee",
    "Deli",
    "Dim Sum",
    "Indian",
    "Italian",
    "Mediterranean",
    "Mexican",
    "Pizza",
    "Ramen",
    "Sushi",
];

pub const CITIES: &[&str] = &[
    "Albuquerque",
    "Atlanta",
    "Austin",
    "Boston",
    "Chicago",
    "Denver",
    "Houston",
    "Las Vegas",
    "Los Angeles",
    "Miami",
    "New York",
    "Oakland",
    "Philadelphia",
    "Portland",
    "San Diego",
    "San Francisco",
    "Seattle",
];

/// Price tiers, `$` through `$$$`.
pub const PRICES: &[u32] = &[1, 2, 3];

const PHOTO_COUNT: u32 = 22;

/// Photo references served from the demo's storage bucket.
pub fn photos() -> Vec<String> {
    (1..=PHOTO_COUNT)
        .map(|n| {
            format!("https://storage.googleapis.com/firestorequickstarts.appspot.com/food_{n}.png")
        })
        .collect()
}

/// Uniform choice from a pool. Pools must not be empty.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(pool: &'a [T], rng: &mut R) -> &'a T {
    let idx = rng.gen_range(0..pool.len());
    &pool[idx]
}
