use rand::Rng;

use crate::model::{
    constants::{DEFAULT_MAX_RATING, DEFAULT_MIN_RATING, MAX_DOMAIN_WIDTH},
    error::RegistryError
};

/// The closed interval `[min, max]` of legal ratings.
///
/// Every rating written to the registry is saturated into this interval, and
/// the width of the interval fixes the size of the bucket distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingDomain {
    min: i32,
    max: i32
}

impl Default for RatingDomain {
    fn default() -> Self {
        RatingDomain {
            min: DEFAULT_MIN_RATING,
            max: DEFAULT_MAX_RATING
        }
    }
}

impl RatingDomain {
    pub fn new(min: i32, max: i32) -> Result<RatingDomain, RegistryError> {
        if min > max {
            return Err(RegistryError::InvalidDomain { min, max });
        }

        let domain = RatingDomain { min, max };
        if domain.len() > MAX_DOMAIN_WIDTH {
            return Err(RegistryError::DomainTooWide {
                min,
                max,
                limit: MAX_DOMAIN_WIDTH
            });
        }

        Ok(domain)
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Saturates any rating to the nearest bound. Out-of-range values are never rejected.
    pub fn clamp(&self, rating: i64) -> i32 {
        // Both bounds fit in i32, so the clamped value does too.
        rating.clamp(self.min as i64, self.max as i64) as i32
    }

    pub fn contains(&self, rating: i32) -> bool {
        (self.min..=self.max).contains(&rating)
    }

    /// Number of distinct ratings, i.e. the number of buckets.
    pub fn len(&self) -> usize {
        (self.max as i64 - self.min as i64 + 1) as usize
    }

    /// Offset of `rating` in the bucket distribution. `rating` must be inside the domain.
    pub fn index_of(&self, rating: i32) -> usize {
        debug_assert!(self.contains(rating), "rating {} outside of domain", rating);
        (rating as i64 - self.min as i64) as usize
    }

    /// Uniform draw over the whole domain.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.random_range(self.min..=self.max)
    }
}
