//! # Soroban Profile Directory
//!
//! A searchable people directory stored on the Soroban blockchain.
//!
//! Each profile carries a name, photo, description, address, map
//! coordinates, and optional contact details and interest tags. The
//! contract supports:
//!
//! - Listing and fetching profiles
//! - Case-insensitive search by name, location and interests
//! - Creating, partially updating and deleting profiles
//! - Seeding an empty directory with sample profiles (`sample-data` feature)
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Create a profile
//! let profile = client.create_profile(&new_profile);
//!
//! // Find everyone in San Francisco who likes hiking
//! let filters = SearchFilters {
//!     name: None,
//!     location: Some(String::from_str(&env, "san francisco")),
//!     interests: Some(vec![&env, String::from_str(&env, "hiking")]),
//! };
//! let matches = client.search_profiles(&filters);
//!
//! // Partial update: only the provided fields change
//! client.update_profile(&profile.id, &update);
//! ```

#![no_std]

mod events;
mod fields;
mod profile;
mod query;
mod storage;
mod text;
mod validation;

#[cfg(feature = "sample-data")]
mod seed;

#[cfg(test)]
mod test_support;

pub use fields::{
    ContactField, ContactInfo, ContactUpdate, Coordinates, CoordinatesUpdate, COORDINATE_SCALE,
    MAX_LATITUDE, MAX_LONGITUDE,
};
pub use profile::{NewProfile, Profile, ProfileUpdate};
pub use query::{ProfileQueryService, SearchFilters};
pub use storage::{ProfileKey, ProfileStore};
pub use validation::{
    validate_new_profile, validate_profile, MAX_ADDRESS_LENGTH, MAX_CONTACT_LENGTH,
    MAX_DESCRIPTION_LENGTH, MAX_INTERESTS, MAX_INTEREST_LENGTH, MAX_NAME_LENGTH,
    MAX_PHOTO_LENGTH,
};

use soroban_sdk::{contract, contracterror, contractimpl, Env, Vec};

/// Error codes for the profile directory contract.
///
/// "Not found" is never an error: lookups return `None` or `false`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DirectoryError {
    /// Name is empty or whitespace.
    EmptyName = 1,
    /// Photo URL is empty or whitespace.
    EmptyPhoto = 2,
    /// Description is empty or whitespace.
    EmptyDescription = 3,
    /// Address is empty or whitespace.
    EmptyAddress = 4,
    /// Latitude is outside [-90°, 90°].
    LatitudeOutOfRange = 5,
    /// Longitude is outside [-180°, 180°].
    LongitudeOutOfRange = 6,
    /// Email address is malformed.
    InvalidEmail = 7,
    /// Phone or website was provided but is blank.
    EmptyContactField = 8,
    /// An interest tag is blank.
    EmptyInterest = 9,
    /// The same interest tag appears twice.
    DuplicateInterest = 10,
    /// Too many interest tags.
    TooManyInterests = 11,
    /// A text field exceeds its length limit.
    TextTooLong = 12,
    /// A search term is too long to evaluate.
    SearchTermTooLong = 13,
    /// A text field or search term is not valid UTF-8.
    InvalidText = 14,
}

#[contract]
pub struct ProfileDirectoryContract;

#[contractimpl]
impl ProfileDirectoryContract {
    // ========== Queries ==========

    /// List every profile in insertion order.
    pub fn list_profiles(env: Env) -> Vec<Profile> {
        Self::service(&env).list()
    }

    /// Get a profile by id.
    pub fn get_profile(env: Env, id: u64) -> Option<Profile> {
        Self::service(&env).get(id)
    }

    /// Search profiles by name, location and interests.
    ///
    /// Supplied criteria are combined with AND; blank criteria are ignored.
    /// With no criteria at all, every profile is returned.
    pub fn search_profiles(env: Env, filters: SearchFilters) -> Result<Vec<Profile>, DirectoryError> {
        Self::service(&env).search(&filters)
    }

    /// Get total profile count.
    pub fn profile_count(env: Env) -> u32 {
        Self::service(&env).count()
    }

    // ========== Mutations ==========

    /// Create a new profile.
    ///
    /// # Returns
    /// The stored profile, including its newly assigned id.
    ///
    /// # Errors
    /// Any [`DirectoryError`] validation code; nothing is stored in that case.
    pub fn create_profile(env: Env, data: NewProfile) -> Result<Profile, DirectoryError> {
        Self::service(&env).add(data)
    }

    /// Apply a partial update to a profile.
    ///
    /// Returns `None` if no profile has this id.
    pub fn update_profile(
        env: Env,
        id: u64,
        data: ProfileUpdate,
    ) -> Result<Option<Profile>, DirectoryError> {
        Self::service(&env).edit(id, data)
    }

    /// Delete a profile. Returns `false` if no profile has this id.
    pub fn delete_profile(env: Env, id: u64) -> bool {
        Self::service(&env).remove(id)
    }

    // ========== Internal Helpers ==========

    fn service(env: &Env) -> ProfileQueryService<'_> {
        ProfileQueryService::new(env, ProfileStore::new(env))
    }
}

// ========== Sample Data ==========

#[cfg(feature = "sample-data")]
#[contractimpl]
impl ProfileDirectoryContract {
    /// Populate an empty directory with the sample profiles.
    ///
    /// Does nothing if the directory already has profiles.
    ///
    /// # Returns
    /// The number of profiles added.
    pub fn seed_sample_profiles(env: Env) -> Result<u32, DirectoryError> {
        let service = Self::service(&env);
        if service.count() > 0 {
            return Ok(0);
        }

        let samples = seed::sample_profiles(&env);
        for sample in samples.iter() {
            service.add(sample)?;
        }
        Ok(samples.len())
    }
}
