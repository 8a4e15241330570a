//! Profile validation logic.
//!
//! Every record must pass [`validate_profile`] before it reaches the store:
//! - name, photo, description and address are non-blank and bounded
//! - coordinates lie within [-90°, 90°] latitude and [-180°, 180°] longitude
//! - email, when present, looks like `local@domain.tld`
//! - interests, when present, are non-blank, bounded and unique

use soroban_sdk::{String, Vec};

use crate::fields::{ContactField, ContactInfo, Coordinates};
use crate::profile::{NewProfile, Profile};
use crate::text::{self, MAX_TEXT_BYTES};
use crate::DirectoryError;

/// Maximum name length in bytes.
pub const MAX_NAME_LENGTH: u32 = 100;

/// Maximum photo URL length in bytes.
pub const MAX_PHOTO_LENGTH: u32 = 512;

/// Maximum description length in bytes.
pub const MAX_DESCRIPTION_LENGTH: u32 = 2000;

/// Maximum address length in bytes.
pub const MAX_ADDRESS_LENGTH: u32 = 256;

/// Maximum length of each contact field in bytes.
pub const MAX_CONTACT_LENGTH: u32 = 256;

/// Maximum length of a single interest tag in bytes.
pub const MAX_INTEREST_LENGTH: u32 = 64;

/// Maximum number of interest tags per profile.
pub const MAX_INTERESTS: u32 = 32;

// Text is inspected through a fixed stack buffer.
const _: () = assert!(MAX_DESCRIPTION_LENGTH as usize <= MAX_TEXT_BYTES);

/// Validate submitted data for a new profile.
pub fn validate_new_profile(data: &NewProfile) -> Result<(), DirectoryError> {
    validate_fields(
        &data.name,
        &data.photo,
        &data.description,
        &data.address,
        &data.coordinates,
        &data.contact_info,
        &data.interests,
    )
}

/// Validate a complete profile, typically the result of merging an update.
pub fn validate_profile(profile: &Profile) -> Result<(), DirectoryError> {
    validate_fields(
        &profile.name,
        &profile.photo,
        &profile.description,
        &profile.address,
        &profile.coordinates,
        &profile.contact_info,
        &profile.interests,
    )
}

fn validate_fields(
    name: &String,
    photo: &String,
    description: &String,
    address: &String,
    coordinates: &Coordinates,
    contact_info: &ContactField,
    interests: &Option<Vec<String>>,
) -> Result<(), DirectoryError> {
    validate_required(name, MAX_NAME_LENGTH, DirectoryError::EmptyName)?;
    validate_required(photo, MAX_PHOTO_LENGTH, DirectoryError::EmptyPhoto)?;
    validate_required(
        description,
        MAX_DESCRIPTION_LENGTH,
        DirectoryError::EmptyDescription,
    )?;
    validate_required(address, MAX_ADDRESS_LENGTH, DirectoryError::EmptyAddress)?;
    validate_coordinates(coordinates)?;

    if let Some(contact) = contact_info.as_info() {
        validate_contact_info(contact)?;
    }
    if let Some(tags) = interests {
        validate_interests(tags)?;
    }

    Ok(())
}

/// Check that coordinates lie within the valid latitude and longitude ranges.
pub fn validate_coordinates(coordinates: &Coordinates) -> Result<(), DirectoryError> {
    if !coordinates.has_valid_latitude() {
        return Err(DirectoryError::LatitudeOutOfRange);
    }
    if !coordinates.has_valid_longitude() {
        return Err(DirectoryError::LongitudeOutOfRange);
    }
    Ok(())
}

/// Check the optional contact fields.
pub fn validate_contact_info(contact: &ContactInfo) -> Result<(), DirectoryError> {
    if let Some(email) = &contact.email {
        check_length(email, MAX_CONTACT_LENGTH)?;
        let mut buf = [0u8; MAX_TEXT_BYTES];
        match text::read(email, &mut buf) {
            Some(email) if text::is_email(email) => {}
            _ => return Err(DirectoryError::InvalidEmail),
        }
    }
    if let Some(phone) = &contact.phone {
        validate_required(phone, MAX_CONTACT_LENGTH, DirectoryError::EmptyContactField)?;
    }
    if let Some(website) = &contact.website {
        validate_required(website, MAX_CONTACT_LENGTH, DirectoryError::EmptyContactField)?;
    }
    Ok(())
}

/// Check interest tags: bounded count, non-blank, no duplicates.
///
/// Duplicates are detected by exact, case-sensitive comparison.
pub fn validate_interests(tags: &Vec<String>) -> Result<(), DirectoryError> {
    if tags.len() > MAX_INTERESTS {
        return Err(DirectoryError::TooManyInterests);
    }

    for (i, tag) in tags.iter().enumerate() {
        validate_required(&tag, MAX_INTEREST_LENGTH, DirectoryError::EmptyInterest)?;

        if tags.iter().take(i).any(|earlier| earlier == tag) {
            return Err(DirectoryError::DuplicateInterest);
        }
    }

    Ok(())
}

fn validate_required(value: &String, max_len: u32, empty: DirectoryError) -> Result<(), DirectoryError> {
    check_length(value, max_len)?;
    if text::is_blank(value) {
        return Err(empty);
    }
    Ok(())
}

fn check_length(value: &String, max_len: u32) -> Result<(), DirectoryError> {
    if value.len() > max_len {
        return Err(DirectoryError::TextTooLong);
    }
    let mut buf = [0u8; MAX_TEXT_BYTES];
    if text::read(value, &mut buf).is_none() {
        return Err(DirectoryError::InvalidText);
    }
    Ok(())
}
