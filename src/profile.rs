//! Profile struct and related input types.

use soroban_sdk::{contracttype, String, Vec};

use crate::fields::{ContactField, ContactUpdate, Coordinates, CoordinatesUpdate};

/// A person listed in the directory.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Store-assigned identifier. Never reused, even after deletion.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Photo URL, opaque to the contract.
    pub photo: String,

    /// Free-form description.
    pub description: String,

    /// Human-readable postal address. Matched by location searches.
    pub address: String,

    /// Map marker position, supplied by the caller.
    pub coordinates: Coordinates,

    /// Optional email, phone and website.
    pub contact_info: ContactField,

    /// Ordered, de-duplicated interest tags.
    pub interests: Option<Vec<String>>,
}

/// Profile data submitted on creation. The id is assigned by the store.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewProfile {
    pub name: String,
    pub photo: String,
    pub description: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub contact_info: ContactField,
    pub interests: Option<Vec<String>>,
}

/// Partial profile update.
///
/// Every provided field replaces the stored value wholesale, nested
/// structures included. Omitted fields keep their prior value.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub coordinates: CoordinatesUpdate,
    pub contact_info: ContactUpdate,
    pub interests: Option<Vec<String>>,
}

impl Profile {
    /// Create a stored profile from submitted data.
    pub fn new(id: u64, data: NewProfile) -> Self {
        Self {
            id,
            name: data.name,
            photo: data.photo,
            description: data.description,
            address: data.address,
            coordinates: data.coordinates,
            contact_info: data.contact_info,
            interests: data.interests,
        }
    }

    /// Shallow-merge an update into this profile.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(photo) = update.photo {
            self.photo = photo;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let CoordinatesUpdate::Replace(coordinates) = update.coordinates {
            self.coordinates = coordinates;
        }
        match update.contact_info {
            ContactUpdate::Keep => {}
            ContactUpdate::Clear => self.contact_info = ContactField::Absent,
            ContactUpdate::Replace(info) => self.contact_info = ContactField::Present(info),
        }
        if update.interests.is_some() {
            self.interests = update.interests;
        }
    }

    /// Return a copy of this profile with an update applied.
    pub fn merged(&self, update: ProfileUpdate) -> Self {
        let mut profile = self.clone();
        profile.apply(update);
        profile
    }
}

impl ProfileUpdate {
    /// An update that changes nothing.
    pub fn empty() -> Self {
        Self {
            name: None,
            photo: None,
            description: None,
            address: None,
            coordinates: CoordinatesUpdate::Keep,
            contact_info: ContactUpdate::Keep,
            interests: None,
        }
    }

    /// Check whether the update carries no fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.photo.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.coordinates == CoordinatesUpdate::Keep
            && self.contact_info == ContactUpdate::Keep
            && self.interests.is_none()
    }
}
