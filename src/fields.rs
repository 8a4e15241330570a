//! Nested value types carried by a profile.

use soroban_sdk::{contracttype, String};

/// Number of fixed-point units per degree.
///
/// The contract environment has no floating point, so coordinates are
/// stored as millionths of a degree (`37.7749` becomes `37_774_900`).
pub const COORDINATE_SCALE: i64 = 1_000_000;

/// Largest valid latitude, in fixed-point units.
pub const MAX_LATITUDE: i64 = 90 * COORDINATE_SCALE;

/// Largest valid longitude, in fixed-point units.
pub const MAX_LONGITUDE: i64 = 180 * COORDINATE_SCALE;

/// Map position of a profile.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coordinates {
    /// Latitude in millionths of a degree, within [-90°, 90°].
    pub lat: i64,

    /// Longitude in millionths of a degree, within [-180°, 180°].
    pub lng: i64,
}

impl Coordinates {
    /// Create coordinates from fixed-point values.
    pub fn new(lat: i64, lng: i64) -> Self {
        Self { lat, lng }
    }

    /// Create coordinates from whole degrees.
    pub fn from_degrees(lat: i64, lng: i64) -> Self {
        Self {
            lat: lat * COORDINATE_SCALE,
            lng: lng * COORDINATE_SCALE,
        }
    }

    /// Check that the latitude lies within [-90°, 90°].
    pub fn has_valid_latitude(&self) -> bool {
        (-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.lat)
    }

    /// Check that the longitude lies within [-180°, 180°].
    pub fn has_valid_longitude(&self) -> bool {
        (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.lng)
    }
}

/// Optional ways to reach the person behind a profile.
///
/// Every field is independently optional. An absent field and the absent
/// `ContactInfo` as a whole are distinct states.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl ContactInfo {
    /// Contact info with no fields set.
    pub fn empty() -> Self {
        Self {
            email: None,
            phone: None,
            website: None,
        }
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_phone(mut self, phone: String) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_website(mut self, website: String) -> Self {
        self.website = Some(website);
        self
    }
}

/// Contact details of a stored profile: either absent or present.
///
/// `Present(ContactInfo::empty())` and `Absent` are distinct states.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContactField {
    Absent,
    Present(ContactInfo),
}

impl ContactField {
    pub fn as_info(&self) -> Option<&ContactInfo> {
        match self {
            ContactField::Present(info) => Some(info),
            ContactField::Absent => None,
        }
    }
}

impl From<ContactInfo> for ContactField {
    fn from(info: ContactInfo) -> Self {
        ContactField::Present(info)
    }
}

/// How an update treats the stored coordinates.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CoordinatesUpdate {
    /// Leave the coordinates as they are.
    Keep,

    /// Move the marker.
    Replace(Coordinates),
}

/// How an update treats the stored contact details.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContactUpdate {
    /// Leave the contact details as they are.
    Keep,

    /// Remove the contact details entirely.
    Clear,

    /// Replace the contact details wholesale. Sub-fields are not merged.
    Replace(ContactInfo),
}
