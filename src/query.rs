//! Search filters and the query service in front of the profile store.

use soroban_sdk::{contracttype, log, Env, String, Vec};

use crate::events::{emit_profile_created, emit_profile_deleted, emit_profile_updated};
use crate::profile::{NewProfile, Profile, ProfileUpdate};
use crate::storage::ProfileStore;
use crate::text::{self, MAX_TEXT_BYTES};
use crate::validation::{validate_new_profile, validate_profile};
use crate::DirectoryError;

/// Search criteria. Each one is optional; supplied ones must all match.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchFilters {
    /// Case-insensitive substring of the profile name.
    pub name: Option<String>,

    /// Case-insensitive substring of the profile address.
    pub location: Option<String>,

    /// Matches when any profile interest contains any of these tags.
    pub interests: Option<Vec<String>>,
}

impl SearchFilters {
    /// Filters with no criteria, matching every profile.
    pub fn none() -> Self {
        Self {
            name: None,
            location: None,
            interests: None,
        }
    }
}

/// Normalized criteria: trimmed, with blank entries dropped.
struct Criteria {
    name: Option<String>,
    location: Option<String>,
    interests: Vec<String>,
}

impl Criteria {
    fn from_filters(env: &Env, filters: &SearchFilters) -> Result<Self, DirectoryError> {
        let name = match &filters.name {
            Some(name) => search_term(env, name)?,
            None => None,
        };
        let location = match &filters.location {
            Some(location) => search_term(env, location)?,
            None => None,
        };

        let mut interests = Vec::new(env);
        if let Some(tags) = &filters.interests {
            for tag in tags.iter() {
                if let Some(tag) = search_term(env, &tag)? {
                    interests.push_back(tag);
                }
            }
        }

        Ok(Self {
            name,
            location,
            interests,
        })
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.interests.is_empty()
    }

    fn matches(&self, profile: &Profile) -> bool {
        if let Some(name) = &self.name {
            if !text::string_contains_ignore_case(&profile.name, name) {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !text::string_contains_ignore_case(&profile.address, location) {
                return false;
            }
        }

        if !self.interests.is_empty() {
            let Some(own) = &profile.interests else {
                return false;
            };
            let any_match = own.iter().any(|interest| {
                let mut buf = [0u8; MAX_TEXT_BYTES];
                match text::read(&interest, &mut buf) {
                    Some(interest) => self
                        .interests
                        .iter()
                        .any(|tag| contains_tag(interest, &tag)),
                    None => false,
                }
            });
            if !any_match {
                return false;
            }
        }

        true
    }
}

fn contains_tag(interest: &str, tag: &String) -> bool {
    let mut buf = [0u8; MAX_TEXT_BYTES];
    match text::read(tag, &mut buf) {
        Some(tag) => text::str_contains_ignore_case(interest, tag),
        None => false,
    }
}

fn search_term(env: &Env, term: &String) -> Result<Option<String>, DirectoryError> {
    if term.len() as usize > MAX_TEXT_BYTES {
        return Err(DirectoryError::SearchTermTooLong);
    }
    text::trimmed(env, term).map_err(|_| DirectoryError::InvalidText)
}

/// Client-facing operations over a [`ProfileStore`].
///
/// Queries filter a snapshot of the store. Mutations are validated here
/// before they are handed to the store, so invalid data never lands.
pub struct ProfileQueryService<'a> {
    env: &'a Env,
    store: ProfileStore<'a>,
}

impl<'a> ProfileQueryService<'a> {
    pub fn new(env: &'a Env, store: ProfileStore<'a>) -> Self {
        Self { env, store }
    }

    pub fn list(&self) -> Vec<Profile> {
        self.store.list_all()
    }

    pub fn get(&self, id: u64) -> Option<Profile> {
        self.store.get_by_id(id)
    }

    pub fn count(&self) -> u32 {
        self.store.len()
    }

    /// Profiles matching every supplied criterion, in insertion order.
    ///
    /// Filters without any non-blank criterion return the full listing.
    pub fn search(&self, filters: &SearchFilters) -> Result<Vec<Profile>, DirectoryError> {
        let criteria = Criteria::from_filters(self.env, filters)?;
        let profiles = self.store.list_all();
        if criteria.is_empty() {
            return Ok(profiles);
        }

        let mut matched = Vec::new(self.env);
        for profile in profiles.iter() {
            if criteria.matches(&profile) {
                matched.push_back(profile);
            }
        }

        log!(self.env, "search matched", matched.len(), profiles.len());
        Ok(matched)
    }

    /// Validate and store a new profile.
    pub fn add(&self, data: NewProfile) -> Result<Profile, DirectoryError> {
        if let Err(e) = validate_new_profile(&data) {
            log!(self.env, "rejected new profile", e as u32);
            return Err(e);
        }

        let profile = self.store.insert(data);
        log!(self.env, "created profile", profile.id);
        emit_profile_created(self.env, profile.id);
        Ok(profile)
    }

    /// Merge a partial update into an existing profile.
    ///
    /// The merged record is validated before anything is written. An empty
    /// update writes nothing. Returns `Ok(None)` when no profile has this id.
    pub fn edit(&self, id: u64, partial: ProfileUpdate) -> Result<Option<Profile>, DirectoryError> {
        let Some(current) = self.store.get_by_id(id) else {
            return Ok(None);
        };
        if partial.is_empty() {
            return Ok(Some(current));
        }

        if let Err(e) = validate_profile(&current.merged(partial.clone())) {
            log!(self.env, "rejected profile update", id, e as u32);
            return Err(e);
        }

        let updated = self.store.update(id, partial);
        if updated.is_some() {
            emit_profile_updated(self.env, id);
        }
        Ok(updated)
    }

    /// Delete a profile. Returns whether it existed.
    pub fn remove(&self, id: u64) -> bool {
        let removed = self.store.delete(id);
        if removed {
            emit_profile_deleted(self.env, id);
        }
        removed
    }
}
