//! Storage keys and the profile store.

use soroban_sdk::{contracttype, Env, Vec};

use crate::profile::{NewProfile, Profile, ProfileUpdate};

/// Storage keys for the profile directory contract.
#[contracttype]
#[derive(Clone, Debug)]
pub enum ProfileKey {
    /// Next id to hand out. Only ever increases.
    NextId,

    /// Ids of all stored profiles, in insertion order.
    Index,

    /// Maps id to Profile struct.
    Profile(u64),
}

/// Time-to-live for profile data in ledger entries.
pub const PROFILE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2592000; // ~150 days

/// The authoritative collection of profiles.
///
/// Records live in persistent contract storage; this type only owns the
/// access rules. It performs no validation, so callers must check records
/// before handing them over. Everything it returns is a decoded copy.
pub struct ProfileStore<'a> {
    env: &'a Env,
}

impl<'a> ProfileStore<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    /// All profiles in insertion order.
    pub fn list_all(&self) -> Vec<Profile> {
        let mut profiles = Vec::new(self.env);
        for id in self.ids().iter() {
            if let Some(profile) = self.get_by_id(id) {
                profiles.push_back(profile);
            }
        }
        profiles
    }

    pub fn get_by_id(&self, id: u64) -> Option<Profile> {
        self.env
            .storage()
            .persistent()
            .get(&ProfileKey::Profile(id))
    }

    /// Number of stored profiles.
    pub fn len(&self) -> u32 {
        self.ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store a new profile under a freshly assigned id.
    pub fn insert(&self, data: NewProfile) -> Profile {
        let id = self.take_next_id();
        let profile = Profile::new(id, data);

        self.write(&profile);

        let mut ids = self.ids();
        ids.push_back(id);
        self.write_ids(&ids);

        profile
    }

    /// Merge `partial` into the stored profile, if there is one.
    pub fn update(&self, id: u64, partial: ProfileUpdate) -> Option<Profile> {
        let mut profile = self.get_by_id(id)?;
        profile.apply(partial);
        self.write(&profile);
        Some(profile)
    }

    /// Remove a profile. Returns whether anything was removed.
    pub fn delete(&self, id: u64) -> bool {
        let key = ProfileKey::Profile(id);
        if !self.env.storage().persistent().has(&key) {
            return false;
        }

        self.env.storage().persistent().remove(&key);

        let mut remaining = Vec::new(self.env);
        for existing in self.ids().iter() {
            if existing != id {
                remaining.push_back(existing);
            }
        }
        self.write_ids(&remaining);

        true
    }

    fn ids(&self) -> Vec<u64> {
        self.env
            .storage()
            .persistent()
            .get(&ProfileKey::Index)
            .unwrap_or_else(|| Vec::new(self.env))
    }

    fn take_next_id(&self) -> u64 {
        let id: u64 = self
            .env
            .storage()
            .instance()
            .get(&ProfileKey::NextId)
            .unwrap_or(1);
        self.env
            .storage()
            .instance()
            .set(&ProfileKey::NextId, &(id + 1));
        id
    }

    fn write(&self, profile: &Profile) {
        let key = ProfileKey::Profile(profile.id);
        self.env.storage().persistent().set(&key, profile);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
    }

    fn write_ids(&self, ids: &Vec<u64>) {
        self.env.storage().persistent().set(&ProfileKey::Index, ids);
        self.env.storage().persistent().extend_ttl(
            &ProfileKey::Index,
            PROFILE_TTL_THRESHOLD,
            PROFILE_TTL_EXTEND,
        );
    }
}
