//! Shared fixtures for unit tests.

use soroban_sdk::{Env, String, Vec};

use crate::fields::{ContactField, Coordinates};
use crate::profile::NewProfile;
use crate::ProfileDirectoryContract;

/// Build valid profile data with the given name, address and interests.
pub fn new_profile(env: &Env, name: &str, address: &str, interests: &[&str]) -> NewProfile {
    let interests = if interests.is_empty() {
        None
    } else {
        let mut tags = Vec::new(env);
        for tag in interests {
            tags.push_back(String::from_str(env, tag));
        }
        Some(tags)
    };

    NewProfile {
        name: String::from_str(env, name),
        photo: String::from_str(env, "https://randomuser.me/api/portraits/lego/1.jpg"),
        description: String::from_str(env, "Directory member"),
        address: String::from_str(env, address),
        coordinates: Coordinates::new(37_774_900, -122_419_400),
        contact_info: ContactField::Absent,
        interests,
    }
}

/// Run `f` inside a freshly registered contract, so storage is available
/// and isolated from every other test.
pub fn with_contract<R>(f: impl FnOnce(&Env) -> R) -> R {
    let env = Env::default();
    let contract_id = env.register(ProfileDirectoryContract, ());
    env.as_contract(&contract_id, || f(&env))
}
