//! Event emission helpers for the profile directory contract.

use soroban_sdk::{Env, Symbol};

/// Emit an event when a profile is created.
pub fn emit_profile_created(env: &Env, id: u64) {
    let topics = (Symbol::new(env, "profile_created"),);
    env.events().publish(topics, id);
}

/// Emit an event when a profile is updated.
pub fn emit_profile_updated(env: &Env, id: u64) {
    let topics = (Symbol::new(env, "profile_updated"),);
    env.events().publish(topics, id);
}

/// Emit an event when a profile is deleted.
pub fn emit_profile_deleted(env: &Env, id: u64) {
    let topics = (Symbol::new(env, "profile_deleted"),);
    env.events().publish(topics, id);
}
