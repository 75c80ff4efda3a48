use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage_types::{extend_persistent, DataKey, PersistentKey, VoteError};

pub fn read_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn is_admin(env: &Env, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&PersistentKey::Admin(identity.clone()))
        .unwrap_or(false)
}

/// Grant or revoke the admin flag. Revocation removes the entry entirely so
/// absent and revoked identities are indistinguishable.
pub fn write_admin(env: &Env, identity: &Address, authorized: bool) {
    let key = PersistentKey::Admin(identity.clone());
    if authorized {
        env.storage().persistent().set(&key, &true);
        extend_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn require_owner(env: &Env, caller: &Address) {
    if *caller != read_owner(env) {
        panic_with_error!(env, VoteError::Unauthorized);
    }
}

pub fn require_admin(env: &Env, caller: &Address) {
    if !is_admin(env, caller) {
        panic_with_error!(env, VoteError::Unauthorized);
    }
}
