use soroban_sdk::{Address, Env};

use crate::campaign::Campaign;
use crate::storage_types::{CrowdfundingError, DataKey, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD};

// --- Campaign ---

pub fn get_campaign(env: &Env) -> Result<Campaign, CrowdfundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn set_campaign(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    extend_instance_ttl(env);
}

// --- Token ---

pub fn get_token(env: &Env) -> Result<Address, CrowdfundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    extend_instance_ttl(env);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
