use soroban_sdk::{panic_with_error, Env, String, Vec};

use crate::storage_types::{
    extend_instance, extend_persistent, Campaign, CampaignId, Candidate, CandidateId, DataKey,
    PersistentKey, Position, PositionId, VoteError,
};

pub fn read_campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn read_campaign_ids(env: &Env) -> Vec<CampaignId> {
    env.storage()
        .instance()
        .get(&DataKey::CampaignIds)
        .unwrap_or_else(|| Vec::new(env))
}

/// Campaign id at `index` in creation order.
pub fn campaign_id_at(env: &Env, index: u32) -> CampaignId {
    read_campaign_ids(env)
        .get(index)
        .unwrap_or_else(|| panic_with_error!(env, VoteError::NotFound))
}

pub fn get_campaign(env: &Env, campaign_id: CampaignId) -> Campaign {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .unwrap_or_else(|| panic_with_error!(env, VoteError::NotFound))
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn get_position(env: &Env, campaign_id: CampaignId, position_id: PositionId) -> Position {
    env.storage()
        .persistent()
        .get(&PersistentKey::Position(campaign_id, position_id))
        .unwrap_or_else(|| panic_with_error!(env, VoteError::NotFound))
}

pub fn save_position(env: &Env, position: &Position) {
    let key = PersistentKey::Position(position.campaign_id, position.id);
    env.storage().persistent().set(&key, position);
    extend_persistent(env, &key);
}

/// Resolve a candidate through its full `(campaign, position, candidate)`
/// chain. The storage key encodes the nesting, so a hit implies the parent
/// position and campaign exist and a mismatched chain misses.
pub fn get_candidate(
    env: &Env,
    campaign_id: CampaignId,
    position_id: PositionId,
    candidate_id: CandidateId,
) -> Candidate {
    env.storage()
        .persistent()
        .get(&PersistentKey::Candidate(campaign_id, position_id, candidate_id))
        .unwrap_or_else(|| panic_with_error!(env, VoteError::NotFound))
}

pub fn save_candidate(env: &Env, candidate: &Candidate) {
    let key = PersistentKey::Candidate(
        candidate.campaign_id,
        candidate.position_id,
        candidate.id,
    );
    env.storage().persistent().set(&key, candidate);
    extend_persistent(env, &key);
}

/// Create a campaign and assign the next sequential id (1-based, never
/// reused). Whether the window lies in the past or future is not checked,
/// only that it is non-empty.
pub fn create_campaign(
    env: &Env,
    name: String,
    description: String,
    start_time: u64,
    end_time: u64,
) -> CampaignId {
    if end_time <= start_time {
        panic_with_error!(env, VoteError::InvalidTimeWindow);
    }

    let campaign_id = read_campaign_count(env) + 1;
    let campaign = Campaign {
        id: campaign_id,
        name,
        description,
        start_time,
        end_time,
        is_active: true,
        voter_count: 0,
        position_ids: Vec::new(env),
    };
    save_campaign(env, &campaign);

    let mut ids = read_campaign_ids(env);
    ids.push_back(campaign_id);
    env.storage().instance().set(&DataKey::CampaignIds, &ids);
    env.storage().instance().set(&DataKey::CampaignCount, &campaign_id);
    extend_instance(env);

    campaign_id
}

/// Append a position to an existing campaign. Position ids are sequential
/// within their campaign.
pub fn add_position(
    env: &Env,
    campaign_id: CampaignId,
    name: String,
    description: String,
) -> PositionId {
    let mut campaign = get_campaign(env, campaign_id);

    let position_id = campaign.position_ids.len() + 1;
    let position = Position {
        id: position_id,
        campaign_id,
        name,
        description,
        candidate_ids: Vec::new(env),
    };
    save_position(env, &position);

    campaign.position_ids.push_back(position_id);
    save_campaign(env, &campaign);

    position_id
}

/// Append a candidate to an existing position. Candidate ids are sequential
/// within their position.
pub fn add_candidate(
    env: &Env,
    campaign_id: CampaignId,
    position_id: PositionId,
    name: String,
    description: String,
) -> CandidateId {
    let mut position = get_position(env, campaign_id, position_id);

    let candidate_id = position.candidate_ids.len() + 1;
    let candidate = Candidate {
        id: candidate_id,
        campaign_id,
        position_id,
        name,
        description,
        vote_count: 0,
    };
    save_candidate(env, &candidate);

    position.candidate_ids.push_back(candidate_id);
    save_position(env, &position);

    candidate_id
}
