use soroban_sdk::{contracterror, contracttype, Address, Env, String, Vec};

pub type CampaignId = u32;
pub type PositionId = u32;
pub type CandidateId = u32;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    CampaignCount,
    CampaignIds,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Admin(Address),
    Campaign(CampaignId),
    Position(CampaignId, PositionId),
    Candidate(CampaignId, PositionId, CandidateId),
    Voted(CampaignId, Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VoteError {
    Unauthorized       = 1,
    NotFound           = 2,
    InvalidTimeWindow  = 3,
    CannotRemoveOwner  = 4,
    CampaignInactive   = 5,
    CampaignNotStarted = 6,
    CampaignEnded      = 7,
    AlreadyVoted       = 8,
    AlreadyInitialized = 9,
}

/// A time-boxed election. Only `is_active` and `voter_count` change after
/// creation; `position_ids` is append-only.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub start_time: u64,
    pub end_time: u64,
    pub is_active: bool,
    pub voter_count: u32,
    pub position_ids: Vec<PositionId>,
}

/// A contested role within a campaign. `candidate_ids` is append-only.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Position {
    pub id: PositionId,
    pub campaign_id: CampaignId,
    pub name: String,
    pub description: String,
    pub candidate_ids: Vec<CandidateId>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Candidate {
    pub id: CandidateId,
    pub campaign_id: CampaignId,
    pub position_id: PositionId,
    pub name: String,
    pub description: String,
    pub vote_count: u32,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
