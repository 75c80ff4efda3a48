use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::{CampaignId, CandidateId, PositionId};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub name: String,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct PositionCreatedEvent {
    pub campaign_id: CampaignId,
    pub position_id: PositionId,
    pub name: String,
}

#[contracttype]
#[derive(Clone)]
pub struct CandidateCreatedEvent {
    pub campaign_id: CampaignId,
    pub position_id: PositionId,
    pub candidate_id: CandidateId,
    pub name: String,
}

#[contracttype]
#[derive(Clone)]
pub struct VoteCastEvent {
    pub campaign_id: CampaignId,
    pub position_id: PositionId,
    pub candidate_id: CandidateId,
    pub voter: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignStatusChangedEvent {
    pub campaign_id: CampaignId,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone)]
pub struct AdminAddedEvent {
    pub identity: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct AdminRemovedEvent {
    pub identity: Address,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_position_created(env: &Env, event: PositionCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "position_created"),), event);
}

pub fn emit_candidate_created(env: &Env, event: CandidateCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "candidate_created"),), event);
}

pub fn emit_vote_cast(env: &Env, event: VoteCastEvent) {
    env.events().publish((Symbol::new(env, "vote_cast"),), event);
}

pub fn emit_campaign_status_changed(env: &Env, event: CampaignStatusChangedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_status_changed"),), event);
}

pub fn emit_admin_added(env: &Env, event: AdminAddedEvent) {
    env.events().publish((Symbol::new(env, "admin_added"),), event);
}

pub fn emit_admin_removed(env: &Env, event: AdminRemovedEvent) {
    env.events()
        .publish((Symbol::new(env, "admin_removed"),), event);
}
