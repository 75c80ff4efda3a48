#![no_std]

mod access;
mod events;
mod ledger;
mod storage_types;
mod structure;


use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};

use events::{
    AdminAddedEvent, AdminRemovedEvent, CampaignCreatedEvent, CampaignStatusChangedEvent,
    CandidateCreatedEvent, PositionCreatedEvent, VoteCastEvent,
};
use storage_types::{
    extend_instance, Campaign, CampaignId, Candidate, CandidateId, DataKey, Position, PositionId,
    VoteError,
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    /// Bind the contract to its owner. The owner is permanently an admin and
    /// can never be removed from the admin set.
    pub fn initialize(env: Env, owner: Address) {
        if env.storage().instance().has(&DataKey::Owner) {
            panic_with_error!(&env, VoteError::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::CampaignCount, &0u32);
        access::write_admin(&env, &owner, true);
        extend_instance(&env);
    }

    pub fn owner(env: Env) -> Address {
        access::read_owner(&env)
    }

    /// Grant the admin role. Owner only; granting an existing admin again is
    /// a no-op that still succeeds.
    pub fn add_admin(env: Env, caller: Address, identity: Address) {
        caller.require_auth();
        access::require_owner(&env, &caller);

        access::write_admin(&env, &identity, true);
        events::emit_admin_added(&env, AdminAddedEvent { identity });
    }

    /// Revoke the admin role. Owner only; the owner itself cannot be revoked.
    pub fn remove_admin(env: Env, caller: Address, identity: Address) {
        caller.require_auth();
        access::require_owner(&env, &caller);
        if identity == access::read_owner(&env) {
            panic_with_error!(&env, VoteError::CannotRemoveOwner);
        }

        access::write_admin(&env, &identity, false);
        events::emit_admin_removed(&env, AdminRemovedEvent { identity });
    }

    pub fn is_admin(env: Env, identity: Address) -> bool {
        access::is_admin(&env, &identity)
    }

    /// Create a campaign with a `[start_time, end_time]` voting window.
    /// Campaigns start out active.
    pub fn create_campaign(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        start_time: u64,
        end_time: u64,
    ) -> CampaignId {
        caller.require_auth();
        access::require_admin(&env, &caller);

        let campaign_id =
            structure::create_campaign(&env, name.clone(), description, start_time, end_time);
        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                campaign_id,
                name,
                start_time,
                end_time,
            },
        );

        campaign_id
    }

    /// Toggle the activity flag. The time window is not re-validated here:
    /// the flag and the window are independent gates on voting.
    pub fn set_campaign_status(env: Env, caller: Address, campaign_id: CampaignId, is_active: bool) {
        caller.require_auth();
        access::require_admin(&env, &caller);

        let mut campaign = structure::get_campaign(&env, campaign_id);
        campaign.is_active = is_active;
        structure::save_campaign(&env, &campaign);

        events::emit_campaign_status_changed(
            &env,
            CampaignStatusChangedEvent {
                campaign_id,
                is_active,
            },
        );
    }

    pub fn add_position(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        name: String,
        description: String,
    ) -> PositionId {
        caller.require_auth();
        access::require_admin(&env, &caller);

        let position_id = structure::add_position(&env, campaign_id, name.clone(), description);
        events::emit_position_created(
            &env,
            PositionCreatedEvent {
                campaign_id,
                position_id,
                name,
            },
        );

        position_id
    }

    pub fn add_candidate(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        position_id: PositionId,
        name: String,
        description: String,
    ) -> CandidateId {
        caller.require_auth();
        access::require_admin(&env, &caller);

        let candidate_id =
            structure::add_candidate(&env, campaign_id, position_id, name.clone(), description);
        events::emit_candidate_created(
            &env,
            CandidateCreatedEvent {
                campaign_id,
                position_id,
                candidate_id,
                name,
            },
        );

        candidate_id
    }

    /// Record a vote. Any authenticated address may vote, once per campaign;
    /// no role is required.
    pub fn cast_vote(
        env: Env,
        voter: Address,
        campaign_id: CampaignId,
        position_id: PositionId,
        candidate_id: CandidateId,
    ) {
        voter.require_auth();

        ledger::cast_vote(&env, &voter, campaign_id, position_id, candidate_id);
        events::emit_vote_cast(
            &env,
            VoteCastEvent {
                campaign_id,
                position_id,
                candidate_id,
                voter,
            },
        );
    }

    // View functions
    pub fn get_campaign_count(env: Env) -> u32 {
        structure::read_campaign_count(&env)
    }

    pub fn get_campaign_details(env: Env, campaign_id: CampaignId) -> Campaign {
        structure::get_campaign(&env, campaign_id)
    }

    pub fn get_position_details(
        env: Env,
        campaign_id: CampaignId,
        position_id: PositionId,
    ) -> Position {
        structure::get_position(&env, campaign_id, position_id)
    }

    pub fn get_candidate_details(
        env: Env,
        campaign_id: CampaignId,
        position_id: PositionId,
        candidate_id: CandidateId,
    ) -> Candidate {
        structure::get_candidate(&env, campaign_id, position_id, candidate_id)
    }

    pub fn has_voted(env: Env, campaign_id: CampaignId, identity: Address) -> bool {
        ledger::has_voted(&env, campaign_id, &identity)
    }

    pub fn campaign_ids(env: Env, index: u32) -> CampaignId {
        structure::campaign_id_at(&env, index)
    }
}
