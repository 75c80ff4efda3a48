use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage_types::{
    extend_persistent, CampaignId, CandidateId, PersistentKey, PositionId, VoteError,
};
use crate::structure;

pub fn has_voted(env: &Env, campaign_id: CampaignId, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&PersistentKey::Voted(campaign_id, identity.clone()))
        .unwrap_or(false)
}

/// The central state transition. Checks run in a fixed order (existence,
/// active flag, time window, prior vote) and all of them precede the first
/// write; a rejected vote writes nothing.
///
/// Participation is keyed per campaign, not per position: one accepted vote
/// consumes the voter's ballot for the whole campaign.
pub fn cast_vote(
    env: &Env,
    voter: &Address,
    campaign_id: CampaignId,
    position_id: PositionId,
    candidate_id: CandidateId,
) {
    let mut candidate = structure::get_candidate(env, campaign_id, position_id, candidate_id);
    let mut campaign = structure::get_campaign(env, campaign_id);

    if !campaign.is_active {
        panic_with_error!(env, VoteError::CampaignInactive);
    }

    let now = env.ledger().timestamp();
    if now < campaign.start_time {
        panic_with_error!(env, VoteError::CampaignNotStarted);
    }
    if now > campaign.end_time {
        panic_with_error!(env, VoteError::CampaignEnded);
    }

    if has_voted(env, campaign_id, voter) {
        panic_with_error!(env, VoteError::AlreadyVoted);
    }

    let voted_key = PersistentKey::Voted(campaign_id, voter.clone());
    env.storage().persistent().set(&voted_key, &true);
    extend_persistent(env, &voted_key);

    candidate.vote_count += 1;
    structure::save_candidate(env, &candidate);

    campaign.voter_count += 1;
    structure::save_campaign(env, &campaign);
}
