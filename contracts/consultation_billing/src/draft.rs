//! Draft storage.
//!
//! Drafts live in temporary storage: an abandoned form expires on its own
//! instead of accumulating rent. Only the id counter is kept in instance
//! storage.

use crate::errors::ContractError;
use crate::types::ConsultationDraft;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const DRAFT: Symbol = symbol_short!("DRAFT");
const DRAFT_CTR: Symbol = symbol_short!("DRF_CTR");

/// About one day of ledgers.
const DRAFT_TTL_THRESHOLD: u32 = 17_280;
/// About one week of ledgers.
const DRAFT_TTL_EXTEND_TO: u32 = 120_960;

fn key(id: u64) -> (Symbol, u64) {
    (DRAFT, id)
}

/// Allocates the next draft id, starting at 1.
pub fn next_id(env: &Env) -> u64 {
    let id = env
        .storage()
        .instance()
        .get::<Symbol, u64>(&DRAFT_CTR)
        .unwrap_or(0)
        .saturating_add(1);
    env.storage().instance().set(&DRAFT_CTR, &id);
    id
}

pub fn load(env: &Env, id: u64) -> Result<ConsultationDraft, ContractError> {
    env.storage()
        .temporary()
        .get(&key(id))
        .ok_or(ContractError::DraftNotFound)
}

/// Loads draft `id` and checks that `owner` holds it.
pub fn load_owned(
    env: &Env,
    owner: &Address,
    id: u64,
) -> Result<ConsultationDraft, ContractError> {
    let draft = load(env, id)?;
    if draft.owner != *owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(draft)
}

pub fn save(env: &Env, draft: &ConsultationDraft) {
    let key = key(draft.id);
    env.storage().temporary().set(&key, draft);
    env.storage()
        .temporary()
        .extend_ttl(&key, DRAFT_TTL_THRESHOLD, DRAFT_TTL_EXTEND_TO);
}

pub fn remove(env: &Env, id: u64) {
    env.storage().temporary().remove(&key(id));
}
