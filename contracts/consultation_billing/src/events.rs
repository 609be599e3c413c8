use crate::types::{ChargeBreakdown, ConsultationSubmission};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

/// Event published when the tariff catalogue is loaded.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub type_count: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DraftOpenedEvent {
    pub draft_id: u64,
    pub owner: Address,
    pub consultation_type: Symbol,
    pub timestamp: u64,
}

/// Event published every time a draft's breakdown is recomputed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChargeUpdatedEvent {
    pub draft_id: u64,
    pub breakdown: ChargeBreakdown,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DraftDiscardedEvent {
    pub draft_id: u64,
    pub owner: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address, type_count: u32) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        type_count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_draft_opened(env: &Env, draft_id: u64, owner: Address, consultation_type: Symbol) {
    let topics = (symbol_short!("DRF_OPEN"), owner.clone());
    let data = DraftOpenedEvent {
        draft_id,
        owner,
        consultation_type,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_charge_updated(env: &Env, draft_id: u64, breakdown: ChargeBreakdown) {
    let topics = (symbol_short!("CHG_UPD"), draft_id);
    let data = ChargeUpdatedEvent {
        draft_id,
        breakdown,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes the submitted payload itself so off-chain consumers can forward
/// it to the consultation endpoint.
pub fn publish_draft_submitted(env: &Env, owner: Address, submission: ConsultationSubmission) {
    let topics = (symbol_short!("DRF_SUB"), owner);
    env.events().publish(topics, submission);
}

pub fn publish_draft_discarded(env: &Env, draft_id: u64, owner: Address) {
    let topics = (symbol_short!("DRF_DROP"), owner.clone());
    let data = DraftDiscardedEvent {
        draft_id,
        owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
