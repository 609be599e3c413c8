#![no_std]
//! Consultation billing: coverage and co-pay for the consultation form.
//!
//! [`calculator::recompute`] is the single source of truth for the amounts.
//! The draft workflow keeps the form's editable fields, rejects invalid input
//! at that boundary, and replaces the derived amounts wholesale after every
//! edit.

pub mod calculator;
pub mod draft;
pub mod errors;
pub mod events;
pub mod types;


use mutuelle_common::FULL_COVERAGE;
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String, Symbol, Vec};

pub use errors::{ContractError, ErrorCategory};
pub use types::{
    ChargeBreakdown, ConsultationCharge, ConsultationDraft, ConsultationSubmission,
    ConsultationType,
};

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const CATALOGUE: Symbol = symbol_short!("CATALOG");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn load_catalogue(env: &Env) -> Result<Vec<ConsultationType>, ContractError> {
    env.storage()
        .instance()
        .get(&CATALOGUE)
        .ok_or(ContractError::NotInitialized)
}

fn find_type(env: &Env, code: &Symbol) -> Result<ConsultationType, ContractError> {
    load_catalogue(env)?
        .iter()
        .find(|entry| entry.code == *code)
        .ok_or(ContractError::UnknownConsultationType)
}

/// Applies `edit` to the owner's draft, recomputes its breakdown and stores
/// it. Nothing is written when `edit` fails.
fn apply_edit<F>(
    env: &Env,
    owner: Address,
    id: u64,
    edit: F,
) -> Result<ChargeBreakdown, ContractError>
where
    F: FnOnce(&mut ConsultationDraft) -> Result<(), ContractError>,
{
    owner.require_auth();

    let mut draft = draft::load_owned(env, &owner, id)?;
    edit(&mut draft)?;

    draft.breakdown = calculator::recompute(&draft.charge);
    draft.updated_at = env.ledger().timestamp();
    draft::save(env, &draft);

    events::publish_charge_updated(env, id, draft.breakdown.clone());
    Ok(draft.breakdown)
}

#[contract]
pub struct ConsultationBillingContract;

#[contractimpl]
impl ConsultationBillingContract {
    /// Load the tariff catalogue. May only be called once.
    ///
    /// Codes must be unique and tariffs non-negative.
    pub fn initialize(
        env: Env,
        admin: Address,
        catalogue: Vec<ConsultationType>,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&ADMIN) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        let mut seen: Vec<Symbol> = Vec::new(&env);
        for entry in catalogue.iter() {
            if entry.tariff < 0 {
                log!(&env, "negative tariff", entry.code, entry.tariff);
                return Err(ContractError::InvalidAmount);
            }
            if seen.contains(&entry.code) {
                return Err(ContractError::DuplicateConsultationType);
            }
            seen.push_back(entry.code);
        }

        env.storage().instance().set(&CATALOGUE, &catalogue);
        env.storage().instance().set(&ADMIN, &admin);
        extend_ttl_instance(&env);

        events::publish_initialized(&env, admin, catalogue.len());

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&ADMIN)
    }

    /// Covered and patient-due amounts for `charge`. Never fails.
    pub fn recompute(_env: Env, charge: ConsultationCharge) -> ChargeBreakdown {
        calculator::recompute(&charge)
    }

    pub fn catalogue(env: Env) -> Vec<ConsultationType> {
        load_catalogue(&env).unwrap_or(Vec::new(&env))
    }

    pub fn tariff(env: Env, code: Symbol) -> Result<ConsultationType, ContractError> {
        find_type(&env, &code)
    }

    /// Open a draft for `owner`. The charge starts at the type's tariff with
    /// no exemption, no third-party payer and 0 % coverage.
    pub fn open_draft(
        env: Env,
        owner: Address,
        patient_ref: String,
        provider_ref: String,
        consultation_type: Symbol,
    ) -> Result<u64, ContractError> {
        owner.require_auth();

        if patient_ref.is_empty() || provider_ref.is_empty() {
            return Err(ContractError::MissingReference);
        }
        let selected = find_type(&env, &consultation_type)?;

        let charge = ConsultationCharge::at_tariff(selected.tariff);
        let now = env.ledger().timestamp();
        let draft = ConsultationDraft {
            id: draft::next_id(&env),
            owner: owner.clone(),
            patient_ref,
            provider_ref,
            consultation_type: consultation_type.clone(),
            breakdown: calculator::recompute(&charge),
            charge,
            opened_at: now,
            updated_at: now,
        };
        draft::save(&env, &draft);
        extend_ttl_instance(&env);

        events::publish_draft_opened(&env, draft.id, owner, consultation_type);
        Ok(draft.id)
    }

    /// Select another consultation type; the base amount is reset to its
    /// tariff, discarding any override.
    pub fn set_consultation_type(
        env: Env,
        owner: Address,
        draft_id: u64,
        consultation_type: Symbol,
    ) -> Result<ChargeBreakdown, ContractError> {
        let selected = find_type(&env, &consultation_type)?;
        apply_edit(&env, owner, draft_id, |draft| {
            draft.consultation_type = consultation_type;
            draft.charge.base_amount = selected.tariff;
            Ok(())
        })
    }

    /// Override the base amount. Negative amounts are rejected.
    pub fn set_base_amount(
        env: Env,
        owner: Address,
        draft_id: u64,
        base_amount: i128,
    ) -> Result<ChargeBreakdown, ContractError> {
        apply_edit(&env, owner, draft_id, |draft| {
            if base_amount < 0 {
                return Err(ContractError::InvalidAmount);
            }
            draft.charge.base_amount = base_amount;
            Ok(())
        })
    }

    pub fn set_free(
        env: Env,
        owner: Address,
        draft_id: u64,
        is_free: bool,
    ) -> Result<ChargeBreakdown, ContractError> {
        apply_edit(&env, owner, draft_id, |draft| {
            draft.charge.is_free = is_free;
            Ok(())
        })
    }

    pub fn set_third_party_payer(
        env: Env,
        owner: Address,
        draft_id: u64,
        is_third_party_payer: bool,
    ) -> Result<ChargeBreakdown, ContractError> {
        apply_edit(&env, owner, draft_id, |draft| {
            draft.charge.is_third_party_payer = is_third_party_payer;
            Ok(())
        })
    }

    /// Set the insurer's share. Values above 100 are rejected.
    pub fn set_coverage_percentage(
        env: Env,
        owner: Address,
        draft_id: u64,
        coverage_percentage: u32,
    ) -> Result<ChargeBreakdown, ContractError> {
        apply_edit(&env, owner, draft_id, |draft| {
            if coverage_percentage > FULL_COVERAGE {
                return Err(ContractError::InvalidPercentage);
            }
            draft.charge.coverage_percentage = coverage_percentage;
            Ok(())
        })
    }

    pub fn get_draft(env: Env, draft_id: u64) -> Result<ConsultationDraft, ContractError> {
        draft::load(&env, draft_id)
    }

    /// Hand the draft over for creation and remove it.
    ///
    /// The breakdown is recomputed once more so the payload never carries
    /// stale amounts.
    pub fn submit_draft(
        env: Env,
        owner: Address,
        draft_id: u64,
    ) -> Result<ConsultationSubmission, ContractError> {
        owner.require_auth();

        let draft = draft::load_owned(&env, &owner, draft_id)?;
        let submission = ConsultationSubmission {
            draft_id,
            patient_ref: draft.patient_ref,
            provider_ref: draft.provider_ref,
            consultation_type: draft.consultation_type,
            breakdown: calculator::recompute(&draft.charge),
            charge: draft.charge,
            submitted_at: env.ledger().timestamp(),
        };
        draft::remove(&env, draft_id);

        log!(&env, "consultation submitted", draft_id);
        events::publish_draft_submitted(&env, owner, submission.clone());
        Ok(submission)
    }

    pub fn discard_draft(env: Env, owner: Address, draft_id: u64) -> Result<(), ContractError> {
        owner.require_auth();

        draft::load_owned(&env, &owner, draft_id)?;
        draft::remove(&env, draft_id);

        events::publish_draft_discarded(&env, draft_id, owner);
        Ok(())
    }
}
