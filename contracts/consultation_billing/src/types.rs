use soroban_sdk::{contracttype, Address, String, Symbol};

/// The money side of one consultation. Amounts are whole currency units.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsultationCharge {
    /// Tariff of the selected consultation type, or a user override.
    pub base_amount: i128,
    /// A free consultation is fully covered and nothing is due by the patient.
    pub is_free: bool,
    /// Whether an insurer pays part of the cost directly (tiers payant).
    pub is_third_party_payer: bool,
    /// Share of `base_amount` covered by the insurer, 0–100.
    pub coverage_percentage: u32,
}

impl ConsultationCharge {
    /// A charge at `tariff` with no exemption and no third-party payer.
    pub fn at_tariff(tariff: i128) -> Self {
        Self {
            base_amount: tariff,
            is_free: false,
            is_third_party_payer: false,
            coverage_percentage: 0,
        }
    }
}

/// Amounts derived from a [`ConsultationCharge`]; always recomputed, never
/// edited directly.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChargeBreakdown {
    pub amount_covered: i128,
    pub amount_due_by_patient: i128,
}

/// Tariff catalogue entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsultationType {
    pub code: Symbol,
    pub label: String,
    pub tariff: i128,
}

/// An in-progress consultation held in temporary storage until it is
/// submitted or discarded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsultationDraft {
    pub id: u64,
    pub owner: Address,
    pub patient_ref: String,
    pub provider_ref: String,
    pub consultation_type: Symbol,
    pub charge: ConsultationCharge,
    pub breakdown: ChargeBreakdown,
    pub opened_at: u64,
    pub updated_at: u64,
}

/// Payload handed to the backend's consultation-creation endpoint.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsultationSubmission {
    pub draft_id: u64,
    pub patient_ref: String,
    pub provider_ref: String,
    pub consultation_type: Symbol,
    pub charge: ConsultationCharge,
    pub breakdown: ChargeBreakdown,
    pub submitted_at: u64,
}
