//! Coverage and co-pay computation.
//!
//! Rules are evaluated in a fixed order and the first one that applies wins,
//! since the flags are not mutually exclusive:
//!
//! 1. free consultation: the whole base amount is covered;
//! 2. third-party payer with a positive percentage: the base amount is split
//!    at that percentage, rounded half-up to whole units;
//! 3. otherwise the patient owes the whole base amount.
//!
//! Inputs are not validated here. The percentage is clamped to 0–100 and the
//! split is exact for every `i128`, so every input produces a breakdown.

use crate::types::{ChargeBreakdown, ConsultationCharge};
use mutuelle_common::split_amount;

pub fn recompute(charge: &ConsultationCharge) -> ChargeBreakdown {
    if charge.is_free {
        return ChargeBreakdown {
            amount_covered: charge.base_amount,
            amount_due_by_patient: 0,
        };
    }

    if charge.is_third_party_payer && charge.coverage_percentage > 0 {
        let (amount_covered, amount_due_by_patient) =
            split_amount(charge.base_amount, charge.coverage_percentage);
        return ChargeBreakdown {
            amount_covered,
            amount_due_by_patient,
        };
    }

    ChargeBreakdown {
        amount_covered: 0,
        amount_due_by_patient: charge.base_amount,
    }
}
