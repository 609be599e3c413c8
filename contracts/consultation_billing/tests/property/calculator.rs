#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the coverage calculator.
//!
//! Invariants tested:
//! - A free consultation is fully covered whatever the other fields hold
//! - With a third-party payer and a positive percentage, the split is the
//!   rounded percentage and the two parts add up to the base amount
//! - Without a third-party payer the patient owes the whole base amount
//! - A zero percentage falls through to the patient
//! - Out-of-range percentages never cover more than the base amount
//! - The calculator is deterministic and agrees with the contract entry point

use crate::fixtures::{setup, ChargeInput};
use consultation_billing::calculator::recompute;
use consultation_billing::ConsultationCharge;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_free_consultation_fully_covered(input in any::<ChargeInput>()) {
        let charge = ConsultationCharge { is_free: true, ..input.charge() };
        let breakdown = recompute(&charge);

        prop_assert_eq!(breakdown.amount_covered, charge.base_amount);
        prop_assert_eq!(breakdown.amount_due_by_patient, 0);
    }

    #[test]
    fn prop_coverage_split(
        base_amount in 0i128..=10_000_000,
        pct in 1u32..=100,
    ) {
        let charge = ConsultationCharge {
            base_amount,
            is_free: false,
            is_third_party_payer: true,
            coverage_percentage: pct,
        };
        let breakdown = recompute(&charge);

        let expected = (base_amount * i128::from(pct) + 50) / 100;
        prop_assert_eq!(breakdown.amount_covered, expected);
        prop_assert_eq!(
            breakdown.amount_covered + breakdown.amount_due_by_patient,
            base_amount
        );
    }

    #[test]
    fn prop_no_third_party_payer_falls_back(input in any::<ChargeInput>()) {
        let charge = ConsultationCharge {
            is_free: false,
            is_third_party_payer: false,
            ..input.charge()
        };
        let breakdown = recompute(&charge);

        prop_assert_eq!(breakdown.amount_covered, 0);
        prop_assert_eq!(breakdown.amount_due_by_patient, charge.base_amount);
    }

    #[test]
    fn prop_zero_percentage_falls_through(base_amount in 0i128..=10_000_000) {
        let charge = ConsultationCharge {
            base_amount,
            is_free: false,
            is_third_party_payer: true,
            coverage_percentage: 0,
        };
        let breakdown = recompute(&charge);

        prop_assert_eq!(breakdown.amount_covered, 0);
        prop_assert_eq!(breakdown.amount_due_by_patient, base_amount);
    }

    #[test]
    fn prop_parts_stay_within_base(
        base_amount in 0i128..=10_000_000,
        is_free in any::<bool>(),
        is_third_party_payer in any::<bool>(),
        pct in any::<u32>(),
    ) {
        let charge = ConsultationCharge {
            base_amount,
            is_free,
            is_third_party_payer,
            coverage_percentage: pct,
        };
        let breakdown = recompute(&charge);

        prop_assert!(breakdown.amount_covered >= 0);
        prop_assert!(breakdown.amount_due_by_patient >= 0);
        prop_assert_eq!(
            breakdown.amount_covered + breakdown.amount_due_by_patient,
            base_amount
        );
    }

    #[test]
    fn prop_recompute_is_deterministic(input in any::<ChargeInput>()) {
        let charge = input.charge();
        prop_assert_eq!(recompute(&charge), recompute(&charge));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_contract_agrees_with_calculator(input in any::<ChargeInput>()) {
        let (_env, client) = setup();
        let charge = input.charge();

        prop_assert_eq!(client.recompute(&charge), recompute(&charge));
    }
}
