#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the draft workflow.
//!
//! Invariants tested:
//! - After any sequence of accepted edits the stored breakdown equals the
//!   calculator applied to the stored charge
//! - Every setter returns the breakdown it stored
//! - Rejected edits leave the draft unchanged
//! - Submitting hands over the final amounts and removes the draft

use crate::fixtures::{setup, CODES, TARIFFS};
use consultation_billing::calculator::recompute;
use consultation_billing::ContractError;
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, String};

#[derive(Clone, Debug, Arbitrary)]
enum Edit {
    ConsultationType {
        #[proptest(strategy = "0usize..3")]
        index: usize,
    },
    BaseAmount {
        #[proptest(strategy = "0i128..=1_000_000")]
        amount: i128,
    },
    Free {
        flag: bool,
    },
    ThirdPartyPayer {
        flag: bool,
    },
    Coverage {
        #[proptest(strategy = "0u32..=100")]
        pct: u32,
    },
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_edits_keep_breakdown_in_sync(
        start in 0usize..3,
        edits in proptest::collection::vec(any::<Edit>(), 1..10),
    ) {
        let (env, client) = setup();
        let owner = Address::generate(&env);
        let id = client.open_draft(
            &owner,
            &String::from_str(&env, "BEN-001"),
            &String::from_str(&env, "PRS-01"),
            &CODES[start],
        );

        let mut expected_base = TARIFFS[start];
        for edit in &edits {
            let returned = match edit {
                Edit::ConsultationType { index } => {
                    expected_base = TARIFFS[*index];
                    client.set_consultation_type(&owner, &id, &CODES[*index])
                }
                Edit::BaseAmount { amount } => {
                    expected_base = *amount;
                    client.set_base_amount(&owner, &id, amount)
                }
                Edit::Free { flag } => client.set_free(&owner, &id, flag),
                Edit::ThirdPartyPayer { flag } => client.set_third_party_payer(&owner, &id, flag),
                Edit::Coverage { pct } => client.set_coverage_percentage(&owner, &id, pct),
            };

            let draft = client.get_draft(&id);
            prop_assert_eq!(&returned, &draft.breakdown);
            prop_assert_eq!(draft.breakdown, recompute(&draft.charge));
            prop_assert_eq!(draft.charge.base_amount, expected_base);
        }

        let draft = client.get_draft(&id);
        let submission = client.submit_draft(&owner, &id);
        prop_assert_eq!(submission.charge, draft.charge);
        prop_assert_eq!(submission.breakdown, draft.breakdown);
        prop_assert_eq!(client.try_get_draft(&id), Err(Ok(ContractError::DraftNotFound)));
    }

    #[test]
    fn prop_rejected_edits_leave_draft_unchanged(
        amount in i128::MIN..0,
        pct in 101u32..,
    ) {
        let (env, client) = setup();
        let owner = Address::generate(&env);
        let id = client.open_draft(
            &owner,
            &String::from_str(&env, "BEN-001"),
            &String::from_str(&env, "PRS-01"),
            &CODES[0],
        );
        let before = client.get_draft(&id);

        prop_assert_eq!(
            client.try_set_base_amount(&owner, &id, &amount),
            Err(Ok(ContractError::InvalidAmount))
        );
        prop_assert_eq!(
            client.try_set_coverage_percentage(&owner, &id, &pct),
            Err(Ok(ContractError::InvalidPercentage))
        );
        prop_assert_eq!(client.get_draft(&id), before);
    }
}
