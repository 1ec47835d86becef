//! Forward-only transition law under arbitrary operation sequences

use contract_tracker::lifecycle::LifecycleEngine;
use contract_tracker::model::ContractStatus;
use contract_tracker::store::SledRecordStore;
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Op {
    Create,
    Confirm(usize),
    Complete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Create),
        (1usize..5).prop_map(Op::Confirm),
        (1usize..5).prop_map(Op::Complete),
    ]
}

/// Statuses never move backwards and signed dates never change once set.
#[test]
fn test_status_only_moves_forward() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig {
        cases: 32,
        ..ProptestConfig::default()
    });

    runner
        .run(&prop::collection::vec(op_strategy(), 1..24), |ops| {
            let engine =
                LifecycleEngine::new(Arc::new(SledRecordStore::temporary().unwrap()));
            let mut seen: HashMap<u64, (ContractStatus, Option<chrono::DateTime<chrono::Utc>>)> =
                HashMap::new();

            for op in ops {
                match op {
                    Op::Create => {
                        engine.create_contract("c").unwrap();
                    }
                    Op::Confirm(choice) => {
                        let _ = engine.confirm(choice);
                    }
                    Op::Complete(choice) => {
                        let _ = engine.complete(choice);
                    }
                }

                for contract in engine.overview().unwrap().contracts {
                    if let Some((before, signed)) = seen.get(&contract.id) {
                        prop_assert!(contract.status >= *before);
                        if signed.is_some() {
                            prop_assert_eq!(&contract.signed_at, signed);
                        }
                    }
                    prop_assert_eq!(
                        contract.signed_at.is_some(),
                        contract.status != ContractStatus::Draft
                    );
                    seen.insert(contract.id, (contract.status, contract.signed_at));
                }
            }
            Ok(())
        })
        .unwrap();
}

/// A mismatched expected status never mutates the stored contract.
#[test]
fn test_mismatched_advance_leaves_status() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig {
        cases: 16,
        ..ProptestConfig::default()
    });
    let statuses = prop::sample::select(ContractStatus::ALL.to_vec());

    runner
        .run(&(0usize..3, statuses), |(steps, expected)| {
            let engine =
                LifecycleEngine::new(Arc::new(SledRecordStore::temporary().unwrap()));
            let mut contract = engine.create_contract("c").unwrap();
            for _ in 0..steps {
                if let Ok(next) = engine.advance(contract.id, contract.status) {
                    contract = next;
                }
            }
            prop_assume!(expected != contract.status);

            prop_assert!(engine.advance(contract.id, expected).is_err());
            let stored = engine.store().get_contract(contract.id).unwrap().unwrap();
            prop_assert_eq!(stored, contract);
            Ok(())
        })
        .unwrap();
}
