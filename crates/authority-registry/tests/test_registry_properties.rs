use authority_registry::*;
use proptest::prelude::*;

const ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

#[derive(Debug, Clone)]
enum Op {
    Add {
        caller: usize,
        target: usize,
        entity_type: String,
        grade: String,
    },
    Update {
        caller: usize,
        target: usize,
        grade: String,
    },
    Revoke { caller: usize, target: usize },
    Transfer { caller: usize, target: usize },
}

/// Admin first, then a handful of other principals
fn principal_pool() -> Vec<Principal> {
    std::iter::once(Principal::from(ADMIN))
        .chain((1..5).map(|i| Principal::new(format!("ST{}USER", i))))
        .collect()
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let idx = 0usize..5;
    let label = "[a-z]{1,12}";
    let grade = "[A-F][+-]?";
    prop_oneof![
        (idx.clone(), idx.clone(), label, grade).prop_map(
            |(caller, target, entity_type, grade)| Op::Add {
                caller,
                target,
                entity_type,
                grade,
            }
        ),
        (idx.clone(), idx.clone(), grade)
            .prop_map(|(caller, target, grade)| Op::Update { caller, target, grade }),
        (idx.clone(), idx.clone()).prop_map(|(caller, target)| Op::Revoke { caller, target }),
        (idx.clone(), idx).prop_map(|(caller, target)| Op::Transfer { caller, target }),
    ]
}

fn apply(registry: &mut AuthorityRegistry, pool: &[Principal], op: &Op) -> Result<bool> {
    match op {
        Op::Add {
            caller,
            target,
            entity_type,
            grade,
        } => registry.add_authority(
            &pool[*caller],
            &pool[*target],
            entity_type.as_str(),
            grade.as_str(),
        ),
        Op::Update { caller, target, grade } => {
            registry.update_grade(&pool[*caller], &pool[*target], grade.as_str())
        }
        Op::Revoke { caller, target } => registry.revoke_authority(&pool[*caller], &pool[*target]),
        Op::Transfer { caller, target } => registry.transfer_admin(&pool[*caller], &pool[*target]),
    }
}

fn caller_of(op: &Op) -> usize {
    match op {
        Op::Add { caller, .. }
        | Op::Update { caller, .. }
        | Op::Revoke { caller, .. }
        | Op::Transfer { caller, .. } => *caller,
    }
}

fn state_of(registry: &AuthorityRegistry) -> (Principal, Vec<(Principal, AuthorityRecord)>, usize) {
    (
        registry.admin().clone(),
        registry
            .authorities()
            .map(|(p, r)| (p.clone(), r.clone()))
            .collect(),
        registry.events().count(),
    )
}

/// Property: Non-admin callers are always rejected and change nothing
#[test]
fn prop_non_admin_calls_leave_state_unchanged() {
    proptest!(|(ops in prop::collection::vec(op_strategy(), 1..64))| {
        let pool = principal_pool();
        let mut registry = AuthorityRegistry::new(ADMIN);

        for op in &ops {
            let caller_is_admin = registry.is_admin(&pool[caller_of(op)]);
            let before = state_of(&registry);
            let result = apply(&mut registry, &pool, op);

            if !caller_is_admin {
                prop_assert_eq!(
                    result.unwrap_err().code(),
                    AuthorityError::NOT_AUTHORIZED
                );
                prop_assert_eq!(state_of(&registry), before);
            }
        }
    });
}

/// Property: Every failure leaves state untouched; every success records one event
#[test]
fn prop_failures_are_atomic_and_successes_are_logged() {
    proptest!(|(ops in prop::collection::vec(op_strategy(), 1..64))| {
        let pool = principal_pool();
        let mut registry = AuthorityRegistry::new(ADMIN);

        for op in &ops {
            let before = state_of(&registry);
            match apply(&mut registry, &pool, op) {
                Ok(acknowledged) => {
                    prop_assert!(acknowledged);
                    prop_assert_eq!(registry.events().count(), before.2 + 1);
                }
                Err(_) => {
                    prop_assert_eq!(state_of(&registry), before);
                }
            }
        }

        let sequences: Vec<u64> = registry.events().map(|r| r.sequence).collect();
        prop_assert!(sequences.windows(2).all(|w| w[0] < w[1]));
    });
}

/// Property: Registry agrees with a plain map model under admin-only traffic
#[test]
fn prop_matches_reference_model() {
    proptest!(|(ops in prop::collection::vec(op_strategy(), 1..64))| {
        let pool = principal_pool();
        let mut registry = AuthorityRegistry::new(ADMIN);
        let mut model: std::collections::BTreeMap<Principal, AuthorityRecord> = Default::default();
        let mut model_admin = Principal::from(ADMIN);

        for op in &ops {
            let caller = &pool[caller_of(op)];
            let result = apply(&mut registry, &pool, op);

            if *caller != model_admin {
                prop_assert!(result.is_err());
                continue;
            }

            match op {
                Op::Add { target, entity_type, grade, .. } => {
                    let key = &pool[*target];
                    if model.contains_key(key) {
                        prop_assert_eq!(
                            result.unwrap_err().code(),
                            AuthorityError::ALREADY_VERIFIED
                        );
                    } else {
                        prop_assert_eq!(result, Ok(true));
                        let record = AuthorityRecord::new(entity_type.as_str(), grade.as_str());
                        model.insert(key.clone(), record);
                    }
                }
                Op::Update { target, grade, .. } => match model.get_mut(&pool[*target]) {
                    Some(record) => {
                        prop_assert_eq!(result, Ok(true));
                        record.grade = grade.clone();
                    }
                    None => {
                        prop_assert_eq!(result.unwrap_err().code(), AuthorityError::NOT_FOUND);
                    }
                },
                Op::Revoke { target, .. } => {
                    if model.remove(&pool[*target]).is_some() {
                        prop_assert_eq!(result, Ok(true));
                    } else {
                        prop_assert_eq!(result.unwrap_err().code(), AuthorityError::NOT_FOUND);
                    }
                }
                Op::Transfer { target, .. } => {
                    prop_assert_eq!(result, Ok(true));
                    model_admin = pool[*target].clone();
                }
            }

            prop_assert_eq!(registry.admin(), &model_admin);
            for who in &pool {
                prop_assert_eq!(registry.is_verified(who), model.contains_key(who));
                if let Some(record) = model.get(who) {
                    prop_assert_eq!(
                        registry.get_entity_type(who).unwrap(),
                        record.entity_type.clone()
                    );
                    prop_assert_eq!(registry.get_grade(who).unwrap(), record.grade.clone());
                }
            }
        }
    });
}

/// Property: The event log never grows beyond its capacity
#[test]
fn prop_event_log_is_bounded() {
    proptest!(|(
        capacity in 0usize..8,
        ops in prop::collection::vec(op_strategy(), 1..64),
    )| {
        let pool = principal_pool();
        let config = RegistryConfig {
            admin: Principal::from(ADMIN),
            event_log_capacity: capacity,
        };
        let mut registry = AuthorityRegistry::with_config(&config);

        for op in &ops {
            let _ = apply(&mut registry, &pool, op);
            prop_assert!(registry.events().count() <= capacity);
        }
    });
}
