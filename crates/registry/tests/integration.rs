//! End-to-end lifecycle tests
//!
//! Drives the registry together with real in-memory collaborators (role
//! gate, custodial pool, event sink) through complete workflows.

use rust_decimal::Decimal;
use std::num::NonZeroU32;
use std::sync::Arc;
use stipend_core::{Amount, Principal, Role};
use stipend_custody::{CustodyLedger, PooledCustody};
use stipend_events::{LifecycleEvent, MemorySink};
use stipend_registry::{Registry, RegistryError};
use stipend_roles::{MemoryRoleGate, RoleGate};

fn amount(val: i64) -> Amount {
    Amount::new(Decimal::new(val, 0)).unwrap()
}

/// The reference scenario: quorum of 2, one application for 100 units,
/// verified, signed by two distinct reviewers, funded, claimed once.
#[test]
fn test_full_disbursement_workflow() {
    let roles = Arc::new(MemoryRoleGate::new());
    let sink = Arc::new(MemorySink::new());
    let mut pool = PooledCustody::new();

    let alice = Principal::new("alice");
    let rev_a = Principal::new("rev-a");
    let rev_b = Principal::new("rev-b");
    roles.grant(Role::Reviewer, &rev_a);
    roles.grant(Role::Reviewer, &rev_b);

    let mut registry = Registry::new(
        NonZeroU32::new(2).unwrap(),
        roles.clone(),
        sink.clone(),
    );

    // Submit
    let id = registry.submit(alice.clone(), "passport:A1", amount(100));
    assert_eq!(id, 1);

    // Verify
    registry.verify(id, &rev_a).unwrap();

    // First signature: below quorum
    registry.sign(id, &rev_a).unwrap();
    let app = registry.get(id).unwrap();
    assert_eq!(app.approval_count, 1);
    assert!(!app.stage.is_approved());

    // Second signature: quorum reached, Approved emitted
    registry.sign(id, &rev_b).unwrap();
    let app = registry.get(id).unwrap();
    assert_eq!(app.approval_count, 2);
    assert!(app.stage.is_approved());

    // Fund and claim
    pool.fund(amount(150));
    let paid = registry.claim(id, &alice, &mut pool).unwrap();
    assert_eq!(paid, amount(100));
    assert_eq!(pool.balance(), amount(50));
    assert_eq!(pool.paid_to(&alice), amount(100));
    assert!(registry.get(id).unwrap().stage.is_claimed());

    // Second claim is refused
    assert_eq!(
        registry.claim(id, &alice, &mut pool),
        Err(RegistryError::AlreadyClaimed(id))
    );
    assert_eq!(pool.balance(), amount(50));

    // The trail records the whole lifecycle, in order
    let events = sink.events();
    assert_eq!(
        events,
        vec![
            LifecycleEvent::Submitted {
                id,
                applicant: alice.clone(),
                amount: amount(100),
            },
            LifecycleEvent::Verified { id },
            LifecycleEvent::Signed {
                id,
                signer: rev_a.clone(),
            },
            LifecycleEvent::Signed {
                id,
                signer: rev_b.clone(),
            },
            LifecycleEvent::Approved { id },
            LifecycleEvent::Claimed {
                id,
                claimant: alice,
                amount: amount(100),
            },
        ]
    );
}

/// Several applications advance independently; signatures on one never
/// count toward another, and ids stay in submission order.
#[test]
fn test_independent_applications() {
    let roles = Arc::new(MemoryRoleGate::new());
    let sink = Arc::new(MemorySink::new());
    let mut pool = PooledCustody::new();
    pool.fund(amount(1000));

    let rev = Principal::new("rev-a");
    roles.grant(Role::Reviewer, &rev);

    let mut registry = Registry::new(NonZeroU32::new(1).unwrap(), roles, sink);

    let alice = Principal::new("alice");
    let bob = Principal::new("bob");
    let first = registry.submit(alice.clone(), "a", amount(10));
    let second = registry.submit(bob.clone(), "b", amount(20));
    assert_eq!((first, second), (1, 2));

    registry.verify(first, &rev).unwrap();
    registry.sign(first, &rev).unwrap();

    // Bob's application is untouched by Alice's progress
    assert!(!registry.get(second).unwrap().stage.is_verified());
    assert_eq!(
        registry.claim(second, &bob, &mut pool),
        Err(RegistryError::NotApproved(second))
    );

    registry.claim(first, &alice, &mut pool).unwrap();
    assert_eq!(pool.balance(), amount(990));
}

/// A revoked reviewer loses authority immediately.
#[test]
fn test_revoked_reviewer_cannot_sign() {
    let roles = Arc::new(MemoryRoleGate::new());
    let sink = Arc::new(MemorySink::new());

    let rev = Principal::new("rev-a");
    roles.grant(Role::Reviewer, &rev);

    let mut registry = Registry::new(NonZeroU32::new(2).unwrap(), roles.clone(), sink);

    let id = registry.submit(Principal::new("alice"), "a", amount(10));
    registry.verify(id, &rev).unwrap();

    roles.revoke(Role::Reviewer, &rev);
    assert_eq!(registry.sign(id, &rev), Err(RegistryError::Unauthorized));
    assert_eq!(registry.get(id).unwrap().approval_count, 0);
}
