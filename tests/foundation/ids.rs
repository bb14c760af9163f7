//! Integration tests for object identity
//!
//! Tests sequential allocation, observed ids, and the invalid sentinel.

use wargrid_foundation::{IdSequence, ObjectId};

// =============================================================================
// Allocation
// =============================================================================

#[test]
fn sequence_starts_at_zero() {
    let mut seq = IdSequence::new();
    assert_eq!(seq.peek(), ObjectId::new(0));
    assert_eq!(seq.next_id(), ObjectId::new(0));
    assert_eq!(seq.next_id(), ObjectId::new(1));
}

#[test]
fn peek_does_not_allocate() {
    let mut seq = IdSequence::new();
    assert_eq!(seq.peek(), seq.peek());
    assert_eq!(seq.next_id(), ObjectId::new(0));
}

#[test]
fn observed_ids_are_skipped() {
    let mut seq = IdSequence::new();
    seq.observe(ObjectId::new(41));
    assert_eq!(seq.next_id(), ObjectId::new(42));
}

#[test]
fn observing_an_already_passed_id_changes_nothing() {
    let mut seq = IdSequence::new();
    let _ = seq.next_id();
    let _ = seq.next_id();
    seq.observe(ObjectId::new(1));
    assert_eq!(seq.next_id(), ObjectId::new(2));
}

// =============================================================================
// The Invalid Sentinel
// =============================================================================

#[test]
fn invalid_sentinel_is_never_valid() {
    assert!(!ObjectId::invalid().is_valid());
    assert_eq!(ObjectId::invalid().value(), -1);
    assert_eq!(ObjectId::invalid(), ObjectId::new(-1));
}

#[test]
fn observing_the_sentinel_is_a_no_op() {
    let mut seq = IdSequence::new();
    seq.observe(ObjectId::invalid());
    assert_eq!(seq.next_id(), ObjectId::new(0));
}

#[test]
fn ids_order_and_display() {
    assert!(ObjectId::new(3) < ObjectId::new(7));
    assert_eq!(ObjectId::new(7).to_string(), "7");
    assert_eq!(ObjectId::from(5i64), ObjectId::new(5));
}
