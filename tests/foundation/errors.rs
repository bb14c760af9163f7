//! Integration tests for the error taxonomy
//!
//! Tests error construction, display messages, and category mapping.

use wargrid_foundation::{Error, ErrorCategory, ErrorKind, ObjectId};

// =============================================================================
// Value Errors
// =============================================================================

#[test]
fn direction_errors_are_value_errors() {
    assert_eq!(
        Error::unknown_direction("Northward").category(),
        ErrorCategory::Value
    );
    assert_eq!(
        Error::unconnectable_directions("East", "West").category(),
        ErrorCategory::Value
    );
}

#[test]
fn serialization_errors_are_value_errors() {
    assert_eq!(Error::missing_field("name").category(), ErrorCategory::Value);
    assert_eq!(
        Error::type_mismatch("string", "name").category(),
        ErrorCategory::Value
    );
    assert_eq!(
        Error::unresolved_reference(ObjectId::new(3)).category(),
        ErrorCategory::Value
    );
    assert_eq!(
        Error::world_mismatch("a", "b").category(),
        ErrorCategory::Value
    );
    assert_eq!(Error::codec("truncated").category(), ErrorCategory::Value);
}

#[test]
fn ownership_errors_are_value_errors() {
    assert_eq!(
        Error::duplicate_id(ObjectId::new(1)).category(),
        ErrorCategory::Value
    );
    assert_eq!(
        Error::owner_mismatch("node 1").category(),
        ErrorCategory::Value
    );
    assert_eq!(
        Error::missing_civilization().category(),
        ErrorCategory::Value
    );
}

// =============================================================================
// Io and Rule Errors
// =============================================================================

#[test]
fn io_errors_convert_via_from() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io.into();
    assert_eq!(err.category(), ErrorCategory::Io);
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

#[test]
fn rule_errors_pass_through_untouched() {
    let err = Error::rule("zone of control violated");
    assert_eq!(err.category(), ErrorCategory::Rule);
    assert_eq!(err.to_string(), "rule error: zone of control violated");
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn messages_name_the_offending_input() {
    assert_eq!(
        Error::unknown_direction("Up").to_string(),
        "unknown direction: \"Up\""
    );
    assert_eq!(
        Error::unconnectable_directions("East", "West").to_string(),
        "directions East and West are not adjacent"
    );
    assert_eq!(
        Error::duplicate_id(ObjectId::new(4)).to_string(),
        "id 4 is already in use"
    );
    assert_eq!(Error::missing_field("world").to_string(), "missing field: world");
}
