use outcome_kit::convert::{error_to_fault, fault_to_error, outcome_from_result};
use outcome_kit::{Annotation, Fault};

#[test]
fn fault_to_error_preserves_message_and_chain() {
    let io = std::io::Error::other("root");
    let fault = Fault::wrap("failed to persist", io);

    let boxed = fault_to_error(fault);
    assert!(boxed.to_string().contains("failed to persist"));
    assert!(boxed.source().is_some());
}

#[test]
fn error_to_fault_adopts_a_foreign_error() {
    let fault = error_to_fault(std::io::Error::other("offline"));

    assert_eq!(fault.message(), "offline");
    assert!(fault.location().file().ends_with("mod.rs"));
    // Display must not repeat the source rendering
    assert_eq!(fault.to_string(), "offline");
}

#[test]
fn error_to_fault_round_trips_a_boxed_fault() {
    let original = Fault::new("canonical").annotate(Annotation::new("marker"));
    let boxed = fault_to_error(original);

    let back = error_to_fault(boxed);
    assert_eq!(back.message(), "canonical");
    assert!(back.chain().contains("marker"));
}

#[test]
fn outcome_from_result_lifts_both_arms() {
    let ok: Result<i32, std::io::Error> = Ok(5);
    assert_eq!(outcome_from_result(ok).unwrap(), 5);

    let err: Result<i32, std::io::Error> = Err(std::io::Error::other("nope"));
    let fault = outcome_from_result(err).unwrap_err();
    assert_eq!(fault.message(), "nope");
}
