use outcome_kit::{recover, safe, try_safe, Fault, Outcome};

#[test]
fn safe_wraps_a_plain_return_value() {
    let outcome = safe("compute", || 42);
    assert_eq!(outcome.unwrap(), 42);
}

#[test]
fn safe_treats_default_like_values_as_present() {
    assert_eq!(safe("zero", || 0).unwrap(), 0);
    assert_eq!(safe("empty", String::new).unwrap(), "");
    assert!(!safe("falsy", || false).unwrap());
}

#[test]
fn safe_converts_a_panic_into_a_failure() {
    let outcome: Outcome<i32> = safe("compute", || panic!("boom"));

    let fault = outcome.unwrap_err();
    assert!(fault.message().contains("compute"));
    assert!(fault.message().contains("boom"));
    assert!(fault.message().starts_with("failed to "));
}

#[test]
fn safe_extracts_formatted_panic_payloads() {
    let outcome: Outcome<()> = safe("index", || panic!("bad index {}", 9));
    assert!(outcome.unwrap_err().message().contains("bad index 9"));
}

#[test]
fn safe_handles_non_string_panic_payloads() {
    let outcome: Outcome<()> = safe("weird", || std::panic::panic_any(17_u8));
    assert!(outcome.unwrap_err().message().contains("non-string panic payload"));
}

#[test]
fn safe_records_the_call_site() {
    let outcome: Outcome<()> = safe("locate", || panic!("here"));
    let fault = outcome.unwrap_err();
    assert!(fault.location().file().ends_with("mod.rs"));
}

#[test]
fn try_safe_passes_a_success_through_unchanged() {
    let outcome = try_safe("fetch", || Ok(7));
    assert_eq!(outcome.unwrap(), 7);
}

#[test]
fn try_safe_passes_a_failure_through_without_rewrapping() {
    let outcome: Outcome<i32> = try_safe("outer", || Err(Fault::new("inner detail")));

    let fault = outcome.unwrap_err();
    assert_eq!(fault.message(), "inner detail");
    assert!(!fault.message().contains("outer"));
}

#[test]
fn try_safe_still_catches_panics() {
    let outcome: Outcome<i32> = try_safe("fetch", || panic!("broken"));
    let fault = outcome.unwrap_err();
    assert!(fault.message().contains("fetch"));
    assert!(fault.message().contains("broken"));
}

#[test]
fn recover_wraps_a_foreign_error_with_the_description() {
    let result: Result<(), std::io::Error> = Err(std::io::Error::other("socket closed"));
    let fault = recover("send heartbeat", result).unwrap_err();

    assert_eq!(fault.message(), "failed to send heartbeat");
    assert!(fault.chain().contains("socket closed"));
}

#[test]
fn recover_keeps_success_values() {
    let result: Result<u8, std::io::Error> = Ok(3);
    assert_eq!(recover("noop", result).unwrap(), 3);
}

#[test]
fn recover_passes_an_existing_fault_through() {
    let original = Fault::new("already uniform");
    let result: Result<(), Fault> = Err(original);
    let fault = recover("outer layer", result).unwrap_err();

    assert_eq!(fault.message(), "already uniform");
    assert!(!fault.chain().contains("outer layer"));
}
