use outcome_kit::{AnnotateExt, Annotation, Fault, Outcome, RecoverExt};

#[test]
fn recover_prefixes_and_chains_the_error() {
    let result: Result<(), &str> = Err("permission denied");
    let fault = result.recover("open socket").unwrap_err();

    assert_eq!(fault.message(), "failed to open socket");
    assert!(fault.chain().contains("permission denied"));
}

#[test]
fn recover_leaves_success_untouched() {
    let result: Result<i32, &str> = Ok(42);
    assert_eq!(result.recover("noop").unwrap(), 42);
}

#[test]
fn recover_with_runs_the_closure_only_on_the_error_path() {
    let mut called = false;
    let ok: Result<(), &str> = Ok(());
    let _ = ok.recover_with(|| {
        called = true;
        "should not run"
    });
    assert!(!called);

    let mut called = false;
    let err: Result<(), &str> = Err("boom");
    let _ = err.recover_with(|| {
        called = true;
        "should run"
    });
    assert!(called);
}

#[test]
fn recover_does_not_rewrap_a_fault() {
    let result: Result<(), Fault> = Err(Fault::new("root"));
    let fault = result.recover("outer").unwrap_err();
    assert_eq!(fault.message(), "root");
}

#[test]
fn annotate_appends_to_a_failure() {
    let outcome: Outcome<()> = Err(Fault::new("base"));
    let fault = outcome.annotate(Annotation::new("layer two")).unwrap_err();

    assert!(fault.chain().contains("layer two"));
    assert!(fault.chain().contains("base"));
}

#[test]
fn annotate_ignores_a_success() {
    let outcome: Outcome<i32> = Ok(9);
    assert_eq!(outcome.annotate("never attached").unwrap(), 9);
}

#[test]
fn annotate_with_is_lazy() {
    let mut called = false;
    let outcome: Outcome<()> = Ok(());
    let _ = outcome.annotate_with(|| {
        called = true;
        Annotation::new("unused")
    });
    assert!(!called);
}

#[test]
fn annotations_stack_across_layers() {
    let outcome: Outcome<()> = Err(Fault::new("io stalled"));
    let fault = outcome
        .annotate("retrying")
        .annotate_with(|| format!("attempt {}", 2))
        .unwrap_err();

    let messages: Vec<_> = fault.annotations().filter_map(|a| a.message()).collect();
    assert_eq!(messages, ["attempt 2", "retrying"]);
}
