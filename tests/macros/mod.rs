use outcome_kit::traits::IntoAnnotation;
use outcome_kit::{annotation, data, safe, AnnotateExt, Fault, Outcome};

#[test]
fn annotation_macro_defers_formatting() {
    let lazy = annotation!("user_id: {}", 42);
    let annotation = lazy.into_annotation();

    assert_eq!(annotation.message(), Some("user_id: 42"));
    assert!(annotation.at().contains("mod.rs"));
}

#[test]
fn annotation_macro_is_not_evaluated_on_success() {
    let mut called = false;
    let outcome: Outcome<()> = Ok(());
    let _ = outcome.annotate_with(|| {
        called = true;
        annotation!("never formatted")
    });
    assert!(!called);
}

#[test]
fn data_macro_collects_pairs() {
    let annotation = data!("table" => "events", "rows" => "512");

    assert_eq!(annotation.message(), None);
    assert_eq!(annotation.data().len(), 2);
    let rendered = annotation.to_string();
    assert!(rendered.contains("table=events"));
    assert!(rendered.contains("rows=512"));
}

#[test]
fn safe_macro_wraps_expressions_and_blocks() {
    assert_eq!(safe!("halve", 84 / 2).unwrap(), 42);

    let outcome = safe!("build greeting", {
        let name = "world";
        format!("hello {name}")
    });
    assert_eq!(outcome.unwrap(), "hello world");
}

#[test]
fn safe_macro_converts_panics() {
    let outcome: Outcome<i32> = safe!("explode", { panic!("kaboom") });
    let fault = outcome.unwrap_err();
    assert!(fault.message().contains("explode"));
    assert!(fault.message().contains("kaboom"));
}

#[test]
fn macro_annotations_compose_with_faults() {
    let fault = Fault::new("stalled")
        .annotate(annotation!("attempt {}", 3))
        .annotate(data!("queue" => "ingest"));

    let chain = fault.chain();
    assert!(chain.contains("attempt 3"));
    assert!(chain.contains("queue=ingest"));
    assert!(chain.contains("stalled"));
}
