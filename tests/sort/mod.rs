use core::cmp::Ordering;

use outcome_kit::sort::{ordering, Direction, SortPlan};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: &'static str,
    age: u32,
}

fn people() -> Vec<Person> {
    vec![
        Person { name: "bea", age: 30 },
        Person { name: "abe", age: 30 },
        Person { name: "cal", age: 20 },
    ]
}

#[test]
fn ascending_ordering_sorts_primitives() {
    let mut numbers = vec![3, 1, 2];
    numbers.sort_by(ordering(Direction::Ascending));
    assert_eq!(numbers, [1, 2, 3]);
}

#[test]
fn descending_ordering_reverses() {
    let mut numbers = vec![3, 1, 2];
    numbers.sort_by(ordering(Direction::Descending));
    assert_eq!(numbers, [3, 2, 1]);
}

#[test]
fn ordering_works_over_strings() {
    let mut words = vec!["pear", "apple", "plum"];
    words.sort_by(ordering(Direction::Ascending));
    assert_eq!(words, ["apple", "pear", "plum"]);
}

#[test]
fn tied_first_key_falls_back_to_the_next() {
    let plan = SortPlan::by(|p: &Person| p.age, Direction::Ascending)
        .then_by(|p: &Person| p.name, Direction::Ascending);

    let mut rows = people();
    rows.sort_by(|a, b| plan.compare(a, b));

    let names: Vec<_> = rows.iter().map(|p| p.name).collect();
    assert_eq!(names, ["cal", "abe", "bea"]);
}

#[test]
fn directions_apply_per_key() {
    let plan = SortPlan::by(|p: &Person| p.age, Direction::Descending)
        .then_by(|p: &Person| p.name, Direction::Descending);

    let mut rows = people();
    rows.sort_by(plan.into_fn());

    let names: Vec<_> = rows.iter().map(|p| p.name).collect();
    assert_eq!(names, ["bea", "abe", "cal"]);
}

#[test]
fn records_equal_on_every_key_compare_equal() {
    let plan = SortPlan::by(|p: &Person| p.age, Direction::Ascending)
        .then_by(|p: &Person| p.name, Direction::Ascending);

    let a = Person { name: "dup", age: 1 };
    let b = a.clone();
    assert_eq!(plan.compare(&a, &b), Ordering::Equal);
}

#[test]
fn comparison_is_pure_across_repeated_calls() {
    let plan = SortPlan::by(|p: &Person| p.age, Direction::Ascending);
    let a = Person { name: "x", age: 1 };
    let b = Person { name: "y", age: 2 };

    for _ in 0..3 {
        assert_eq!(plan.compare(&a, &b), Ordering::Less);
        assert_eq!(plan.compare(&b, &a), Ordering::Greater);
    }
}
