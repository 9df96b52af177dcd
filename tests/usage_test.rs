use std::cmp::Ordering;

use fixed_sort::{fixed_sort, fixed_sort_with, PreserveOrder, SortSpec, Term};
use pretty_assertions::assert_eq;
use regex::Regex;

const SHUFFLED_BOOK: [&str; 8] = [
    "Chapter 3",
    "Chapter 1",
    "Appendix 1",
    "Intro",
    "Appendix 2",
    "Index",
    "Foreword",
    "Chapter 2",
];

const ORDERED_BOOK: [&str; 8] = [
    "Foreword",
    "Intro",
    "Chapter 1",
    "Chapter 2",
    "Chapter 3",
    "Appendix 1",
    "Appendix 2",
    "Index",
];

fn setup() {
    let _ = env_logger::builder()
        // Include all events in tests
        .filter_level(log::LevelFilter::max())
        // Ensure events are captured by `cargo test`
        .is_test(true)
        // Ignore errors initializing the logger if tests race to configure it
        .try_init();
}

/// Parse the first run of digits in `value`.
fn first_number(value: &str) -> Option<u64> {
    let digits = Regex::new(r"\d+").unwrap();
    digits
        .find(value)
        .and_then(|found| found.as_str().parse::<u64>().ok())
}

#[test]
fn building_layers_can_be_ordered_by_literals() {
    setup();

    let mut building = vec![
        "garage",
        "shed",
        "roof",
        "foundation",
        "ground floor",
        "first floor",
        "attic",
    ];
    let sorter = fixed_sort(SortSpec::literals([
        "foundation",
        "ground floor",
        "first floor",
        "second floor",
        "third floor",
        "attic",
        "roof",
    ]));
    sorter.sort(&mut building).unwrap();

    assert_eq!(
        building,
        vec![
            "foundation",
            "ground floor",
            "first floor",
            "attic",
            "roof",
            "garage",
            "shed",
        ]
    );
}

#[test]
fn book_sections_can_be_ordered_by_patterns() {
    setup();

    let sorter = fixed_sort(SortSpec::terms(vec![
        Term::literal("Foreword"),
        Term::literal("Intro"),
        Term::from(Regex::new(r"^Chapter \d+").unwrap()),
        Term::from(Regex::new(r"^Appendix \d+").unwrap()),
        Term::literal("Index"),
    ]));

    let mut book = SHUFFLED_BOOK.to_vec();
    sorter.sort(&mut book).unwrap();

    assert_eq!(book, ORDERED_BOOK.to_vec());
}

#[test]
fn book_sections_can_be_ordered_by_predicates() {
    setup();

    let sorter = fixed_sort(SortSpec::terms(vec![
        Term::literal("Foreword"),
        Term::literal("Intro"),
        Term::predicate(|value: &&str| value.starts_with("Chapter ")),
        Term::predicate(|value: &&str| value.starts_with("Appendix ")),
        Term::literal("Index"),
    ]));

    let mut book = SHUFFLED_BOOK.to_vec();
    sorter.sort(&mut book).unwrap();

    assert_eq!(book, ORDERED_BOOK.to_vec());
}

#[test]
fn numbered_sections_can_be_ordered_numerically_by_the_fallback() {
    setup();

    let numeric_order = |a: &&str, b: &&str| -> Ordering {
        match (first_number(a), first_number(b)) {
            (Some(a_number), Some(b_number)) => a_number.cmp(&b_number),
            _ => a.cmp(b),
        }
    };
    let sorter = fixed_sort_with(
        SortSpec::terms(vec![
            Term::literal("Foreword"),
            Term::literal("Intro"),
            Term::regex(r"^Chapter \d+").unwrap(),
            Term::regex(r"^Appendix \d+").unwrap(),
            Term::literal("Index"),
        ]),
        numeric_order,
    );

    let mut book = vec![
        "Chapter 3",
        "Chapter 1",
        "Chapter 20",
        "Appendix 1",
        "Intro",
        "Appendix 2",
        "Index",
        "Foreword",
        "Chapter 2",
    ];
    sorter.sort(&mut book).unwrap();

    assert_eq!(
        book,
        vec![
            "Foreword",
            "Intro",
            "Chapter 1",
            "Chapter 2",
            "Chapter 3",
            "Chapter 20",
            "Appendix 1",
            "Appendix 2",
            "Index",
        ]
    );
}

#[test]
fn preserve_order_fallback_keeps_ties_in_input_order() {
    setup();

    let sorter = fixed_sort_with(
        SortSpec::terms(vec![Term::literal("Intro"), Term::regex("^Chapter").unwrap()]),
        PreserveOrder,
    );

    let mut book = vec!["Chapter 3", "Notes", "Chapter 1", "Intro", "Chapter 2", "Errata"];
    sorter.sort(&mut book).unwrap();

    assert_eq!(
        book,
        vec!["Intro", "Chapter 3", "Chapter 1", "Chapter 2", "Notes", "Errata"]
    );
}

#[test]
fn comparator_can_be_reused_across_sorts() {
    setup();

    let sorter = fixed_sort(SortSpec::literals(["high", "medium", "low"]));

    let mut first = vec!["low", "high", "unknown"];
    sorter.sort(&mut first).unwrap();
    assert_eq!(first, vec!["high", "low", "unknown"]);

    let mut second = vec!["medium", "other", "high", "medium"];
    sorter.sort(&mut second).unwrap();
    assert_eq!(second, vec!["high", "medium", "medium", "other"]);
}
