use manju_annotate::{annotate_text, best_prefix_match, clean_token, normalize_input};
use manju_dict::Dictionary;
use manju_types::{DictionaryEntry, LineItem, MatchKind};

fn sample_dictionary() -> Dictionary {
    Dictionary::from_entries(vec![
        DictionaryEntry::new("morin", "horse"),
        DictionaryEntry::new("moringga", "mounted, on horseback"),
        DictionaryEntry::new("be", "(accusative particle)"),
        DictionaryEntry::new("gaju", "bring!"),
        DictionaryEntry::new("morin be", "the horse (acc.)"),
        DictionaryEntry::new("morin be gaju", "bring the horse!"),
        DictionaryEntry::new("ša", "to look at"),
    ])
}

#[test]
fn full_pipeline_over_a_submission() {
    let dict = sample_dictionary();
    let annotated = annotate_text("Morin be gaju!\nxa, 123 morimbi", &dict);

    assert_eq!(annotated.lines.len(), 2);

    // Line 1: exact word hits plus the stacked phrase windows on "Morin".
    let first = &annotated.lines[0];
    assert_eq!(first.len(), 3);
    let LineItem::Word(morin) = &first[0] else {
        panic!("expected word item");
    };
    assert_eq!(morin.original, "Morin");
    assert_eq!(morin.primary.unwrap().kind, MatchKind::Exact);
    assert_eq!(morin.paired.unwrap().definition, "the horse (acc.)");
    assert_eq!(morin.three_word.unwrap().definition, "bring the horse!");
    assert!(morin.four_word.is_none());

    // Line 2: shorthand "xa" resolves to "ša"; "123" passes through as a
    // literal; "morimbi" falls back to its longest known prefix.
    let second = &annotated.lines[1];
    let LineItem::Word(sha) = &second[0] else {
        panic!("expected word item");
    };
    assert_eq!(sha.original, "ša,");
    assert_eq!(sha.primary.unwrap().entry.words, "ša");
    assert!(matches!(&second[1], LineItem::Literal { text } if text == "123"));
    let LineItem::Word(morimbi) = &second[2] else {
        panic!("expected word item");
    };
    let primary = morimbi.primary.unwrap();
    assert_eq!(primary.kind, MatchKind::Prefix);
    assert_eq!(primary.entry.words, "moringga");

    // The aggregate log follows discovery order across both lines.
    let kinds: Vec<MatchKind> = annotated.matches.iter().map(|hit| hit.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MatchKind::Exact,
            MatchKind::Paired,
            MatchKind::ThreeWord,
            MatchKind::Exact,
            MatchKind::Exact,
            MatchKind::Exact,
            MatchKind::Prefix,
        ]
    );
}

#[test]
fn cleaning_and_normalization_compose() {
    // The whole-input substitution runs before per-token cleanup, so
    // shorthand survives punctuation stripping.
    let normalized = normalize_input("vaka-x!");
    assert_eq!(normalized, "ūaka-š!");
    assert_eq!(clean_token(&normalized), "ūaka-š");
}

#[test]
fn prefix_search_shortens_until_a_known_stem() {
    let dict = sample_dictionary();
    // "morilambi" shares no entry until shortened to "mori", where both
    // single-word candidates start with it; the longer surface wins.
    let hit = best_prefix_match("morilambi", &dict).unwrap();
    assert_eq!(hit.words, "moringga");
}
