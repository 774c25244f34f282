//! Property tests for deck filtering.

use memodeck_app::filter_decks;
use memodeck_core::catalog::{Deck, LanguageFilter};
use proptest::prelude::*;

fn arb_language_tag() -> impl Strategy<Value = String> {
    prop_oneof![Just("en"), Just("es"), Just("ru")].prop_map(String::from)
}

fn arb_language_filter() -> impl Strategy<Value = LanguageFilter> {
    prop_oneof![
        Just(LanguageFilter::Any),
        Just(LanguageFilter::English),
        Just(LanguageFilter::Spanish),
        Just(LanguageFilter::Russian),
    ]
}

fn arb_category_filter() -> impl Strategy<Value = String> {
    prop_oneof![Just(""), Just("A"), Just("B"), Just("C")].prop_map(String::from)
}

fn arb_decks() -> impl Strategy<Value = Vec<Deck>> {
    prop::collection::vec((arb_language_tag(), arb_category_filter()), 0..24).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (language, category_id))| Deck {
                id: i as i64,
                name: format!("Deck {i}"),
                description: None,
                available_in: language,
                category_id,
                share_id: None,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn filtered_decks_match_the_predicate(
        decks in arb_decks(),
        language in arb_language_filter(),
        category in arb_category_filter(),
    ) {
        let filtered = filter_decks(&decks, language, &category);
        let expected: Vec<Deck> = decks
            .iter()
            .filter(|d| {
                (language == LanguageFilter::Any || d.available_in == language.tag())
                    && (category.is_empty() || d.category_id == category)
            })
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn no_filters_pass_every_deck(decks in arb_decks()) {
        prop_assert_eq!(filter_decks(&decks, LanguageFilter::Any, ""), decks);
    }
}
