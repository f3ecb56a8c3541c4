//! Integration tests for completion and spell-checking through the public API.

use spelltrie::prelude::*;
use spelltrie::spelling::levenshtein_distance_threshold;

fn sample() -> Trie {
    ["cat", "car", "cart", "dog"].into_iter().collect()
}

#[test]
fn test_reference_scenario() {
    let trie = sample();

    assert_eq!(trie.autocomplete("ca", 30), vec!["car", "cart", "cat"]);
    assert!(trie.search("car"));
    assert!(!trie.search("ca"));
    assert_eq!(trie.spell_check("dag", 5), vec!["dog"]);
}

#[test]
fn test_empty_dictionary_scenario() {
    let trie = Trie::new();

    assert!(trie.spell_check("anything", 5).is_empty());
    assert!(trie.autocomplete("a", 30).is_empty());
    assert!(trie.get_all_words().is_empty());
}

#[test]
fn test_every_inserted_word_is_found() {
    let words = [
        "Apple", "apply", "APPLICATION", "banana", "band", "bandana", "can", "canal", "x",
    ];
    let trie: Trie = words.iter().collect();

    for word in words {
        assert!(trie.search(word), "{word} should be found");
        assert!(trie.search(&word.to_lowercase()));
        assert!(trie.search(&word.to_uppercase()));
    }
    assert!(!trie.search("appl"));
    assert!(!trie.search("bandanas"));
    assert!(!trie.search("y"));
}

#[test]
fn test_autocomplete_only_returns_stored_words_with_prefix() {
    let words = ["tea", "teal", "team", "tear", "ten", "tent", "to", "toe", "top"];
    let trie: Trie = words.iter().collect();

    for prefix in ["t", "te", "Tea", "to", "ten", "x", "teams"] {
        let completions = trie.autocomplete(prefix, 30);
        let lowered = prefix.to_lowercase();

        for word in &completions {
            assert!(word.starts_with(&lowered), "{word} lacks prefix {prefix}");
            assert!(trie.search(word));
        }

        let expected: Vec<&str> = {
            let mut matching: Vec<&str> = words
                .iter()
                .copied()
                .filter(|w| w.starts_with(&lowered))
                .collect();
            matching.sort_unstable();
            matching
        };
        assert_eq!(completions, expected, "prefix {prefix}");
    }
}

#[test]
fn test_get_all_words_is_deduplicated_and_sorted() {
    let mut trie: Trie = ["pear", "Peach", "plum", "pea"].into_iter().collect();
    trie.insert("PEAR");
    trie.insert("plum");

    assert_eq!(trie.len(), 4);
    assert_eq!(trie.get_all_words(), vec!["pea", "peach", "pear", "plum"]);
}

#[test]
fn test_spell_check_never_exceeds_threshold() {
    let trie: Trie = [
        "receive", "recipe", "deceive", "believe", "relieve", "review", "revive",
    ]
    .into_iter()
    .collect();
    let config = SpellCheckConfig::default();

    for input in ["recieve", "beleive", "reveiw", "rcv", "zzzzzzzzzz", ""] {
        let threshold = config.threshold(input.chars().count());
        for word in trie.spell_check(input, 10) {
            assert!(
                levenshtein_distance(input, &word) <= threshold,
                "{word} too far from {input}"
            );
            assert!(levenshtein_distance_threshold(input, &word, threshold).is_some());
        }
    }

    assert!(trie.spell_check("zzzzzzzzzz", 10).is_empty());
}

#[test]
fn test_spell_check_orders_by_distance_then_word() {
    let trie: Trie = ["receive", "deceive", "relieve", "recipe"]
        .into_iter()
        .collect();

    let suggestions = trie.spell_check_with_distances("recieve", &SpellCheckConfig::default());
    let ranked: Vec<(&str, usize)> = suggestions
        .iter()
        .map(|s| (s.word.as_str(), s.distance))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("relieve", 1),
            ("receive", 2),
            ("recipe", 2),
            ("deceive", 3)
        ]
    );
}

#[test]
fn test_levenshtein_properties() {
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    for (a, b) in [("flaw", "lawn"), ("", "abc"), ("Saturday", "sunday")] {
        assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        assert_eq!(levenshtein_distance(a, a), 0);
    }
}

#[test]
fn test_concurrent_read_only_queries() {
    let trie = sample();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(trie.autocomplete("ca", 30), vec!["car", "cart", "cat"]);
                assert_eq!(trie.spell_check("dag", 5), vec!["dog"]);
                assert_eq!(trie.get_all_words().len(), 4);
            });
        }
    });
}
