use super::*;

use std::collections::HashSet;

use rand::Rng;

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 20;

fn generate_random_keyword(rng: &mut impl Rng, charset: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

// Mirrors the 1000-iteration concatenation round trip: every keyword of the
// set occurs in the input, so the overlapping search must report exactly the
// keyword set as distinct outputs.
#[test]
fn test_concatenated_keywords_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let mut keywords: Vec<String> = vec![];
        for _ in 0..10 {
            let len = rng.gen_range(MIN_LENGTH..MAX_LENGTH);
            let candidate = generate_random_keyword(&mut rng, b"abc", len);
            if !keywords.contains(&candidate) {
                keywords.push(candidate);
            }
        }

        let mut tree: AhoCorasick<String> = AhoCorasick::builder().build();
        for keyword in &keywords {
            tree.add_keyword(keyword).unwrap();
        }
        tree.prepare().unwrap();

        let input = keywords.concat();
        let results = tree.complete_search(&input, true, false).unwrap();
        let found: HashSet<&str> = results.iter().map(|r| r.output().as_str()).collect();
        let expected: HashSet<&str> = keywords.iter().map(String::as_str).collect();
        assert_eq!(expected, found, "input: {input}");
    }
}

// Compares the overlapping search against a naive scan over every keyword
// and position.
#[test]
fn test_complete_search_overlapping_random() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let mut keywords = HashSet::new();
        for &(num, len) in &[(6, 1), (20, 2), (50, 3), (100, 4)] {
            for _ in 0..num {
                keywords.insert(generate_random_keyword(&mut rng, b"random", len));
            }
        }
        let haystack = generate_random_keyword(&mut rng, b"random", 100);

        // naive pattern match
        let mut expected = HashSet::new();
        for keyword in &keywords {
            for pos in 0..=haystack.len() - keyword.len() {
                if &haystack[pos..pos + keyword.len()] == keyword {
                    expected.insert((keyword.clone(), pos, pos + keyword.len()));
                }
            }
        }

        let mut tree: AhoCorasick<String> = AhoCorasick::builder().build();
        for keyword in &keywords {
            tree.add_keyword(keyword).unwrap();
        }
        tree.prepare().unwrap();

        let mut actual = HashSet::new();
        for m in tree.complete_search(&haystack, true, false).unwrap() {
            actual.insert((m.output().clone(), m.start_index(), m.end_index()));
        }
        assert_eq!(expected, actual, "haystack: {haystack}");
    }
}

// The progressive stream reports strictly increasing indices, and its
// outputs agree with the overlapping complete search.
#[test]
fn test_progressive_agrees_with_complete_random() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let mut keywords = HashSet::new();
        for _ in 0..50 {
            let len = rng.gen_range(1..5);
            keywords.insert(generate_random_keyword(&mut rng, b"abc", len));
        }
        let haystack = generate_random_keyword(&mut rng, b"abc", 100);

        let mut tree: AhoCorasick<String> = AhoCorasick::builder().build();
        for keyword in &keywords {
            tree.add_keyword(keyword).unwrap();
        }
        tree.prepare().unwrap();

        let mut last_index = 0;
        let mut streamed = HashSet::new();
        for result in tree.progressive_search(&haystack).unwrap() {
            assert!(result.last_index() > last_index);
            last_index = result.last_index();
            for output in result.outputs() {
                streamed.insert((output.clone(), result.last_index()));
            }
        }

        let mut collected = HashSet::new();
        for m in tree.complete_search(&haystack, true, false).unwrap() {
            collected.insert((m.output().clone(), m.end_index()));
        }
        assert_eq!(streamed, collected, "haystack: {haystack}");
    }
}
