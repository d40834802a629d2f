// rust/engine/tests/selector_contracts.rs
#![forbid(unsafe_code)]

/**
 * Word selection contract tests.
 *
 * Purpose:
 * - Enforce the selection contract independent of any real dictionary:
 *   scoring, tie-breaks, the cube length filter, placement translation and
 *   failure handling.
 *
 * How the tests work:
 * - Synthetic candidate lines are built from plain graphemes with known ids.
 * - Recognizers are closures keyed on the query text, so each test states
 *   exactly which words "exist".
 * - One end-to-end test runs a real cube through a twist and checks the winning
 *   ids follow the letters.
 */
use wordcube_engine::search::{extended_query, locate, score_line, score_matches, tokenize};
use wordcube_engine::{
    Alphabet, CandidateLine, CubeError, Direction, Face, Language, Letter, Lexicon, LineFamily,
    N, RecognitionError, ScoredMatch, WordCube, score_word, select_best_word,
};

type Found = Result<Vec<(String, f64)>, RecognitionError>;

fn line(graphemes: &[&str], first_id: u8) -> CandidateLine {
    let letters = graphemes
        .iter()
        .enumerate()
        .map(|(i, g)| Letter::new(*g, first_id + i as u8))
        .collect();
    CandidateLine::new(LineFamily::Horizontal, letters)
}

fn chars(s: &str) -> Vec<String> {
    s.chars().map(|c| c.to_string()).collect()
}

fn line_of(text: &str, first_id: u8) -> CandidateLine {
    let gs = chars(text);
    let refs: Vec<&str> = gs.iter().map(String::as_str).collect();
    line(&refs, first_id)
}

fn flat_alphabet(cost: u32) -> Alphabet {
    Alphabet::new(('A'..='Z').map(|c| (c.to_string(), 0, cost)))
}

/// Reports each listed word that occurs in the query.
fn words_in_query(words: &'static [&'static str]) -> impl Fn(&str) -> Found {
    move |q: &str| {
        Ok(words
            .iter()
            .filter(|w| q.contains(*w))
            .map(|w| (w.to_string(), 1.0))
            .collect())
    }
}

#[test]
fn cat_scenario_scores_and_places_three_facelets() {
    let l = line_of("XXXCATXXX", 10);
    let alphabet = Alphabet::new([("C", 0, 2), ("A", 0, 1), ("T", 0, 2), ("X", 0, 1)]);
    let rec = |_: &str| -> Found { Ok(vec![("CAT".to_string(), 7.0)]) };

    let scored = score_line(&l, &rec, &alphabet).unwrap();
    assert_eq!(
        scored,
        vec![ScoredMatch {
            score: 5,
            word: "CAT".to_string()
        }]
    );

    let (offset, count) = locate(&l.letters, "CAT").unwrap();
    assert_eq!((offset, count), (3, 3));
    assert_eq!(&l.ids[offset..offset + count], &[13, 14, 15]);

    // Three characters do not fit the cube's word length window.
    let sel = select_best_word(&[l], &rec, &alphabet).unwrap();
    assert!(sel.best.is_none());
}

#[test]
fn five_letter_word_is_selected_end_to_end() {
    let l = line_of("QQQHOUSEQQQ", 20);
    let rec = words_in_query(&["house"]);
    let sel = select_best_word(&[l], &rec, &flat_alphabet(2)).unwrap();

    let best = sel.best.unwrap();
    assert_eq!(best.word, "house");
    assert_eq!(best.score, 10);
    assert_eq!(best.offset, 3);
    assert_eq!(best.ids, vec![23, 24, 25, 26, 27]);
    assert!(sel.failures.is_empty());
}

#[test]
fn equal_scores_keep_the_lower_line_index() {
    let alphabet = flat_alphabet(1);
    let rec = words_in_query(&["mango", "lemon"]);

    let lines = [line_of("MANGOXXX", 0), line_of("LEMONXXX", 50)];
    let best = select_best_word(&lines, &rec, &alphabet).unwrap().best.unwrap();
    assert_eq!((best.word.as_str(), best.line_index), ("mango", 0));

    let lines = [line_of("LEMONXXX", 0), line_of("MANGOXXX", 50)];
    let best = select_best_word(&lines, &rec, &alphabet).unwrap().best.unwrap();
    assert_eq!((best.word.as_str(), best.line_index), ("lemon", 0));
}

#[test]
fn equal_scores_within_a_line_keep_the_smaller_word() {
    let rec = words_in_query(&["mango", "lemon"]);
    let l = line_of("MANGOLEMON", 0);
    let best = select_best_word(&[l], &rec, &flat_alphabet(1))
        .unwrap()
        .best
        .unwrap();
    assert_eq!(best.word, "lemon");
    assert_eq!(best.offset, 5);
}

#[test]
fn strictly_higher_score_in_a_later_line_wins() {
    let mut rows: Vec<(String, u32, u32)> = ('A'..='Z').map(|c| (c.to_string(), 0, 1)).collect();
    rows.push(("L".to_string(), 0, 3));
    let alphabet = Alphabet::new(rows);
    let rec = words_in_query(&["mango", "lemon"]);

    let lines = [line_of("MANGOXXX", 0), line_of("LEMONXXX", 50)];
    let best = select_best_word(&lines, &rec, &alphabet).unwrap().best.unwrap();
    assert_eq!((best.word.as_str(), best.score, best.line_index), ("lemon", 7, 1));
}

#[test]
fn length_filter_excludes_short_and_overlong_words() {
    let mut rows: Vec<(String, u32, u32)> = ('A'..='Z').map(|c| (c.to_string(), 0, 1)).collect();
    rows.push(("Z".to_string(), 0, 50));
    rows.push(("Q".to_string(), 0, 50));
    let alphabet = Alphabet::new(rows);

    let rec = |_: &str| -> Found {
        Ok(vec![
            ("zqz".to_string(), 0.0),
            ("qzqz".to_string(), 0.0),
            ("zzzzzzzzzzzzzzzzz".to_string(), 0.0),
            ("house".to_string(), 0.0),
        ])
    };
    let l = line_of("ZQZQZHOUSEZZZZZZ", 0);
    let best = select_best_word(&[l], &rec, &alphabet).unwrap().best.unwrap();
    assert_eq!(best.word, "house");
    assert_eq!(best.ids, vec![5, 6, 7, 8, 9]);
}

#[test]
fn sixteen_characters_is_the_longest_selectable_word() {
    let l = line_of("ABCDEFGHIJKLMNOP", 0);
    let rec = |_: &str| -> Found { Ok(vec![("abcdefghijklmnop".to_string(), 0.0)]) };
    let best = select_best_word(&[l], &rec, &flat_alphabet(1))
        .unwrap()
        .best
        .unwrap();
    assert_eq!(best.ids, (0..16).collect::<Vec<u8>>());
}

#[test]
fn unlocatable_winner_is_no_placement_found() {
    let l = line_of("XXXXXXXX", 0);
    let rec = |_: &str| -> Found { Ok(vec![("house".to_string(), 0.0)]) };
    let err = select_best_word(&[l], &rec, &flat_alphabet(1)).unwrap_err();
    assert!(matches!(
        err,
        CubeError::NoPlacementFound { ref word, line_index: 0 } if word == "house"
    ));
}

#[test]
fn recognizer_failure_skips_only_that_line() {
    let rec = |q: &str| -> Found {
        if q.contains("broken") {
            Err(RecognitionError::new("transducer rejected input"))
        } else if q.contains("house") {
            Ok(vec![("house".to_string(), 0.0)])
        } else {
            Ok(Vec::new())
        }
    };
    let lines = [line_of("BROKENXX", 0), line_of("XXHOUSEX", 40)];
    let sel = select_best_word(&lines, &rec, &flat_alphabet(1)).unwrap();

    assert_eq!(sel.best.unwrap().line_index, 1);
    assert_eq!(sel.failures.len(), 1);
    assert!(matches!(
        sel.failures[0],
        CubeError::RecognitionFailure { line_index: 0, .. }
    ));
}

#[test]
fn digraph_facelets_shorten_the_placement() {
    let l = line(&["X", "CH", "A", "T", "O", "X"], 60);
    let alphabet = Alphabet::for_language(Language::Es).unwrap();
    let rec = words_in_query(&["chato"]);

    let best = select_best_word(&[l], &rec, &alphabet).unwrap().best.unwrap();
    assert_eq!(best.ids, vec![61, 62, 63, 64]);
    assert_eq!(best.score, 5 + 1 + 1 + 1);
    assert_eq!(tokenize("CHATO", &alphabet).unwrap(), vec!["CH", "A", "T", "O"]);
}

#[test]
fn word_starting_inside_a_digraph_keeps_that_facelet() {
    let mut lamas = vec!["LL", "A", "M", "A", "S"];
    lamas.extend(["E"; 11]);
    let mut toros = vec!["T", "O", "R", "O", "S"];
    toros.extend(["E"; 11]);
    let lines = [line(&lamas, 0), line(&toros, 20)];
    let alphabet = Alphabet::for_language(Language::Es).unwrap();
    let rec = Lexicon::from_words(["lamas", "toros"]);

    let sel = select_best_word(&lines, &rec, &alphabet).unwrap();
    let best = sel.best.unwrap();
    assert_eq!(best.word, "lamas");
    assert_eq!(best.score, 1 + 1 + 3 + 1 + 1);
    assert_eq!(best.line_index, 0);
    assert_eq!(best.offset, 0);
    assert_eq!(best.ids, vec![0, 1, 2, 3, 4]);
    assert!(sel.failures.is_empty());
}

#[test]
fn word_ending_inside_a_digraph_keeps_that_facelet() {
    let l = line(&["X", "B", "A", "R", "R", "A", "CH", "X"], 0);
    assert_eq!(locate(&l.letters, "barrac"), Some((1, 6)));
    // A boundary-aligned match wins over one cutting a digraph.
    let l = line(&["LL", "A", "V", "E", "X", "L", "A", "V", "E"], 0);
    assert_eq!(locate(&l.letters, "lave"), Some((5, 4)));
}

#[test]
fn words_crossing_the_seam_are_placed_cyclically() {
    let l = line_of("USEXXXXXXXHO", 0);
    let rec = Lexicon::from_words(["house"]);

    let best = select_best_word(&[l], &rec, &flat_alphabet(1))
        .unwrap()
        .best
        .unwrap();
    assert_eq!(best.offset, 10);
    assert_eq!(best.ids, vec![10, 11, 0, 1, 2]);
}

#[test]
fn extended_query_wraps_both_ways() {
    assert_eq!(extended_query(&line_of("ABCD", 0)), "bcdabcdabc");
    assert_eq!(extended_query(&line(&["CH", "A", "LL"], 0)), "allchallcha");
}

#[test]
fn scoring_dedups_sorts_and_drops_unknown_graphemes() {
    let alphabet = Alphabet::new([("A", 0, 1), ("B", 0, 3)]);
    let raw = vec![
        ("bab".to_string(), 0.0),
        ("aaa".to_string(), 2.0),
        ("bab".to_string(), 9.0),
        ("abc".to_string(), 0.0),
    ];
    let scored = score_matches(&raw, &alphabet);
    let words: Vec<(u32, &str)> = scored.iter().map(|m| (m.score, m.word.as_str())).collect();
    assert_eq!(words, vec![(3, "aaa"), (7, "bab")]);

    assert!(matches!(
        score_word("abc", &alphabet),
        Err(CubeError::UnknownGrapheme { at: 2, .. })
    ));
}

#[test]
fn lexicon_reports_substrings_once_and_rejects_bad_queries() {
    let lex = Lexicon::parse("# fruit\nlemon\nmango # sweet\n\nmelon\n");
    assert_eq!(lex.len(), 3);
    assert!(lex.contains("LEMON"));

    let found = wordcube_engine::Recognizer::apply(&lex, "xlemonxlemonmelo").unwrap();
    assert_eq!(found, vec![("lemon".to_string(), 0.0)]);

    assert!(wordcube_engine::Recognizer::apply(&lex, "").is_err());
    assert!(wordcube_engine::Recognizer::apply(&lex, "le mon").is_err());
}

#[test]
fn winning_ids_follow_letters_through_a_twist() {
    let mut letters = vec!["Z".to_string(); 96];
    // L row 0 = W O R D, F row 0 starts with S.
    for (k, g) in ["W", "O", "R", "D"].iter().enumerate() {
        letters[16 + k] = g.to_string();
    }
    letters[32] = "S".to_string();
    let mut cube = WordCube::from_letters(&letters).unwrap();

    let alphabet = Alphabet::new([
        ("W", 0, 4),
        ("O", 0, 1),
        ("R", 0, 1),
        ("D", 0, 2),
        ("S", 0, 1),
        ("Z", 0, 10),
    ]);
    let lex = Lexicon::from_words(["words"]);

    let before = select_best_word(&cube.lines(Face::F), &lex, &alphabet)
        .unwrap()
        .best
        .unwrap();
    assert_eq!(before.line_index, N);
    assert_eq!(before.ids, vec![35, 39, 43, 47, 95]);
    assert_eq!(before.score, 9);

    // L's top row moves to B, F's to L: the word now wraps across the seam.
    cube.rotate(Face::U, 0, Direction::Cw).unwrap();
    let after = select_best_word(&cube.lines(Face::F), &lex, &alphabet)
        .unwrap()
        .best
        .unwrap();
    assert_eq!(after.line_index, N);
    assert_eq!(after.offset, 12);
    assert_eq!(after.ids, before.ids);
}
