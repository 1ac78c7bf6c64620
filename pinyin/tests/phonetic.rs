//! Integration tests driving the full match pipeline with the real pinyin
//! backend: phonetic prefix matching, first-character phonetic matching,
//! and ranking across mixed hanzi/Latin keyword sets.

use libmention_pinyin::{engine, Keyword, KeywordCategory, TriggerController};
use std::time::{Duration, Instant};

fn story_keywords() -> Vec<Keyword> {
    vec![
        Keyword::with_description("沈知夏", KeywordCategory::Character, "the lead"),
        Keyword::new("林小雨", KeywordCategory::Character),
        Keyword::new("龙门客栈", KeywordCategory::Location),
        Keyword::new("Leah", KeywordCategory::Character),
    ]
}

#[test]
fn test_phonetic_prefix_match() {
    let engine = engine();
    let keywords = story_keywords();

    // Typing pinyin for a hanzi name
    let result = engine.find_matches_at("linx", 4, &keywords).unwrap();
    assert_eq!(result.best_match().name, "林小雨");
}

#[test]
fn test_surname_phonetic_match() {
    let engine = engine();
    let keywords = story_keywords();

    let result = engine.find_matches_at("shen", 4, &keywords).unwrap();
    assert_eq!(result.best_match().name, "沈知夏");
}

#[test]
fn test_first_char_phonetic_match() {
    let engine = engine();
    let keywords = story_keywords();

    // "long" covers exactly the first syllable of 龙门客栈
    let result = engine.find_matches_at("long", 4, &keywords).unwrap();
    assert!(result.matches.iter().any(|k| k.name == "龙门客栈"));
}

#[test]
fn test_single_letter_fans_out() {
    let engine = engine();
    let keywords = story_keywords();

    // "l" phonetically prefixes 林小雨, 龙门客栈 and Leah
    let result = engine.find_matches_at("l", 1, &keywords).unwrap();
    let names: Vec<&str> = result.matches.iter().map(|k| k.name.as_str()).collect();
    assert!(names.contains(&"林小雨"));
    assert!(names.contains(&"龙门客栈"));
    assert!(names.contains(&"Leah"));
    // Literal prefix outranks the phonetic-only matches
    assert_eq!(result.best_match().name, "Leah");
}

#[test]
fn test_cjk_literal_prefix_beats_phonetic() {
    let engine = engine();
    let keywords = story_keywords();

    let result = engine.find_matches_at("沈", 3, &keywords).unwrap();
    assert_eq!(result.best_match().name, "沈知夏");
    assert_eq!(result.ghost_suffix, "知夏");
}

#[test]
fn test_phonetic_ghost_suffix_is_char_sliced() {
    let engine = engine();
    let keywords = vec![Keyword::new("沈知夏", KeywordCategory::Character)];

    // Phonetic-only match: the hint is the name minus fragment-many chars
    let result = engine.find_matches_at("sh", 2, &keywords).unwrap();
    assert_eq!(result.ghost_suffix, "夏");
}

#[test]
fn test_mixed_buffer_annotation() {
    let engine = engine();
    let keywords = story_keywords();

    // "Leah" sits flush against a hanzi: no word boundary, so the Latin
    // keyword is rejected while the CJK names scan boundary-free
    let buffer = "Leah在龙门客栈见到沈知夏";
    let highlights = engine.annotate(buffer, &keywords, None, None);
    let regions: Vec<(usize, usize)> = highlights.iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(regions, [(7, 19), (25, 34)]);

    let buffer = "Leah 在龙门客栈见到沈知夏";
    let highlights = engine.annotate(buffer, &keywords, None, None);
    let regions: Vec<(usize, usize)> = highlights.iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(regions, [(0, 4), (8, 20), (26, 35)]);
}

#[test]
fn test_trigger_with_pinyin_engine() {
    let engine = engine();
    let keywords = story_keywords();
    let mut ctl = TriggerController::from_config(engine.config());
    let t0 = Instant::now();

    ctl.schedule(t0);
    ctl.poll(
        t0 + Duration::from_millis(301),
        &engine,
        "shenzh",
        6,
        &keywords,
    );
    let result = ctl.result().unwrap();
    assert_eq!(result.best_match().name, "沈知夏");
}
