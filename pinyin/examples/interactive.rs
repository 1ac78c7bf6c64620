use libmention_pinyin::{Keyword, KeywordCategory, MatchResult};
use std::io::{self, BufRead};

fn demo_keywords() -> Vec<Keyword> {
    vec![
        Keyword::with_description("沈知夏", KeywordCategory::Character, "female lead"),
        Keyword::with_description("林小雨", KeywordCategory::Character, "her best friend"),
        Keyword::new("Leah", KeywordCategory::Character),
        Keyword::new("Leo", KeywordCategory::Character),
        Keyword::new("龙门客栈", KeywordCategory::Location),
        Keyword::new("Old Mill", KeywordCategory::Location),
        Keyword::new("青霜剑", KeywordCategory::Item),
    ]
}

fn print_result(result: &MatchResult) {
    println!(
        "fragment: '{}' [{}..{})",
        result.fragment.text, result.fragment.start, result.fragment.end
    );
    for (idx, kw) in result.matches.iter().enumerate() {
        let desc = kw.description.as_deref().unwrap_or("-");
        println!(
            "{}. {:?} '{}' ({})",
            idx + 1,
            kw.category,
            kw.name,
            desc
        );
    }
    if result.matches.len() > 1 {
        println!("   dropdown open ({} matches)", result.matches.len());
    } else {
        println!("   ghost: '{}'", result.ghost_suffix);
    }
}

fn run_repl() {
    let engine = libmention_pinyin::engine();
    let keywords = demo_keywords();

    println!("libmention demo CLI — type a line of text; the cursor sits at the end.");
    println!("Matches for the trailing word and all highlight spans are printed.");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let buffer = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let cursor = buffer.len();

        let fragment = engine.locate_fragment(&buffer, cursor);
        match engine.find_matches_at(&buffer, cursor, &keywords) {
            Some(result) => print_result(&result),
            None => println!("no completion for the word under the cursor"),
        }

        let highlights = engine.annotate(&buffer, &keywords, None, fragment.as_ref());
        if highlights.is_empty() {
            println!("no highlights");
        } else {
            for span in &highlights {
                println!(
                    "highlight [{}..{}) '{}' ({:?})",
                    span.start,
                    span.end,
                    &buffer[span.start..span.end],
                    span.kind
                );
            }
        }
        println!();
    }
}

fn main() {
    run_repl();
}
