//! Annotate a text file against a keyword set
//!
//! Reads a keyword snapshot from JSON and a text buffer from a file, then
//! prints every highlight span the engine would hand to a renderer. With
//! --cursor it also runs the completion pipeline for the word at that
//! offset.
//!
//! Usage:
//!   cargo run -p annotate -- --keywords keywords.json --text draft.txt
//!   cargo run -p annotate -- --keywords keywords.json --text draft.txt --cursor 42
//!   cargo run -p annotate -- --keywords keywords.json --text draft.txt --json

use clap::Parser;
use libmention_pinyin::keywords_from_json;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "annotate")]
#[command(about = "Annotate a text file against a keyword set")]
struct Args {
    /// JSON file with the keyword list: [{"name", "category", "description"?}]
    #[arg(short, long)]
    keywords: PathBuf,

    /// Text file to annotate
    #[arg(short, long)]
    text: PathBuf,

    /// Byte offset of the cursor; also runs the completion pipeline
    #[arg(short, long)]
    cursor: Option<usize>,

    /// Emit spans as JSON instead of human-readable lines
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let keyword_json = std::fs::read_to_string(&args.keywords)
        .map_err(|e| anyhow::anyhow!("Failed to read keyword file: {}", e))?;
    let keywords = keywords_from_json(&keyword_json)
        .map_err(|e| anyhow::anyhow!("Failed to parse keyword file: {}", e))?;

    let buffer = std::fs::read_to_string(&args.text)
        .map_err(|e| anyhow::anyhow!("Failed to read text file: {}", e))?;

    let engine = libmention_pinyin::engine();

    let fragment = args
        .cursor
        .and_then(|cursor| engine.locate_fragment(&buffer, cursor));
    let highlights = engine.annotate(&buffer, &keywords, None, fragment.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&highlights)?);
    } else {
        println!(
            "{} keywords, {} highlight spans",
            keywords.len(),
            highlights.len()
        );
        for span in &highlights {
            println!(
                "  [{}..{}) {:?} '{}'",
                span.start,
                span.end,
                span.kind,
                &buffer[span.start..span.end]
            );
        }
    }

    if let Some(cursor) = args.cursor {
        match engine.find_matches_at(&buffer, cursor, &keywords) {
            Some(result) => {
                println!(
                    "completion for '{}' at [{}..{}):",
                    result.fragment.text, result.fragment.start, result.fragment.end
                );
                for (idx, kw) in result.matches.iter().enumerate() {
                    println!("  {}. {:?} '{}'", idx + 1, kw.category, kw.name);
                }
                println!("  ghost suffix: '{}'", result.ghost_suffix);

                let (spliced, new_cursor) = result.apply_to(&buffer);
                println!("  accepted -> cursor {}: {}", new_cursor, spliced.trim_end());
            }
            None => println!("no completion at offset {}", cursor),
        }
    }

    Ok(())
}
