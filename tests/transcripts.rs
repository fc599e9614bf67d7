use std::fs;

use memcalc::{RunOptions, run_script};
use walkdir::WalkDir;

#[test]
fn recorded_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/transcripts").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (input, expected)) in extract_pairs(&content).into_iter().enumerate() {
            count += 1;
            let actual = run_script(&input, &RunOptions { prompts: false })
                .unwrap_or_else(|e| panic!("Transcript {} in {:?} failed: {e}", i + 1, path));
            assert_eq!(actual, expected, "Transcript {} in {:?}:\n{}", i + 1, path, input);
        }
    }

    assert!(count > 0, "No transcripts found in tests/transcripts");
}

/// Collects consecutive ```input / ```output block pairs.
fn extract_pairs(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut pending_input: Option<String> = None;
    let mut inside: Option<&str> = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if inside.is_none() {
            if trimmed.starts_with("```input") {
                inside = Some("input");
                buf.clear();
            } else if trimmed.starts_with("```output") {
                inside = Some("output");
                buf.clear();
            }
            continue;
        }
        if trimmed.starts_with("```") {
            match inside.take() {
                Some("input") => pending_input = Some(buf.clone()),
                Some(_) => {
                    if let Some(input) = pending_input.take() {
                        pairs.push((input, buf.clone()));
                    }
                },
                None => {},
            }
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    pairs
}
