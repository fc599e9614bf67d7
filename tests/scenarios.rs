use memcalc::{BANNER, RunOptions, run, run_script};

const QUIET: RunOptions = RunOptions { prompts: false };

fn transcript(script: &str) -> String {
    run_script(script, &QUIET).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

#[test]
fn addition_then_memory_recall() {
    let output = transcript("10\n+\n5\nmi\nmr\n+\n5\nmc\nquit\n");
    assert_eq!(output, "=15\n15\n=20\n");
}

#[test]
fn factorial_needs_no_right_operand() {
    assert_eq!(transcript("7\n!\nmc\nquit\n"), "=5040\n");
}

#[test]
fn division_by_zero_keeps_left_operand() {
    let output = transcript("4\n/\n0\n*\n2\nmc\nquit\n");
    assert_eq!(output, "Error: Division by zero.\n=8\n");
}

#[test]
fn tokens_may_share_a_line() {
    assert_eq!(transcript("10 + 5\nmi quit"), transcript("10\n+\n5\nmi\nquit\n"));
}

#[test]
fn reuse_echoes_the_result() {
    let output = transcript("2 ^ 3 mc reuse ^ 2 mc quit");
    assert_eq!(output, "=8\n8\n=64\n");
}

#[test]
fn unknown_commands_are_notices() {
    let output = transcript("1 + 1 what again quit");
    assert_eq!(output,
               "=2\ncommand unknown, program will go on\ncommand unknown: 'again', type \
                'restart', 'reuse', 'mr' or 'quit'\n");
}

#[test]
fn end_of_input_ends_quietly() {
    assert_eq!(transcript("3 *"), "");
    assert_eq!(transcript(""), "");
}

#[test]
fn nothing_is_read_after_quit() {
    assert_eq!(transcript("1 + 2 mc quit 5 + 5 mc quit"), "=3\n");
}

#[test]
fn restart_starts_a_fresh_calculation() {
    let output = transcript("5 - 8 mi restart 2 * 3 keep mr * 2 mc quit");
    assert_eq!(output,
               "=-3\n=6\ncommand unknown, program will go on\n-3\n=-6\n");
}

#[test]
fn prompts_and_banner_are_written_when_enabled() {
    let output = run_script("7\n!\nmi\nquit\n", &RunOptions::default()).unwrap();

    assert!(output.starts_with(BANNER));
    assert!(output.contains("number> "));
    assert!(output.contains("operator> "));
    assert!(output.contains("=5040\n"));
    assert!(output.contains("Type 'mi' to insert the number into memory"));
    assert!(output.contains("'quit' to quit: "));
}

#[test]
fn one_prompt_per_line_of_input() {
    let output = run_script("10 + 5\nmc\nquit\n", &RunOptions::default()).unwrap();
    assert_eq!(output.matches("number> ").count(), 1);
    assert_eq!(output.matches("operator> ").count(), 0);
}

#[test]
fn invalid_utf8_is_an_unknown_word() {
    let mut output = Vec::new();
    run(&b"10 + \xff 5\nmc quit\n"[..], &mut output, &QUIET).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(),
               "Error: Expected a number, but found '\u{fffd}'.\n=15\n");

    let mut output = Vec::new();
    run(&b"10 + 5\n\xff\nmi\nquit\n"[..], &mut output, &QUIET).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(),
               "=15\ncommand unknown, program will go on\ncommand unknown: 'mi', type 'restart', \
                'reuse', 'mr' or 'quit'\n");
}
