//! Search workflows, one-shot and interactive

use crate::common::TestEnv;
use crate::reflect;
use anyhow::Result;

fn seed(env: &TestEnv) -> Result<()> {
    reflect!(env, "add", "vim", "gd", "-t", "lsp", "-t", "nav").assert_success()?;
    reflect!(env, "add", "vim", "dd", "-t", "delete", "-t", "line").assert_success()?;
    reflect!(env, "add", "vim", "ciw", "-t", "change", "-t", "word").assert_success()?;
    Ok(())
}

#[test]
fn test_one_shot_search() -> Result<()> {
    let env = TestEnv::new();
    seed(&env)?;

    let hits = reflect!(&env, "search", "vims", "na").assert_success()?;
    assert!(hits.contains_stdout("Results for \"na\": 1 of 3"));
    assert!(hits.contains_stdout("gd"));
    assert!(!hits.contains_stdout("ciw"));

    // Tag substrings are case-sensitive.
    let none = reflect!(&env, "search", "vims", "NAV").assert_success()?;
    assert!(none.contains_stdout("0 of 3"));
    assert!(none.contains_stdout("no matches"));

    let all = reflect!(&env, "search", "vims").assert_success()?;
    assert!(all.contains_stdout("Results for \"\": 3 of 3"));
    Ok(())
}

#[test]
fn test_search_only_matches_tags() -> Result<()> {
    let env = TestEnv::new();
    reflect!(&env, "add", "note", "kubernetes", "-b", "kubectl get pods", "-t", "ops").assert_success()?;

    let result = reflect!(&env, "search", "notes", "kube").assert_success()?;
    assert!(result.contains_stdout("0 of 1"));
    Ok(())
}

#[test]
fn test_interactive_search_shows_only_settled_term() -> Result<()> {
    let env = TestEnv::new();
    seed(&env)?;

    // Both lines arrive well inside one quiet period, so only the last is shown.
    let result = reflect!(&env, "search", "vims", "--interactive", "--delay-ms", "500")
        .stdin("n\nna\n")
        .assert_success()?;

    assert!(result.contains_stdout("Results for \"na\": 1 of 3"));
    assert!(!result.contains_stdout("Results for \"n\":"));
    assert!(result.contains_stdout("gd"));
    Ok(())
}

#[test]
fn test_interactive_empty_line_restores_everything() -> Result<()> {
    let env = TestEnv::new();
    seed(&env)?;

    let result = reflect!(&env, "search", "vims", "-i", "--delay-ms", "500")
        .stdin("na\n\n")
        .assert_success()?;

    assert!(result.contains_stdout("Results for \"\": 3 of 3"));
    assert!(!result.contains_stdout("Results for \"na\""));
    Ok(())
}

#[test]
fn test_interactive_delay_out_of_range() -> Result<()> {
    let env = TestEnv::new();
    seed(&env)?;

    let result = reflect!(&env, "search", "vims", "-i", "--delay-ms", "120000").assert_failure()?;
    assert!(result.contains_stderr("Invalid --delay-ms"));
    assert!(result.contains_stderr("debounce_ms must be between 0 and 60000"));
    Ok(())
}

#[test]
fn test_term_conflicts_with_interactive() -> Result<()> {
    let env = TestEnv::new();
    reflect!(&env, "search", "vims", "gd", "--interactive").assert_failure()?;
    Ok(())
}
