//! Add, list, show, edit and remove workflows

use crate::common::TestEnv;
use crate::reflect;
use anyhow::{Context, Result};

#[test]
fn test_add_then_list_and_show() -> Result<()> {
    let env = TestEnv::new();

    let added = reflect!(&env, "add", "vim", "gd", "-d", "Go to definition", "-t", "lsp", "-t", "nav")
        .assert_success()?;
    assert!(added.contains_stdout("Added vim"));
    let id = added.parse_record_id().context("no id in add output")?;

    reflect!(&env, "add", "vim", "dd", "-t", "delete").assert_success()?;

    let list = reflect!(&env, "list", "vims").assert_success()?;
    assert!(list.contains_stdout("(2 of 2)"));
    assert!(list.contains_stdout("gd - Go to definition"));
    assert!(list.contains_stdout("[lsp, nav]"));

    let limited = reflect!(&env, "list", "vim", "--limit", "1").assert_success()?;
    assert!(limited.contains_stdout("(1 of 2)"));
    assert!(limited.contains_stdout("dd"));
    assert!(!limited.contains_stdout("gd"));

    // Unique prefix resolves like the full id.
    let show = reflect!(&env, "show", "vims", &id[..10]).assert_success()?;
    assert!(show.contains_stdout(&id));
    assert!(show.contains_stdout("Go to definition"));

    Ok(())
}

#[test]
fn test_empty_collection_lists_nothing() -> Result<()> {
    let env = TestEnv::new();
    let list = reflect!(&env, "list", "notes").assert_success()?;
    assert!(list.contains_stdout("No notes yet"));
    Ok(())
}

#[test]
fn test_add_rejects_missing_required_field() -> Result<()> {
    let env = TestEnv::new();
    let result = reflect!(&env, "add", "vim", "   ").assert_failure()?;
    assert!(result.contains_stderr("vim record requires a non-empty command"));
    Ok(())
}

#[test]
fn test_report_with_date() -> Result<()> {
    let env = TestEnv::new();
    let added = reflect!(
        &env, "add", "report", "Shipped the filter", "--title", "Sprint", "--date", "2024-05-01", "-t", "work"
    )
    .assert_success()?;
    assert!(added.contains_stdout("2024-05-01 Sprint"));

    let bad = reflect!(&env, "add", "report", "x", "--date", "yesterday").assert_failure()?;
    assert!(!bad.success());
    Ok(())
}

#[test]
fn test_edit_updates_fields_and_tags() -> Result<()> {
    let env = TestEnv::new();
    let added = reflect!(&env, "add", "note", "Rust", "-b", "ownership", "-t", "lang")
        .assert_success()?;
    let id = added.parse_record_id().context("no id in add output")?;

    let edited = reflect!(&env, "edit", "note", &id, "--title", "Rust notes", "-t", "rust", "-t", "lang")
        .assert_success()?;
    assert!(edited.contains_stdout("Updated note"));

    let show = reflect!(&env, "show", "note", &id).assert_success()?;
    assert!(show.contains_stdout("Rust notes"));
    assert!(show.contains_stdout("[rust, lang]"));
    assert!(show.contains_stdout("Updated:"));

    reflect!(&env, "edit", "note", &id, "--clear-tags").assert_success()?;
    let show = reflect!(&env, "show", "note", &id).assert_success()?;
    assert!(show.contains_stdout("[]"));

    let nothing = reflect!(&env, "edit", "note", &id).assert_failure()?;
    assert!(nothing.contains_stderr("Nothing to change"));
    Ok(())
}

#[test]
fn test_remove() -> Result<()> {
    let env = TestEnv::new();
    let added = reflect!(&env, "add", "vim", "ciw", "-t", "change").assert_success()?;
    let id = added.parse_record_id().context("no id in add output")?;

    let removed = reflect!(&env, "rm", "vims", &id).assert_success()?;
    assert!(removed.contains_stdout("Removed vim"));

    let gone = reflect!(&env, "show", "vims", &id).assert_failure()?;
    assert!(gone.contains_stderr("no vim matching"));

    reflect!(&env, "rm", "vims", &id).assert_failure()?;
    Ok(())
}

#[test]
fn test_status_counts_records() -> Result<()> {
    let env = TestEnv::new();
    reflect!(&env, "add", "vim", "gg").assert_success()?;
    reflect!(&env, "add", "note", "todo").assert_success()?;

    let status = reflect!(&env, "status").assert_success()?;
    assert!(status.contains_stdout(&env.data_dir().display().to_string()));
    assert!(status.contains_stdout("vims:"));
    assert!(status.contains_stdout("Debounce:      1000 ms"));
    Ok(())
}
