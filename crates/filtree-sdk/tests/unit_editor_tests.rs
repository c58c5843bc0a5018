//! Unit tests for filter editing sessions
//!
//! Drives FilterEditor the way a front end does: one pass per frame, edits
//! requested during a pass and applied at the start of the next

use filtree_sdk::{
    ComparisonOperator, EditAction, FieldVariable, FilterBuilder, FilterConfig, FilterEditor,
    FilterEditorBuilder, FilterNode, NodeKind, Value, ValueInput, ValueType,
};
use serde_json::json;

fn json_editor() -> anyhow::Result<FilterEditor<serde_json::Value>> {
    let editor = FilterEditorBuilder::new()
        .add_variable(FieldVariable::new("age", "Age", ValueType::Number))
        .add_variable(FieldVariable::new("city", "City", ValueType::String))
        .with_root(
            FilterBuilder::and()
                .compare("age", ComparisonOperator::GreaterOrEqual, 18)
                .compare("city", ComparisonOperator::Equal, "Prague")
                .build(),
        )
        .build()?;
    Ok(editor)
}

fn leaves(editor: &FilterEditor<serde_json::Value>) -> Vec<FilterNode> {
    let mut found = Vec::new();
    editor.root().walk(&mut |node, _| {
        if node.is_leaf() {
            found.push(node.clone());
        }
    });
    found
}

// =============================================================================
// Passes
// =============================================================================

#[test]
fn test_edits_show_on_next_pass() -> anyhow::Result<()> {
    let editor = json_editor()?;

    let mut seen = 0;
    editor.pass(|node, _| {
        seen += 1;
        if node.variable_id().as_deref() == Some("age") {
            editor.apply(node, EditAction::AddSibling).unwrap();
        }
    })?;
    assert_eq!(seen, 3);

    let mut seen = 0;
    editor.pass(|_, _| seen += 1)?;
    assert_eq!(seen, 4);
    assert_eq!(editor.root().child_count(), 3);
    Ok(())
}

#[test]
fn test_wrap_during_pass() -> anyhow::Result<()> {
    let editor = json_editor()?;

    editor.pass(|node, depth| {
        if depth == 1 && node.variable_id().as_deref() == Some("city") {
            let added = editor.apply(node, EditAction::WrapInOr).unwrap().unwrap();
            added
                .update_condition(|c| c.value = Value::from("Brno"))
                .unwrap();
        }
    })?;

    assert_eq!(
        editor.describe()?,
        "(Age >= 18) AND ((City == \"Prague\") OR (City == \"Brno\"))"
    );
    assert!(editor.evaluate(&json!({"age": 30, "city": "Brno"}))?);
    assert!(!editor.evaluate(&json!({"age": 30, "city": "Ostrava"}))?);
    Ok(())
}

#[test]
fn test_remove_until_single_leaf() -> anyhow::Result<()> {
    let editor = json_editor()?;
    let root_id = editor.root().id();

    editor.pass(|node, _| {
        if node.variable_id().as_deref() == Some("age") {
            editor.apply(node, EditAction::Remove).unwrap();
        }
    })?;
    editor.drain()?;

    let root = editor.root();
    assert_eq!(root.id(), root_id);
    assert_eq!(root.kind(), NodeKind::Leaf);
    assert!(editor.actions(root).iter().all(|a| *a != EditAction::Remove));
    assert_eq!(editor.describe()?, "City == \"Prague\"");
    Ok(())
}

// =============================================================================
// Field Editing
// =============================================================================

#[test]
fn test_select_variable_and_commit_value() -> anyhow::Result<()> {
    let editor = json_editor()?;
    let city = leaves(&editor)[1].clone();

    editor.select_variable(&city, "age")?;
    let mut input = ValueInput::for_condition(&city.condition().unwrap());
    assert_eq!(input.text(), "Prague");

    // "Prague" was typed for a string variable and is kept until a number parses
    input.set_text("sixty");
    assert!(!editor.commit_value(&city, &mut input)?);
    assert!(input.is_invalid());
    assert_eq!(city.condition().unwrap().value, Value::from("Prague"));

    input.set_text("65");
    city.update_condition(|c| c.operator = ComparisonOperator::LessThan)?;
    assert!(editor.commit_value(&city, &mut input)?);
    assert!(!input.is_invalid());

    assert_eq!(editor.describe()?, "(Age >= 18) AND (Age < 65)");
    assert!(editor.evaluate(&json!({"age": 40}))?);
    assert!(!editor.evaluate(&json!({"age": 70}))?);
    Ok(())
}

#[test]
fn test_commit_value_on_branch_fails() -> anyhow::Result<()> {
    let editor = json_editor()?;
    let mut input = ValueInput::default();
    assert!(editor.commit_value(editor.root(), &mut input).is_err());
    Ok(())
}

#[test]
fn test_variable_choices() -> anyhow::Result<()> {
    let editor = json_editor()?;
    assert_eq!(editor.variable_choices(), vec![("age", "Age"), ("city", "City")]);
    Ok(())
}

#[test]
fn test_removed_variable_reads_null() -> anyhow::Result<()> {
    let mut editor = json_editor()?;
    assert!(editor.variables_mut().remove("city"));

    assert_eq!(editor.describe()?, "(Age >= 18) AND (<none> == \"Prague\")");
    assert!(!editor.evaluate(&json!({"age": 40, "city": "Prague"}))?);
    Ok(())
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_without_drain_before_evaluate() -> anyhow::Result<()> {
    let mut editor = json_editor()?;
    editor = editor.with_config(FilterConfig::new().drain_before_evaluate(false));

    let age = leaves(&editor)[0].clone();
    editor.apply(&age, EditAction::Remove)?;

    // the removal waits for an explicit drain
    assert_eq!(editor.describe()?, "(Age >= 18) AND (City == \"Prague\")");
    editor.drain()?;
    assert_eq!(editor.describe()?, "City == \"Prague\"");
    Ok(())
}

#[test]
fn test_traced_evaluation_matches_plain() -> anyhow::Result<()> {
    let editor = json_editor()?.with_config(FilterConfig::new().trace_evaluations(true));
    let sample = json!({"age": 20, "city": "Prague"});

    let (result, trace) = editor.evaluate_with_trace(&sample)?;
    assert!(result);
    assert_eq!(editor.evaluate(&sample)?, result);
    assert_eq!(trace.group_type.as_deref(), Some("and"));
    assert_eq!(trace.leaf_count(), 2);
    Ok(())
}

#[test]
fn test_prefix_and_label() -> anyhow::Result<()> {
    let editor = json_editor()?.with_config(
        FilterConfig::new()
            .with_variable_prefix("$")
            .with_unresolved_label("?"),
    );
    leaves(&editor)[1].set_variable_id(None)?;

    assert_eq!(editor.describe()?, "($Age >= 18) AND ($? == \"Prague\")");
    Ok(())
}
