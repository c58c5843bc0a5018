//! Console demo
//!
//! This example demonstrates:
//! - Evaluating single conditions, including null handling and negation
//! - Evaluating an OR tree against mixed-type samples
//! - An editing session: passes that request edits, draining, description
//!
//! Run with `RUST_LOG=filtree_runtime=debug` to see the edit queue at work.

use filtree_sdk::{
    ComparisonOperator, Condition, ConstVariable, EditAction, FilterBuilder, FilterConfig,
    FilterEditor, FilterEditorBuilder, FilterNode, Value, VariableSet,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Filtree Console Demo ===\n");

    let equals_null = Condition::new(ComparisonOperator::Equal, Value::Null);
    let not_equals_null_negated =
        Condition::new(ComparisonOperator::NotEqual, Value::Null).with_negate(true);

    test_condition(&equals_null, Value::Null);
    test_condition(&not_equals_null_negated, Value::Null);

    // (arg == 1) OR !(arg >= 3)
    let expr = FilterBuilder::or()
        .compare("arg", ComparisonOperator::Equal, 1)
        .compare_not("arg", ComparisonOperator::GreaterOrEqual, 3)
        .build();

    for sample in [
        Value::from(1),
        Value::from(2),
        Value::from(3),
        Value::from("nazdar"),
        Value::Null,
    ] {
        test_tree(&expr, sample);
    }

    println!("\n=== Editing Session ===\n");
    editing_session()?;

    Ok(())
}

fn test_condition(condition: &Condition, arg: Value) {
    println!("----------------------");
    let result = condition.evaluate(&arg);
    println!("Describe: {}", condition.describe(&arg.literal()));
    println!("Result: {}", result);
}

/// Evaluate `expr` with a single variable named after the sample's literal
fn test_tree(expr: &FilterNode, arg: Value) {
    println!("----------------------");
    let variables: VariableSet<()> =
        VariableSet::new().with(ConstVariable::new("arg", arg.literal(), arg));
    let result = expr.evaluate(&variables, &());
    println!("Describe: {}", expr.describe(&variables));
    println!("Result: {}", result);
}

fn editing_session() -> anyhow::Result<()> {
    let editor: FilterEditor<()> = FilterEditorBuilder::new()
        .with_config(FilterConfig::new().trace_evaluations(true))
        .add_variable(ConstVariable::new("var1", "var1", "hello"))
        .add_variable(ConstVariable::new("var2", "var2", 42))
        .with_root(
            FilterBuilder::or()
                .compare("var1", ComparisonOperator::StartsWith, "he")
                .group(
                    FilterBuilder::and()
                        .compare("var1", ComparisonOperator::Equal, "hello")
                        .compare("var2", ComparisonOperator::Equal, 42),
                )
                .build(),
        )
        .build()?;

    println!("Initial:  {}", editor.describe()?);
    println!("Result:   {}", editor.evaluate(&())?);

    // first pass: show the tree, wrap the first leaf into an AND branch
    let mut wrapped = None;
    editor.pass(|node, depth| {
        let actions = editor.actions(node);
        println!("{}{:?} {:?}", "  ".repeat(depth), node.kind(), actions);
        if wrapped.is_none() && actions.contains(&EditAction::WrapInAnd) {
            wrapped = Some(node.clone());
        }
    })?;
    if let Some(node) = wrapped {
        if let Some(added) = editor.apply(&node, EditAction::WrapInAnd)? {
            editor.select_variable(&added, "var2")?;
        }
    }
    println!("Wrapped:  {}", editor.describe()?);

    // second pass: remove every leaf reading var2
    let mut requests = Vec::new();
    editor.pass(|node, _depth| {
        if node.variable_id().as_deref() == Some("var2")
            && editor.actions(node).contains(&EditAction::Remove)
        {
            requests.push(editor.apply(node, EditAction::Remove));
        }
    })?;
    for request in requests {
        request?;
    }
    println!("Removed:  {}", editor.describe()?);
    println!("Result:   {}", editor.evaluate(&())?);

    Ok(())
}
