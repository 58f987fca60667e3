//! Steps exercising alternative expansion and the cross products.

use cmdmatrix_lib::{ArgumentDefinition, ArgumentGroup, Expander, TestCase};
use cucumber::{World, given, then, when};

#[derive(Debug, Default, World)]
pub struct ExpansionWorld {
    argument: Option<ArgumentDefinition>,
    expanded: Vec<ArgumentDefinition>,
    required: Vec<ArgumentGroup>,
    optional: Vec<ArgumentGroup>,
    cases: Vec<TestCase>,
}

fn single(pattern: &str) -> ArgumentGroup {
    ArgumentGroup::new(vec![ArgumentDefinition::new(pattern, [pattern])])
}

#[given(expr = "the argument {string} with output {string}")]
fn the_argument(world: &mut ExpansionWorld, pattern: String, output: String) {
    world.argument = Some(ArgumentDefinition::new(pattern, [output]));
}

#[given(expr = "a required group {string}")]
fn a_required_group(world: &mut ExpansionWorld, pattern: String) {
    world.required.push(single(&pattern));
}

#[given("an empty required group")]
fn an_empty_required_group(world: &mut ExpansionWorld) {
    world.required.push(ArgumentGroup::default());
}

#[given(expr = "an optional group {string}")]
fn an_optional_group(world: &mut ExpansionWorld, pattern: String) {
    world.optional.push(single(&pattern));
}

#[when("its alternatives are expanded")]
fn its_alternatives_are_expanded(world: &mut ExpansionWorld) {
    let Some(argument) = world.argument.as_ref() else {
        panic!("no argument declared - test setup error");
    };
    world.expanded = Expander::default().expand_alternatives(argument);
}

#[when("the required cases are generated")]
fn the_required_cases_are_generated(world: &mut ExpansionWorld) {
    world.cases = Expander::default().required_cases(&world.required);
}

#[when("the optional cases are generated")]
fn the_optional_cases_are_generated(world: &mut ExpansionWorld) {
    world.cases = Expander::default().optional_cases(&world.optional);
}

#[then(expr = "the patterns are {string}")]
fn the_patterns_are(world: &mut ExpansionWorld, expected: String) {
    let patterns: Vec<&str> = world
        .expanded
        .iter()
        .map(ArgumentDefinition::input_pattern)
        .collect();
    assert_eq!(patterns, expected.split(',').collect::<Vec<_>>());
}

#[then(expr = "every expanded output is {string}")]
fn every_expanded_output_is(world: &mut ExpansionWorld, expected: String) {
    assert!(
        world
            .expanded
            .iter()
            .all(|arg| arg.output() == [expected.clone()]),
        "{:?}",
        world.expanded
    );
}

#[then(expr = "{int} cases are generated")]
fn cases_are_generated(world: &mut ExpansionWorld, count: usize) {
    assert_eq!(world.cases.len(), count);
}

#[then("one case is empty")]
fn one_case_is_empty(world: &mut ExpansionWorld) {
    assert_eq!(world.cases.iter().filter(|c| c.is_empty()).count(), 1);
}
