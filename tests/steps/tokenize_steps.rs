//! Steps exercising tokenization and option value extraction.

use cmdmatrix_lib::{option_values, tokenize};
use cucumber::{World, given, then, when};

use super::list;

#[derive(Debug, Default, World)]
pub struct TokenizeWorld {
    input: String,
    tokens: Vec<String>,
    second_pass: Option<Vec<String>>,
    values: Vec<Option<String>>,
}

#[given(expr = "the command string {string}")]
fn the_command_string(world: &mut TokenizeWorld, input: String) {
    world.input = input;
}

#[when("it is tokenized")]
fn it_is_tokenized(world: &mut TokenizeWorld) {
    world.tokens = tokenize(&world.input);
}

#[when("it is tokenized twice")]
fn it_is_tokenized_twice(world: &mut TokenizeWorld) {
    world.tokens = tokenize(&world.input);
    world.second_pass = Some(tokenize(&world.tokens.join(" ")));
}

#[when(expr = "the values of {string} are extracted")]
fn the_values_are_extracted(world: &mut TokenizeWorld, option: String) {
    let tokens = tokenize(&world.input);
    world.values = option_values(&tokens, &option)
        .into_iter()
        .map(|value| value.map(str::to_owned))
        .collect();
}

#[then(expr = "the tokens are {string}")]
fn the_tokens_are(world: &mut TokenizeWorld, expected: String) {
    assert_eq!(world.tokens, list(&expected));
}

#[then("both tokenizations agree")]
fn both_tokenizations_agree(world: &mut TokenizeWorld) {
    assert_eq!(world.second_pass.as_ref(), Some(&world.tokens));
}

#[then(expr = "the values are {string}")]
fn the_values_are(world: &mut TokenizeWorld, expected: String) {
    let expected: Vec<Option<String>> = list(&expected)
        .into_iter()
        .map(|value| (value != "<none>").then_some(value))
        .collect();
    assert_eq!(world.values, expected);
}
