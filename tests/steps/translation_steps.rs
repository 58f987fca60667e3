//! Steps driving the harness against recording and `idxtool` targets.

use cmdmatrix::{
    ArgumentDefinition, ArgumentGroup, AssertionFailure, CombinationReport, CommandTarget,
    Execution, GeneratedCase, Harness,
    fixture_file::{ArgumentGroups, FileFixture},
};
use cucumber::{World, given, then, when};
use test_support::RecordingTarget;

use super::list;

#[derive(Debug, Clone)]
enum TargetKind {
    Recording(RecordingTarget),
    Idxtool,
}

impl Default for TargetKind {
    fn default() -> Self {
        Self::Recording(RecordingTarget::default())
    }
}

impl CommandTarget for TargetKind {
    fn execute(&mut self, tokens: &[String]) -> Execution {
        match self {
            Self::Recording(target) => target.execute(tokens),
            Self::Idxtool => {
                let outcome = idxtool::run(tokens);
                Execution {
                    forwarded: outcome.forwarded,
                    console: outcome.console,
                }
            }
        }
    }
}

type TargetFactory = Box<dyn Fn() -> TargetKind>;

#[derive(Debug, Default, World)]
pub struct TranslationWorld {
    target: TargetKind,
    required: Vec<ArgumentGroup>,
    optional: Vec<ArgumentGroup>,
    cases: Vec<GeneratedCase>,
    report: Option<CombinationReport>,
    execution: Option<Execution>,
}

impl TranslationWorld {
    fn harness(&self) -> Harness<FileFixture<TargetFactory>> {
        let groups = ArgumentGroups {
            required: self.required.clone(),
            optional: self.optional.clone(),
        };
        let target = self.target.clone();
        Harness::new(FileFixture::new(groups, Box::new(move || target.clone())))
    }

    fn report(&self) -> &CombinationReport {
        self.report
            .as_ref()
            .unwrap_or_else(|| panic!("no combinations were run - test setup error"))
    }
}

fn single(pattern: &str, output: &str) -> ArgumentGroup {
    ArgumentGroup::new(vec![ArgumentDefinition::new(pattern, list(output))])
}

#[given(expr = "a required argument {string} expecting {string}")]
fn a_required_argument(world: &mut TranslationWorld, pattern: String, output: String) {
    world.required.push(single(&pattern, &output));
}

#[given(expr = "an optional argument {string} expecting {string}")]
fn an_optional_argument(world: &mut TranslationWorld, pattern: String, output: String) {
    world.optional.push(single(&pattern, &output));
}

#[given(expr = "the target canonicalises {string} to {string}")]
fn the_target_canonicalises(world: &mut TranslationWorld, alias: String, canonical: String) {
    let TargetKind::Recording(target) = std::mem::take(&mut world.target) else {
        panic!("aliases apply to the recording target only");
    };
    world.target = TargetKind::Recording(target.with_alias(&alias, &canonical));
}

#[given("the idxtool target")]
fn the_idxtool_target(world: &mut TranslationWorld) {
    world.target = TargetKind::Idxtool;
}

#[when("every valid combination is run")]
fn every_valid_combination_is_run(world: &mut TranslationWorld) {
    let harness = world.harness();
    world.cases = harness.generate_cases();
    world.report = Some(harness.run_all_valid_combinations());
}

#[when(expr = "the command {string} is executed")]
fn the_command_is_executed(world: &mut TranslationWorld, command: String) {
    world.execution = Some(world.harness().execute(&command));
}

#[then(expr = "the command {string} expecting {string} is generated")]
fn the_command_is_generated(world: &mut TranslationWorld, command: String, expected: String) {
    let wanted = GeneratedCase {
        command,
        expected: list(&expected),
    };
    assert!(world.cases.contains(&wanted), "{:?} not in {:?}", wanted, world.cases);
}

#[then("every case passes")]
fn every_case_passes(world: &mut TranslationWorld) {
    let report = world.report();
    assert!(report.cases_run > 0);
    assert!(report.passed(), "{:?}", report.failures);
}

#[then(expr = "the case {string} fails at index {int}")]
fn the_case_fails_at_index(world: &mut TranslationWorld, command: String, index: usize) {
    let failure = world
        .report()
        .failures
        .iter()
        .find(|f| f.case.command == command)
        .unwrap_or_else(|| panic!("`{command}` did not fail"));
    match &failure.failure {
        AssertionFailure::TokenMismatch { index: actual, .. } => assert_eq!(*actual, index),
        other => panic!("expected a token mismatch, got {other}"),
    }
}

#[then(expr = "{int} case fails")]
fn cases_fail(world: &mut TranslationWorld, count: usize) {
    assert_eq!(world.report().failures.len(), count);
}

#[then(expr = "the console contains {string}")]
fn the_console_contains(world: &mut TranslationWorld, fragment: String) {
    let console = world.execution.as_ref().map_or("", |e| e.console.as_str());
    assert!(console.contains(&fragment), "{console}");
}

#[then("nothing is forwarded")]
fn nothing_is_forwarded(world: &mut TranslationWorld) {
    let execution = world
        .execution
        .as_ref()
        .unwrap_or_else(|| panic!("no command was executed - test setup error"));
    assert_eq!(execution.forwarded, None);
}
