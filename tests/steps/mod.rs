//! Step definitions for the behavioural scenarios.

mod expansion_steps;
mod tokenize_steps;
mod translation_steps;

pub use expansion_steps::ExpansionWorld;
pub use tokenize_steps::TokenizeWorld;
pub use translation_steps::TranslationWorld;

/// Split a comma-separated step argument; the empty string yields nothing.
pub(crate) fn list(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(str::to_owned).collect()
}
