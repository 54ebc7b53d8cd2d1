//! Spell checking of documentation text.
//!
//! Dictionary lookup is a plain set of words loaded from files. An unknown
//! word then goes through the project word lists and the classifier bank,
//! which decide whether it is a real error or a technical term.

pub mod checker;
pub mod dictionary;
pub mod levenshtein;
pub mod suggest;

pub use checker::{SpellChecker, SpellingError};
pub use dictionary::{BuiltinDictionary, SpellingDictionary};
pub use suggest::{Suggestion, SuggestionEngine};
