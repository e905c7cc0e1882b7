//! Question content.
//!
//! The bank is read-only at runtime: it is either the built-in set or a JSON
//! file chosen through configuration, validated once at startup.

pub mod bank;

pub use bank::{load_bank, load_bank_from_file, BankError, QuestionBank};
