//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kijun crate.
//!
//! # Example
//!
//! ```rust
//! use kijun::prelude::*;
//!
//! struct Phrase {
//!     search_value: String,
//! }
//!
//! kijun::reflect!(Phrase { "searchValue" => search_value });
//!
//! # fn run_example() -> Result<()> {
//! let rule = Rule::new("searchValue", "Contains", "ants")?;
//! let predicate = kijun::compile::<Phrase>(&rule)?;
//!
//! let phrase = Phrase { search_value: "I got ants!".to_string() };
//! assert!(predicate.evaluate(&phrase));
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Core compilation and evaluation
pub use crate::compiler::{CompilerBuilder, CompilerConfig, Comparison, PredicateCompiler};
pub use crate::evaluator::{CompiledPredicate, Evaluation};
pub use crate::rule::Rule;

// Type descriptors
pub use crate::schema::{Capability, FieldDescriptor, FieldType, Reflect, Schema};

// Error types
pub use crate::error::{CoercionError, CompileError, RuleError};

// Trace formatting
pub use crate::trace::{EvaluationTrace, TraceFormatter};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
