//! # Kijun - Rule Compilation Engine
//!
//! **Kijun** compiles declarative `(field, operator, value)` rules into typed,
//! reusable predicates over your own data types. Resolution and coercion happen
//! once, at compile time; evaluating a compiled predicate is a field read plus
//! one comparison.
//!
//! ## Core Workflow
//!
//! 1.  **Describe Your Type**: Register the readable fields of a struct with the
//!     [`reflect!`] macro (or build a [`Schema`](schema::Schema) by hand).
//! 2.  **Write a Rule**: A [`Rule`](rule::Rule) is a plain triple such as
//!     `("Age", "LessThanOrEqual", "33")`.
//! 3.  **Compile**: The [`PredicateCompiler`](compiler::PredicateCompiler) resolves the
//!     field, resolves the operator (one of six built-in comparisons, otherwise a
//!     named capability of the field's type such as `Contains`), and parses the
//!     target value into the type the operator needs.
//! 4.  **Evaluate**: Call the [`CompiledPredicate`](evaluator::CompiledPredicate) against any
//!     number of instances, from any number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use kijun::prelude::*;
//!
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! kijun::reflect!(User {
//!     "Name" => name,
//!     "Age" => age,
//! });
//!
//! fn main() -> Result<()> {
//!     let rule = Rule::new("Age", "LessThanOrEqual", "33")?;
//!     let predicate = PredicateCompiler::new().compile::<User>(&rule)?;
//!
//!     let adam = User { name: "Adam".to_string(), age: 13 };
//!     let dbag = User { name: "DBag".to_string(), age: 53 };
//!     assert!(predicate.evaluate(&adam));
//!     assert!(!predicate.evaluate(&dbag));
//!
//!     let contains = PredicateCompiler::new()
//!         .compile::<User>(&Rule::new("Name", "Contains", "da")?)?;
//!     let evaluation = contains.explain(&adam);
//!     assert!(evaluation.matched);
//!     assert_eq!(evaluation.reason, r#"Name (was "Adam") Contains "da""#);
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod prelude;
pub mod rule;
pub mod schema;
pub mod trace;

use compiler::PredicateCompiler;
use error::CompileError;
use evaluator::CompiledPredicate;
use rule::Rule;
use schema::Reflect;

/// Compiles `rule` against `T` with the default compiler configuration.
pub fn compile<T: Reflect>(rule: &Rule) -> Result<CompiledPredicate<T>, CompileError> {
    PredicateCompiler::new().compile(rule)
}
