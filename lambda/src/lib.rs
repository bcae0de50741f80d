//! A symbolic engine for the untyped lambda calculus.
//!
//! Terms are immutable values compared syntactically. The construction API in
//! [`construct`] keeps every term it builds in beta/eta normal form; the lower
//! level rewriting functions ([`subst`], [`evaluator`], [`unshadow`]) work on
//! arbitrary terms.

pub mod construct;
pub mod error;
pub mod evaluator;
pub mod free_vars;
pub mod prelude;
pub mod subst;
pub mod term;
pub mod unshadow;

pub use construct::{apply, full_simplify, lambda, lambdas, var};
pub use error::{Error, Result};
pub use evaluator::{evaluate, Normalizer, Redex};
pub use free_vars::free_variables;
pub use subst::Substitution;
pub use term::{Identifier, Term};
