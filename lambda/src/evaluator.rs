//! Beta/eta rewriting and the normalization driver.
//!
//! A pass rewrites bottom-up in a single traversal: children first, then the
//! rule for the node itself (eta at an abstraction, beta at an application).
//! The result of a beta step is not rescanned within the same pass. The driver
//! repeats passes until one leaves the term syntactically unchanged.
//!
//! All traversals recurse on term depth, a few native stack frames per level of
//! nesting, and no depth limit is enforced. A term nested tens of thousands of
//! levels deep, such as a Church numeral in that range, overflows the 2 MiB
//! stack of a spawned thread and can overflow the 8 MiB main-thread stack too.
//! Normalize such terms on a thread built with a larger
//! [`stack_size`](std::thread::Builder::stack_size).

use log::{debug, trace};

use crate::{
    free_vars::occurs_free,
    prelude::*,
    subst::{substitute, Substitution},
};

#[derive(PartialEq, Eq, Clone, Copy, derive_more::Display, Debug)]
pub enum Redex {
    #[display(fmt = "beta")]
    Beta,
    #[display(fmt = "eta")]
    Eta,
}

/// `(lambda x. body) arg` rewrites to `body[x := arg]`. Any other function
/// position leaves the application as is.
pub fn beta_reduce(lhs: &TermRef, rhs: &TermRef) -> (Term, bool) {
    match lhs.as_ref() {
        Term::Abstract(param, body) => {
            let subst = Substitution::new(param.clone(), rhs.clone());
            trace!("{} at {}", Redex::Beta, subst);
            (substitute(body, &subst), true)
        }
        _ => (Term::Apply(lhs.clone(), rhs.clone()), false),
    }
}

/// `lambda x. (f x)` rewrites to `f` when `x` is not free in `f`.
pub fn eta_reduce(param: &Identifier, body: &TermRef) -> (Term, bool) {
    if let Term::Apply(lhs, rhs) = body.as_ref() {
        if rhs.as_variable() == Some(param) && !occurs_free(param, lhs) {
            trace!("{} at binder {}", Redex::Eta, param);
            return (lhs.as_ref().clone(), true);
        }
    }
    (Term::Abstract(param.clone(), body.clone()), false)
}

/// One bottom-up reduction pass over the whole term.
pub fn reduce_once(term: &Term) -> Term {
    match term {
        Term::Variable(_) => term.clone(),
        Term::Abstract(param, body) => eta_reduce(param, &reduce_once(body).into()).0,
        Term::Apply(lhs, rhs) => {
            beta_reduce(&reduce_once(lhs).into(), &reduce_once(rhs).into()).0
        }
    }
}

impl Term {
    pub fn is_irreducible(&self) -> bool {
        reduce_once(self) == *self
    }
}

/// Configures the normalization driver.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    max_passes: Option<usize>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up with [`Error::DidNotConverge`] when the term still changes after
    /// this many rewriting passes.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }

    pub fn max_passes(&self) -> Option<usize> {
        self.max_passes
    }

    /// Runs passes until the term stops changing. Only passes that rewrite the
    /// term count against the budget, so `with_max_passes(n)` accepts any term
    /// that settles after `n` rewriting passes.
    pub fn normalize(&self, term: &Term) -> Result<Term> {
        match run_passes(term, self.max_passes) {
            (term, Outcome::Normal { passes }) => {
                debug!("normal form after {passes} rewriting passes: {term}");
                Ok(term)
            }
            (term, Outcome::OutOfPasses { passes }) => {
                debug!("gave up after {passes} passes, term size {}", term.size());
                Err(Error::DidNotConverge { passes })
            }
        }
    }
}

enum Outcome {
    Normal { passes: usize },
    OutOfPasses { passes: usize },
}

/// The pass loop shared by [`Normalizer::normalize`] and [`evaluate`].
/// `OutOfPasses` is only produced when `max_passes` is set.
fn run_passes(term: &Term, max_passes: Option<usize>) -> (Term, Outcome) {
    let mut term = term.clone();
    let mut passes = 0;
    loop {
        let next = reduce_once(&term);
        if next == term {
            return (term, Outcome::Normal { passes });
        }
        if max_passes.map_or(false, |max| passes >= max) {
            return (term, Outcome::OutOfPasses { passes });
        }
        passes += 1;
        trace!("pass {passes}: {next}");
        term = next;
    }
}

/// Reduces `term` to normal form. Does not return if the term keeps changing
/// under reduction; use a bounded [`Normalizer`] for untrusted input.
pub fn evaluate(term: &Term) -> Term {
    run_passes(term, None).0
}
