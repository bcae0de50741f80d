use std::rc::Rc;

use crate::{free_vars::free_variables, prelude::*};

/// `[target := replacement]`: replace the free occurrences of `target`.
#[derive(PartialEq, Eq, Clone, derive_more::Display, Debug)]
#[display(fmt = "[{target} := {replacement}]")]
pub struct Substitution {
    target: Identifier,
    replacement: TermRef,
    // free variables of `replacement`, consulted at every binder
    free: Identifiers,
}

impl Substitution {
    pub fn new(target: Identifier, replacement: impl Into<TermRef>) -> Self {
        let replacement = replacement.into();
        let free = free_variables(&replacement);
        Self {
            target,
            replacement,
            free,
        }
    }

    /// Like [`Substitution::new`], for callers holding the target as a term.
    pub fn of(variable: &Term, replacement: impl Into<TermRef>) -> Result<Self> {
        let target = variable
            .as_variable()
            .ok_or_else(|| Error::NotAVariable(variable.to_string()))?;
        Ok(Self::new(target.clone(), replacement))
    }

    pub fn target(&self) -> &Identifier {
        &self.target
    }

    pub fn replacement(&self) -> &Term {
        &self.replacement
    }
}

/// Capture-avoiding substitution. A binder that occurs free in the replacement
/// is first renamed to a fresh shadow of itself, so free variables of the
/// replacement stay free in the result.
pub fn substitute(term: &Term, subst: &Substitution) -> Term {
    match term {
        Term::Variable(id) if *id == subst.target => subst.replacement.as_ref().clone(),
        Term::Variable(_) => term.clone(),
        Term::Abstract(param, _) if *param == subst.target => term.clone(),
        Term::Abstract(param, body) if subst.free.contains(param) => {
            let used = body.identifiers();
            let fresh = param.fresh_shadow(|id| {
                id == param || *id == subst.target || subst.free.contains(id) || used.contains(id)
            });
            let (param, body) = rename_binder(param, body, &fresh);
            Term::Abstract(param, substitute(&body, subst).into())
        }
        Term::Abstract(param, body) => {
            Term::Abstract(param.clone(), substitute(body, subst).into())
        }
        Term::Apply(lhs, rhs) => Term::Apply(
            substitute(lhs, subst).into(),
            substitute(rhs, subst).into(),
        ),
    }
}

/// `lambda old. body` becomes `lambda new. body[old := new]`.
pub(crate) fn rename_binder(old: &Identifier, body: &Term, new: &Identifier) -> (Identifier, Term) {
    let subst = Substitution::new(old.clone(), Term::Variable(new.clone()));
    (new.clone(), substitute(body, &subst))
}

/// Renames the first binder of `old` (together with its bound uses) to `new`.
/// Only one binder changes per call; on an application the function side is
/// tried before the argument side. The flag reports whether anything changed.
pub fn rename(term: &Term, old: &Identifier, new: &Identifier) -> (Term, bool) {
    match term {
        Term::Variable(_) => (term.clone(), false),
        Term::Abstract(param, body) if param == old => {
            let (param, body) = rename_binder(param, body, new);
            (Term::Abstract(param, body.into()), true)
        }
        Term::Abstract(param, body) => {
            let (body, changed) = rename(body, old, new);
            if changed {
                (Term::Abstract(param.clone(), body.into()), true)
            } else {
                (term.clone(), false)
            }
        }
        Term::Apply(lhs, rhs) => {
            let (renamed, changed) = rename(lhs, old, new);
            if changed {
                return (Term::Apply(renamed.into(), Rc::clone(rhs)), true);
            }
            let (renamed, changed) = rename(rhs, old, new);
            if changed {
                (Term::Apply(Rc::clone(lhs), renamed.into()), true)
            } else {
                (term.clone(), false)
            }
        }
    }
}
