use std::collections::BTreeSet;

use log::trace;

use crate::{prelude::*, subst::rename_binder};

/// Replaces every shadow binder, in depth-first order, with the next name from
/// `names`. Exactly as many names are consumed as there are shadow binders;
/// a term without shadows comes back unchanged.
///
/// The supply is validated before anything is renamed: consumed names must be
/// named (not shadow) identifiers not ending in `'`, pairwise distinct, and
/// absent from `term`.
pub fn unshadow(term: &Term, names: &[Identifier]) -> Result<Term> {
    let needed = term.shadow_binders();
    if needed > names.len() {
        return Err(Error::FreshNamesExhausted {
            needed,
            supplied: names.len(),
        });
    }
    let names = &names[..needed];
    let used = term.identifiers();
    let mut seen = BTreeSet::new();
    for name in names {
        if name.is_shadow() {
            return Err(Error::ShadowName(name.to_string()));
        }
        if name.to_string().ends_with('\'') {
            return Err(Error::PrimedName(name.to_string()));
        }
        if used.contains(name) {
            return Err(Error::NameInUse(name.to_string()));
        }
        if !seen.insert(name) {
            return Err(Error::DuplicateName(name.to_string()));
        }
    }
    Ok(unshadow_rec(term, names))
}

/// `names` holds exactly one name per shadow binder of `term`.
fn unshadow_rec(term: &Term, names: &[Identifier]) -> Term {
    match term {
        Term::Variable(_) => term.clone(),
        Term::Abstract(param, body) if param.is_shadow() => {
            let (name, rest) = (&names[0], &names[1..]);
            trace!("unshadow {param} -> {name}");
            let (param, body) = rename_binder(param, body, name);
            Term::Abstract(param, unshadow_rec(&body, rest).into())
        }
        Term::Abstract(param, body) => Term::Abstract(param.clone(), unshadow_rec(body, names).into()),
        Term::Apply(lhs, rhs) => {
            let (left, right) = names.split_at(lhs.shadow_binders());
            Term::Apply(unshadow_rec(lhs, left).into(), unshadow_rec(rhs, right).into())
        }
    }
}
