use crate::prelude::*;

/// Variables occurring unbound in `term`, in order of first occurrence with
/// the function side listed before the argument side.
pub fn free_variables(term: &Term) -> Identifiers {
    match term {
        Term::Variable(id) => Identifiers::singleton(id.clone()),
        Term::Abstract(param, body) => free_variables(body).remove_all(param),
        Term::Apply(lhs, rhs) => free_variables(lhs).concat(&free_variables(rhs)).dedup(),
    }
}

pub fn occurs_free(id: &Identifier, term: &Term) -> bool {
    free_variables(term).contains(id)
}
