//! The construction API. Terms built through it are always held in normal
//! form: `apply` normalizes its result and `lambda` tries eta at the top.

use crate::{
    evaluator::{eta_reduce, evaluate},
    prelude::*,
    subst::{rename, substitute, Substitution},
    unshadow::unshadow,
};

pub fn var(name: impl Into<Identifier>) -> Term {
    Term::var(name)
}

/// `lambda param. body`, eta-reduced at the top if possible.
pub fn lambda(param: impl Into<Identifier>, body: Term) -> Term {
    eta_reduce(&param.into(), &body.into()).0
}

/// Curried abstraction: `lambdas([x, y], b)` is `lambda(x, lambda(y, b))`.
pub fn lambdas<I>(params: impl IntoIterator<Item = I>, body: Term) -> Term
where
    I: Into<Identifier>,
{
    let params: Vec<Identifier> = params.into_iter().map(Into::into).collect();
    params
        .into_iter()
        .rev()
        .fold(body, |body, param| lambda(param, body))
}

/// `(function argument)`, normalized.
pub fn apply(function: Term, argument: Term) -> Term {
    evaluate(&Term::Apply(function.into(), argument.into()))
}

/// Evaluates, then replaces shadow binders with `names`.
pub fn full_simplify(term: &Term, names: &[Identifier]) -> Result<Term> {
    unshadow(&evaluate(term), names)
}

fn expect_variable(term: &Term) -> Result<&Identifier> {
    term.as_variable()
        .ok_or_else(|| Error::NotAVariable(term.to_string()))
}

impl Term {
    pub fn apply(&self, argument: &Term) -> Term {
        apply(self.clone(), argument.clone())
    }

    /// `self[target := replacement]`, normalized.
    pub fn substitute(&self, subst: &Substitution) -> Term {
        evaluate(&substitute(self, subst))
    }

    /// Alpha-renames the first binder of `old` to `new`. Both must be variables.
    pub fn rename(&self, old: &Term, new: &Term) -> Result<Term> {
        let old = expect_variable(old)?;
        let new = expect_variable(new)?;
        Ok(rename(self, old, new).0)
    }

    /// Replaces shadow binders with the given variables, in depth-first order.
    pub fn unshadow(&self, names: &[Term]) -> Result<Term> {
        let names = names
            .iter()
            .map(|name| expect_variable(name).cloned())
            .collect::<Result<Vec<_>>>()?;
        unshadow(self, &names)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_identity() {
        let id = lambda("x", var("x"));
        assert_eq!(id.to_string(), "[lambda x. x]");
        assert_eq!(id.apply(&var("z")), var("z"));
        assert_eq!(apply(id.clone(), id.clone()), id);
    }

    #[test]
    fn test_lambda_eta_at_top_only() {
        assert_eq!(lambda("x", Term::Apply(var("f").into(), var("x").into())), var("f"));
        let inner = Term::Abstract(
            "y".into(),
            Term::Apply(var("g").into(), var("y").into()).into(),
        );
        // the redex inside the body is left alone
        assert_eq!(
            lambda("x", inner.clone()),
            Term::Abstract("x".into(), inner.into())
        );
    }

    #[test]
    fn test_lambdas() {
        assert_eq!(
            lambdas(["x", "y"], var("x")),
            lambda("x", lambda("y", var("x")))
        );
        assert_eq!(lambdas(Vec::<&str>::new(), var("x")), var("x"));
    }

    #[test]
    fn test_substitute_normalizes() {
        // (f x)[f := lambda y. y] = x
        let term = Term::Apply(var("f").into(), var("x").into());
        let subst = Substitution::new("f".into(), lambda("y", var("y")));
        assert_eq!(term.substitute(&subst), var("x"));
    }

    #[test]
    fn test_rename_requires_variables() {
        let term = lambda("x", lambda("y", var("x")));
        let not_var = lambda("z", var("z"));
        assert_eq!(
            term.rename(&not_var, &var("y")),
            Err(Error::NotAVariable(not_var.to_string()))
        );
        assert_eq!(
            term.rename(&var("x"), &not_var),
            Err(Error::NotAVariable(not_var.to_string()))
        );
        assert_eq!(
            term.rename(&var("x"), &var("w")),
            Ok(lambda("w", lambda("y", var("w"))))
        );
    }

    #[test]
    fn test_unshadow_requires_variables() {
        let term = Term::Abstract(Identifier::new("x").shadow(0), var("y").into());
        let not_var = lambda("z", var("z"));
        assert_eq!(
            term.unshadow(&[not_var.clone()]),
            Err(Error::NotAVariable(not_var.to_string()))
        );
        assert_eq!(term.unshadow(&[var("p")]), Ok(lambda("p", var("y"))));
    }

    #[test]
    fn test_full_simplify() {
        // (lambda x. lambda y. (y x)) y = lambda y'. (y' y)
        let term = Term::Apply(
            lambdas(["x", "y"], Term::Apply(var("y").into(), var("x").into())).into(),
            var("y").into(),
        );
        let y1 = Identifier::new("y").shadow(0);
        assert_eq!(
            evaluate(&term),
            Term::Abstract(
                y1.clone(),
                Term::Apply(var(y1).into(), var("y").into()).into()
            )
        );
        assert_eq!(
            full_simplify(&term, &["t".into()]),
            Ok(lambda("t", Term::Apply(var("t").into(), var("y").into())))
        );
        assert_eq!(
            full_simplify(&term, &[]),
            Err(Error::FreshNamesExhausted {
                needed: 1,
                supplied: 0
            })
        );
    }
}
