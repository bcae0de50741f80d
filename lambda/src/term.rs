use std::{collections::BTreeSet, rc::Rc};

/// Names a binder. Two identifiers are equal iff they denote the same binder.
///
/// A shadow is minted from a named identifier when a substitution would
/// otherwise capture it. It never equals its origin, nor any shadow of a
/// different generation, and keeps the origin's name around so that
/// [`unshadow`](crate::unshadow::unshadow) can find it again.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub enum Identifier {
    Named(Rc<str>),
    Shadow { origin: Rc<str>, generation: usize },
}

impl Identifier {
    /// A named identifier. Any string is accepted, but a name ending in `'`
    /// renders like a shadow (`Identifier::new("y'")` and the first shadow of
    /// `y` both print as `y'`) while staying a distinct identifier.
    /// [`unshadow`](crate::unshadow::unshadow) refuses such names.
    pub fn new(name: &str) -> Self {
        Identifier::Named(name.into())
    }

    pub fn is_shadow(&self) -> bool {
        matches!(self, Identifier::Shadow { .. })
    }

    /// The named identifier this one was derived from (itself if it is not a shadow).
    pub fn origin(&self) -> Identifier {
        match self {
            Identifier::Named(_) => self.clone(),
            Identifier::Shadow { origin, .. } => Identifier::Named(origin.clone()),
        }
    }

    pub fn shadow(&self, generation: usize) -> Identifier {
        let origin = match self {
            Identifier::Named(name) => name.clone(),
            Identifier::Shadow { origin, .. } => origin.clone(),
        };
        Identifier::Shadow { origin, generation }
    }

    /// The first shadow generation of `self` rejected by none of `avoid`.
    pub fn fresh_shadow(&self, avoid: impl Fn(&Identifier) -> bool) -> Identifier {
        let mut generation = 0;
        loop {
            let candidate = self.shadow(generation);
            if !avoid(&candidate) {
                return candidate;
            }
            generation += 1;
        }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::new(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::Named(name.into())
    }
}

/// Shadows print as their origin followed by `generation + 1` primes.
impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Named(name) => f.write_str(name),
            Identifier::Shadow { origin, generation } => {
                f.write_str(origin)?;
                for _ in 0..=*generation {
                    f.write_str("'")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Term {
    /// `x`
    Variable(Identifier),
    /// `lambda x. t`
    Abstract(Identifier, Rc<Self>),
    /// `t t`
    Apply(Rc<Self>, Rc<Self>),
}

impl Term {
    pub fn var(name: impl Into<Identifier>) -> Self {
        Term::Variable(name.into())
    }

    pub fn as_variable(&self) -> Option<&Identifier> {
        match self {
            Term::Variable(id) => Some(id),
            _ => None,
        }
    }

    /// Syntactic equality, down to identifier identity. Alpha-equivalent terms
    /// with different binder names are not `symb_eq`.
    pub fn symb_eq(&self, other: &Term) -> bool {
        self == other
    }

    pub fn size(&self) -> usize {
        match self {
            Term::Variable(_) => 1,
            Term::Abstract(_, body) => 1 + body.size(),
            Term::Apply(lhs, rhs) => 1 + lhs.size() + rhs.size(),
        }
    }

    /// Every identifier occurring in the term, binders included.
    pub fn identifiers(&self) -> BTreeSet<Identifier> {
        fn rec(term: &Term, acc: &mut BTreeSet<Identifier>) {
            match term {
                Term::Variable(id) => {
                    acc.insert(id.clone());
                }
                Term::Abstract(param, body) => {
                    acc.insert(param.clone());
                    rec(body, acc);
                }
                Term::Apply(lhs, rhs) => {
                    rec(lhs, acc);
                    rec(rhs, acc);
                }
            }
        }
        let mut acc = BTreeSet::new();
        rec(self, &mut acc);
        acc
    }

    /// Number of abstractions whose binder is a shadow identifier.
    pub fn shadow_binders(&self) -> usize {
        match self {
            Term::Variable(_) => 0,
            Term::Abstract(param, body) => usize::from(param.is_shadow()) + body.shadow_binders(),
            Term::Apply(lhs, rhs) => lhs.shadow_binders() + rhs.shadow_binders(),
        }
    }
}

impl From<Identifier> for Term {
    fn from(id: Identifier) -> Self {
        Term::Variable(id)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Variable(id) => f.write_fmt(format_args!("{id}")),
            Term::Abstract(param, body) => f.write_fmt(format_args!("[lambda {param}. {body}]")),
            Term::Apply(lhs, rhs) => f.write_fmt(format_args!("({lhs} {rhs})")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shadow_identity() {
        let x = Identifier::new("x");
        let x1 = x.shadow(0);
        let x2 = x.shadow(1);
        assert_ne!(x, x1);
        assert_ne!(x1, x2);
        assert_eq!(x1.origin(), x);
        assert_eq!(x2.shadow(0), x1);
        assert!(x1.is_shadow() && !x.is_shadow());
        assert_eq!(x.fresh_shadow(|id| *id == x1), x2);
    }

    #[test]
    fn test_symb_eq_is_not_alpha_equivalence() {
        let lhs = Term::Abstract("x".into(), Term::var("x").into());
        let rhs = Term::Abstract("y".into(), Term::var("y").into());
        assert!(lhs.symb_eq(&lhs.clone()));
        assert!(!lhs.symb_eq(&rhs));
    }

    #[test]
    fn test_display() {
        let id = Term::Abstract("x".into(), Term::var("x").into());
        assert_eq!(id.to_string(), "[lambda x. x]");
        let app = Term::Apply(Term::var("f").into(), Term::var(Identifier::new("y").shadow(1)).into());
        assert_eq!(app.to_string(), "(f y'')");
        let nested = Term::Abstract("f".into(), app.into());
        assert_eq!(nested.to_string(), "[lambda f. (f y'')]");
    }

    #[test]
    fn test_identifiers() {
        let term = Term::Abstract(
            "x".into(),
            Term::Apply(Term::var("x").into(), Term::var("y").into()).into(),
        );
        let ids: Vec<_> = term.identifiers().into_iter().collect();
        assert_eq!(ids, vec![Identifier::new("x"), Identifier::new("y")]);
        assert_eq!(term.size(), 4);
        assert_eq!(term.shadow_binders(), 0);
    }

    #[test]
    fn test_primed_name_is_not_a_shadow() {
        let primed = Identifier::new("y'");
        let shadow = Identifier::new("y").shadow(0);
        assert_eq!(primed.to_string(), shadow.to_string());
        assert_ne!(primed, shadow);
        assert!(!primed.is_shadow());
    }
}
