use std::rc::Rc;

pub use crate::error::{Error, Result};
pub use crate::term::{Identifier, Term};

pub type TermRef = Rc<Term>;
pub type Identifiers = util::OrderedSeq<Identifier>;
