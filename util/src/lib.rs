pub mod ordered;

pub use ordered::{OrderedSeq, SeqError};
