use thiserror::Error;

/// Reasons an entry point produced no result.
///
/// None of these are failures of the comparison itself: parsing and comparing never fail. They
/// describe why a relational or builder call was given nothing it could work with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown relational operator {0:?}")]
    UnknownOperator(String),

    #[error("{function}() takes {expected} arguments, {found} given")]
    ArgumentCount {
        function: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("argument {position} of {function}() is null")]
    NullArgument {
        function: &'static str,
        position: usize,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
