//! Relational operators between versions, as written in Debian dependency fields.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::errors::*;
use crate::version::Version;

bitflags! {
    /// Which orderings satisfy a relation.
    #[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
    pub struct RelationFlags: u8 {
        const LESS = 1 << 0;
        const GREATER = 1 << 1;
        const EQUAL = 1 << 2;

        const LE = Self::LESS.bits() | Self::EQUAL.bits();
        const GE = Self::GREATER.bits() | Self::EQUAL.bits();
    }
}

impl RelationFlags {
    /// Whether the given ordering of the left-hand version against the right-hand one is accepted
    pub fn accepts(self, ordering: Ordering) -> bool {
        let flag = match ordering {
            Ordering::Less => RelationFlags::LESS,
            Ordering::Equal => RelationFlags::EQUAL,
            Ordering::Greater => RelationFlags::GREATER,
        };
        self.contains(flag)
    }
}

/// A relational operator between two versions.
///
/// `<` and `>` are the deprecated dpkg spellings of `<=` and `>=`, not strict comparisons. They
/// parse to [`Relation::LessOrEqual`] and [`Relation::GreaterOrEqual`] and print in the modern form.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Relation {
    StrictlyLess,
    LessOrEqual,
    Equal,
    GreaterOrEqual,
    StrictlyGreater,
}

impl Relation {
    pub fn flags(self) -> RelationFlags {
        match self {
            Relation::StrictlyLess => RelationFlags::LESS,
            Relation::LessOrEqual => RelationFlags::LE,
            Relation::Equal => RelationFlags::EQUAL,
            Relation::GreaterOrEqual => RelationFlags::GE,
            Relation::StrictlyGreater => RelationFlags::GREATER,
        }
    }

    /// The canonical token for this relation
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::StrictlyLess => "<<",
            Relation::LessOrEqual => "<=",
            Relation::Equal => "=",
            Relation::GreaterOrEqual => ">=",
            Relation::StrictlyGreater => ">>",
        }
    }

    /// Whether `version1 <op> version2` holds.
    ///
    /// Versions are compared with the same strict ordering as [`Version`]'s `Ord`, so `=` only
    /// holds for identical strings.
    pub fn holds(self, version1: &Version<'_>, version2: &Version<'_>) -> bool {
        self.flags().accepts(version1.cmp(version2))
    }
}

impl FromStr for Relation {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "<<" => Ok(Relation::StrictlyLess),
            "<=" | "<" => Ok(Relation::LessOrEqual),
            "=" | "==" => Ok(Relation::Equal),
            ">=" | ">" => Ok(Relation::GreaterOrEqual),
            ">>" => Ok(Relation::StrictlyGreater),
            _ => Err(Error::UnknownOperator(token.to_string())),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluate `version1 <operator> version2`.
///
/// Returns `None` when the operator is not one of `=`, `==`, `<<`, `<`, `<=`, `>=`, `>>` or `>`.
/// The empty operator is not special and also yields `None`.
pub fn evaluate_relation(version1: &str, operator: &str, version2: &str) -> Option<bool> {
    let relation = match operator.parse::<Relation>() {
        Ok(relation) => relation,
        Err(e) => {
            log::debug!("{}", e);
            return None;
        }
    };

    Some(relation.holds(&Version::parse(version1), &Version::parse(version2)))
}
