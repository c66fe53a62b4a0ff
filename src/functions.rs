//! Entry points for query engines.
//!
//! A query engine hands its functions dynamically typed arguments and expects a collation to
//! work on raw text bytes. The functions here take care of that marshalling and expose the
//! comparison, relation and builder operations in that shape:
//!
//! | entry point            | arguments                          | result            |
//! |------------------------|------------------------------------|-------------------|
//! | [`collate`]            | two text values as bytes           | `-1`, `0` or `1`  |
//! | [`version_relation`]   | `version, operator, version`       | boolean or none   |
//! | [`version_build`]      | `upstream [, revision [, epoch]]`  | text or none      |
//!
//! Registering them under a name with a particular engine is left to the caller.

use std::borrow::Cow;

use itertools::Itertools;

use crate::builder::VersionBuilder;
use crate::errors::*;
use crate::relation::Relation;
use crate::version::{Version, dpkg_version_compare};

const RELATION_FN: &str = "version_relation";
const BUILD_FN: &str = "version_build";

/// A dynamically typed argument value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    Null,
    Integer(i64),
    Real(f64),
    Text(&'a str),
    Blob(&'a [u8]),
}

impl<'a> Value<'a> {
    /// The value as text, the way a query engine converts arguments of text functions.
    /// `Null` has no text.
    pub fn as_text(&self) -> Option<Cow<'a, str>> {
        match *self {
            Value::Null => None,
            Value::Integer(i) => Some(Cow::Owned(i.to_string())),
            Value::Real(r) => Some(Cow::Owned(real_to_text(r))),
            Value::Text(t) => Some(Cow::Borrowed(t)),
            Value::Blob(b) => Some(String::from_utf8_lossy(b)),
        }
    }

    fn required_text(&self, function: &'static str, position: usize) -> Result<Cow<'a, str>> {
        self.as_text().ok_or(Error::NullArgument { function, position })
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(t: &'a str) -> Self {
        Value::Text(t)
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(b: &'a [u8]) -> Self {
        Value::Blob(b)
    }
}

impl From<i64> for Value<'_> {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value<'_> {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Render a real with 15 significant digits, always with a fractional part, switching to
/// exponent form outside `1e-4..1e15`: `2.0`, `0.1`, `1.0e+20`, `1.0e-05`.
fn real_to_text(r: f64) -> String {
    if r.is_nan() {
        return "NaN".to_string();
    }
    if r.is_infinite() {
        return if r > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }

    let scientific = format!("{:.14e}", r);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if !(-4..15).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            with_fraction(mantissa.to_string()),
            sign,
            exponent.abs()
        );
    }

    with_fraction(format!("{:.*}", (14 - exponent) as usize, r))
}

/// Drop trailing zeros of the fractional part, keeping at least one digit after the point
fn with_fraction(mut digits: String) -> String {
    if digits.contains('.') {
        let trimmed = digits.trim_end_matches('0').len();
        digits.truncate(trimmed);
    }
    if digits.ends_with('.') {
        digits.push('0');
    } else if !digits.contains('.') {
        digits.push_str(".0");
    }
    digits
}

/// Collation over the raw bytes of two text values: the strict Debian version order.
pub fn collate(version1: &[u8], version2: &[u8]) -> i32 {
    dpkg_version_compare(version1, version2) as i32
}

/// `version_relation(version, operator, version)`, with the reason when there is no result.
///
/// A null argument, an unknown operator or a wrong number of arguments is an error.
pub fn try_version_relation(args: &[Value<'_>]) -> Result<bool> {
    let (version1, operator, version2) = args.iter().collect_tuple().ok_or(Error::ArgumentCount {
        function: RELATION_FN,
        expected: "3",
        found: args.len(),
    })?;

    let version1 = version1.required_text(RELATION_FN, 1)?;
    let operator = operator.required_text(RELATION_FN, 2)?;
    let version2 = version2.required_text(RELATION_FN, 3)?;

    let relation: Relation = operator.parse()?;
    Ok(relation.holds(&Version::parse(&version1), &Version::parse(&version2)))
}

/// `version_relation(version, operator, version)`; `None` stands for the engine's null.
pub fn version_relation(args: &[Value<'_>]) -> Option<bool> {
    try_version_relation(args).map_err(|e| log::debug!("{}", e)).ok()
}

/// `version_build(upstream [, revision [, epoch]])`, with the reason when there is no result.
///
/// Revision and epoch may be left out or null. A null upstream version or a wrong number of
/// arguments is an error.
pub fn try_version_build(args: &[Value<'_>]) -> Result<String> {
    let (upstream, revision, epoch) = match args {
        [upstream] => (upstream, &Value::Null, &Value::Null),
        [upstream, revision] => (upstream, revision, &Value::Null),
        [upstream, revision, epoch] => (upstream, revision, epoch),
        _ => {
            return Err(Error::ArgumentCount {
                function: BUILD_FN,
                expected: "1 to 3",
                found: args.len(),
            });
        }
    };

    let upstream = upstream.required_text(BUILD_FN, 1)?;
    let revision = revision.as_text();
    let epoch = epoch.as_text();

    Ok(VersionBuilder::from_parts(&upstream, revision.as_deref(), epoch.as_deref()).build())
}

/// `version_build(upstream [, revision [, epoch]])`; `None` stands for the engine's null.
pub fn version_build(args: &[Value<'_>]) -> Option<String> {
    try_version_build(args).map_err(|e| log::debug!("{}", e)).ok()
}
