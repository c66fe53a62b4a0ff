use std::cmp::Ordering;
use std::fmt;

use nom::character::complete::{digit0, multispace0, one_of};
use nom::combinator::opt;
use nom::sequence::preceded;
use nom::{IResult, Parser};

/// The revision a version is given when it does not carry one.
///
/// `""` and `"0"` compare as equal under the Debian ordering, so this only shows up when looking
/// at the parsed components.
pub const DEFAULT_REVISION: &str = "0";

/// A Debian package version has 3 different components - Epoch, Upstream version, and Revision.
///
/// Epoch overrides all other fields. It is an unsigned integer in well-formed versions and is
/// used to force a reordering of a package's version history, for instance after an upstream
/// change of versioning scheme. A version without an epoch has an epoch of zero.
///
/// The upstream version is the version of the original software that was packaged.
///
/// Revision is the packaging-specific part after the last hyphen. It distinguishes multiple
/// packagings of the same upstream release. A version without a revision gets
/// [`DEFAULT_REVISION`].
///
/// Tilde (~) is a special value used for pre-releases and sorts before anything else, including
/// the end of the string: `1.0~rc1` is older than `1.0`.
///
/// Parsing never fails. A malformed epoch is read as its longest numeric prefix (or zero), and
/// missing delimiters simply leave the corresponding component at its default.
///
/// Ordering is strict: two versions that the Debian rules consider equal, but that were written
/// differently (`1.0` and `1.00`, or `1.0` and `0:1.0`), are ordered by their raw bytes. Use
/// [`Version::cmp_components`] to compare by the Debian rules alone.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Version<'a> {
    raw: &'a [u8],
    epoch: i64,
    upstream: &'a [u8],
    revision: &'a [u8],
}

impl<'a> Version<'a> {
    /// Create a Version parsed from a string
    pub fn parse(version: &'a str) -> Self {
        Self::parse_bytes(version.as_bytes())
    }

    /// Create a Version parsed from raw bytes, which need not be valid UTF-8
    pub fn parse_bytes(version: &'a [u8]) -> Self {
        let (epoch, upstream, revision) = Self::parse_values(version);
        Version {
            raw: version,
            epoch,
            upstream,
            revision,
        }
    }

    /// The epoch value
    pub fn epoch(&self) -> i64 {
        self.epoch
    }

    /// The upstream version
    pub fn upstream(&self) -> &'a [u8] {
        self.upstream
    }

    /// The revision value
    pub fn revision(&self) -> &'a [u8] {
        self.revision
    }

    /// The string this version was parsed from
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    /// Return the epoch, upstream and revision values as a 3-element tuple
    pub fn values(&self) -> (i64, &'a [u8], &'a [u8]) {
        (self.epoch, self.upstream, self.revision)
    }

    /// Parse the epoch, upstream and revision values and return them as a 3-element tuple
    pub fn parse_values(version: &'a [u8]) -> (i64, &'a [u8], &'a [u8]) {
        let (epoch, rest) = match version.iter().position(|&c| c == b':') {
            Some(colon) => (parse_epoch(&version[..colon]), &version[colon + 1..]),
            None => (0, version),
        };
        let (upstream, revision) = match rest.iter().rposition(|&c| c == b'-') {
            Some(hyphen) => (&rest[..hyphen], &rest[hyphen + 1..]),
            None => (rest, DEFAULT_REVISION.as_bytes()),
        };

        (epoch, upstream, revision)
    }

    /// Compare epoch, upstream version and revision, without the raw tie-break.
    ///
    /// This is the plain Debian ordering, under which `1.0`, `1.00` and `0:1.0-0` are all equal.
    pub fn cmp_components(&self, other: &Self) -> Ordering {
        let epoch_cmp = self.epoch.cmp(&other.epoch);
        if epoch_cmp != Ordering::Equal {
            return epoch_cmp;
        }

        let upstream_cmp = compare_version_string(self.upstream, other.upstream);
        if upstream_cmp != Ordering::Equal {
            return upstream_cmp;
        }

        compare_version_string(self.revision, other.revision)
    }
}

impl<'a> From<&'a str> for Version<'a> {
    fn from(version: &'a str) -> Self {
        Version::parse(version)
    }
}

impl<'a> From<&'a [u8]> for Version<'a> {
    fn from(version: &'a [u8]) -> Self {
        Version::parse_bytes(version)
    }
}

impl fmt::Display for Version<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.raw))
    }
}

impl PartialOrd for Version<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_components(other).then_with(|| self.raw.cmp(other.raw))
    }
}

/// Permissive integer prefix: optional leading whitespace, optional sign, then digits
fn epoch_prefix(input: &[u8]) -> IResult<&[u8], (Option<char>, &[u8])> {
    preceded(multispace0, (opt(one_of("+-")), digit0)).parse(input)
}

fn parse_epoch(input: &[u8]) -> i64 {
    let (sign, digits) = match epoch_prefix(input) {
        Ok((_, prefix)) => prefix,
        Err(_) => return 0,
    };
    if digits.is_empty() {
        log::trace!(
            "epoch {:?} has no numeric prefix, using 0",
            String::from_utf8_lossy(input)
        );
        return 0;
    }

    let magnitude = digits.iter().fold(0i64, |acc, &d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    match sign {
        Some('-') => -magnitude,
        _ => magnitude,
    }
}

/// Sort rank of a single position outside of a numeric run.
///
/// Variant order is the ordering: tilde, then digits and the end of the string, then ASCII
/// letters by code point, then everything else by byte value. Bytes outside ASCII (0x80 and up)
/// are "everything else" and so rank above all ASCII punctuation.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Rank {
    Tilde,
    DigitOrEnd,
    Letter(u8),
    Other(u8),
}

impl Rank {
    fn of(c: Option<u8>) -> Self {
        match c {
            Some(b'~') => Rank::Tilde,
            None => Rank::DigitOrEnd,
            Some(c) if c.is_ascii_digit() => Rank::DigitOrEnd,
            Some(c) if c.is_ascii_alphabetic() => Rank::Letter(c),
            Some(c) => Rank::Other(c),
        }
    }
}

fn starts_with_digit(s: &[u8]) -> bool {
    s.first().is_some_and(u8::is_ascii_digit)
}

fn starts_with_non_digit(s: &[u8]) -> bool {
    s.first().is_some_and(|c| !c.is_ascii_digit())
}

/// Compare two upstream versions or two revisions using the Debian ordering rules.
///
/// The strings are consumed as alternating non-numeric and numeric runs. Non-numeric runs are
/// compared position by position by character rank, numeric runs by magnitude with leading zeros
/// ignored, so `1.9 < 1.10` and `00 == 0`.
pub fn compare_version_string(version1: &[u8], version2: &[u8]) -> Ordering {
    if version1 == version2 {
        return Ordering::Equal;
    }

    let mut version1_part = version1;
    let mut version2_part = version2;

    while !version1_part.is_empty() || !version2_part.is_empty() {
        while starts_with_non_digit(version1_part) || starts_with_non_digit(version2_part) {
            let rank1 = Rank::of(version1_part.first().copied());
            let rank2 = Rank::of(version2_part.first().copied());
            if rank1 != rank2 {
                return rank1.cmp(&rank2);
            }

            // equal ranks here mean both sides hold the same non-digit byte
            version1_part = &version1_part[1..];
            version2_part = &version2_part[1..];
        }

        version1_part = trim_leading_zeros(version1_part);
        version2_part = trim_leading_zeros(version2_part);

        let mut first_diff = Ordering::Equal;
        while starts_with_digit(version1_part) && starts_with_digit(version2_part) {
            if first_diff == Ordering::Equal {
                first_diff = version1_part[0].cmp(&version2_part[0]);
            }
            version1_part = &version1_part[1..];
            version2_part = &version2_part[1..];
        }

        // the longer number is the bigger one
        if starts_with_digit(version1_part) {
            return Ordering::Greater;
        }
        if starts_with_digit(version2_part) {
            return Ordering::Less;
        }
        if first_diff != Ordering::Equal {
            return first_diff;
        }
    }

    Ordering::Equal
}

fn trim_leading_zeros(s: &[u8]) -> &[u8] {
    let zeros = s.iter().take_while(|&&c| c == b'0').count();
    &s[zeros..]
}

/// Compare two strings as Debian versions, with the raw tie-break.
///
/// This is a strict total order: it only returns [`Ordering::Equal`] for byte-identical input.
pub fn dpkg_version_compare(version1: impl AsRef<[u8]>, version2: impl AsRef<[u8]>) -> Ordering {
    let version1 = Version::parse_bytes(version1.as_ref());
    let version2 = Version::parse_bytes(version2.as_ref());
    version1.cmp(&version2)
}
