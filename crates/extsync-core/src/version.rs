//! Version ordering and compatibility ranges
//!
//! Versions are dot-separated numeric release components with optional
//! `-pre.release` and `+build` suffixes. Missing trailing components count
//! as zero, so `1.2` and `1.2.0` are equal. Build metadata never takes part
//! in ordering.
//!
//! Range grammar (one range = `||`-separated alternatives, each a comma or
//! whitespace separated conjunction of comparators):
//!
//! ```text
//! *  x  X          accept any version
//! 1.60.0  =1.60.0  exact match
//! >=1.50.0         minimum bound (also >, <, <=)
//! ^1.50.0          same leading significant component, not lower
//! ~1.50.0          same major.minor, not lower
//! ```

use semver::{BuildMetadata, Prerelease};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A parsed version value
#[derive(Debug, Clone)]
pub struct Version {
    release: Vec<u64>,
    pre: Prerelease,
    build: BuildMetadata,
}

impl Version {
    /// Parse a version string
    ///
    /// Fails with [`Error::InvalidVersion`] for empty input, empty or
    /// non-numeric release components and malformed suffixes.
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim();
        if text.is_empty() {
            return Err(Error::invalid_version(input, "empty version string"));
        }

        let (rest, build) = match text.split_once('+') {
            Some((rest, build)) => (rest, parse_build(input, build)?),
            None => (text, BuildMetadata::EMPTY),
        };

        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, parse_pre(input, pre)?),
            None => (rest, Prerelease::EMPTY),
        };

        let release = core
            .split('.')
            .map(|part| parse_component(input, part))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            release,
            pre,
            build,
        })
    }

    /// Release component at `index`, zero past the end
    pub fn component(&self, index: usize) -> u64 {
        self.release.get(index).copied().unwrap_or(0)
    }

    /// Whether this version carries a pre-release suffix
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    fn cmp_release(&self, other: &Self) -> Ordering {
        let len = self.release.len().max(other.release.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    fn cmp_pre(&self, other: &Self) -> Ordering {
        // A release sorts after every pre-release of the same core
        match (self.pre.is_empty(), other.pre.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.pre.cmp(&other.pre),
        }
    }

    fn shares_prefix(&self, other: &Self, len: usize) -> bool {
        (0..len).all(|i| self.component(i) == other.component(i))
    }

    /// Components up to and including the first non-zero one
    fn significant_len(&self) -> usize {
        self.release
            .iter()
            .position(|c| *c != 0)
            .map_or(self.release.len(), |i| i + 1)
    }
}

fn parse_component(input: &str, part: &str) -> Result<u64> {
    if part.is_empty() {
        return Err(Error::invalid_version(input, "empty numeric component"));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_version(
            input,
            format!("component '{}' is not numeric", part),
        ));
    }
    part.parse::<u64>().map_err(|_| {
        Error::invalid_version(input, format!("component '{}' is out of range", part))
    })
}

fn parse_pre(input: &str, pre: &str) -> Result<Prerelease> {
    if pre.is_empty() {
        return Err(Error::invalid_version(input, "empty pre-release suffix"));
    }
    Prerelease::new(pre)
        .map_err(|e| Error::invalid_version(input, format!("pre-release '{}': {}", pre, e)))
}

fn parse_build(input: &str, build: &str) -> Result<BuildMetadata> {
    if build.is_empty() {
        return Err(Error::invalid_version(input, "empty build suffix"));
    }
    BuildMetadata::new(build)
        .map_err(|e| Error::invalid_version(input, format!("build '{}': {}", build, e)))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_release(other).then_with(|| self.cmp_pre(other))
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let release: Vec<String> = self.release.iter().map(u64::to_string).collect();
        write!(f, "{}", release.join("."))?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

/// Compare two version strings
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    Ok(Version::parse(a)?.cmp(&Version::parse(b)?))
}

/// Whether `a` is strictly newer than `b`
pub fn is_newer(a: &str, b: &str) -> Result<bool> {
    Ok(compare(a, b)? == Ordering::Greater)
}

/// Whether `version` satisfies the compatibility `range`
pub fn satisfies_range(version: &str, range: &str) -> Result<bool> {
    let version = Version::parse(version)?;
    let range = VersionRange::parse(range)?;
    Ok(range.matches(&version))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Exact,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    Caret,
    Tilde,
}

// Longer operators first so ">=" is not read as ">" followed by "=1.0"
const OPERATORS: [(&str, Op); 7] = [
    (">=", Op::GreaterEq),
    ("<=", Op::LessEq),
    (">", Op::Greater),
    ("<", Op::Less),
    ("=", Op::Exact),
    ("^", Op::Caret),
    ("~", Op::Tilde),
];

#[derive(Debug, Clone)]
enum Comparator {
    Any,
    Bound(Op, Version),
}

impl Comparator {
    fn parse(range: &str, token: &str) -> Result<Self> {
        if matches!(token, "*" | "x" | "X") {
            return Ok(Self::Any);
        }

        let (op, rest) = OPERATORS
            .iter()
            .find_map(|(prefix, op)| token.strip_prefix(*prefix).map(|rest| (*op, rest)))
            .unwrap_or((Op::Exact, token));

        let version = Version::parse(rest).map_err(|e| match e {
            Error::InvalidVersion { reason, .. } => Error::invalid_range(range, reason),
            other => Error::invalid_range(range, other.to_string()),
        })?;

        Ok(Self::Bound(op, version))
    }

    fn matches(&self, version: &Version) -> bool {
        let (op, bound) = match self {
            Self::Any => return true,
            Self::Bound(op, bound) => (op, bound),
        };

        match op {
            Op::Exact => version == bound,
            Op::Greater => version > bound,
            Op::GreaterEq => version >= bound,
            Op::Less => version < bound,
            Op::LessEq => version <= bound,
            Op::Caret => version >= bound && version.shares_prefix(bound, bound.significant_len()),
            Op::Tilde => {
                version >= bound && version.shares_prefix(bound, bound.release.len().min(2))
            }
        }
    }
}

/// A parsed compatibility range
#[derive(Debug, Clone)]
pub struct VersionRange {
    raw: String,
    alternatives: Vec<Vec<Comparator>>,
}

impl VersionRange {
    /// Parse a range string, failing with [`Error::InvalidRange`]
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(Error::invalid_range(input, "empty range"));
        }

        let alternatives = raw
            .split("||")
            .map(|alt| parse_conjunction(input, alt))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            raw: raw.to_string(),
            alternatives,
        })
    }

    /// Whether `version` falls inside this range
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives
            .iter()
            .any(|conjunction| conjunction.iter().all(|c| c.matches(version)))
    }
}

fn is_bare_operator(token: &str) -> bool {
    OPERATORS.iter().any(|(prefix, _)| *prefix == token)
}

fn parse_conjunction(range: &str, text: &str) -> Result<Vec<Comparator>> {
    let mut comparators = Vec::new();
    let mut pending_op: Option<&str> = None;

    for token in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let token = match pending_op.take() {
            Some(op) => format!("{}{}", op, token),
            None if is_bare_operator(token) => {
                pending_op = Some(token);
                continue;
            }
            None => token.to_string(),
        };
        comparators.push(Comparator::parse(range, &token)?);
    }

    if let Some(op) = pending_op {
        return Err(Error::invalid_range(
            range,
            format!("operator '{}' is missing a version", op),
        ));
    }
    if comparators.is_empty() {
        return Err(Error::invalid_range(range, "empty alternative"));
    }

    Ok(comparators)
}

impl FromStr for VersionRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
