//! Leaf composites with dedicated copy rules: instants and patterns.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};

use crate::{SimpleooError, SimpleooResult};

/// Handle to a mutable point in time.
#[derive(Clone)]
pub struct Date(Rc<Cell<DateTime<Utc>>>);

impl Date {
    /// Create a date holding `instant`.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(Rc::new(Cell::new(instant)))
    }

    /// Create a date holding the current instant.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Create a date from milliseconds since the Unix epoch.
    ///
    /// Returns `None` when the timestamp is out of range.
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self::new)
    }

    /// The stored instant.
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.0.get()
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.get().timestamp_millis()
    }

    /// Move the date to `instant`. Every handle to this date observes it.
    pub fn set_instant(&self, instant: DateTime<Utc>) {
        self.0.set(instant);
    }

    /// Returns `true` when both handles point at the same date.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({})", self.instant().to_rfc3339())
    }
}

/// Flags accepted by [`Pattern::new`].
///
/// `g` and `u` are retained for round-tripping but have no effect on
/// compilation; patterns are always Unicode-aware.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag maps to an independent regex switch"
)]
pub struct PatternFlags {
    /// `g`: match repeatedly.
    pub global: bool,
    /// `i`: case-insensitive matching.
    pub ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` matches line terminators.
    pub dot_all: bool,
    /// `u`: Unicode mode.
    pub unicode: bool,
    /// `x`: ignore whitespace and allow comments.
    pub extended: bool,
    /// `U`: swap greedy and lazy quantifiers.
    pub swap_greed: bool,
}

impl PatternFlags {
    /// Parse a flag string such as `"gi"`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleooError::UnknownPatternFlag`] for unsupported letters.
    pub fn parse(flags: &str) -> SimpleooResult<Self> {
        let mut parsed = Self::default();
        for flag in flags.chars() {
            let slot = match flag {
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multi_line,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'x' => &mut parsed.extended,
                'U' => &mut parsed.swap_greed,
                other => {
                    return Err(Arc::new(SimpleooError::UnknownPatternFlag { flag: other }));
                }
            };
            *slot = true;
        }
        Ok(parsed)
    }

    fn configure(self, builder: &mut RegexBuilder) {
        builder
            .case_insensitive(self.ignore_case)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_all)
            .ignore_whitespace(self.extended)
            .swap_greed(self.swap_greed);
    }
}

impl fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.extended, 'x'),
            (self.swap_greed, 'U'),
        ];
        for (_, letter) in letters.into_iter().filter(|(set, _)| *set) {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Handle to a compiled regular expression with its source and flags.
#[derive(Clone)]
pub struct Pattern(Rc<PatternData>);

struct PatternData {
    source: String,
    flags: PatternFlags,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` with the given flag string.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleooError::UnknownPatternFlag`] for unsupported flags and
    /// [`SimpleooError::InvalidPattern`] when the expression does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use simpleoo::Pattern;
    ///
    /// let pattern = Pattern::new("^me+ow$", "i")?;
    /// assert!(pattern.is_match("MEEEOW"));
    /// assert_eq!(pattern.to_string(), "/^me+ow$/i");
    /// # Ok::<_, std::sync::Arc<simpleoo::SimpleooError>>(())
    /// ```
    pub fn new(source: &str, flags: &str) -> SimpleooResult<Self> {
        let parsed = PatternFlags::parse(flags)?;
        let mut builder = RegexBuilder::new(source);
        parsed.configure(&mut builder);
        let regex = builder.build().map_err(|err| {
            Arc::new(SimpleooError::InvalidPattern {
                source_text: source.to_owned(),
                flags: flags.to_owned(),
                source: err,
            })
        })?;
        Ok(Self(Rc::new(PatternData {
            source: source.to_owned(),
            flags: parsed,
            regex,
        })))
    }

    /// A distinct pattern with the same source and flags.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self(Rc::new(PatternData {
            source: self.0.source.clone(),
            flags: self.0.flags,
            regex: self.0.regex.clone(),
        }))
    }

    /// The expression text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.0.source
    }

    /// The parsed flags.
    #[must_use]
    pub fn flags(&self) -> PatternFlags {
        self.0.flags
    }

    /// Returns `true` when the pattern matches anywhere in `haystack`.
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.regex.is_match(haystack)
    }

    /// Returns `true` when both handles point at the same pattern.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.0.source, self.0.flags)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({self})")
    }
}
