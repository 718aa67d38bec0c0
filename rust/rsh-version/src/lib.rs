//! Semantic version identity: a plain version struct with string parsing
//! and multi-format rendering.

use std::fmt;
use std::str::FromStr;

use rsh_common::{Result, error::Error, verify_arg};

/// Release year baked into versions that don't carry one of their own.
const RELEASE_YEAR: u32 = 2025;

/// Maturity stage of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Stage {
    Preview,
    Alpha,
    Beta,
    Release,
    #[default]
    Dev,
}

/// A semantic version, totally ordered across all of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub year: u32,
    pub release: u32,
    pub stage: Stage,
    pub rev: u32,
}

/// Rendering style for [`Version::format`].
///
/// `Semantic` is the default (`1.2.3`); the bracketed styles wrap the
/// comma-separated components (`{1,2,3}`, `(1,2,3)`, `[1,2,3]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionFormat {
    #[default]
    Semantic,
    Spaced,
    Underscore,
    Braced,
    Parenthesized,
    Square,
}

impl VersionFormat {
    fn delimiter(self) -> &'static str {
        match self {
            VersionFormat::Semantic => ".",
            VersionFormat::Spaced => " ",
            VersionFormat::Underscore => "_",
            VersionFormat::Braced | VersionFormat::Parenthesized | VersionFormat::Square => ",",
        }
    }

    fn brackets(self) -> (&'static str, &'static str) {
        match self {
            VersionFormat::Braced => ("{", "}"),
            VersionFormat::Parenthesized => ("(", ")"),
            VersionFormat::Square => ("[", "]"),
            _ => ("", ""),
        }
    }
}

impl Version {
    /// Creates a version with the given numeric triple; the remaining
    /// fields take their defaults.
    pub fn new(major: u32, minor: u32, patch: u32) -> Version {
        Version {
            major,
            minor,
            patch,
            year: RELEASE_YEAR,
            release: 0,
            stage: Stage::default(),
            rev: 0,
        }
    }

    /// Returns the version of this build, taken from the Cargo package
    /// metadata.
    pub fn current() -> Version {
        Version::new(
            parse_component(env!("CARGO_PKG_VERSION_MAJOR")),
            parse_component(env!("CARGO_PKG_VERSION_MINOR")),
            parse_component(env!("CARGO_PKG_VERSION_PATCH")),
        )
    }

    /// Renders the numeric triple in the requested format.
    ///
    /// # Examples
    ///
    /// ```
    /// use rsh_version::{Version, VersionFormat};
    ///
    /// let ver = Version::new(1, 2, 3);
    /// assert_eq!(ver.format(VersionFormat::Semantic), "1.2.3");
    /// assert_eq!(ver.format(VersionFormat::Braced), "{1,2,3}");
    /// ```
    pub fn format(&self, format: VersionFormat) -> String {
        let (open, close) = format.brackets();
        let delim = format.delimiter();
        format!(
            "{open}{}{delim}{}{delim}{}{close}",
            self.major, self.minor, self.patch
        )
    }
}

impl Default for Version {
    fn default() -> Version {
        Version::current()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = Error;

    /// Parses `major[.minor[.patch]]`.
    ///
    /// Components are read as leading decimal digits; parsing stops at the
    /// first component with none, and every component from there on is
    /// zero (`"1.2-beta.9"` parses as `1.2.0`). An input with no leading
    /// integer at all is an `InvalidArgument` error rather than a silent
    /// all-zero version.
    fn from_str(s: &str) -> Result<Version> {
        let mut numbers = [0u32; 3];
        let mut assigned = 0;
        for (slot, part) in numbers.iter_mut().zip(s.trim().splitn(3, '.')) {
            match leading_u32(part) {
                Some(value) => {
                    *slot = value;
                    assigned += 1;
                }
                None => break,
            }
        }
        verify_arg!(version, assigned > 0);
        Ok(Version::new(numbers[0], numbers[1], numbers[2]))
    }
}

/// Returns the value of the leading decimal digit run, or `None` if the
/// input does not start with a digit.
fn leading_u32(part: &str) -> Option<u32> {
    let digits = &part[..part.bytes().take_while(u8::is_ascii_digit).count()];
    digits.parse().ok()
}

fn parse_component(component: &str) -> u32 {
    leading_u32(component).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_package_metadata() {
        let ver = Version::default();
        assert_eq!(ver, Version::current());
        assert_eq!(ver.year, RELEASE_YEAR);
        assert_eq!(ver.release, 0);
        assert_eq!(ver.stage, Stage::Dev);
        assert_eq!(ver.rev, 0);
    }

    #[test]
    fn parse_full_triple() {
        let ver: Version = "1.2.3".parse().unwrap();
        assert_eq!((ver.major, ver.minor, ver.patch), (1, 2, 3));
    }

    #[test]
    fn parse_partial_input_zero_fills_the_tail() {
        let ver: Version = "4.7".parse().unwrap();
        assert_eq!((ver.major, ver.minor, ver.patch), (4, 7, 0));

        let ver: Version = "12".parse().unwrap();
        assert_eq!((ver.major, ver.minor, ver.patch), (12, 0, 0));
    }

    #[test]
    fn parse_stops_at_first_non_numeric_component() {
        let ver: Version = "1.x.3".parse().unwrap();
        assert_eq!((ver.major, ver.minor, ver.patch), (1, 0, 0));

        let ver: Version = "2.5.7-beta".parse().unwrap();
        assert_eq!((ver.major, ver.minor, ver.patch), (2, 5, 7));
    }

    #[test]
    fn parse_garbage_is_an_error() {
        for input in ["", "abc", "v1.2.3", "..", "  "] {
            let err = input.parse::<Version>().unwrap_err();
            assert!(
                matches!(
                    err.kind(),
                    rsh_common::error::ErrorKind::InvalidArgument { .. }
                ),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn format_every_style() {
        let ver = Version::new(1, 2, 3);
        assert_eq!(ver.format(VersionFormat::Semantic), "1.2.3");
        assert_eq!(ver.format(VersionFormat::Spaced), "1 2 3");
        assert_eq!(ver.format(VersionFormat::Underscore), "1_2_3");
        assert_eq!(ver.format(VersionFormat::Braced), "{1,2,3}");
        assert_eq!(ver.format(VersionFormat::Parenthesized), "(1,2,3)");
        assert_eq!(ver.format(VersionFormat::Square), "[1,2,3]");
        assert_eq!(ver.to_string(), "1.2.3");
    }

    #[test]
    fn semantic_format_round_trips() {
        let ver = Version::new(10, 0, 42);
        let parsed: Version = ver.format(VersionFormat::Semantic).parse().unwrap();
        assert_eq!(parsed, ver);
    }

    #[test]
    fn ordering_is_field_lexicographic() {
        assert!(Version::new(1, 0, 0) < Version::new(1, 0, 1));
        assert!(Version::new(1, 9, 9) < Version::new(2, 0, 0));
        assert!(Stage::Preview < Stage::Alpha);
        assert!(Stage::Release < Stage::Dev);
    }
}
