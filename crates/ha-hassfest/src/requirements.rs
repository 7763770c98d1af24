//! Requirement line parsing
//!
//! Understands the subset of pip requirement syntax used in the
//! `requirements*.txt` files: `<package><op><version>[;<marker>][,<range>]*`,
//! optionally preceded by a `--option value` prefix.

use regex::Regex;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{HassfestError, HassfestResult};

static PACKAGE_REGEX: OnceLock<Regex> = OnceLock::new();
static VERSION_RANGE_REGEX: OnceLock<Regex> = OnceLock::new();

fn package_regex() -> &'static Regex {
    PACKAGE_REGEX.get_or_init(|| {
        Regex::new(r"^(?:--.+\s)?([-_,\.\w\[\]]+)(==|>=|<=|~=|!=|<|>|===)*(.*)$")
            .expect("package regex is valid")
    })
}

fn version_range_regex() -> &'static Regex {
    VERSION_RANGE_REGEX.get_or_init(|| {
        Regex::new(r"^(==|>=|<=|~=|!=|<|>|===)?(.*)$").expect("version range regex is valid")
    })
}

/// Version comparison operator of a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinOperator {
    /// `==`
    Equal,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `~=`
    Compatible,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `===`
    Arbitrary,
}

impl PinOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            PinOperator::Equal => "==",
            PinOperator::GreaterEqual => ">=",
            PinOperator::LessEqual => "<=",
            PinOperator::Compatible => "~=",
            PinOperator::NotEqual => "!=",
            PinOperator::Less => "<",
            PinOperator::Greater => ">",
            PinOperator::Arbitrary => "===",
        }
    }
}

impl FromStr for PinOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(PinOperator::Equal),
            ">=" => Ok(PinOperator::GreaterEqual),
            "<=" => Ok(PinOperator::LessEqual),
            "~=" => Ok(PinOperator::Compatible),
            "!=" => Ok(PinOperator::NotEqual),
            "<" => Ok(PinOperator::Less),
            ">" => Ok(PinOperator::Greater),
            "===" => Ok(PinOperator::Arbitrary),
            other => Err(format!("unknown version operator '{}'", other)),
        }
    }
}

impl fmt::Display for PinOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parsed requirement line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub package: String,
    pub operator: Option<PinOperator>,
    /// Everything after the operator: version, ranges and markers
    pub version: String,
}

impl Requirement {
    /// Parse a requirement line, `None` if it is not a requirement
    /// (comments, blank lines)
    pub fn parse(line: &str) -> Option<Self> {
        let captures = package_regex().captures(line)?;
        let package = captures.get(1)?.as_str().to_string();
        let operator = captures.get(2).and_then(|m| m.as_str().parse().ok());
        let version = captures
            .get(3)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        Some(Self {
            package,
            operator,
            version,
        })
    }

    /// Whether the requirement is an exact `==` pin with a version
    pub fn is_pinned(&self) -> bool {
        self.operator == Some(PinOperator::Equal) && !self.version.is_empty()
    }

    /// Version of the first constraint, ignoring environment markers
    ///
    /// For `uv==0.5.0,<1;python_version>"3.12"` this is `0.5.0`.
    pub fn first_version(&self) -> Option<&str> {
        let constraints = self.version.split(';').next().unwrap_or_default();
        constraints.split(',').find_map(|part| {
            version_range_regex()
                .captures(part)
                .and_then(|c| c.get(2))
                .map(|m| m.as_str().trim())
        })
    }
}

/// Find the pinned version of `package` in requirements file contents
///
/// The first line naming the package decides: it must be an `==` pin.
/// `file` only names the source in errors.
pub fn get_pinned_version(contents: &str, package: &str, file: &str) -> HassfestResult<String> {
    for line in contents.lines() {
        let Some(requirement) = Requirement::parse(line) else {
            continue;
        };
        if requirement.package != package {
            continue;
        }
        if !requirement.is_pinned() {
            return Err(HassfestError::UnpinnedRequirement {
                package: package.to_string(),
            });
        }
        if let Some(version) = requirement.first_version() {
            debug!("Found pinned {} version {} in {}", package, version, file);
            return Ok(version.to_string());
        }
    }

    Err(HassfestError::MissingRequirement {
        package: package.to_string(),
        file: file.to_string(),
    })
}

/// Read a requirements file and find the pinned version of `package`
pub fn read_pinned_version(path: &Path, package: &str) -> HassfestResult<String> {
    let contents = std::fs::read_to_string(path).map_err(|source| HassfestError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    get_pinned_version(&contents, package, &file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pinned() {
        let req = Requirement::parse("uv==1.2.3").unwrap();
        assert_eq!(req.package, "uv");
        assert_eq!(req.operator, Some(PinOperator::Equal));
        assert_eq!(req.version, "1.2.3");
        assert!(req.is_pinned());
    }

    #[test]
    fn test_parse_operators() {
        assert_eq!(
            Requirement::parse("aiohue>=4.5.0").unwrap().operator,
            Some(PinOperator::GreaterEqual)
        );
        assert_eq!(
            Requirement::parse("pkg~=1.0").unwrap().operator,
            Some(PinOperator::Compatible)
        );
        assert_eq!(
            Requirement::parse("pkg!=1.0").unwrap().operator,
            Some(PinOperator::NotEqual)
        );
        assert_eq!(
            Requirement::parse("pkg<2").unwrap().operator,
            Some(PinOperator::Less)
        );
    }

    #[test]
    fn test_parse_without_operator() {
        let req = Requirement::parse("uv").unwrap();
        assert_eq!(req.operator, None);
        assert_eq!(req.version, "");
        assert!(!req.is_pinned());
    }

    #[test]
    fn test_parse_extras_and_option_prefix() {
        let req = Requirement::parse("somepackage[extra]==1.0").unwrap();
        assert_eq!(req.package, "somepackage[extra]");

        let req = Requirement::parse("--only-binary=:all: uv==0.4.0").unwrap();
        assert_eq!(req.package, "uv");
        assert_eq!(req.version, "0.4.0");
    }

    #[test]
    fn test_comments_are_not_requirements() {
        assert!(Requirement::parse("# linters such as flake8").is_none());
        assert!(Requirement::parse("").is_none());
    }

    #[test]
    fn test_first_version() {
        let req = Requirement::parse("uv==0.5.0,<1;python_version>'3.12'").unwrap();
        assert_eq!(req.first_version(), Some("0.5.0"));

        let req = Requirement::parse("uv==0.5.0 ; sys_platform == 'linux'").unwrap();
        assert_eq!(req.first_version(), Some("0.5.0"));
    }

    #[test]
    fn test_get_pinned_version() {
        let contents = "# tooling\n-r requirements.txt\nmypy-dev==1.0\nuv==1.2.3\n";
        assert_eq!(
            get_pinned_version(contents, "uv", "requirements_test.txt").unwrap(),
            "1.2.3"
        );
    }

    #[test]
    fn test_get_pinned_version_unpinned() {
        let err = get_pinned_version("uv>=1.2.3\n", "uv", "requirements_test.txt").unwrap_err();
        assert!(matches!(err, HassfestError::UnpinnedRequirement { .. }));
        assert_eq!(
            err.to_string(),
            "Requirement uv need to be pinned \"uv==<version>\"."
        );
    }

    #[test]
    fn test_get_pinned_version_empty_version() {
        let err = get_pinned_version("uv==\n", "uv", "requirements_test.txt").unwrap_err();
        assert!(matches!(err, HassfestError::UnpinnedRequirement { .. }));
    }

    #[test]
    fn test_first_matching_line_decides() {
        let err = get_pinned_version("uv>=1\nuv==2\n", "uv", "requirements_test.txt").unwrap_err();
        assert!(err.is_pin_error());
        assert_eq!(
            get_pinned_version("uv==1\nuv>=2\n", "uv", "requirements_test.txt").unwrap(),
            "1"
        );
    }

    #[test]
    fn test_get_pinned_version_missing() {
        let err =
            get_pinned_version("pytest==8.0\nuvloop==0.19\n", "uv", "requirements_test.txt")
                .unwrap_err();
        assert!(matches!(err, HassfestError::MissingRequirement { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid uv requirement in requirements_test.txt"
        );
    }
}
