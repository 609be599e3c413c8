//! Route patterns and path matching.
//!
//! A route pattern is an absolute path whose last segment may be a single
//! positional parameter written `:name`, e.g. `/beneficiaires/:id`. The
//! parameter always consumes exactly one path segment.

/// Maximum byte length accepted for a route path or pattern.
pub const MAX_PATH_LEN: usize = 256;

/// Reasons a route pattern is rejected when a route table is loaded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatternError {
    /// The pattern does not start with `/`.
    NotAbsolute,
    /// The pattern contains `//` or ends with `/` (other than the root).
    EmptySegment,
    /// A parameter segment has no name (`/:`).
    UnnamedParameter,
    /// A parameter segment is followed by further segments.
    ParameterNotLast,
    /// The pattern contains a query or fragment delimiter.
    ReservedCharacter,
    /// The pattern is longer than [`MAX_PATH_LEN`].
    TooLong,
}

/// A parsed route pattern borrowing from its source string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoutePattern<'a> {
    /// A fully static route, matched verbatim.
    Exact(&'a str),
    /// A route ending in one parameter segment.
    ///
    /// `prefix` is everything before the parameter segment, without the
    /// separating slash (`/beneficiaires` for `/beneficiaires/:id`, and the
    /// empty string for `/:id`).
    Parameter { prefix: &'a str, name: &'a str },
}

impl<'a> RoutePattern<'a> {
    /// Parses and validates `pattern`.
    pub fn parse(pattern: &'a str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATH_LEN {
            return Err(PatternError::TooLong);
        }
        if pattern.contains(|c: char| c == '?' || c == '#') {
            return Err(PatternError::ReservedCharacter);
        }

        let rest = pattern
            .strip_prefix('/')
            .ok_or(PatternError::NotAbsolute)?;
        if rest.is_empty() {
            return Ok(Self::Exact(pattern));
        }

        // `offset` tracks the index of the slash preceding the current segment.
        let mut offset = 0;
        let mut parameter: Option<(usize, &'a str)> = None;
        for segment in rest.split('/') {
            if parameter.is_some() {
                return Err(PatternError::ParameterNotLast);
            }
            if segment.is_empty() {
                return Err(PatternError::EmptySegment);
            }
            if let Some(name) = segment.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::UnnamedParameter);
                }
                parameter = Some((offset, name));
            }
            offset += segment.len() + 1;
        }

        Ok(match parameter {
            Some((at, name)) => Self::Parameter {
                prefix: &pattern[..at],
                name,
            },
            None => Self::Exact(pattern),
        })
    }

    /// Returns `true` if the normalised `path` is matched by this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(route) => *route == path,
            Self::Parameter { prefix, .. } => matches_parameter(prefix, path),
        }
    }
}

/// Returns `true` when `path` is `prefix` followed by exactly one non-empty
/// segment.
///
/// `/beneficiaires/42` matches prefix `/beneficiaires`;
/// `/beneficiaires/42/edit` and `/beneficiaires/` do not.
pub fn matches_parameter(prefix: &str, path: &str) -> bool {
    path.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|segment| !segment.is_empty() && !segment.contains('/'))
}

/// Reduces a router location to the pathname used for lookups.
///
/// Drops any query string or fragment, then one trailing slash unless the
/// path is the root itself.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
