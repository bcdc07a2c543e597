use smallvec::SmallVec;

const SLASH: char = '/';
const COLON: char = ':';
const STAR: char = '*';

/// Key that anonymous wildcard segments (`*` or `:*`) bind to.
pub(crate) const WILDCARD_KEY: &str = "*";

pub(crate) type SegmentBuffer<'a> = SmallVec<[&'a str; 8]>;

/// One classified template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PatternSegment {
    Literal(Box<str>),
    Capture(Box<str>),
    CatchAll(Box<str>),
}

impl PatternSegment {
    /// The parameter name this segment binds, if any.
    pub(crate) fn param_name(&self) -> Option<&str> {
        match self {
            Self::Capture(name) | Self::CatchAll(name) => Some(name),
            Self::Literal(_) => None,
        }
    }
}

/// Splits a template or an incoming path into segments.
///
/// Empty segments from a leading or embedded separator survive, so templates
/// and paths stay aligned segment-for-segment. A single empty segment from a
/// trailing separator is dropped, making `/a/b/` tokenize like `/a/b`.
pub(crate) fn split_path(s: &str) -> SegmentBuffer<'_> {
    let mut parts: SegmentBuffer<'_> = s.split(SLASH).collect();
    if parts.len() > 1 && parts.last() == Some(&"") {
        parts.pop();
    }
    parts
}

/// Classifies a template segment.
///
/// `:name` captures one segment, `:*`/`:*name`/`*` capture the remainder of
/// the path, anything else matches literally.
pub(crate) fn classify(part: &str) -> Result<PatternSegment, &'static str> {
    if let Some(rest) = part.strip_prefix(COLON) {
        if let Some(name) = rest.strip_prefix(STAR) {
            let name = if name.is_empty() { WILDCARD_KEY } else { name };
            return Ok(PatternSegment::CatchAll(name.into()));
        }
        if rest.is_empty() {
            return Err("capture name can not be empty");
        }
        return Ok(PatternSegment::Capture(rest.into()));
    }
    if part == WILDCARD_KEY {
        return Ok(PatternSegment::CatchAll(WILDCARD_KEY.into()));
    }
    Ok(PatternSegment::Literal(part.into()))
}
