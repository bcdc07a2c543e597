//! Reverse URI generation.
//!
//! Each route compiles to a [`ReverseFn`]: plain data holding the classified
//! template and the parameter names it requires. Substitution is a loop over
//! the segments.

use std::fmt;

use crate::error::ReverseError;
use crate::pattern::PatternSegment;
use crate::percent;

#[derive(Debug, Clone)]
pub struct ReverseFn {
    segments: Vec<PatternSegment>,
    required: Vec<Box<str>>,
}

impl ReverseFn {
    pub(crate) fn new(segments: Vec<PatternSegment>) -> Self {
        let required = segments
            .iter()
            .filter_map(|segment| match segment {
                PatternSegment::Capture(name) | PatternSegment::CatchAll(name) => {
                    Some(name.clone())
                }
                PatternSegment::Literal(_) => None,
            })
            .collect();
        Self { segments, required }
    }

    /// Parameter names that must be present in the data passed to
    /// [`call`](Self::call), in template order.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(|name| &**name)
    }

    /// Substitutes `data` into the template.
    ///
    /// Every required name must be present; keys not consumed by a template
    /// parameter become the query string. All-or-nothing: a missing
    /// parameter fails the whole call.
    pub fn call(&self, data: &[(&str, &str)]) -> Result<ReverseUri, ReverseError> {
        let lookup = |name: &str| {
            data.iter()
                .find_map(|&(k, v)| if k == name { Some(v) } else { None })
        };

        let mut path = String::new();
        let mut missing: Vec<Box<str>> = Vec::new();

        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                path.push('/');
            }
            match segment {
                PatternSegment::Literal(lit) => path.push_str(lit),
                PatternSegment::Capture(name) => match lookup(name) {
                    Some(value) => path.extend(percent::encode_segment(value)),
                    None => missing.push(name.clone()),
                },
                PatternSegment::CatchAll(name) => match lookup(name) {
                    Some(value) => path.extend(percent::encode_suffix(value)),
                    None => missing.push(name.clone()),
                },
            }
        }

        if !missing.is_empty() {
            return Err(ReverseError::MissingParams { missing });
        }

        // A root template is a single empty segment; the join above emits
        // nothing for it.
        if path.is_empty() {
            path.push('/');
        }

        let mut query = String::new();
        for &(key, value) in data {
            if self.required.iter().any(|name| &**name == key) {
                continue;
            }
            query.push(if query.is_empty() { '?' } else { '&' });
            query.extend(percent::encode_query(key));
            query.push('=');
            query.extend(percent::encode_query(value));
        }

        Ok(ReverseUri {
            path,
            query: if query.is_empty() { None } else { Some(query) },
        })
    }
}

/// A generated URI: the substituted path plus, when any data keys were left
/// over, a query string carrying the leading `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseUri {
    pub path: String,
    pub query: Option<String>,
}

impl fmt::Display for ReverseUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            f.write_str(query)?;
        }
        Ok(())
    }
}
