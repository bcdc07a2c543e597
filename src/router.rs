use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{CompileError, ReverseError};
use crate::method::Method;
use crate::pattern::{self, PatternSegment};
use crate::percent;
use crate::reverse::{ReverseFn, ReverseUri};
use crate::tree::{Node, RawCaptures};

/// A single route declaration.
///
/// Routes are an unordered input: precedence between them is derived purely
/// from template structure, never from declaration order. The one exception
/// is exact duplicates (same method, same template), where the last compiled
/// route wins.
#[derive(Debug, Clone)]
pub struct Route<T, K = String> {
    pub method: Method,
    pub pattern: Box<str>,
    pub handler: T,
    pub tag: Option<K>,
}

impl<T, K> Route<T, K> {
    pub fn new(method: Method, pattern: &str, handler: T) -> Self {
        Self {
            method,
            pattern: pattern.into(),
            handler,
            tag: None,
        }
    }

    /// Additionally registers the route's reverse function under `tag`.
    pub fn tagged(mut self, tag: K) -> Self {
        self.tag = Some(tag);
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    /// When set, reverse functions are keyed by tag only, never by handler.
    pub reverse_only_tagged: bool,
}

/// A compiled route table.
///
/// Built once by [`compile`](Self::compile) and immutable afterwards, so it
/// can be shared across threads for concurrent matching and reverse
/// generation without locking. There is no process-wide table: any number of
/// independently compiled routers may coexist. To change routes, compile a
/// fresh value and swap it in; never patch one in place.
#[derive(Debug)]
pub struct Router<T, K = String> {
    root: Node<T>,
    by_handler: HashMap<T, ReverseFn>,
    by_tag: HashMap<K, ReverseFn>,
}

impl<T, K> Router<T, K>
where
    T: Clone + Eq + Hash,
    K: Eq + Hash,
{
    /// Compiles an unordered route list into a router.
    ///
    /// Fails if a template is malformed, in particular when a catch-all
    /// segment is followed by further segments.
    pub fn compile(
        routes: impl IntoIterator<Item = Route<T, K>>,
        options: CompileOptions,
    ) -> Result<Self, CompileError> {
        let mut router = Self {
            root: Node::new(),
            by_handler: HashMap::new(),
            by_tag: HashMap::new(),
        };
        for route in routes {
            router.insert(route, options)?;
        }
        Ok(router)
    }

    fn insert(&mut self, route: Route<T, K>, options: CompileOptions) -> Result<(), CompileError> {
        let Route {
            method,
            pattern,
            handler,
            tag,
        } = route;

        let mut segments: Vec<PatternSegment> = Vec::new();
        for part in pattern::split_path(&pattern) {
            let segment = match pattern::classify(part) {
                Ok(segment) => segment,
                Err(msg) => return Err(CompileError::new(msg, &pattern)),
            };
            if let Some(name) = segment.param_name() {
                let taken = segments
                    .iter()
                    .filter_map(PatternSegment::param_name)
                    .any(|n| n == name);
                if taken {
                    return Err(CompileError::new("capture name used more than once", &pattern));
                }
            }
            segments.push(segment);
        }

        self.root
            .insert(&segments, method, handler.clone())
            .map_err(|msg| CompileError::new(msg, &pattern))?;

        let reverse = ReverseFn::new(segments);
        if let Some(tag) = tag {
            self.by_tag.insert(tag, reverse.clone());
        }
        if !options.reverse_only_tagged {
            self.by_handler.insert(handler, reverse);
        }
        Ok(())
    }
}

impl<T, K> Router<T, K> {
    /// Matches a path and method against the table.
    ///
    /// Returns the handler and the decoded path parameters, or `None` when no
    /// route matches, including the right-path-wrong-method case.
    pub fn find<'s, 'p>(
        &'s self,
        path: &'p str,
        method: Method,
    ) -> Option<(&'s T, Params<'s, 'p>)> {
        let parts = pattern::split_path(path);
        let mut raw: RawCaptures<'s, 'p> = RawCaptures::new();
        let data = self.root.find(path, &parts, method, &mut raw)?;
        let buf = raw
            .into_iter()
            .map(|(name, value)| (name, percent::decode(value)))
            .collect();
        Some((data, Params { buf }))
    }
}

impl<T: Eq + Hash, K> Router<T, K> {
    /// Generates a URI for the route registered under `handler`.
    pub fn uri_for(&self, handler: &T, data: &[(&str, &str)]) -> Result<ReverseUri, ReverseError> {
        match self.by_handler.get(handler) {
            Some(f) => f.call(data),
            None => Err(ReverseError::UnknownTarget),
        }
    }

    /// The reverse function registered under `handler`, if any.
    pub fn reverse_fn(&self, handler: &T) -> Option<&ReverseFn> {
        self.by_handler.get(handler)
    }
}

impl<T, K: Eq + Hash> Router<T, K> {
    /// Generates a URI for the route tagged with `tag`.
    pub fn uri_for_tag(&self, tag: &K, data: &[(&str, &str)]) -> Result<ReverseUri, ReverseError> {
        match self.by_tag.get(tag) {
            Some(f) => f.call(data),
            None => Err(ReverseError::UnknownTarget),
        }
    }

    /// The reverse function registered under `tag`, if any.
    pub fn reverse_fn_for_tag(&self, tag: &K) -> Option<&ReverseFn> {
        self.by_tag.get(tag)
    }
}

/// Decoded path parameters of a successful match.
///
/// Names borrow from the router; values borrow from the matched path, owned
/// only where percent-decoding changed them.
#[derive(Debug)]
pub struct Params<'r, 'p> {
    buf: SmallVec<[(&'r str, Cow<'p, str>); 8]>,
}

impl<'r, 'p> Params<'r, 'p> {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if *k == name { Some(v.as_ref()) } else { None })
    }

    pub fn parse<F: FromStr>(&self, name: &str) -> Option<Result<F, F::Err>> {
        self.get(name).map(F::from_str)
    }
}

impl<'r, 'p> Deref for Params<'r, 'p> {
    type Target = [(&'r str, Cow<'p, str>)];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}
