//! The route trie.
//!
//! A node's depth equals the number of segments consumed to reach it, so a
//! longer template occupies a deeper terminal and wins over a shorter one
//! without any explicit sorting.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::method::Method;
use crate::pattern::PatternSegment;

/// Capture buffer carrying raw (not yet decoded) values.
pub(crate) type RawCaptures<'r, 'p> = SmallVec<[(&'r str, &'p str); 8]>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    literals: HashMap<Box<str>, Node<T>>,
    captures: Vec<(Box<str>, Node<T>)>,
    // Catch-all entries carry their bound name per method, so routes with
    // different names at the same position never clobber each other.
    catch_all: Option<MethodTable<(Box<str>, T)>>,
    endpoints: MethodTable<T>,
}

#[derive(Debug)]
struct MethodTable<T> {
    entries: Vec<(Method, T)>,
    any: Option<T>,
}

impl<T> MethodTable<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            any: None,
        }
    }

    fn set(&mut self, method: Method, handler: T) {
        if method == Method::Any {
            self.any = Some(handler);
            return;
        }
        match self.entries.iter_mut().find(|&&mut (m, _)| m == method) {
            Some(entry) => entry.1 = handler,
            None => self.entries.push((method, handler)),
        }
    }

    fn get(&self, method: Method) -> Option<&T> {
        if method != Method::Any {
            if let Some((_, handler)) = self.entries.iter().find(|&&(m, _)| m == method) {
                return Some(handler);
            }
        }
        self.any.as_ref()
    }
}

impl<T> Node<T> {
    pub(crate) fn new() -> Self {
        Self {
            literals: HashMap::new(),
            captures: Vec::new(),
            catch_all: None,
            endpoints: MethodTable::new(),
        }
    }

    pub(crate) fn insert(
        &mut self,
        segments: &[PatternSegment],
        method: Method,
        handler: T,
    ) -> Result<(), &'static str> {
        let (segment, rest) = match segments.split_first() {
            None => {
                self.endpoints.set(method, handler);
                return Ok(());
            }
            Some(x) => x,
        };

        match segment {
            PatternSegment::Literal(lit) => self
                .literals
                .entry(lit.clone())
                .or_insert_with(Node::new)
                .insert(rest, method, handler),
            PatternSegment::Capture(name) => {
                let child = match self.captures.iter().position(|(n, _)| n == name) {
                    Some(i) => &mut self.captures[i].1,
                    None => {
                        self.captures.push((name.clone(), Node::new()));
                        &mut self.captures.last_mut().unwrap().1
                    }
                };
                child.insert(rest, method, handler)
            }
            PatternSegment::CatchAll(name) => {
                if !rest.is_empty() {
                    return Err("catch-all segment can only appear at end");
                }
                self.catch_all
                    .get_or_insert_with(MethodTable::new)
                    .set(method, (name.clone(), handler));
                Ok(())
            }
        }
    }

    /// Walks the trie, trying literal, then capture, then catch-all children
    /// at every depth. The first alternative whose subtree yields a match
    /// wins; a failed subtree backs out and releases its captures.
    pub(crate) fn find<'r, 'p>(
        &'r self,
        path: &'p str,
        parts: &[&'p str],
        method: Method,
        captures: &mut RawCaptures<'r, 'p>,
    ) -> Option<&'r T> {
        let (&part, rest) = match parts.split_first() {
            None => return self.endpoints.get(method),
            Some(x) => x,
        };

        if let Some(child) = self.literals.get(part) {
            if let Some(data) = child.find(path, rest, method, captures) {
                return Some(data);
            }
        }

        for (name, child) in &self.captures {
            captures.push((&**name, part));
            if let Some(data) = child.find(path, rest, method, captures) {
                return Some(data);
            }
            captures.pop();
        }

        if let Some(table) = &self.catch_all {
            if let Some((name, data)) = table.get(method) {
                let last = *rest.last().unwrap_or(&part);
                let start = suffix_offset(path, part);
                let end = suffix_offset(path, last) + last.len();
                captures.push((&**name, &path[start..end]));
                return Some(data);
            }
        }

        None
    }
}

// `part` is always a subslice of `path`, produced by splitting it.
#[inline]
fn suffix_offset(src: &str, part: &str) -> usize {
    part.as_ptr() as usize - src.as_ptr() as usize
}
