//! Streaming suppression of documents whose id was already emitted

use crate::graph::OutputDocument;
use std::collections::HashSet;

/// Remembers emitted document ids.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time a document id is offered, false afterwards.
    pub fn admit(&mut self, document: &OutputDocument) -> bool {
        if self.seen.contains(document.id()) {
            return false;
        }
        self.seen.insert(document.id().to_string())
    }
}

/// Iterator adapter passing through errors and first occurrences only.
#[derive(Debug)]
pub struct Deduplicated<I> {
    inner: I,
    filter: Deduplicator,
}

impl<I> Deduplicated<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            filter: Deduplicator::new(),
        }
    }

    /// The wrapped iterator
    pub fn get_ref(&self) -> &I {
        &self.inner
    }
}

impl<I, E> Iterator for Deduplicated<I>
where
    I: Iterator<Item = Result<OutputDocument, E>>,
{
    type Item = Result<OutputDocument, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(document) => {
                    if self.filter.admit(&document) {
                        return Some(Ok(document));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
