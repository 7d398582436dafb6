//! A document that can be shared between threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Document, Result};

/// A [`Document`] behind a single lock.
///
/// Every call takes the lock once, so a batch of edits passed to
/// [`SharedDocument::with`] is never interleaved with another thread's
/// edits or renders.
#[derive(Debug, Clone, Default)]
pub struct SharedDocument {
    inner: Arc<Mutex<Document>>,
}

impl SharedDocument {
    pub fn new(document: Document) -> Self {
        Self {
            inner: Arc::new(Mutex::new(document)),
        }
    }

    /// Run `f` with exclusive access to the document.
    ///
    /// Edits made by `f` before a panic stay applied; the batch is not
    /// rolled back.
    pub fn with<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(&mut self.lock())
    }

    /// Render under the lock.
    pub fn render(&self) -> Result<String> {
        self.lock().render()
    }

    /// Copy out the current document.
    pub fn snapshot(&self) -> Document {
        self.lock().clone()
    }

    // Poisoning is ignored. Each single store operation is complete before
    // it returns, but a panicking `with` closure may leave part of its batch.
    fn lock(&self) -> MutexGuard<'_, Document> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Document> for SharedDocument {
    fn from(document: Document) -> Self {
        Self::new(document)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        panic::{self, AssertUnwindSafe},
        thread,
    };

    use solgen_ir::{Attribute, Container};

    use super::*;

    #[test]
    fn test_concurrent_adds() {
        let shared = SharedDocument::default();
        shared.with(|doc| doc.add_container(Container::new("A")).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.with(|doc| {
                        doc.add_attribute(Attribute::new(format!("a{}", i), "uint"))
                            .unwrap()
                    })
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.snapshot().len(), 9);
        let rendered = shared.render().unwrap();
        for i in 0..8 {
            assert!(rendered.contains(&format!("uint a{};", i)));
        }
    }

    #[test]
    fn test_panicking_batch_keeps_applied_edits() {
        let shared = SharedDocument::default();
        shared.with(|doc| doc.add_container(Container::new("A")).unwrap());

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            shared.with(|doc| {
                doc.add_attribute(Attribute::new("applied", "uint")).unwrap();
                panic!("batch aborted");
            })
        }));
        assert!(result.is_err());

        let doc = shared.snapshot();
        assert_eq!(doc.len(), 2);
        assert!(shared.render().unwrap().contains("uint applied;"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let shared = SharedDocument::from(Document::new());
        shared.with(|doc| doc.add_container(Container::new("A")).unwrap());
        assert_eq!(shared.render().unwrap(), shared.render().unwrap());
    }
}
