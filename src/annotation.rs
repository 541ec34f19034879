//! Annotation providers.
//!
//! The analytic components never tokenize, lemmatize, or chunk text
//! themselves; they consume a [`Document`](crate::document::Document)
//! produced by an [`Annotator`]. This module defines that seam and ships a
//! deterministic rule-based implementation,
//! [`SimpleAnnotator`](simple::SimpleAnnotator), so the library is usable
//! end-to-end without an external NLP pipeline.
//!
//! A provider must guarantee the document invariants: token positions
//! contiguous from 0, sentence ranges valid and in order, noun-phrase spans
//! contiguous with materialized text. [`Document::new`] re-checks the
//! structural parts of this contract.
//!
//! # Examples
//!
//! ```
//! use sagitta::annotation::Annotator;
//! use sagitta::annotation::simple::SimpleAnnotator;
//!
//! let annotator = SimpleAnnotator::new();
//! let doc = annotator.annotate("The quick brown fox jumps.").unwrap();
//!
//! assert_eq!(doc.sentences().len(), 1);
//! assert!(doc.tokens().iter().any(|t| t.is_punct));
//! ```
//!
//! [`Document::new`]: crate::document::Document::new

pub mod simple;

use crate::document::Document;
use crate::error::Result;

/// Produces an annotated [`Document`] from raw text.
///
/// Implementations must be deterministic: annotating the same text twice
/// yields equal documents.
pub trait Annotator: Send + Sync {
    /// Annotate raw text into an immutable document.
    fn annotate(&self, text: &str) -> Result<Document>;

    /// Name of this annotator, for diagnostics.
    fn name(&self) -> &'static str;
}
