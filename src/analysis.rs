//! The analytic engine.
//!
//! Every component in this module is a pure function of an immutable
//! [`Document`](crate::document::Document) plus scalar parameters: it reads
//! no shared mutable state, mutates nothing, and returns a freshly allocated
//! result. A single document can therefore be analyzed from any number of
//! threads concurrently with no locking.
//!
//! # Components
//!
//! - [`frequency`] - token/lemma frequency ranking
//! - [`sentiment`] - document-level and per-lemma sentiment aggregation
//! - [`statistics`] - counts, lexical diversity, average sentence length
//! - [`pos`] - part-of-speech distribution
//! - [`readability`] - Flesch Reading Ease
//! - [`noun_phrase`] - noun-phrase frequency ranking
//! - [`kwic`] - keyword-in-context concordance search
//! - [`report`] - fixed-order plain-text report assembly

pub mod frequency;
pub mod kwic;
pub mod noun_phrase;
pub mod pos;
pub mod readability;
pub mod report;
pub mod sentiment;
pub mod statistics;
