//! Command line interface for Sagitta.
//!
//! The CLI is a thin presentation layer: it reads a text file, annotates it
//! with the built-in [`SimpleAnnotator`](crate::annotation::simple::SimpleAnnotator),
//! runs the requested analysis, and prints the result in human or JSON form.
//! All analytic semantics live in [`crate::analysis`].

pub mod args;
pub mod commands;
pub mod output;
