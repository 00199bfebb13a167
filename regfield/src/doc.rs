//! Overviews, examples, and other reference material.

pub mod example;
pub mod overview;
