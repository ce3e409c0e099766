// logtab - core/mod.rs
//
// Core business logic layer.
// Must NOT touch the filesystem; callers pass text in and writers out.

pub mod export;
pub mod model;
pub mod parser;
