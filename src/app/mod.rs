// logtab - app/mod.rs
//
// Application layer: file I/O around the core parse/aggregate/render steps.

pub mod summarise;
