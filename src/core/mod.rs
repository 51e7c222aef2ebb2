// cursorrules - core/mod.rs
//
// Core content layer.
// Dependencies: standard library only.
// Must NOT depend on: platform, app, or any I/O.

pub mod rules;
