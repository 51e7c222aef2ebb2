// cursorrules - app/mod.rs
//
// Application layer: orchestration of the install sequence.
// Dependencies: core, platform, util.

pub mod install;
