//! Compiled-in path specs for the two course generators.

pub mod modules;
pub mod site;
