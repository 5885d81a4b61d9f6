#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

pub mod config;
pub mod course;
pub mod front_matter;
pub mod report;
pub mod scaffold;
pub mod tree;

pub mod error {
    pub use anyhow::{Error, Result};
}
