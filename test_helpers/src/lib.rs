//! Test helpers shared across the simpleoo workspace.
//!
//! - [`graph`] compares value graphs structurally, following cycles;
//! - [`fixtures`] builds the prototype hierarchies used by behavioural tests;
//! - [`jail`] runs capability loading inside a [`figment::Jail`].

pub mod fixtures;
pub mod graph;
pub mod jail;
