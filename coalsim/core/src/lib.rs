#![deny(clippy::pedantic)]

#[macro_use]
extern crate contracts;

#[macro_use]
extern crate typed_builder;

#[macro_use]
extern crate log;

pub mod algorithms;
pub mod cogs;
pub mod error;
pub mod forest;
pub mod landscape;
pub mod occupancy_spectrum;
pub mod simulation;
