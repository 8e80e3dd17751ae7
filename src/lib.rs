//! Day Probability - which days of a month reach a number by multiplication
//!
//! For every number 1..=ceiling the engine records the days 1..=31 that reach
//! it by positive integer multiplication; the probability of a number is the
//! share of days that reach it.

pub mod charts;
pub mod config;
pub mod engine;
pub mod gui;
pub mod heading;
pub mod report;
