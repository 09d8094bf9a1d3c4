//! Seatplan library
//!
//! This library provides the core of the Seatplan seating chart: the seat,
//! roster and arrangement models, the seating controller with its dialog and
//! presentation contracts, persistence of saved arrangements, and the terminal
//! UI that drives it all.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod controller;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
