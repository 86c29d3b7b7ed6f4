//! CLI infrastructure for the oxo solver
//!
//! This module provides the command-line interface for solving positions,
//! playing out perfect games, and analyzing the game tree.

pub mod commands;
pub mod output;
