//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod inspect;
mod rank;
mod weights;

pub use inspect::{format_quantities, run_quantity, run_query};
pub use rank::{render_outcome, resolve_rank_config, run_rank, RankCommand};
pub use weights::{format_weights, run_weights};
