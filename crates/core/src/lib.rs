//! Core business logic for Praxis.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types and financial calculations live here.
//!
//! # Modules
//!
//! - `wip` - Transaction categorization and work-in-progress balance aggregation
//! - `series` - Daily time-series downsampling for display-bound outputs
//! - `debtor` - Debtor aging and payment-speed analytics
//! - `report` - Report orchestration over injected data-access collaborators

pub mod debtor;
pub mod report;
pub mod series;
pub mod wip;
