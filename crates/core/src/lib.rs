//! Core business logic for Writedown.
//!
//! This crate contains pure business logic with ZERO storage or presentation
//! dependencies. Collaborators are reached through the traits in
//! [`depreciation::ports`].
//!
//! # Modules
//!
//! - `ledger` - Posting legs, balanced pairs, vouchers, balance grouping
//! - `fiscal` - Fiscal periods and month arithmetic
//! - `depreciation` - Period-close depreciation engine and service
//! - `reports` - Depreciation schedule rows and columns

pub mod depreciation;
pub mod fiscal;
pub mod ledger;
pub mod reports;
