// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how suggestions get their numbers and their order.
//!
//! The two algorithms disagree on which direction is "better", so every
//! comparison goes through [`Algorithm::accepts`] and [`Algorithm::compare`]
//! instead of a bare `<` or `>`.
//!
//! [`Algorithm::accepts`]: crate::Algorithm::accepts
//! [`Algorithm::compare`]: crate::Algorithm::compare

mod core;
pub mod ranking;

pub use self::core::*;
