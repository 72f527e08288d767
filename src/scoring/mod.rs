// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matched records get their numbers.
//!
//! Text relevance is a set of fixed, additive bonuses. Link authority is a
//! pluggable policy on top. Ordering is by score alone, with catalog order
//! breaking ties.

mod core;
pub mod ranking;

pub use self::core::*;
