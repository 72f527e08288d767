// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Query normalization lives here so that the query side and the record side
//! of every comparison fold case the same way.

pub mod normalize;
