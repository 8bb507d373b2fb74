// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Physiological constants and profile input domain limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Tunable thresholds live in the intelligence crate's
//! configuration; the values here are fixed physical facts and input bounds.

/// Physiological constants based on nutrition and exercise science
pub mod physiology;

/// Declared numeric domain of every profile field
pub mod limits;
