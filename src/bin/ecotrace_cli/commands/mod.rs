// ABOUTME: Re-exports command modules for ecotrace-cli
// ABOUTME: Provides access to estimate, factors, and template commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

pub mod estimate;
pub mod factors;
pub mod template;
