// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern.
//!
//! - [`catalog`] - Product catalog screen (form, status line, product list)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
pub mod catalog;
pub mod design_tokens;
pub mod theming;
