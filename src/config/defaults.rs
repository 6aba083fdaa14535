// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base address of the catalog API when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/";

/// Environment variable overriding the API base address.
pub const ENV_API_BASE_URL: &str = "CATALOG_DESK_API_URL";

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS selects an available one.
pub const DEFAULT_LOCALE: &str = "pt-BR";

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

/// Edge length of product thumbnails in the list.
pub const THUMBNAIL_SIZE: f32 = 96.0;
