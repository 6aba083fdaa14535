// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::ProductApi;
use crate::config::Config;
use crate::ui::catalog;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Catalog(catalog::Message),
    /// Cycle System, Light and Dark and persist the choice.
    ToggleTheme,
    DismissWarning,
}

/// Everything the application needs at startup.
///
/// `main` resolves the configuration and the API client before the window
/// opens so that a bad API address fails fast on the command line.
pub struct Flags {
    /// Optional locale override from `--lang`.
    pub lang: Option<String>,
    pub config: Config,
    /// i18n key of a problem found while loading `config`.
    pub config_warning: Option<String>,
    /// Directory settings are saved to; `None` uses the usual resolution.
    pub config_dir: Option<PathBuf>,
    pub api: Arc<dyn ProductApi>,
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flags")
            .field("lang", &self.lang)
            .field("config", &self.config)
            .field("config_warning", &self.config_warning)
            .field("config_dir", &self.config_dir)
            .field("api_base_url", &self.api.base_url().as_str())
            .finish()
    }
}
