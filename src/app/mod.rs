// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog screen, the
//! product API and persisted preferences.
//!
//! The catalog screen decides *what* should happen and reports it as an
//! [`Effect`](crate::ui::catalog::Effect); this module decides *how*, by
//! running the effect against the configured [`ProductApi`] and routing the
//! outcome back as a message.

mod effects;
mod message;
mod view;

pub use message::{Flags, Message};

use crate::api::ProductApi;
use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::config::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: catalog::State,
    api: Arc<dyn ProductApi>,
    theme_mode: ThemeMode,
    config: Config,
    config_dir: Option<PathBuf>,
    /// i18n key of the settings problem shown under the header.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("api_base_url", &self.api.base_url().as_str())
            .field("theme_mode", &self.theme_mode)
            .field("catalog", &self.catalog)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes state from `flags` and starts the initial product listing.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &flags.config);
        let mut catalog = catalog::State::new(flags.api.base_url().clone());
        let effect = catalog.init();

        tracing::info!(
            base_url = %flags.api.base_url(),
            locale = %i18n.current_locale(),
            "catalog client starting"
        );

        let app = App {
            i18n,
            catalog,
            theme_mode: flags.config.general.theme_mode,
            api: flags.api,
            config: flags.config,
            config_dir: flags.config_dir,
            config_warning: flags.config_warning,
        };
        let task = app.run_effect(effect);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Catalog(message) => {
                let effect = self.catalog.update(message);
                self.run_effect(effect)
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.next();
                self.config.general.theme_mode = self.theme_mode;
                self.persist_preferences();
                Task::none()
            }
            Message::DismissWarning => {
                self.config_warning = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            theme_mode: self.theme_mode,
            config_warning: self.config_warning.as_deref(),
        })
    }

    fn run_effect(&self, effect: catalog::Effect) -> Task<Message> {
        effects::perform(Arc::clone(&self.api), effect).map(Message::Catalog)
    }

    fn persist_preferences(&mut self) {
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(error = %err, "could not save settings");
            self.config_warning = Some("notification-config-save-error".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockProductApi;
    use crate::domain::{ImageRef, Product, ProductId};
    use tempfile::tempdir;

    fn caneta() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Caneta".into(),
            price: "2.50".into(),
            stock: "10".into(),
            image: Some(ImageRef::new("/img/1.png")),
        }
    }

    fn flags(api: &MockProductApi, config_dir: Option<PathBuf>) -> Flags {
        Flags {
            lang: Some("pt-BR".into()),
            config: Config::default(),
            config_warning: None,
            config_dir,
            api: Arc::new(api.clone()),
        }
    }

    #[test]
    fn new_starts_loading_products() {
        let api = MockProductApi::new();
        let (app, _task) = App::new(flags(&api, None));

        assert!(app.catalog.is_loading());
        assert!(app.catalog.products().is_none());
    }

    #[test]
    fn title_is_translated() {
        let api = MockProductApi::new();
        let (app, _task) = App::new(flags(&api, None));
        assert_eq!(app.title(), "Catálogo de Produtos");
    }

    #[test]
    fn catalog_messages_reach_catalog_state() {
        let api = MockProductApi::new();
        let (mut app, _task) = App::new(flags(&api, None));

        let _ = app.update(Message::Catalog(catalog::Message::ProductsLoaded(Ok(vec![
            caneta(),
        ]))));

        let names: Vec<_> = app
            .catalog
            .products()
            .expect("listed")
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["Caneta"]);
        // Tasks only run inside the iced runtime.
        assert!(api.calls().is_empty());
    }

    #[test]
    fn toggle_theme_cycles_and_persists() {
        let dir = tempdir().expect("temp dir");
        let api = MockProductApi::new();
        let (mut app, _task) = App::new(flags(&api, Some(dir.path().to_path_buf())));
        assert_eq!(app.theme_mode, ThemeMode::System);

        let _ = app.update(Message::ToggleTheme);

        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.theme(), Theme::Light);
        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.general.theme_mode, ThemeMode::Light);
        assert!(app.config_warning.is_none());
    }

    #[test]
    fn failed_save_shows_warning_until_dismissed() {
        let dir = tempdir().expect("temp dir");
        // A regular file where the config directory should be.
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").expect("write blocker");
        let api = MockProductApi::new();
        let (mut app, _task) = App::new(flags(&api, Some(blocker)));

        let _ = app.update(Message::ToggleTheme);
        assert_eq!(
            app.config_warning.as_deref(),
            Some("notification-config-save-error")
        );

        let _ = app.update(Message::DismissWarning);
        assert!(app.config_warning.is_none());
    }

    #[test]
    fn view_renders_before_any_listing() {
        let api = MockProductApi::new();
        let (app, _task) = App::new(flags(&api, None));

        assert!(app.catalog.status().is_none());
        let _element = app.view();
    }

    #[test]
    fn view_renders_listed_products_with_status_and_warning() {
        let api = MockProductApi::new();
        let mut flags = flags(&api, None);
        flags.config_warning = Some("notification-config-load-error".into());
        let (mut app, _task) = App::new(flags);

        let _ = app.update(Message::Catalog(catalog::Message::ProductsLoaded(Ok(vec![
            caneta(),
        ]))));
        let _ = app.update(Message::Catalog(catalog::Message::ThumbnailLoaded {
            id: ProductId::new(1),
            result: Ok(vec![0x89, b'P', b'N', b'G']),
        }));
        let _ = app.update(Message::Catalog(catalog::Message::Delete(ProductId::new(1))));
        let _ = app.update(Message::Catalog(catalog::Message::ProductDeleted {
            id: ProductId::new(9),
            result: Ok(serde_json::Value::Null),
        }));

        assert_eq!(app.catalog.status(), Some(&catalog::Status::Deleted));
        assert!(app.catalog.is_deleting(ProductId::new(1)));
        let _element = app.view();
    }

    #[test]
    fn view_renders_in_every_theme_mode() {
        let api = MockProductApi::new();
        let (mut app, _task) = App::new(flags(&api, None));
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            app.theme_mode = mode;
            let _element = app.view();
        }
    }

    #[test]
    fn load_warning_from_flags_is_kept() {
        let api = MockProductApi::new();
        let mut flags = flags(&api, None);
        flags.config_warning = Some("notification-config-load-error".into());

        let (app, _task) = App::new(flags);

        assert_eq!(
            app.config_warning.as_deref(),
            Some("notification-config-load-error")
        );
    }
}
