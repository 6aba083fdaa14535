// SPDX-License-Identifier: MPL-2.0
use catalog_desk::api::mock::{ApiCall, MockProductApi};
use catalog_desk::api::ProductApi;
use catalog_desk::config::{self, Config};
use catalog_desk::domain::{DraftField, ImageRef, ImageUpload, Product, ProductId};
use catalog_desk::error::ApiError;
use catalog_desk::i18n::fluent::I18n;
use catalog_desk::ui::catalog::{Effect, Message, State, Status};
use catalog_desk::ui::theming::ThemeMode;
use tempfile::tempdir;

fn product(id: u64, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: "2.50".to_string(),
        stock: "10".to_string(),
        image: None,
    }
}

/// Runs `effect` against `api` the way the application root does and feeds
/// every resulting message back into `state`.
async fn drive(state: &mut State, api: &MockProductApi, effect: Effect) {
    let mut pending = vec![effect];
    while let Some(effect) = pending.pop() {
        let messages = match effect {
            Effect::None | Effect::PickImage => Vec::new(),
            Effect::LoadProducts => vec![Message::ProductsLoaded(api.list_products().await)],
            Effect::CreateProduct(payload) => {
                vec![Message::ProductCreated(api.create_product(payload).await)]
            }
            Effect::DeleteProduct(id) => vec![Message::ProductDeleted {
                id,
                result: api.delete_product(id).await,
            }],
            Effect::FetchThumbnails(requests) => {
                let mut messages = Vec::new();
                for (id, url) in requests {
                    messages.push(Message::ThumbnailLoaded {
                        id,
                        result: api.fetch_image(url).await,
                    });
                }
                messages
            }
        };
        for message in messages {
            pending.push(state.update(message));
        }
    }
}

fn names(state: &State) -> Vec<String> {
    state
        .products()
        .map(|list| list.iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn create_and_delete_round_trip_through_api() {
    let api = MockProductApi::new();
    api.push_list(Ok(vec![product(1, "Caneta")]));
    let mut state = State::new(api.base_url().clone());

    let effect = state.init();
    drive(&mut state, &api, effect).await;
    assert_eq!(names(&state), vec!["Caneta"]);

    for (field, value) in [
        (DraftField::Name, "Lapis"),
        (DraftField::Price, "1.00"),
        (DraftField::Stock, "5"),
    ] {
        state.update(Message::FieldChanged(field, value.to_string()));
    }
    state.update(Message::ImagePicked(Some(ImageUpload::new(
        "lapis.jpg",
        vec![0xff, 0xd8],
    ))));

    let mut created = product(2, "Lapis");
    created.image = Some(ImageRef::new("/media/lapis.jpg"));
    api.push_create(Ok(created));
    api.push_image(Ok(vec![0xff, 0xd8]));
    let effect = state.update(Message::Submit);
    drive(&mut state, &api, effect).await;

    assert_eq!(names(&state), vec!["Caneta", "Lapis"]);
    assert_eq!(state.status(), Some(&Status::Created));
    assert!(state.thumbnail(ProductId::new(2)).is_some());

    api.push_delete(Ok(serde_json::Value::Null));
    let effect = state.update(Message::Delete(ProductId::new(1)));
    drive(&mut state, &api, effect).await;

    assert_eq!(names(&state), vec!["Lapis"]);
    assert_eq!(state.status(), Some(&Status::Deleted));

    let calls = api.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], ApiCall::List);
    assert!(matches!(&calls[1], ApiCall::Create(p) if p.name == "Lapis" && p.image.file_name() == "lapis.jpg"));
    assert_eq!(
        calls[2],
        ApiCall::FetchImage(url::Url::parse("http://localhost:8000/media/lapis.jpg").unwrap())
    );
    assert_eq!(calls[3], ApiCall::Delete(ProductId::new(1)));
}

#[tokio::test]
async fn unreachable_server_leaves_catalog_empty_and_quiet() {
    let api = MockProductApi::new();
    api.push_list(Err(ApiError::Transport("connection refused".into())));
    let mut state = State::new(api.base_url().clone());

    let effect = state.init();
    drive(&mut state, &api, effect).await;

    assert!(state.products().is_none());
    assert!(state.status().is_none());
}

#[tokio::test]
async fn rejected_create_is_reported_with_cause() {
    let api = MockProductApi::new();
    api.push_list(Ok(vec![product(1, "Caneta")]));
    let mut state = State::new(api.base_url().clone());
    let effect = state.init();
    drive(&mut state, &api, effect).await;

    state.update(Message::FieldChanged(DraftField::Name, "Lapis".into()));
    state.update(Message::FieldChanged(DraftField::Price, "abc".into()));
    state.update(Message::FieldChanged(DraftField::Stock, "5".into()));
    state.update(Message::ImagePicked(Some(ImageUpload::new("l.png", vec![1]))));

    api.push_create(Err(ApiError::Status {
        status: 400,
        detail: Some(r#"{"preco":["A valid number is required."]}"#.into()),
    }));
    let effect = state.update(Message::Submit);
    drive(&mut state, &api, effect).await;

    assert_eq!(names(&state), vec!["Caneta"]);
    let status = state.status().expect("status");
    assert_eq!(status.message_key(), "catalog-status-create-failed");
    assert_eq!(status.cause_key(), Some("error-api-status"));
    assert_eq!(state.draft_field(DraftField::Price), "abc");

    let i18n = I18n::new(Some("pt-BR".into()), &Config::default());
    assert_eq!(i18n.tr(status.message_key()), "Falha ao enviar o produto.");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("catalog-status-deleted"), "Product deleted successfully!");

    let mut portuguese = Config::default();
    portuguese.general.language = Some("pt-BR".to_string());
    config::save_to_path(&portuguese, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "pt-BR");
    assert_eq!(i18n.tr("catalog-status-deleted"), "Produto deletado com sucesso!");
}

#[test]
fn preferences_survive_a_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.api.base_url = Some("https://catalog.example.com/api".to_string());

    config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, config);
    let base = config::resolve_api_base_url(Some("https://cli.example.com/api/"), &loaded)
        .expect("cli url");
    assert_eq!(base.as_str(), "https://cli.example.com/api/");
}

#[test]
fn corrupt_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = 3")
        .expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
