// SPDX-License-Identifier: MPL-2.0
//! `catalog_desk` is a desktop client for a remote product catalog, built with
//! the Iced GUI framework.
//!
//! It lists the products exposed by a REST API, creates new ones through a
//! multipart form with an image upload and deletes existing ones. The UI is
//! localized with Fluent and remembers user preferences between runs.
//!
//! - [`api`] - HTTP client for the catalog resource and a scripted test double
//! - [`domain`] - Products, drafts and the ordered product list
//! - [`ui::catalog`] - The catalog screen state, messages and rendering
//! - [`app`] - Iced application root that runs API requests for the screen

#![doc(html_root_url = "https://docs.rs/catalog_desk/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
