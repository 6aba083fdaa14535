// SPDX-License-Identifier: MPL-2.0
//! Catalog screen: lists the remote products, creates new ones from a form and
//! deletes existing ones.
//!
//! The screen follows the "state down, messages up" pattern used by every
//! other screen, with one twist: [`State::update`] never performs I/O. It
//! returns an [`Effect`] describing the request to make, and the application
//! root runs that request against a [`ProductApi`](crate::api::ProductApi)
//! and feeds the outcome back as a [`Message`].

mod messages;
mod state;
mod view;

pub use messages::{Effect, Message};
pub use state::{State, Status};
pub use view::ViewContext;
