//! Terminal client for the catalog service
//!
//! [`CatalogView`] holds the product list and a single create/edit form and
//! talks to the service through a [`CatalogApi`]. [`HttpCatalogApi`] is the
//! reqwest implementation; tests swap in their own.
//!
//! ```rust,no_run
//! use catalog_client::{CatalogView, HttpCatalogApi, TerminalNotifier};
//!
//! # async fn run() -> catalog_client::Result<()> {
//! let api = HttpCatalogApi::new("http://localhost:5001/api/products");
//! let mut view = CatalogView::new(api, TerminalNotifier);
//! view.load().await?;
//! view.set_name("Tablet");
//! view.set_price("600");
//! view.submit().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod command;
pub mod error;
pub mod form;
pub mod notify;
pub mod render;
pub mod view;

pub use api::{CatalogApi, DEFAULT_API_URL, HttpCatalogApi};
pub use command::{Command, CommandError};
pub use error::{ClientError, Result};
pub use form::ProductForm;
pub use notify::{Notifier, TerminalNotifier};
pub use view::{CatalogView, ViewStatus};
