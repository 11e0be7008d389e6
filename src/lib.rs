//! # Catalog
//!
//! A product catalog service: five REST endpoints over an injected product
//! store, built on axum with a small dependency injection container and
//! explicit application lifecycle.
//!
//! ## Features
//!
//! - **Dependency Injection**: the product store is resolved from a [`Container`]
//!   as `Arc<dyn ProductRepository>`, so a relational store can replace the
//!   in-memory one without touching the handlers
//! - **Lifecycle**: stores are initialized at startup and torn down at shutdown
//! - **Boundary validation**: path ids and JSON bodies go through [`pipe`]s
//!   and fail fast with `400 Bad Request`
//! - **Request logging**: an interceptor chain with a `tracing` logger
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catalog::prelude::*;
//! use catalog::config::ServerConfig;
//! use catalog::product::{InMemoryProductRepository, ProductModule, ProductRepository};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut container = ContainerBuilder::new()
//!         .register(InMemoryProductRepository::new())
//!         .bind::<dyn ProductRepository, InMemoryProductRepository, _>(|r| r as Arc<dyn ProductRepository>)
//!         .build();
//!     ProductModule::register(&mut container).unwrap();
//!
//!     let state = AppState::new(Arc::new(container));
//!     let router = catalog::app::catalog_router(state, &ServerConfig::default());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:5001").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

// Lets `#[derive(Injectable)]` expand to `::catalog::...` inside this crate too.
extern crate self as catalog;

pub mod app;
pub mod common;
pub mod config;
pub mod di;
pub mod error;
pub mod exception;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod pipe;
pub mod product;

// Re-export core types
pub use app::AppState;
pub use common::ApiError;
pub use di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
pub use error::{CatalogError, Result};
pub use module::Module;

// Re-export macros
pub use catalog_macro::Injectable as DeriveInjectable;

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use catalog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::AppState;
    pub use crate::common::{ApiError, StatusCode};
    pub use crate::di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
    pub use crate::error::{CatalogError, Result};
    pub use crate::exception::{ExceptionFilter, HttpExceptionFilter};
    pub use crate::interceptor::{Interceptor, InterceptorResult, Next};
    pub use crate::lifecycle::{
        Application, ApplicationBuilder, LifecycleError, LifecycleManager, OnApplicationBootstrap,
        OnApplicationShutdown, OnModuleDestroy, OnModuleInit, shutdown_signal,
    };
    pub use crate::module::Module;
    pub use crate::pipe::{Pipe, PipeError, PipeResult};
    pub use crate::DeriveInjectable as Injectable;
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        extract::{Path, State},
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
