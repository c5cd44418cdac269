#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # northwind-model
//!
//! A [SeaORM](https://www.sea-ql.org/SeaORM/) entity model for the classic
//! Northwind order-management schema: customers, employees, orders,
//! products, suppliers, shippers and territories.
//!
//! The crate declares tables, columns, keys and associations; it contains
//! no business logic or query engine of its own. Querying, transactions and
//! concurrency control belong to the database behind the
//! [`sea_orm::DatabaseConnection`] every operation goes through. Entity
//! descriptors are plain immutable data and safe to read from any thread.
//!
//! The relationship graph is the interesting part:
//!
//! - a self-referential hierarchy on `employees.reportsto`, with traversal
//!   helpers ([`entity::employee::Model::ancestors`] and friends) that are
//!   guarded against cycles,
//! - two many-to-many relationships realized through composite-key junction
//!   tables (`customercustomerdemo`, `employeeterritories`),
//! - an order-line entity (`order_details`) keyed by the (order, product)
//!   pair.
//!
//! Declared constraints (required columns, string widths, the
//! self-reference rule) are also checked in-process in each entity's
//! `before_save` hook, so violations fail before a statement is issued and
//! classify cleanly into [`ModelError`].
//!
//! ```no_run
//! use northwind_model::entity::{product, Category};
//! use northwind_model::schema::create_all_tables;
//! use sea_orm::{ActiveModelTrait, ActiveValue::Set, Database, DbErr, ModelTrait};
//!
//! # async fn run() -> Result<(), DbErr> {
//! let db = Database::connect("sqlite::memory:").await?;
//! create_all_tables(&db).await?;
//!
//! let chai = product::ActiveModel {
//!     product_id: Set(1),
//!     product_name: Set("Chai".to_owned()),
//!     discontinued: Set(0),
//!     ..Default::default()
//! }
//! .insert(&db)
//! .await?;
//!
//! let category = chai.find_related(Category).one(&db).await?;
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod schema;

mod validate;

pub use error::{ModelError, ModelResult};
