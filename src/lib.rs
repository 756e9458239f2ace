//! # nestgen
//!
//! **nestgen** scaffolds NestJS feature modules (the conventional
//! controller/service/DTO trio) and idempotently registers them in the
//! project's composition root (`app.module.ts`).
//!
//! ## Overview
//!
//! Given a free-form module name, nestgen derives the casing views the
//! host project uses (Pascal for class names, camel for members, kebab for
//! files and routes), renders the boilerplate files from Askama templates,
//! and inserts one import line plus one `imports: [...]` array entry into
//! the composition root without disturbing any surrounding text.
//!
//! ## Architecture
//!
//! The library is organized into three modules plus the CLI:
//!
//! - **[`naming`]** - Casing views and the validated [`naming::ModuleName`]
//! - **[`patch`]** - The idempotent composition-root patcher
//! - **[`generator`]** - Template rendering and scaffolding orchestration
//! - **[`cli`]** - Command-line interface (`nestgen new`)
//!
//! ## Scaffolding Flow
//!
//! ```text
//! "order item"
//!     │ naming::ModuleName::parse
//!     ├── pascal: OrderItem   camel: orderItem   kebab: order-item
//!     │ generator::templates (Askama)
//!     ├── src/modules/order-item/order-item.module.ts
//!     ├── src/modules/order-item/order-item.service.ts
//!     ├── src/modules/order-item/order-item.controller.ts
//!     ├── src/modules/order-item/dto/order-item.dto.ts
//!     │ patch::patch_registry
//!     └── src/app.module.ts   (+ import line, + OrderItemModule entry)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nestgen::generator::{scaffold_module, ProjectConfig, ScaffoldOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! scaffold_module(
//!     "order item",
//!     std::path::Path::new("."),
//!     &ProjectConfig::default(),
//!     ScaffoldOptions::default(),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure model
//!
//! nestgen is a best-effort scaffolding tool. Invalid names and a missing
//! modules directory fail fast before any file is written. A module that
//! is already registered, or a composition root whose anchors cannot be
//! found, degrade to warnings with manual instructions; files that were
//! already written stay in place. There is no multi-file transaction.

pub mod cli;
pub mod generator;
pub mod naming;
pub mod patch;

pub use naming::{InvalidName, ModuleName};
pub use patch::{patch_registry, InsertOutcome, PatchResult};
