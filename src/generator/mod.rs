//! # Generator Module
//!
//! Scaffolds one NestJS feature module and registers it in the project's
//! composition root.
//!
//! ## Overview
//!
//! A scaffolding run produces the conventional four-file module layout and
//! one patch to `app.module.ts`:
//!
//! ```text
//! src/modules/<kebab>/
//! ├── <kebab>.module.ts       # @Module wiring controller + service
//! ├── <kebab>.service.ts      # @Injectable service with PrismaService
//! ├── <kebab>.controller.ts   # @Controller with a placeholder GET
//! └── dto/
//!     └── <kebab>.dto.ts      # empty placeholder, filled in by hand
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Module name → naming (casing views) → Askama templates → file writes
//!                                     → patch (app.module.ts) → persist
//! ```
//!
//! Boilerplate is rendered from the Askama templates in `templates/`.
//! Generated files are user-owned once created: an existing file is
//! skipped with a warning unless `--force` is given. The registry patch is
//! idempotent and degrades to manual instructions when its anchors cannot
//! be found; see [`crate::patch`].
//!
//! ## Layout configuration
//!
//! The conventional paths (`src/modules`, `src/app.module.ts`, `.ts`) can
//! be overridden with a `nestgen.toml` in the project root; see
//! [`ProjectConfig`].

mod project;
mod project_config;
mod templates;

pub use project::*;
pub use project_config::*;
pub use templates::*;
