//! # CLI Module
//!
//! Command-line interface for the nestgen scaffolder.
//!
//! ## Commands
//!
//! ### `new`
//!
//! Scaffold a module and register it in `app.module.ts`:
//!
//! ```bash
//! nestgen new "order item"
//! ```
//!
//! Options:
//! - `NAME` - Free-form module name (prompted for interactively when omitted)
//! - `--root <DIR>` - Project root (default: current directory)
//! - `--force` - Overwrite existing generated files
//! - `--dry-run` - Show what would change without writing files
//! - `--config <FILE>` - Explicit `nestgen.toml` path
//!
//! ## Examples
//!
//! ```bash
//! # Scaffold into the current project
//! nestgen new "order item"
//!
//! # Preview against another project
//! nestgen new fila --root ../backend --dry-run
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
