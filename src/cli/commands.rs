use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::generator::{resolve_project_config, scaffold_module, ScaffoldOptions};

/// Command-line interface for nestgen
///
/// Scaffolds NestJS feature modules and wires them into the project's
/// composition root.
#[derive(Parser)]
#[command(name = "nestgen")]
#[command(about = "NestJS module scaffolder", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for nestgen
#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a module (controller, service, DTO) and register it in app.module.ts
    New {
        /// Free-form module name, e.g. "order item"; prompted for when omitted
        name: Option<String>,

        /// Project root containing src/modules and src/app.module.ts
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Overwrite existing generated files without prompting
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Perform a dry run: show what would change without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Path to a layout config file (nestgen.toml)
        /// If not provided, will auto-detect in the project root
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The module name is empty or yields no identifier
/// - The modules directory is missing from the project
/// - A config file is given but cannot be read or parsed
/// - A file read or write fails
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::New {
            name,
            root,
            force,
            dry_run,
            config,
        } => {
            let name = match name {
                Some(name) => name.clone(),
                None => prompt_for_name()?,
            };
            let config = resolve_project_config(config.as_deref(), root)?;
            let opts = ScaffoldOptions {
                force: *force,
                dry_run: *dry_run,
            };
            let module_dir = scaffold_module(&name, root, &config, opts)?;
            if !*dry_run {
                println!("✅ Module scaffolded at {module_dir:?}");
            }
            Ok(())
        }
    }
}

/// Read the module name from stdin when it was not given as an argument
fn prompt_for_name() -> io::Result<String> {
    print!("Module name: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
