use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use super::project_config::ProjectConfig;
use super::templates::{
    registry_import_line, render_controller, render_dto, render_module, render_service,
    write_rendered,
};
use crate::naming::ModuleName;
use crate::patch::{patch_registry, PatchResult};

/// Precondition failure detected before any file is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// The configured modules directory does not exist in the project
    MissingModulesRoot {
        /// The directory that was expected
        path: PathBuf,
    },
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::MissingModulesRoot { path } => {
                write!(
                    f,
                    "modules directory {} not found; run nestgen from the project root \
                    or point modules_root at it in nestgen.toml",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ScaffoldError {}

/// Options controlling one scaffolding run
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Overwrite existing generated files
    pub force: bool,
    /// Report what would change without writing anything
    pub dry_run: bool,
}

/// Scaffold one module and register it in the composition root
///
/// Sequencing: validate the name, verify the modules root exists, create
/// the module directories, write the four boilerplate files, then patch
/// `app.module.ts`. File writes are independent: a failure part-way leaves
/// the files already written in place (they were already reported), with no
/// rollback. Registry-patch anchors that cannot be found degrade to
/// warnings with manual instructions rather than errors.
///
/// # Errors
///
/// Returns an error for an invalid name, a missing modules root, or an I/O
/// failure; never for an already-registered module or a missing anchor.
pub fn scaffold_module(
    raw_name: &str,
    project_root: &Path,
    config: &ProjectConfig,
    opts: ScaffoldOptions,
) -> anyhow::Result<PathBuf> {
    let name = ModuleName::parse(raw_name)?;

    let modules_root = project_root.join(&config.modules_root);
    if !modules_root.is_dir() {
        return Err(ScaffoldError::MissingModulesRoot { path: modules_root }.into());
    }

    let module_dir = modules_root.join(name.kebab());
    let dto_dir = module_dir.join("dto");
    let kebab = name.kebab();
    let ext = config.extension.as_str();

    let files = [
        (
            module_dir.join(format!("{kebab}.module.{ext}")),
            render_module(&name)?,
            "module",
        ),
        (
            module_dir.join(format!("{kebab}.service.{ext}")),
            render_service(&name)?,
            "service",
        ),
        (
            module_dir.join(format!("{kebab}.controller.{ext}")),
            render_controller(&name)?,
            "controller",
        ),
        (
            dto_dir.join(format!("{kebab}.dto.{ext}")),
            render_dto(&name)?,
            "dto",
        ),
    ];

    if opts.dry_run {
        for (path, _, label) in &files {
            println!("📝 Would generate {label}: {path:?}");
        }
    } else {
        fs::create_dir_all(&dto_dir)
            .with_context(|| format!("Failed to create module directory {}", dto_dir.display()))?;
        for (path, contents, label) in &files {
            write_rendered(path, contents, label, opts.force)?;
        }
    }

    update_app_module(&name, &project_root.join(&config.app_module), opts)?;

    Ok(module_dir)
}

/// Patch the composition root and persist whatever insertions succeeded
///
/// A missing root file, an already-registered module, and unfound anchors
/// all degrade to warnings with manual instructions.
fn update_app_module(
    name: &ModuleName,
    app_module_path: &Path,
    opts: ScaffoldOptions,
) -> anyhow::Result<()> {
    let import_line = registry_import_line(name);
    let ident = name.module_ident();

    if !app_module_path.exists() {
        println!("⚠️  {app_module_path:?} not found. Register the module by hand:");
        println!("   {import_line}");
        println!("   {ident},");
        return Ok(());
    }

    let document = fs::read_to_string(app_module_path)
        .with_context(|| format!("Failed to read {}", app_module_path.display()))?;

    match patch_registry(&document, &ident, &import_line, &ident) {
        PatchResult::AlreadyPatched => {
            println!("⚠️  {ident} is already registered in {app_module_path:?}");
        }
        PatchResult::Applied {
            text,
            import,
            array,
        } => {
            if !import.is_inserted() {
                println!("⚠️  No import anchor found. Add the import by hand:");
                println!("   {import_line}");
            }
            if !array.is_inserted() {
                println!("⚠️  No imports array anchor found. Add the entry by hand:");
                println!("   {ident},");
            }
            if import.is_inserted() || array.is_inserted() {
                if opts.dry_run {
                    println!("📝 Would register {ident} in {app_module_path:?}");
                } else {
                    fs::write(app_module_path, text).with_context(|| {
                        format!("Failed to write {}", app_module_path.display())
                    })?;
                    println!("✅ Registered {ident} in {app_module_path:?}");
                }
            }
        }
    }
    Ok(())
}
