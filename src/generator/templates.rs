use askama::Template;
use std::fs;
use std::path::Path;

use crate::naming::ModuleName;

/// Template data for generating the `<kebab>.module.ts` file
///
/// Wires the module's controller and service together and imports the
/// shared Prisma module, matching the host project's convention.
#[derive(Template)]
#[template(path = "module.ts.txt", escape = "none")]
pub struct ModuleTemplateData<'a> {
    /// PascalCase module name (class identifiers)
    pub pascal: &'a str,
    /// kebab-case module name (file and route tokens)
    pub kebab: &'a str,
}

/// Template data for generating the `<kebab>.service.ts` file
#[derive(Template)]
#[template(path = "service.ts.txt", escape = "none")]
pub struct ServiceTemplateData<'a> {
    /// PascalCase module name
    pub pascal: &'a str,
}

/// Template data for generating the `<kebab>.controller.ts` file
#[derive(Template)]
#[template(path = "controller.ts.txt", escape = "none")]
pub struct ControllerTemplateData<'a> {
    /// PascalCase module name
    pub pascal: &'a str,
    /// camelCase module name (injected service member)
    pub camel: &'a str,
    /// kebab-case module name
    pub kebab: &'a str,
}

/// Render the module file contents
pub fn render_module(name: &ModuleName) -> askama::Result<String> {
    ModuleTemplateData {
        pascal: name.pascal(),
        kebab: name.kebab(),
    }
    .render()
}

/// Render the service file contents
pub fn render_service(name: &ModuleName) -> askama::Result<String> {
    ServiceTemplateData {
        pascal: name.pascal(),
    }
    .render()
}

/// Render the controller file contents
pub fn render_controller(name: &ModuleName) -> askama::Result<String> {
    ControllerTemplateData {
        pascal: name.pascal(),
        camel: name.camel(),
        kebab: name.kebab(),
    }
    .render()
}

/// Render the DTO placeholder contents
///
/// Empty on purpose: DTO files in the host project start blank and are
/// filled in by hand.
pub fn render_dto(_name: &ModuleName) -> askama::Result<String> {
    Ok(String::new())
}

/// The import statement that registers the module in the composition root
pub fn registry_import_line(name: &ModuleName) -> String {
    format!(
        "import {{ {pascal}Module }} from './modules/{kebab}/{kebab}.module';",
        pascal = name.pascal(),
        kebab = name.kebab()
    )
}

/// Write one rendered boilerplate file
///
/// Existing files are skipped with a warning unless `force` is set;
/// generated files are user-owned once created.
///
/// # Errors
///
/// Returns an error if file writing fails
pub fn write_rendered(path: &Path, contents: &str, label: &str, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        println!("⚠️  Skipping existing {label} file: {path:?}");
        return Ok(());
    }
    fs::write(path, contents)?;
    println!("✅ Generated {label}: {path:?}");
    Ok(())
}
