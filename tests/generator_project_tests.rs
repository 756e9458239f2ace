use std::fs;
use std::path::PathBuf;

use nestgen::generator::{scaffold_module, ProjectConfig, ScaffoldOptions};

fn temp_dir() -> PathBuf {
    tempfile::Builder::new()
        .prefix("proj_test_")
        .tempdir()
        .expect("create temp dir")
        .keep()
}

const APP_MODULE: &str = "\
import { Module } from '@nestjs/common';
import { AppController } from './app.controller';
import { RamalModule } from './modules/ramal/ramal.module';
import { FilaModule } from './modules/fila/fila.module';

@Module({
  imports: [
    PrismaModule,
    RamalModule,
    FilaModule,
  ],
  controllers: [AppController],
})
export class AppModule {}
";

fn temp_project() -> PathBuf {
    let root = temp_dir();
    fs::create_dir_all(root.join("src/modules")).unwrap();
    fs::write(root.join("src/app.module.ts"), APP_MODULE).unwrap();
    root
}

#[test]
fn test_scaffold_produces_module_layout() {
    let root = temp_project();
    let module_dir = scaffold_module(
        "grupo de captura",
        &root,
        &ProjectConfig::default(),
        ScaffoldOptions::default(),
    )
    .unwrap();

    assert_eq!(module_dir, root.join("src/modules/grupo-de-captura"));
    for file in [
        "grupo-de-captura.module.ts",
        "grupo-de-captura.service.ts",
        "grupo-de-captura.controller.ts",
        "dto/grupo-de-captura.dto.ts",
    ] {
        assert!(module_dir.join(file).exists(), "missing {file}");
    }

    let controller =
        fs::read_to_string(module_dir.join("grupo-de-captura.controller.ts")).unwrap();
    assert!(controller.contains("@Controller('grupo-de-captura')"));
    assert!(controller.contains("GrupoDeCapturaService"));

    let dto = fs::read_to_string(module_dir.join("dto/grupo-de-captura.dto.ts")).unwrap();
    assert!(dto.is_empty());
}

#[test]
fn test_scaffold_registers_module_after_last_entry() {
    let root = temp_project();
    scaffold_module(
        "grupo de captura",
        &root,
        &ProjectConfig::default(),
        ScaffoldOptions::default(),
    )
    .unwrap();

    let app = fs::read_to_string(root.join("src/app.module.ts")).unwrap();
    let lines: Vec<&str> = app.lines().collect();
    let fila_import = lines
        .iter()
        .position(|l| l.contains("fila.module"))
        .unwrap();
    assert_eq!(
        lines[fila_import + 1],
        "import { GrupoDeCapturaModule } from './modules/grupo-de-captura/grupo-de-captura.module';"
    );
    let fila_entry = lines.iter().position(|l| *l == "    FilaModule,").unwrap();
    assert_eq!(lines[fila_entry + 1], "    GrupoDeCapturaModule,");
}

#[test]
fn test_scaffold_preserves_user_edits_without_force() {
    let root = temp_project();
    let config = ProjectConfig::default();
    scaffold_module("fila2", &root, &config, ScaffoldOptions::default()).unwrap();

    let service = root.join("src/modules/fila2/fila2.service.ts");
    fs::write(&service, "// user owned").unwrap();
    scaffold_module("fila2", &root, &config, ScaffoldOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(&service).unwrap(), "// user owned");

    let opts = ScaffoldOptions {
        force: true,
        dry_run: false,
    };
    scaffold_module("fila2", &root, &config, opts).unwrap();
    assert!(fs::read_to_string(&service)
        .unwrap()
        .contains("@Injectable()"));
}

#[test]
fn test_scaffold_with_custom_layout_config() {
    let root = temp_dir();
    fs::create_dir_all(root.join("app/features")).unwrap();
    fs::write(
        root.join("nestgen.toml"),
        "modules_root = \"app/features\"\napp_module = \"app/root.module.ts\"\n",
    )
    .unwrap();
    fs::write(
        root.join("app/root.module.ts"),
        "import { FooModule } from './modules/foo/foo.module';\n\n@Module({\n  imports: [FooModule],\n})\n",
    )
    .unwrap();

    let config = nestgen::generator::resolve_project_config(None, &root).unwrap();
    let module_dir = scaffold_module("perfil", &root, &config, ScaffoldOptions::default()).unwrap();
    assert_eq!(module_dir, root.join("app/features/perfil"));

    let app = fs::read_to_string(root.join("app/root.module.ts")).unwrap();
    assert!(app.contains("imports: [FooModule, PerfilModule],"));
}
