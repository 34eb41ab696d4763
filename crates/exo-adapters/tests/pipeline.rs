//! End-to-end generation through the real adapters.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use exo_adapters::{
    BundledSource, DirectorySource, LocalFilesystem, MemoryFilesystem, MemorySource,
    PluginGenerator, TeraRenderer, standard_tiers,
};
use exo_adapters::home::ExoHome;
use exo_core::prelude::*;
use tempfile::TempDir;

fn bundled_engine(fs: &MemoryFilesystem) -> RenderEngine {
    RenderEngine::new(
        TemplateResolver::new(vec![Box::new(BundledSource::new())]),
        Box::new(TeraRenderer::new()),
        Box::new(fs.clone()),
    )
}

fn full_data(language: Language) -> TemplateData {
    TemplateData {
        language,
        framework: "fastapi".into(),
        db: Database::Postgres,
        provider: CloudProvider::Aws,
        ci: CiSystem::GithubActions,
        monitoring: Monitoring::Prometheus,
        registry: "ghcr.io/acme".into(),
        ..TemplateData::named("order-service")
    }
}

#[test]
fn every_builtin_type_renders_for_every_language() {
    let registry = GeneratorRegistry::with_builtins();
    for language in Language::ALL {
        let fs = MemoryFilesystem::new();
        let engine = bundled_engine(&fs);
        let generator = AssetGenerator::new(&registry, &engine);

        for name in registry.names() {
            let result = generator
                .generate(&name, Path::new("/p"), &full_data(language), WritePolicy::default())
                .unwrap();
            assert!(
                result.is_success(),
                "{name} failed for {language}: {:?}",
                result.failures().collect::<Vec<_>>()
            );
        }
    }
}

#[test]
fn bare_defaults_render_without_undefined_variables() {
    let registry = GeneratorRegistry::with_builtins();
    let fs = MemoryFilesystem::new();
    let engine = bundled_engine(&fs);
    let generator = AssetGenerator::new(&registry, &engine);

    for name in registry.names() {
        if name == "infra" || name == "db" {
            continue;
        }
        let result = generator
            .generate(&name, Path::new("/p"), &TemplateData::default(), WritePolicy::default())
            .unwrap();
        assert!(result.is_success(), "{name} failed with defaults");
    }
}

#[test]
fn every_bundled_template_is_reachable() {
    let registry = GeneratorRegistry::with_builtins();
    let mut referenced = BTreeSet::new();

    let providers = [CloudProvider::Aws, CloudProvider::Gcp, CloudProvider::Azure];
    let databases = [Database::Postgres, Database::Mysql, Database::Mongo, Database::Redis];
    let cis = [CiSystem::GithubActions, CiSystem::GitlabCi];
    let licenses = [LicenseKind::Mit, LicenseKind::Apache2, LicenseKind::Gpl3];

    for language in Language::ALL {
        for i in 0..3 {
            let data = TemplateData {
                language,
                provider: providers[i],
                db: databases[i],
                ci: cis[i % 2],
                license: licenses[i],
                ..TemplateData::named("svc")
            };
            for generator in registry.list_all() {
                for mapping in generator.manifest(&data).unwrap() {
                    referenced.insert(mapping.template.relative_path().to_string());
                }
            }
        }
    }
    referenced.insert("db/redis.yml.tmpl".into());

    let bundled: BTreeSet<String> = BundledSource::new().paths().into_iter().collect();
    assert_eq!(bundled, referenced);
}

#[test]
fn db_postgres_writes_one_compose_file() {
    let dir = TempDir::new().unwrap();
    let registry = GeneratorRegistry::with_builtins();
    let engine = RenderEngine::new(
        TemplateResolver::new(standard_tiers(dir.path(), &ExoHome::at(dir.path().join(".exo")))),
        Box::new(TeraRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let data = TemplateData {
        db: Database::Postgres,
        ..TemplateData::named("orders")
    };

    let result = AssetGenerator::new(&registry, &engine)
        .generate("db", dir.path(), &data, WritePolicy::default())
        .unwrap();

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].status, FileStatus::Written);
    let written = fs::read_to_string(dir.path().join("docker-compose.postgres.yml")).unwrap();
    assert!(written.contains("orders-postgres"));
}

#[test]
fn helm_chart_lands_under_app_name_and_keeps_helm_syntax() {
    let registry = GeneratorRegistry::with_builtins();
    let fs = MemoryFilesystem::new();
    let engine = bundled_engine(&fs);

    AssetGenerator::new(&registry, &engine)
        .generate("helm", Path::new("/p"), &TemplateData::named("api"), WritePolicy::default())
        .unwrap();

    let deployment = fs.get("/p/charts/api/templates/deployment.yaml").unwrap();
    assert!(deployment.contains("{{ .Values.replicaCount }}"));
    assert!(fs.get("/p/charts/api/Chart.yaml").unwrap().contains("name: api"));
}

#[test]
fn github_workflow_keeps_actions_expressions() {
    let registry = GeneratorRegistry::with_builtins();
    let fs = MemoryFilesystem::new();
    let engine = bundled_engine(&fs);

    AssetGenerator::new(&registry, &engine)
        .generate("ci", Path::new("/p"), &full_data(Language::Go), WritePolicy::default())
        .unwrap();

    let workflow = fs.get("/p/.github/workflows/go.yml").unwrap();
    assert!(workflow.contains("${{ secrets.REGISTRY_USERNAME }}"));
    assert!(workflow.contains("registry: ghcr.io/acme"));
}

#[test]
fn project_local_template_fills_gaps_but_not_bundled_paths() {
    let fs = MemoryFilesystem::new();
    let engine = RenderEngine::new(
        TemplateResolver::new(vec![
            Box::new(BundledSource::new()),
            Box::new(
                MemorySource::new(SourceTier::ProjectLocal)
                    .with_template("makefile/Makefile.tmpl", "shadowed")
                    .with_template("extra/notes.md.tmpl", "notes for {{ app_name }}"),
            ),
        ]),
        Box::new(TeraRenderer::new()),
        Box::new(fs.clone()),
    );

    let makefile = engine
        .render(&TemplateId::new("templates/makefile/Makefile.tmpl").unwrap(), &TemplateData::named("svc"))
        .unwrap();
    assert!(makefile.contains("APP := svc"));

    let resolved = engine
        .resolver()
        .resolve(&TemplateId::new("templates/extra/notes.md.tmpl").unwrap())
        .unwrap();
    assert_eq!(resolved.tier, SourceTier::ProjectLocal);
}

#[test]
fn plugin_generation_type_renders_from_plugin_tier() {
    let home = TempDir::new().unwrap();
    let plugin_dir = home.path().join("plugins/fastapi-kit");
    fs::create_dir_all(&plugin_dir).unwrap();
    fs::write(
        plugin_dir.join("plugin.toml"),
        "[plugin]\nname = \"fastapi-kit\"\ndescription = \"FastAPI app\"\n\n[[files]]\ntemplate = \"main.py.tmpl\"\noutput = \"app/main.py\"\n",
    )
    .unwrap();
    fs::write(
        plugin_dir.join("main.py.tmpl"),
        "app = FastAPI(title=\"{{ app_name }}\")\n",
    )
    .unwrap();

    let mut registry = GeneratorRegistry::with_builtins();
    registry.register(Box::new(PluginGenerator::load(&plugin_dir).unwrap()));

    let fs = MemoryFilesystem::new();
    let engine = RenderEngine::new(
        TemplateResolver::new(vec![
            Box::new(BundledSource::new()),
            Box::new(DirectorySource::plugins(home.path().join("plugins"))),
        ]),
        Box::new(TeraRenderer::new()),
        Box::new(fs.clone()),
    );

    let result = AssetGenerator::new(&registry, &engine)
        .generate("fastapi-kit", Path::new("/p"), &TemplateData::named("svc"), WritePolicy::default())
        .unwrap();

    assert!(result.is_success());
    assert_eq!(
        fs.get("/p/app/main.py").as_deref(),
        Some("app = FastAPI(title=\"svc\")\n")
    );
}

#[test]
fn diff_reports_one_changed_line_against_real_render() {
    let registry = GeneratorRegistry::with_builtins();
    let fs = MemoryFilesystem::new();
    let engine = bundled_engine(&fs);
    let data = TemplateData::named("svc");

    AssetGenerator::new(&registry, &engine)
        .generate("sonarqube", Path::new("/p"), &data, WritePolicy::default())
        .unwrap();

    let reporter = DiffReporter::new(&registry, &engine);
    assert!(
        reporter.diff_type("sonarqube", Path::new("/p"), &data).unwrap()[0]
            .report
            .is_up_to_date()
    );

    let renamed = TemplateData::named("svc2");
    let diffs = reporter.diff_type("sonarqube", Path::new("/p"), &renamed).unwrap();
    assert_eq!(diffs[0].report.removed().len(), 2);
    assert_eq!(diffs[0].report.added().len(), 2);
}
