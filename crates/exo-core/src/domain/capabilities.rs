//! Stack detection registry.
//!
//! The detector adapter reads files; this module decides what they mean. Each
//! language is described exactly once by a [`LanguageDef`]: the marker files
//! that identify it, the manifest that names its dependencies, and the
//! frameworks recognised in that manifest.
//!
//! # Adding a New Language
//!
//! 1. Add a variant to `Language` in `value_objects.rs`
//! 2. Add a [`LanguageDef`] entry to [`LANGUAGE_REGISTRY`]
//! 3. That's it: detection derives from the registry

use crate::domain::value_objects::Language;

/// How a language is recognised in a project directory.
#[derive(Debug, Clone, Copy)]
pub struct LanguageDef {
    pub language: Language,

    /// Any of these files at the project root selects the language.
    pub markers: &'static [&'static str],

    /// Files whose text is searched for framework keywords.
    pub manifests: &'static [&'static str],

    /// `(framework name, keyword)` pairs, first match wins.
    pub frameworks: &'static [(&'static str, &'static str)],
}

/// Single source of truth for stack detection, in priority order.
pub static LANGUAGE_REGISTRY: &[LanguageDef] = &[
    LanguageDef {
        language: Language::Go,
        markers: &["go.mod"],
        manifests: &["go.mod"],
        frameworks: &[
            ("gin", "github.com/gin-gonic/gin"),
            ("echo", "github.com/labstack/echo"),
            ("fiber", "github.com/gofiber/fiber"),
            ("chi", "github.com/go-chi/chi"),
            ("grpc", "google.golang.org/grpc"),
        ],
    },
    LanguageDef {
        language: Language::Node,
        markers: &["package.json"],
        manifests: &["package.json"],
        frameworks: &[
            ("nestjs", "@nestjs/core"),
            ("nextjs", "\"next\""),
            ("nuxt", "\"nuxt\""),
            ("fastify", "\"fastify\""),
            ("koa", "\"koa\""),
            ("express", "\"express\""),
        ],
    },
    LanguageDef {
        language: Language::Python,
        markers: &[
            "pyproject.toml",
            "Pipfile",
            "requirements.txt",
            "setup.py",
            "setup.cfg",
        ],
        manifests: &["pyproject.toml", "requirements.txt", "Pipfile"],
        frameworks: &[
            ("fastapi", "fastapi"),
            ("django", "django"),
            ("flask", "flask"),
        ],
    },
    LanguageDef {
        language: Language::Java,
        markers: &["pom.xml", "build.gradle", "build.gradle.kts"],
        manifests: &["pom.xml", "build.gradle", "build.gradle.kts"],
        frameworks: &[("spring-boot", "spring-boot"), ("quarkus", "quarkus")],
    },
    LanguageDef {
        language: Language::Rust,
        markers: &["Cargo.toml"],
        manifests: &["Cargo.toml"],
        frameworks: &[
            ("axum", "axum"),
            ("actix-web", "actix-web"),
            ("rocket", "rocket"),
        ],
    },
];

/// Look up the registry entry for a language.
pub fn find_language(language: Language) -> Option<&'static LanguageDef> {
    LANGUAGE_REGISTRY.iter().find(|def| def.language == language)
}

/// First language whose marker satisfies `has_file`.
pub fn detect_language(has_file: impl Fn(&str) -> bool) -> Language {
    LANGUAGE_REGISTRY
        .iter()
        .find(|def| def.markers.iter().any(|m| has_file(m)))
        .map_or(Language::Unknown, |def| def.language)
}

/// First framework of `language` whose keyword appears in `manifest_text`.
///
/// Matching is case-insensitive for Python, where requirement files are
/// commonly written `Django==5.0`.
pub fn detect_framework(language: Language, manifest_text: &str) -> Option<&'static str> {
    let def = find_language(language)?;
    let haystack = if language == Language::Python {
        manifest_text.to_ascii_lowercase()
    } else {
        manifest_text.to_string()
    };
    def.frameworks
        .iter()
        .find(|(_, keyword)| haystack.contains(keyword))
        .map(|(name, _)| *name)
}
