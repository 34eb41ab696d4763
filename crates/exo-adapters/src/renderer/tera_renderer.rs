//! Tera-backed template renderer.

use std::error::Error as _;

use tera::{Context, Tera};
use tracing::instrument;

use exo_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateData,
    error::ExoResult,
};

use super::filters;

/// Renders raw template sources with Tera.
///
/// Templates are parsed per call on a clone of a base instance that only
/// holds the custom filters, so one bad template never poisons the next.
#[derive(Debug, Clone)]
pub struct TeraRenderer {
    base: Tera,
}

impl TeraRenderer {
    pub fn new() -> Self {
        let mut base = Tera::default();
        base.register_filter("snake_case", filters::snake_case);
        base.register_filter("kebab_case", filters::kebab_case);
        base.register_filter("env_case", filters::env_case);
        Self { base }
    }
}

impl Default for TeraRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip(self, source, data), fields(bytes = source.len()))]
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> ExoResult<String> {
        let mut tera = self.base.clone();
        tera.add_raw_template(name, source)
            .map_err(|e| ApplicationError::TemplateParse {
                template_id: name.to_string(),
                reason: error_chain(&e),
            })?;

        let context = Context::from_serialize(data).map_err(|e| {
            ApplicationError::TemplateExecution {
                template_id: name.to_string(),
                reason: error_chain(&e),
            }
        })?;

        tera.render(name, &context).map_err(|e| {
            ApplicationError::TemplateExecution {
                template_id: name.to_string(),
                reason: error_chain(&e),
            }
            .into()
        })
    }
}

/// Tera nests the useful detail (line, column, variable) in `source()`.
fn error_chain(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut cause = e.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use exo_core::domain::{CiSystem, Database};
    use exo_core::error::ExoError;

    fn render(source: &str, data: &TemplateData) -> ExoResult<String> {
        TeraRenderer::new().render("templates/t.tmpl", source, data)
    }

    #[test]
    fn renders_every_field() {
        let data = TemplateData {
            db: Database::Postgres,
            ci: CiSystem::GithubActions,
            ..TemplateData::named("orders")
        };
        let out = render(
            "{{ app_name }}:{{ port }}:{{ db }}:{{ ci }}:{{ provider }}:[{{ registry }}]",
            &data,
        )
        .unwrap();
        assert_eq!(out, "orders:8080:postgres:github-actions:none:[]");
    }

    #[test]
    fn unset_fields_render_empty() {
        let out = render("[{{ framework }}][{{ registry }}]", &TemplateData::default()).unwrap();
        assert_eq!(out, "[][]");
    }

    #[test]
    fn syntax_error_is_parse_error() {
        let err = render("{% if %}", &TemplateData::default()).unwrap_err();
        assert!(matches!(
            err,
            ExoError::Application(ApplicationError::TemplateParse { .. })
        ));
    }

    #[test]
    fn undefined_variable_is_execution_error() {
        let err = render("{{ nope }}", &TemplateData::default()).unwrap_err();
        match err {
            ExoError::Application(ApplicationError::TemplateExecution { reason, .. }) => {
                assert!(reason.contains("nope"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn raw_blocks_pass_foreign_syntax_through() {
        let out = render(
            "{% raw %}${{ secrets.TOKEN }}{% endraw %}",
            &TemplateData::default(),
        )
        .unwrap();
        assert_eq!(out, "${{ secrets.TOKEN }}");
    }

    #[test]
    fn case_filters_are_registered() {
        let out = render(
            "{{ app_name | snake_case }} {{ app_name | env_case }}",
            &TemplateData::named("order-service"),
        )
        .unwrap();
        assert_eq!(out, "order_service ORDER_SERVICE");
    }
}
