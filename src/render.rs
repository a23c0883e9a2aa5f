//! Document assembly.
//!
//! The [`DocumentRenderer`] visits the schema fields in declaration order,
//! formats each present value into a fragment, and appends the fragments to a
//! templated header:
//!
//! ```text
//! # Document: {title} - {description}
//! ### Attributes:
//! #### **Field:**
//!  value
//! ```
//!
//! Only the header's `title` and `description` go through the template
//! engine. Field values are inlined as they are, so template syntax inside the
//! data is never interpreted. The final document carries no trailing newline.

use crate::format::format_field;
use crate::{Map, RenderOptions, Result, Schema, SchemaField};
use handlebars::{no_escape, Handlebars};
use log::debug;
use serde::Serialize;

const HEADER_TEMPLATE: &str = "# Document: {{title}} - {{description}}\n### Attributes:\n";

#[derive(Serialize)]
struct HeaderContext<'a> {
    title: &'a str,
    description: &'a str,
}

/// Renders schema-described instances into Markdown reports.
///
/// A renderer holds only its options and template engine, so one instance can
/// be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use content_report::{value, DocumentRenderer, RenderOptions, Schema, SchemaField};
///
/// let schema = Schema::new()
///     .with_title("Ticket")
///     .with_description("Support ticket")
///     .with_field(SchemaField::string("summary"));
/// let instance = value!({ "summary": "Printer on fire" });
///
/// let renderer = DocumentRenderer::new(RenderOptions::new());
/// let report = renderer.render(&schema, instance.as_object().unwrap()).unwrap();
/// assert_eq!(
///     report,
///     "# Document: Ticket - Support ticket\n### Attributes:\n#### **Summary:**\n Printer on fire"
/// );
/// ```
pub struct DocumentRenderer {
    options: RenderOptions,
    engine: Handlebars<'static>,
}

impl std::fmt::Debug for DocumentRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentRenderer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl DocumentRenderer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        let mut engine = Handlebars::new();
        engine.register_escape_fn(no_escape);
        DocumentRenderer { options, engine }
    }

    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders `instance` as described by `schema`.
    ///
    /// A schema without fields produces an empty string rather than a bare header.
    ///
    /// # Errors
    ///
    /// Fails on the first field that cannot be resolved or formatted; no
    /// partial document is returned.
    pub fn render(&self, schema: &Schema, instance: &Map) -> Result<String> {
        if schema.fields.is_empty() {
            debug!("schema '{}' has no fields; rendering nothing", schema.display_title());
            return Ok(String::new());
        }

        let fragments = schema
            .fields
            .iter()
            .map(|field| self.render_field(schema, field, instance))
            .collect::<Result<Vec<_>>>()?;

        let header = self.render_header(schema)?;
        let mut document = fragments
            .into_iter()
            .flatten()
            .fold(header, |mut document, fragment| {
                document.push_str(&fragment);
                document
            });

        if document.ends_with('\n') {
            document.pop();
        }
        Ok(document)
    }

    fn render_field(
        &self,
        schema: &Schema,
        field: &SchemaField,
        instance: &Map,
    ) -> Result<Option<String>> {
        let resolved = schema.resolve(field)?;
        match instance.get(&field.name) {
            Some(value) => format_field(&resolved, value, &self.options),
            None => {
                debug!("skipping field '{}': not present in instance", field.name);
                Ok(None)
            }
        }
    }

    fn render_header(&self, schema: &Schema) -> Result<String> {
        let context = HeaderContext {
            title: schema.display_title(),
            description: schema.display_description(),
        };
        Ok(self.engine.render_template(HEADER_TEMPLATE, &context)?)
    }
}
