//! Plain-text template rendering for inspection and previews

use std::fmt::Write;
use template_model::Template;

/// Render every field group of a template as human-readable text.
///
/// Purely read-only; renders half-built templates too (missing style or
/// workflow shows as "none"). Metadata keys are sorted so output is stable
/// across runs.
pub fn render(template: &Template) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== {} [{}] ===", template.title, template.category);

    let _ = writeln!(out, "Sections ({}):", template.sections.len());
    for (index, section) in template.sections.iter().enumerate() {
        let mode = if section.editable { "editable" } else { "locked" };
        let _ = writeln!(out, "  {}. {} ({})", index + 1, section.name, mode);
        let _ = writeln!(out, "     {}", section.content);
        if !section.placeholders.is_empty() {
            let _ = writeln!(out, "     placeholders: {}", section.placeholders.join(", "));
        }
    }

    match &template.style {
        Some(style) => {
            let _ = writeln!(
                out,
                "Style: {} {}pt, header {}, logo {}",
                style.font_family, style.font_size, style.header_color, style.logo_url
            );
            let m = &style.margins;
            let _ = writeln!(
                out,
                "Margins: top {} bottom {} left {} right {}",
                m.top, m.bottom, m.left, m.right
            );
        }
        None => {
            let _ = writeln!(out, "Style: none");
        }
    }

    match &template.workflow {
        Some(workflow) => {
            let _ = writeln!(
                out,
                "Workflow: {} of {} approvals within {} days [{}]",
                workflow.required_approvals,
                workflow.approvers.len(),
                workflow.timeout_days,
                workflow.approvers.join(", ")
            );
        }
        None => {
            let _ = writeln!(out, "Workflow: none");
        }
    }

    let _ = writeln!(out, "Required fields: {}", template.required_fields.join(", "));
    let _ = writeln!(out, "Tags: {}", template.tags.join(", "));

    let mut keys: Vec<&String> = template.metadata.keys().collect();
    keys.sort();
    let _ = writeln!(out, "Metadata:");
    for key in keys {
        let _ = writeln!(out, "  {} = {}", key, template.metadata[key]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_base_template;
    use template_model::Template;

    #[test]
    fn test_render_covers_every_field_group() {
        let text = render(&build_base_template());

        assert!(text.contains("Contrato de Prestacao de Servicos"));
        assert!(text.contains("Sections (3):"));
        assert!(text.contains("Identificacao das Partes"));
        assert!(text.contains("Style: Arial 11pt"));
        assert!(text.contains("Margins: top 72"));
        assert!(text.contains("Workflow: 2 of 3 approvals within 5 days"));
        assert!(text.contains("Tags: contrato, servicos"));
        assert!(text.contains("departamento = juridico"));
    }

    #[test]
    fn test_render_metadata_is_key_sorted() {
        let template = Template::new("T", "c")
            .with_metadata("zeta", "2")
            .with_metadata("alfa", "1");
        let text = render(&template);

        let alfa = text.find("alfa = 1").unwrap();
        let zeta = text.find("zeta = 2").unwrap();
        assert!(alfa < zeta);
    }

    #[test]
    fn test_render_accepts_half_built_template() {
        let text = render(&Template::new("Rascunho", "geral"));

        assert!(text.contains("Style: none"));
        assert!(text.contains("Workflow: none"));
    }
}
