//! Base template factory
//!
//! Assembles the one canonical service-contract template the catalog starts
//! from. This is the expensive construction path; everything else in the
//! catalog is derived from it by cloning.

use template_model::{Margins, Section, Style, Template, Workflow};

/// Build the canonical base template: a fully populated service contract.
///
/// The result satisfies every construction invariant of the model (style and
/// workflow present, all containers valid), so it is always cloneable.
pub fn build_base_template() -> Template {
    tracing::debug!("assembling base service-contract template");

    Template::new("Contrato de Prestacao de Servicos", "contratos")
        .with_section(
            Section::new(
                "Identificacao das Partes",
                "Contratante: {{contratante}}, inscrito sob o CNPJ {{cnpj_contratante}}. \
                 Contratado: {{contratado}}.",
            )
            .with_editable(false)
            .with_placeholder("contratante")
            .with_placeholder("cnpj_contratante")
            .with_placeholder("contratado"),
        )
        .with_section(
            Section::new(
                "Objeto do Contrato",
                "O presente contrato tem por objeto a prestacao de {{descricao_servico}}.",
            )
            .with_placeholder("descricao_servico"),
        )
        .with_section(
            Section::new(
                "Condicoes de Pagamento",
                "O contratante pagara o valor de {{valor}} ate o dia {{vencimento}} de cada mes.",
            )
            .with_placeholder("valor")
            .with_placeholder("vencimento"),
        )
        .with_style(
            Style::new("Arial", 11, "#003366", "https://cdn.empresa.com/logo.png")
                .with_margins(Margins::normal()),
        )
        .with_workflow(
            Workflow::new(2, 5)
                .with_approver("juridico@empresa.com")
                .with_approver("financeiro@empresa.com")
                .with_approver("diretoria@empresa.com"),
        )
        .with_required_field("contratante")
        .with_required_field("contratado")
        .with_required_field("valor")
        .with_tag("contrato")
        .with_tag("servicos")
        .with_metadata("versao", "1.0")
        .with_metadata("departamento", "juridico")
        .with_metadata("idioma", "pt-BR")
}
