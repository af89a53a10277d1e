use force_core::{Field, IntegrationForm, ValidationErrors};
use gpui::{App, Context, Div, Entity, FontWeight, IntoElement, ParentElement, Styled, Window, div};
use gpui_component::input::InputState;
use gpui_component::{ActiveTheme, v_flex};

use super::WizardView;
use crate::components::{field_error, field_pair, input_field, input_text, make_input_state};

/// Production org fields plus the optional sandbox pair.
pub(super) struct IntegrationStep {
    production_org_name: Entity<InputState>,
    production_org_id: Entity<InputState>,
    sandbox_org_name: Entity<InputState>,
    sandbox_org_id: Entity<InputState>,
}

impl IntegrationStep {
    pub(super) fn new(
        form: &IntegrationForm,
        window: &mut Window,
        cx: &mut Context<WizardView>,
    ) -> Self {
        Self {
            production_org_name: make_input_state(
                "Acme Production",
                &form.production_org_name,
                window,
                cx,
            ),
            production_org_id: make_input_state(
                "00D000000000000",
                &form.production_org_id,
                window,
                cx,
            ),
            sandbox_org_name: make_input_state("Acme Sandbox", &form.sandbox_org_name, window, cx),
            sandbox_org_id: make_input_state("00D000000000001", &form.sandbox_org_id, window, cx),
        }
    }

    pub(super) fn form(
        &self,
        cx: &App,
    ) -> IntegrationForm {
        IntegrationForm {
            production_org_name: input_text(&self.production_org_name, cx),
            production_org_id: input_text(&self.production_org_id, cx),
            sandbox_org_name: input_text(&self.sandbox_org_name, cx),
            sandbox_org_id: input_text(&self.sandbox_org_id, cx),
        }
    }

    pub(super) fn render(
        &self,
        errors: &ValidationErrors,
        cx: &App,
    ) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(environment(
                "Production Environment",
                field_pair(
                    input_field(
                        "Organization Name",
                        &self.production_org_name,
                        field_error(errors, Field::ProductionOrgName),
                        cx,
                    ),
                    input_field(
                        "Organization ID",
                        &self.production_org_id,
                        field_error(errors, Field::ProductionOrgId),
                        cx,
                    ),
                ),
                cx,
            ))
            .child(environment(
                "Sandbox Environment",
                field_pair(
                    input_field(
                        "Organization Name",
                        &self.sandbox_org_name,
                        field_error(errors, Field::SandboxOrgName),
                        cx,
                    ),
                    input_field(
                        "Organization ID",
                        &self.sandbox_org_id,
                        field_error(errors, Field::SandboxOrgId),
                        cx,
                    ),
                ),
                cx,
            ))
    }
}

fn environment(
    title: &'static str,
    fields: impl IntoElement,
    cx: &App,
) -> Div {
    let theme = cx.theme();

    v_flex()
        .gap_3()
        .p_4()
        .rounded_lg()
        .border_1()
        .border_color(theme.border)
        .bg(theme.muted)
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(theme.primary)
                .child(title),
        )
        .child(fields)
}
