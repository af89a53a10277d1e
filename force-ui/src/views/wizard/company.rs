use force_core::{CompanyForm, EmployeeSize, Field, Industry, ValidationErrors};
use gpui::{
    App, Context, Entity, IntoElement, ParentElement, SharedString, Styled, Subscription, Window,
};
use gpui_component::input::InputState;
use gpui_component::select::SelectState;
use gpui_component::v_flex;

use super::WizardView;
use crate::components::{
    field_error, input_field, input_text, make_input_state, make_select_state, select_field,
    selected_label,
};

pub(super) struct CompanyStep {
    company_name: Entity<InputState>,
    industry: Entity<SelectState<Vec<SharedString>>>,
    employee_size: Entity<SelectState<Vec<SharedString>>>,
    _subscriptions: Vec<Subscription>,
}

impl CompanyStep {
    pub(super) fn new(
        form: &CompanyForm,
        window: &mut Window,
        cx: &mut Context<WizardView>,
    ) -> Self {
        let company_name = make_input_state("Acme Inc.", &form.company_name, window, cx);
        let industry = make_select_state(
            Industry::ALL.iter().map(Industry::label),
            Industry::parse(&form.industry).map(|i| i.label()),
            window,
            cx,
        );
        let employee_size = make_select_state(
            EmployeeSize::ALL.iter().map(EmployeeSize::as_str),
            Some(form.employee_size.as_str()),
            window,
            cx,
        );

        let _subscriptions = vec![
            cx.observe(&industry, |_, _, cx| cx.notify()),
            cx.observe(&employee_size, |_, _, cx| cx.notify()),
        ];

        Self {
            company_name,
            industry,
            employee_size,
            _subscriptions,
        }
    }

    pub(super) fn form(
        &self,
        cx: &App,
    ) -> CompanyForm {
        CompanyForm {
            company_name: input_text(&self.company_name, cx),
            industry: selected_label(&self.industry, cx),
            employee_size: selected_label(&self.employee_size, cx),
        }
    }

    pub(super) fn render(
        &self,
        errors: &ValidationErrors,
        cx: &App,
    ) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(input_field(
                "Company Name",
                &self.company_name,
                field_error(errors, Field::CompanyName),
                cx,
            ))
            .child(select_field(
                "Industry",
                &self.industry,
                "Select Industry",
                field_error(errors, Field::Industry),
                cx,
            ))
            .child(select_field(
                "Employee Size",
                &self.employee_size,
                "Select Employee Size",
                field_error(errors, Field::EmployeeSize),
                cx,
            ))
    }
}
