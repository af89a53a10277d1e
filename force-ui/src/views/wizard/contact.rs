use force_core::{ContactForm, Field, ValidationErrors};
use gpui::{App, Context, Entity, IntoElement, ParentElement, Styled, Window};
use gpui_component::input::InputState;
use gpui_component::v_flex;

use super::WizardView;
use crate::components::{field_error, field_pair, input_field, input_text, make_input_state};

pub(super) struct ContactStep {
    first_name: Entity<InputState>,
    last_name: Entity<InputState>,
    email: Entity<InputState>,
    phone: Entity<InputState>,
}

impl ContactStep {
    pub(super) fn new(
        form: &ContactForm,
        window: &mut Window,
        cx: &mut Context<WizardView>,
    ) -> Self {
        Self {
            first_name: make_input_state("Jane", &form.first_name, window, cx),
            last_name: make_input_state("Doe", &form.last_name, window, cx),
            email: make_input_state("jane@example.com", &form.email, window, cx),
            phone: make_input_state("(555) 123-4567", &form.phone, window, cx),
        }
    }

    pub(super) fn form(
        &self,
        cx: &App,
    ) -> ContactForm {
        ContactForm {
            first_name: input_text(&self.first_name, cx),
            last_name: input_text(&self.last_name, cx),
            email: input_text(&self.email, cx),
            phone: input_text(&self.phone, cx),
        }
    }

    pub(super) fn render(
        &self,
        errors: &ValidationErrors,
        cx: &App,
    ) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(field_pair(
                input_field(
                    "First Name",
                    &self.first_name,
                    field_error(errors, Field::FirstName),
                    cx,
                ),
                input_field(
                    "Last Name",
                    &self.last_name,
                    field_error(errors, Field::LastName),
                    cx,
                ),
            ))
            .child(input_field("Email", &self.email, field_error(errors, Field::Email), cx))
            .child(input_field(
                "Phone Number",
                &self.phone,
                field_error(errors, Field::Phone),
                cx,
            ))
    }
}
