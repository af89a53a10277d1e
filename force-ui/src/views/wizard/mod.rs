//! The four-step onboarding wizard.

mod company;
mod contact;
mod integration;
mod plan;

use force_core::wizard::{StepMarker, StepStatus};
use force_core::{StepSubmission, SubmitOutcome, WizardController, WizardError, WizardStep};
use gpui::prelude::FluentBuilder;
use gpui::{
    App, ClickEvent, Context, Div, EventEmitter, FontWeight, IntoElement, ParentElement, Render,
    Styled, Window, div, px,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, h_flex, v_flex};
use tracing::warn;

use self::company::CompanyStep;
use self::contact::ContactStep;
use self::integration::IntegrationStep;
use self::plan::PlanStep;
use crate::services::Services;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// The last step was accepted and the record handed to the service.
    Completed,
}

/// Input widgets of the step on screen.
enum ActiveStep {
    Company(CompanyStep),
    Contact(ContactStep),
    Integration(IntegrationStep),
    Plan(PlanStep),
}

impl ActiveStep {
    fn build(
        draft: StepSubmission,
        window: &mut Window,
        cx: &mut Context<WizardView>,
    ) -> Self {
        match draft {
            StepSubmission::Company(form) => Self::Company(CompanyStep::new(&form, window, cx)),
            StepSubmission::Contact(form) => Self::Contact(ContactStep::new(&form, window, cx)),
            StepSubmission::Integration(form) => {
                Self::Integration(IntegrationStep::new(&form, window, cx))
            }
            StepSubmission::Plan(form) => Self::Plan(PlanStep::new(&form, window, cx)),
        }
    }

    fn submission(
        &self,
        cx: &App,
    ) -> StepSubmission {
        match self {
            Self::Company(step) => StepSubmission::Company(step.form(cx)),
            Self::Contact(step) => StepSubmission::Contact(step.form(cx)),
            Self::Integration(step) => StepSubmission::Integration(step.form(cx)),
            Self::Plan(step) => StepSubmission::Plan(step.form(cx)),
        }
    }
}

/// Drives a [`WizardController`] and renders its current step.
///
/// Every step change rebuilds the inputs from the controller's draft, so
/// going back shows exactly what was last accepted for that step.
pub struct WizardView {
    controller: WizardController,
    active: ActiveStep,
}

impl EventEmitter<WizardEvent> for WizardView {}

impl WizardView {
    pub fn new(
        services: Services,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let controller =
            WizardController::new(move |record| services.complete_onboarding_detached(record));
        let draft = controller
            .draft()
            .unwrap_or_else(|| StepSubmission::Company(Default::default()));

        Self {
            active: ActiveStep::build(draft, window, cx),
            controller,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.controller.step()
    }

    fn reload(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(draft) = self.controller.draft() {
            self.active = ActiveStep::build(draft, window, cx);
        }
    }

    fn next(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let submission = self.active.submission(cx);
        match self.controller.submit(submission) {
            Ok(SubmitOutcome::Advanced(_)) => self.reload(window, cx),
            Ok(SubmitOutcome::Completed) => cx.emit(WizardEvent::Completed),
            // Field errors are kept on the controller and rendered inline.
            Err(WizardError::Validation(_)) => {}
            Err(e) => warn!(error = %e, "wizard submission ignored"),
        }
        cx.notify();
    }

    fn back(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let before = self.controller.step();
        if self.controller.back() != before {
            self.reload(window, cx);
        }
        cx.notify();
    }

    fn with_plan(
        &mut self,
        cx: &mut Context<Self>,
        f: impl FnOnce(&mut PlanStep),
    ) {
        if let ActiveStep::Plan(plan) = &mut self.active {
            f(plan);
            cx.notify();
        }
    }
}

fn step_indicator(
    markers: [StepMarker; 4],
    cx: &App,
) -> Div {
    let theme = cx.theme();
    let last = markers.len() - 1;

    h_flex()
        .w_full()
        .items_center()
        .children(markers.into_iter().enumerate().map(|(i, marker)| {
            let reached = marker.status != StepStatus::Upcoming;
            let label = match marker.status {
                StepStatus::Completed => "✓".to_string(),
                _ => marker.step.index().to_string(),
            };

            h_flex()
                .items_center()
                .when(i < last, |this| this.flex_1())
                .child(
                    div()
                        .size(px(32.))
                        .flex_none()
                        .rounded_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .map(|this| {
                            if reached {
                                this.bg(theme.primary).text_color(theme.primary_foreground)
                            } else {
                                this.bg(theme.muted).text_color(theme.muted_foreground)
                            }
                        })
                        .child(label),
                )
                .when(i < last, |this| {
                    let line = if marker.status == StepStatus::Completed {
                        theme.primary
                    } else {
                        theme.muted
                    };
                    this.child(div().flex_1().h(px(4.)).bg(line))
                })
        }))
}

impl Render for WizardView {
    fn render(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let step = self.controller.step();
        let errors = self.controller.errors().clone();

        let body = match &mut self.active {
            ActiveStep::Company(form) => form.render(&errors, cx).into_any_element(),
            ActiveStep::Contact(form) => form.render(&errors, cx).into_any_element(),
            ActiveStep::Integration(form) => form.render(&errors, cx).into_any_element(),
            ActiveStep::Plan(form) => {
                form.sync_regions(window, cx);
                form.render(&errors, cx).into_any_element()
            }
        };
        let next_label = match &self.active {
            ActiveStep::Plan(plan) => plan.submit_label(),
            _ => "Next",
        };

        let on_back = cx.listener(|this, _: &ClickEvent, window, cx| this.back(window, cx));
        let on_next = cx.listener(|this, _: &ClickEvent, window, cx| this.next(window, cx));

        v_flex()
            .w_full()
            .gap_6()
            .child(step_indicator(self.controller.progress(), cx))
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .child(step.title()),
            )
            .child(body)
            .child(
                h_flex()
                    .pt_4()
                    .map(|this| {
                        if step.previous().is_some() {
                            this.justify_between().child(
                                Button::new("wizard-back")
                                    .outline()
                                    .label("Back")
                                    .on_click(on_back),
                            )
                        } else {
                            this.justify_end()
                        }
                    })
                    .child(
                        Button::new("wizard-next")
                            .primary()
                            .label(next_label)
                            .on_click(on_next),
                    ),
            )
    }
}
