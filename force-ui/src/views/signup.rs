use std::collections::HashSet;

use force_core::{Field, Route, SignUpFlow, SignUpForm};
use gpui::prelude::FluentBuilder;
use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, EventEmitter, FontWeight, InteractiveElement,
    IntoElement, ParentElement, Render, Stateful, StatefulInteractiveElement, Styled,
    Subscription, TextAlign, Window, div, px,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::InputState;
use gpui_component::{ActiveTheme, Disableable, Sizable, h_flex, v_flex};

use super::Navigate;
use crate::components::{error_banner, field_error, input_field, input_text};
use crate::logging::log_task_error;
use crate::services::Services;

/// The account registration page.
///
/// Field errors appear once a field has been typed into; the submit button
/// stays disabled until the form is both edited and valid.
pub struct SignUpView {
    email: Entity<InputState>,
    password: Entity<InputState>,
    confirm_password: Entity<InputState>,
    flow: SignUpFlow,
    touched: HashSet<Field>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<Navigate> for SignUpView {}

impl SignUpView {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let email = cx.new(|cx| InputState::new(window, cx).placeholder("you@example.com"));
        let password = cx.new(|cx| {
            InputState::new(window, cx)
                .masked(true)
                .placeholder("Create a strong password")
        });
        let confirm_password = cx.new(|cx| {
            InputState::new(window, cx)
                .masked(true)
                .placeholder("Confirm your password")
        });

        let _subscriptions = [&email, &password, &confirm_password]
            .into_iter()
            .map(|input| cx.observe(input, |_, _, cx| cx.notify()))
            .collect();

        Self {
            email,
            password,
            confirm_password,
            flow: SignUpFlow::new(),
            touched: HashSet::new(),
            _subscriptions,
        }
    }

    fn sync_form(
        &mut self,
        cx: &Context<Self>,
    ) {
        let form = SignUpForm {
            email: input_text(&self.email, cx),
            password: input_text(&self.password, cx),
            confirm_password: input_text(&self.confirm_password, cx),
        };

        for (field, value) in [
            (Field::Email, &form.email),
            (Field::Password, &form.password),
            (Field::ConfirmPassword, &form.confirm_password),
        ] {
            if !value.is_empty() {
                self.touched.insert(field);
            }
        }
        self.flow.edit(form);
    }

    fn submit(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        self.sync_form(cx);
        let Some(request) = self.flow.begin() else {
            return;
        };
        let task = cx.global::<Services>().create_account(request);
        cx.notify();

        cx.spawn(async move |this, cx| {
            let result = Services::joined(task.await);
            let applied = this.update(cx, |view, cx| {
                if let Some(route) = view.flow.finish(result) {
                    cx.emit(Navigate(route));
                }
                cx.notify();
            });
            log_task_error("create_account", applied);
        })
        .detach();
    }

    fn link(
        id: &'static str,
        label: &'static str,
        route: Route,
        cx: &Context<Self>,
    ) -> Stateful<Div> {
        div()
            .id(id)
            .cursor_pointer()
            .text_color(cx.theme().primary)
            .font_weight(FontWeight::MEDIUM)
            .child(label)
            .on_click(cx.listener(move |_, _: &ClickEvent, _, cx| cx.emit(Navigate(route))))
    }
}

impl Render for SignUpView {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        self.sync_form(cx);

        let errors = self.flow.errors();
        let shown = |field: Field| {
            self.touched
                .contains(&field)
                .then(|| field_error(&errors, field))
                .flatten()
        };
        let submitting = self.flow.is_submitting();
        let failure = self.flow.failure().map(str::to_string);

        let terms = Self::link("signup-terms", "Terms of Service", Route::Terms, cx);
        let privacy = Self::link("signup-privacy", "Privacy Policy", Route::Privacy, cx);
        let login = Self::link("signup-login", "Log in", Route::Login, cx);
        let theme = cx.theme();

        div()
            .w_full()
            .flex()
            .justify_center()
            .py_16()
            .bg(theme.muted)
            .child(
                v_flex()
                    .w(px(520.))
                    .p_8()
                    .gap_4()
                    .rounded_xl()
                    .shadow_md()
                    .bg(theme.background)
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::BOLD)
                            .text_align(TextAlign::Center)
                            .child("Create Your Account"),
                    )
                    .when_some(failure, |this, message| this.child(error_banner(message, cx)))
                    .child(input_field("Email Address", &self.email, shown(Field::Email), cx))
                    .child(input_field("Password", &self.password, shown(Field::Password), cx))
                    .child(input_field(
                        "Confirm Password",
                        &self.confirm_password,
                        shown(Field::ConfirmPassword),
                        cx,
                    ))
                    .child(
                        Button::new("signup-submit")
                            .primary()
                            .large()
                            .w_full()
                            .loading(submitting)
                            .disabled(!self.flow.can_submit())
                            .label(if submitting {
                                "Creating your account..."
                            } else {
                                "Sign Up"
                            })
                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.submit(cx))),
                    )
                    .child(
                        h_flex()
                            .flex_wrap()
                            .justify_center()
                            .gap_1()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child("By signing up, you agree to our")
                            .child(terms)
                            .child("and")
                            .child(privacy),
                    )
                    .child(
                        h_flex()
                            .justify_center()
                            .gap_1()
                            .pt_6()
                            .border_t_1()
                            .border_color(theme.border)
                            .text_color(theme.muted_foreground)
                            .child("Already have an account?")
                            .child(login),
                    ),
            )
    }
}
