use force_core::{Route, ScrollLock, ScrollLockGuard};
use gpui::prelude::FluentBuilder;
use gpui::{
    AppContext, ClickEvent, Context, Entity, EventEmitter, FocusHandle, Focusable, FontWeight,
    InteractiveElement, IntoElement, ParentElement, Render, Styled, Subscription, TextAlign,
    Window, div, px,
};
use gpui_component::{ActiveTheme, v_flex};
use tracing::info;

use super::wizard::{WizardEvent, WizardView};
use super::Navigate;
use crate::CloseModal;
use crate::components::{confirm_overlay, make_button, modal_overlay};
use crate::services::Services;

/// Key context active while the onboarding page has focus.
pub const MODAL_CONTEXT: &str = "OnboardingModal";

/// Onboarding page. The wizard modal opens as soon as the page does.
///
/// While the modal is open the page holds a [`ScrollLockGuard`]; closing
/// the modal or leaving the page releases it.
pub struct OnboardingView {
    focus_handle: FocusHandle,
    scroll_lock: ScrollLock,
    modal: Option<ScrollLockGuard>,
    confirming_exit: bool,
    wizard: Entity<WizardView>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<Navigate> for OnboardingView {}

impl Focusable for OnboardingView {
    fn focus_handle(
        &self,
        _: &gpui::App,
    ) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl OnboardingView {
    pub fn new(
        scroll_lock: ScrollLock,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let services = cx.global::<Services>().clone();
        let wizard = cx.new(|cx| WizardView::new(services, window, cx));
        let _subscriptions = vec![cx.subscribe_in(&wizard, window, Self::on_wizard_event)];

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            focus_handle,
            modal: Some(scroll_lock.acquire()),
            scroll_lock,
            confirming_exit: false,
            wizard,
            _subscriptions,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    fn on_wizard_event(
        &mut self,
        _: &Entity<WizardView>,
        event: &WizardEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            WizardEvent::Completed => {
                self.modal = None;
                cx.emit(Navigate(Route::Dashboard));
            }
        }
    }

    fn open_modal(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.modal.is_none() {
            self.modal = Some(self.scroll_lock.acquire());
            window.focus(&self.focus_handle);
            cx.notify();
        }
    }

    /// Closing asks first; the wizard is not finished yet.
    fn request_close(
        &mut self,
        _: &CloseModal,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.modal.is_some() {
            self.confirming_exit = true;
            cx.notify();
        }
    }

    fn confirm_exit(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        info!(step = %self.wizard.read(cx).step(), "onboarding abandoned");
        self.confirming_exit = false;
        self.modal = None;
        cx.emit(Navigate(Route::Home));
    }

    fn cancel_exit(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        self.confirming_exit = false;
        cx.notify();
    }
}

impl Render for OnboardingView {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let modal_open = self.is_modal_open();
        let confirming = self.confirming_exit;

        let on_continue = cx.listener(|this, _: &ClickEvent, window, cx| this.open_modal(window, cx));
        let on_close = cx.listener(|this, _: &ClickEvent, window, cx| {
            this.request_close(&CloseModal, window, cx);
        });
        let on_confirm = cx.listener(|this, _: &ClickEvent, _, cx| this.confirm_exit(cx));
        let on_cancel = cx.listener(|this, _: &ClickEvent, _, cx| this.cancel_exit(cx));

        div()
            .relative()
            .size_full()
            .min_h(px(720.))
            .key_context(MODAL_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::request_close))
            .child(
                v_flex()
                    .items_center()
                    .gap_4()
                    .px_8()
                    .py_16()
                    .child(
                        div()
                            .text_3xl()
                            .font_weight(FontWeight::BOLD)
                            .child("Welcome to Force Analytics!"),
                    )
                    .child(
                        div()
                            .max_w(px(640.))
                            .text_lg()
                            .text_align(TextAlign::Center)
                            .text_color(cx.theme().muted_foreground)
                            .child(
                                "Let's get your account set up. Please complete the onboarding \
                                 process to start using your account.",
                            ),
                    )
                    .when(!modal_open, |this| {
                        this.child(make_button(
                            "continue-onboarding",
                            "Continue Onboarding",
                            on_continue,
                        ))
                    }),
            )
            .when(modal_open, |this| {
                this.child(modal_overlay(
                    "onboarding-modal",
                    "Complete Your Account Setup",
                    self.wizard.clone(),
                    on_close,
                    cx,
                ))
            })
            .when(confirming, |this| {
                this.child(confirm_overlay(
                    "Your onboarding is not complete. Are you sure you want to exit?",
                    on_confirm,
                    on_cancel,
                    cx,
                ))
            })
    }
}
