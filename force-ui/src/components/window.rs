use force_core::{Route, ScrollLock};
use gpui::prelude::FluentBuilder;
use gpui::{
    AnyElement, App, AppContext, Context, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Subscription, Window, div,
};
use gpui_component::{ActiveTheme, v_flex};
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
#[cfg(not(target_os = "linux"))]
use crate::quit;
use crate::views::{
    Navigate, OnboardingView, SignUpView, dashboard_page, landing_page, navbar, placeholder_page,
};

/// Window shell: navbar on top, the current page below.
///
/// Stateful pages are created on entry and dropped on exit, so leaving the
/// onboarding page also releases its scroll lock.
pub struct AppWindow {
    route: Route,
    scroll_lock: ScrollLock,
    sign_up: Option<Entity<SignUpView>>,
    onboarding: Option<Entity<OnboardingView>>,
    _page_subscription: Option<Subscription>,
    _window_close_subscription: Subscription,
}

impl AppWindow {
    pub fn new(
        route: Route,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Window closed callback");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        info!(%route, "Window constructed");
        let mut this = Self {
            route: Route::Home,
            scroll_lock: ScrollLock::new(),
            sign_up: None,
            onboarding: None,
            _page_subscription: None,
            _window_close_subscription: subscription,
        };
        this.navigate(route, window, cx);
        this
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Shows `route`, building a fresh page entity for stateful pages.
    pub fn navigate(
        &mut self,
        route: Route,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        info!(from = %self.route, to = %route, "navigate");
        self.route = route;
        self.sign_up = None;
        self.onboarding = None;
        self._page_subscription = None;

        match route {
            Route::SignUp => {
                let page = cx.new(|cx| SignUpView::new(window, cx));
                self._page_subscription = Some(cx.subscribe_in(&page, window, Self::on_navigate));
                self.sign_up = Some(page);
            }
            Route::Onboarding => {
                let lock = self.scroll_lock.clone();
                let page = cx.new(|cx| OnboardingView::new(lock, window, cx));
                self._page_subscription = Some(cx.subscribe_in(&page, window, Self::on_navigate));
                self.onboarding = Some(page);
            }
            _ => {}
        }

        window.set_window_title(&format!("{} | Force Analytics", route.title()));
        cx.notify();
    }

    fn on_navigate<E: 'static>(
        &mut self,
        _: &Entity<E>,
        event: &Navigate,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.navigate(event.0, window, cx);
    }

    fn page(
        &self,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match self.route {
            Route::Home => landing_page(cx).into_any_element(),
            Route::Dashboard => dashboard_page(cx).into_any_element(),
            Route::SignUp => match &self.sign_up {
                Some(page) => page.clone().into_any_element(),
                None => div().into_any_element(),
            },
            Route::Onboarding => match &self.onboarding {
                Some(page) => page.clone().into_any_element(),
                None => div().into_any_element(),
            },
            route => placeholder_page(route, cx).into_any_element(),
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let locked = self.scroll_lock.is_locked();
        let page = self.page(cx);

        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(navbar(self.route, cx))
            .child(
                div()
                    .id("page")
                    .flex_1()
                    .w_full()
                    .map(|this| {
                        if locked {
                            this.overflow_hidden()
                        } else {
                            this.overflow_y_scroll()
                        }
                    })
                    .child(page),
            )
    }
}
