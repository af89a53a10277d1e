use force_core::Route;
use gpui::prelude::FluentBuilder;
use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement,
    StatefulInteractiveElement, Styled, div, px,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, h_flex};

use crate::components::AppWindow;

/// Top bar: logo, page links and the sign-up call to action.
pub fn navbar(
    current: Route,
    cx: &mut Context<AppWindow>,
) -> impl IntoElement {
    let theme = cx.theme();
    let primary = theme.primary;
    let foreground = theme.foreground;
    let border = theme.border;
    let background = theme.background;

    let links = Route::NAV_LINKS.into_iter().map(|route| {
        div()
            .id(route.path())
            .px_3()
            .py_1()
            .cursor_pointer()
            .text_color(if route == current { primary } else { foreground })
            .when(route == current, |this| this.font_weight(FontWeight::SEMIBOLD))
            .hover(|style| style.text_color(primary))
            .child(route.title())
            .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                this.navigate(route, window, cx);
            }))
    });

    h_flex()
        .w_full()
        .h(px(64.))
        .flex_none()
        .px_8()
        .justify_between()
        .items_center()
        .border_b_1()
        .border_color(border)
        .bg(background)
        .child(
            div()
                .id("logo")
                .cursor_pointer()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .text_color(primary)
                .child("Force Analytics")
                .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                    this.navigate(Route::Home, window, cx);
                })),
        )
        .child(
            h_flex()
                .gap_2()
                .items_center()
                .children(links)
                .child(
                    Button::new("nav-get-started")
                        .primary()
                        .label(Route::CALL_TO_ACTION.title())
                        .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                            this.navigate(Route::CALL_TO_ACTION, window, cx);
                        })),
                ),
        )
}
