use force_core::Route;
use gpui::{ClickEvent, Context, FontWeight, IntoElement, ParentElement, Styled, div};
use gpui_component::{ActiveTheme, v_flex};

use crate::components::{AppWindow, make_button};

/// Stand-in for pages that only carry a title so far.
pub fn placeholder_page(
    route: Route,
    cx: &mut Context<AppWindow>,
) -> impl IntoElement {
    let back_home = cx.listener(|this, _: &ClickEvent, window, cx| {
        this.navigate(Route::Home, window, cx);
    });

    v_flex()
        .w_full()
        .items_center()
        .gap_4()
        .py_20()
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .child(route.title()),
        )
        .child(
            div()
                .text_color(cx.theme().muted_foreground)
                .child("This page is coming soon."),
        )
        .child(make_button("placeholder-home", "Back to Home", back_home))
}
