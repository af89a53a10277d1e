use std::rc::Rc;

use gpui::{
    App, ClickEvent, Div, FontWeight, InteractiveElement, IntoElement, ParentElement,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, h_flex, v_flex};

/// A dialog card centred over a dimmed backdrop that fills its parent.
///
/// Clicking the backdrop or the close button calls `on_close`; the parent
/// must be positioned (`relative`) for the overlay to cover it.
pub fn modal_overlay(
    id: &'static str,
    title: impl Into<SharedString>,
    body: impl IntoElement,
    on_close: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    cx: &App,
) -> Div {
    let on_close = Rc::new(on_close);
    let backdrop_close = Rc::clone(&on_close);

    div()
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .id((id, 0usize))
                .absolute()
                .inset_0()
                .bg(gpui::black().opacity(0.5))
                .on_click(move |event, window, cx| backdrop_close(event, window, cx)),
        )
        .child(
            v_flex()
                .id((id, 1usize))
                .occlude()
                .w(px(760.))
                .max_h_full()
                .overflow_y_scroll()
                .p_6()
                .gap_4()
                .rounded_lg()
                .shadow_lg()
                .bg(cx.theme().background)
                .child(
                    h_flex()
                        .justify_between()
                        .items_center()
                        .child(
                            div()
                                .text_xl()
                                .font_weight(FontWeight::BOLD)
                                .child(title.into()),
                        )
                        .child(
                            Button::new((id, 2usize))
                                .ghost()
                                .label("✕")
                                .on_click(move |event, window, cx| on_close(event, window, cx)),
                        ),
                )
                .child(body),
        )
}

/// A small yes/no prompt drawn over whatever it is placed in.
pub fn confirm_overlay(
    message: impl Into<SharedString>,
    on_confirm: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    on_cancel: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    cx: &App,
) -> Div {
    div()
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        .bg(gpui::black().opacity(0.3))
        .child(
            v_flex()
                .id("confirm-dialog")
                .occlude()
                .w(px(420.))
                .p_6()
                .gap_4()
                .rounded_lg()
                .shadow_lg()
                .bg(cx.theme().background)
                .child(message.into())
                .child(
                    h_flex()
                        .gap_2()
                        .justify_end()
                        .child(Button::new("confirm-cancel").ghost().label("Cancel").on_click(on_cancel))
                        .child(
                            Button::new("confirm-ok")
                                .primary()
                                .label("Exit")
                                .on_click(on_confirm),
                        ),
                ),
        )
}
