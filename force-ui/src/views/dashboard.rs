use force_core::Route;
use gpui::{ClickEvent, Context, FontWeight, IntoElement, ParentElement, Styled, TextAlign, div, px};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, h_flex, v_flex};
use tracing::info;

use crate::components::AppWindow;

/// Landing spot after onboarding, with an empty-state prompt.
pub fn dashboard_page(cx: &mut Context<AppWindow>) -> impl IntoElement {
    let new_dashboard = cx.listener(|_, _: &ClickEvent, _, _| {
        info!("new dashboard requested");
    });
    let first_dashboard = cx.listener(|_, _: &ClickEvent, _, _| {
        info!("first dashboard requested");
    });
    let back_home = cx.listener(|this, _: &ClickEvent, window, cx| {
        this.navigate(Route::Home, window, cx);
    });
    let theme = cx.theme();

    v_flex()
        .w_full()
        .px_8()
        .py_10()
        .gap_8()
        .child(
            h_flex()
                .justify_between()
                .items_center()
                .child(
                    div()
                        .text_3xl()
                        .font_weight(FontWeight::BOLD)
                        .child("Dashboard"),
                )
                .child(
                    Button::new("new-dashboard")
                        .primary()
                        .label("New Dashboard")
                        .on_click(new_dashboard),
                ),
        )
        .child(
            v_flex()
                .items_center()
                .gap_4()
                .p_10()
                .rounded_lg()
                .border_1()
                .border_color(theme.border)
                .child(
                    div()
                        .text_2xl()
                        .font_weight(FontWeight::BOLD)
                        .child("Welcome to Force Analytics!"),
                )
                .child(
                    div()
                        .max_w(px(640.))
                        .text_align(TextAlign::Center)
                        .text_color(theme.muted_foreground)
                        .child(
                            "Your account is now set up and ready to use. You can now start \
                             creating dashboards and connecting to your Salesforce data.",
                        ),
                )
                .child(
                    h_flex()
                        .gap_3()
                        .child(
                            Button::new("first-dashboard")
                                .primary()
                                .label("Create Your First Dashboard")
                                .on_click(first_dashboard),
                        )
                        .child(Button::new("dashboard-home").ghost().label("Back to Home").on_click(back_home)),
                ),
        )
}
