use force_core::Route;
use gpui::{
    ClickEvent, Context, Div, FontWeight, IntoElement, ParentElement, Styled, TextAlign, div, px, rems,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, Sizable, h_flex, v_flex};

use crate::components::AppWindow;
use crate::content::{
    CTA_BODY, CTA_HEADING, FEATURES, FEATURES_HEADING, FEATURES_INTRO, Feature, HERO,
    TESTIMONIALS, TESTIMONIALS_HEADING, TESTIMONIALS_INTRO, Testimonial,
};

fn go_to<'a>(
    route: Route,
    cx: &'a Context<AppWindow>,
) -> impl Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static + use<'a> {
    cx.listener(move |this, _: &ClickEvent, window, cx| this.navigate(route, window, cx))
}

/// The marketing home page.
pub fn landing_page(cx: &mut Context<AppWindow>) -> impl IntoElement {
    v_flex()
        .w_full()
        .child(hero(cx))
        .child(features(cx))
        .child(testimonials(cx))
        .child(call_to_action(cx))
}

fn section_header(
    heading: &'static str,
    intro: &'static str,
    cx: &Context<AppWindow>,
) -> Div {
    v_flex()
        .items_center()
        .gap_3()
        .max_w(px(720.))
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .text_align(TextAlign::Center)
                .child(heading),
        )
        .child(
            div()
                .text_lg()
                .text_color(cx.theme().muted_foreground)
                .text_align(TextAlign::Center)
                .child(intro),
        )
}

fn hero(cx: &mut Context<AppWindow>) -> Div {
    let get_started = go_to(Route::SignUp, cx);
    let learn_more = go_to(Route::Guide, cx);
    let theme = cx.theme();

    v_flex()
        .w_full()
        .items_center()
        .gap_6()
        .px_8()
        .py_20()
        .bg(theme.primary.opacity(0.06))
        .child(
            div()
                .max_w(px(880.))
                .text_size(rems(2.25))
                .font_weight(FontWeight::BOLD)
                .text_align(TextAlign::Center)
                .child(HERO.headline),
        )
        .child(
            div()
                .max_w(px(720.))
                .text_xl()
                .text_color(theme.muted_foreground)
                .text_align(TextAlign::Center)
                .child(HERO.tagline),
        )
        .child(
            h_flex()
                .gap_4()
                .child(
                    Button::new("hero-get-started")
                        .primary()
                        .large()
                        .label("Get Started")
                        .on_click(get_started),
                )
                .child(
                    Button::new("hero-learn-more")
                        .outline()
                        .large()
                        .label("Learn More")
                        .on_click(learn_more),
                ),
        )
        .child(
            div()
                .text_sm()
                .text_color(theme.muted_foreground)
                .child(HERO.footnote),
        )
}

fn feature_card(
    feature: &Feature,
    cx: &Context<AppWindow>,
) -> Div {
    v_flex()
        .flex_1()
        .gap_2()
        .p_6()
        .rounded_lg()
        .border_1()
        .border_color(cx.theme().border)
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .child(feature.title),
        )
        .child(
            div()
                .text_color(cx.theme().muted_foreground)
                .child(feature.description),
        )
}

fn features(cx: &mut Context<AppWindow>) -> Div {
    let rows = FEATURES.chunks(2).map(|pair| {
        h_flex()
            .w_full()
            .gap_6()
            .items_start()
            .children(pair.iter().map(|feature| feature_card(feature, cx)))
    });

    v_flex()
        .w_full()
        .items_center()
        .gap_10()
        .px_8()
        .py_16()
        .child(section_header(FEATURES_HEADING, FEATURES_INTRO, cx))
        .child(v_flex().w_full().max_w(px(1080.)).gap_6().children(rows))
}

fn testimonial_card(
    testimonial: &Testimonial,
    cx: &Context<AppWindow>,
) -> Div {
    let theme = cx.theme();

    v_flex()
        .flex_1()
        .gap_4()
        .p_6()
        .rounded_lg()
        .bg(theme.background)
        .border_1()
        .border_color(theme.border)
        .child(
            div()
                .text_color(theme.muted_foreground)
                .child(format!("\u{201c}{}\u{201d}", testimonial.quote)),
        )
        .child(
            h_flex()
                .gap_3()
                .items_center()
                .child(
                    div()
                        .size(px(40.))
                        .flex_none()
                        .rounded_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .bg(theme.primary)
                        .text_color(theme.primary_foreground)
                        .font_weight(FontWeight::BOLD)
                        .child(testimonial.initial()),
                )
                .child(
                    v_flex()
                        .child(
                            div()
                                .font_weight(FontWeight::SEMIBOLD)
                                .child(testimonial.author),
                        )
                        .child(
                            div()
                                .text_sm()
                                .text_color(theme.muted_foreground)
                                .child(format!("{}, {}", testimonial.position, testimonial.company)),
                        ),
                ),
        )
}

fn testimonials(cx: &mut Context<AppWindow>) -> Div {
    v_flex()
        .w_full()
        .items_center()
        .gap_10()
        .px_8()
        .py_16()
        .bg(cx.theme().muted)
        .child(section_header(TESTIMONIALS_HEADING, TESTIMONIALS_INTRO, cx))
        .child(
            h_flex()
                .w_full()
                .max_w(px(1080.))
                .gap_6()
                .items_start()
                .children(TESTIMONIALS.iter().map(|t| testimonial_card(t, cx))),
        )
}

fn call_to_action(cx: &mut Context<AppWindow>) -> Div {
    let start_trial = go_to(Route::SignUp, cx);
    let contact_sales = go_to(Route::Contact, cx);
    let theme = cx.theme();

    v_flex()
        .w_full()
        .items_center()
        .gap_6()
        .px_8()
        .py_16()
        .bg(theme.primary)
        .text_color(theme.primary_foreground)
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .text_align(TextAlign::Center)
                .child(CTA_HEADING),
        )
        .child(
            div()
                .max_w(px(720.))
                .text_lg()
                .text_align(TextAlign::Center)
                .child(CTA_BODY),
        )
        .child(
            h_flex()
                .gap_4()
                .child(
                    Button::new("cta-start-trial")
                        .large()
                        .label("Start Free Trial")
                        .on_click(start_trial),
                )
                .child(
                    Button::new("cta-contact-sales")
                        .outline()
                        .large()
                        .label("Contact Sales")
                        .on_click(contact_sales),
                ),
        )
}
