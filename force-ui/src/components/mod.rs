pub mod modal;
pub mod window;

use force_core::{Field, ValidationErrors};
use gpui::prelude::FluentBuilder;
use gpui::{
    App, AppContext, ClickEvent, Context, Div, Entity, FontWeight, IntoElement, ParentElement,
    Pixels, SharedString, Size, Styled, Window, div, px,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputState, MaskPattern};
use gpui_component::select::{Select, SelectState};
use gpui_component::{ActiveTheme, IndexPath, Sizable, h_flex, v_flex};

pub use modal::{confirm_overlay, modal_overlay};
pub use window::AppWindow;

use crate::config::WindowConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::from(&WindowConfig::default())
    }
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self {
            size: Size {
                width: px(config.width),
                height: px(config.height),
            },
        }
    }
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .label(label.into())
        .on_click(on_click)
}

/// The message recorded against `field`, ready for rendering.
pub fn field_error(
    errors: &ValidationErrors,
    field: Field,
) -> Option<SharedString> {
    errors.get(field).map(|m| SharedString::from(m.to_string()))
}

/// A label above a control, with the field's error line below it.
pub fn form_field(
    label: impl Into<SharedString>,
    control: impl IntoElement,
    error: Option<SharedString>,
    cx: &App,
) -> Div {
    v_flex()
        .w_full()
        .gap_1()
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .child(label.into()),
        )
        .child(control)
        .when_some(error, |this, message| {
            this.child(div().text_sm().text_color(cx.theme().danger).child(message))
        })
}

/// Two form fields side by side.
pub fn field_pair(
    left: impl IntoElement,
    right: impl IntoElement,
) -> Div {
    h_flex()
        .w_full()
        .gap_4()
        .items_start()
        .child(div().flex_1().child(left))
        .child(div().flex_1().child(right))
}

pub fn section_heading(text: impl Into<SharedString>) -> Div {
    div()
        .text_lg()
        .font_weight(FontWeight::BOLD)
        .child(text.into())
}

/// A page-level error banner.
pub fn error_banner(
    message: impl Into<SharedString>,
    cx: &App,
) -> Div {
    div()
        .w_full()
        .p_3()
        .rounded_lg()
        .bg(cx.theme().danger.opacity(0.12))
        .text_color(cx.theme().danger)
        .child(message.into())
}

/// A text input pre-filled with `value`.
pub fn make_input_state<V: 'static>(
    placeholder: impl Into<SharedString>,
    value: &str,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<InputState> {
    let value = SharedString::from(value.to_string());
    cx.new(|cx| {
        InputState::new(window, cx)
            .placeholder(placeholder.into())
            .default_value(value)
    })
}

/// A whole-number input with thousands separators.
pub fn make_count_input_state<V: 'static>(
    placeholder: impl Into<SharedString>,
    value: Option<i64>,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<InputState> {
    let pattern = MaskPattern::Number {
        separator: Some(','),
        fraction: None,
    };
    let value = SharedString::from(value.map(|v| v.to_string()).unwrap_or_default());
    cx.new(|cx| {
        InputState::new(window, cx)
            .mask_pattern(pattern)
            .placeholder(placeholder.into())
            .default_value(value)
    })
}

/// A single-choice dropdown over `labels`, with `selected` pre-picked.
pub fn make_select_state<V: 'static>(
    labels: impl IntoIterator<Item = &'static str>,
    selected: Option<&str>,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<SelectState<Vec<SharedString>>> {
    let items: Vec<SharedString> = labels.into_iter().map(SharedString::from).collect();
    let initial_index = selected
        .and_then(|label| items.iter().position(|s| s.as_ref() == label))
        .map(|i| IndexPath::default().row(i));

    cx.new(|cx| SelectState::new(items, initial_index, window, cx))
}

/// The selected label, or an empty string.
pub fn selected_label(
    state: &Entity<SelectState<Vec<SharedString>>>,
    cx: &App,
) -> String {
    state
        .read(cx)
        .selected_value()
        .map(|s| s.to_string())
        .unwrap_or_default()
}

pub fn input_text(
    state: &Entity<InputState>,
    cx: &App,
) -> String {
    state.read(cx).value().to_string()
}

/// A labelled text input with its error line.
pub fn input_field(
    label: impl Into<SharedString>,
    state: &Entity<InputState>,
    error: Option<SharedString>,
    cx: &App,
) -> Div {
    form_field(label, Input::new(state), error, cx)
}

/// A labelled dropdown with its error line.
pub fn select_field(
    label: impl Into<SharedString>,
    state: &Entity<SelectState<Vec<SharedString>>>,
    placeholder: impl Into<SharedString>,
    error: Option<SharedString>,
    cx: &App,
) -> Div {
    form_field(
        label,
        Select::new(state).placeholder(placeholder.into()),
        error,
        cx,
    )
}
