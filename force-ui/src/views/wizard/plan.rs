use force_core::{
    BillingCycle, CloudProvider, Field, HostingOption, PlanForm, PlanKind, ValidationErrors,
    starting_price,
};
use gpui::prelude::FluentBuilder;
use gpui::{
    App, ClickEvent, Context, Div, Entity, FontWeight, Hsla, InteractiveElement, IntoElement,
    ParentElement, SharedString, Stateful, StatefulInteractiveElement, Styled, Subscription,
    TextAlign, Window, div, px,
};
use gpui_component::input::InputState;
use gpui_component::select::SelectState;
use gpui_component::{ActiveTheme, h_flex, v_flex};

use super::WizardView;
use crate::components::{
    field_error, field_pair, input_field, input_text, make_count_input_state, make_input_state,
    make_select_state, section_heading, select_field, selected_label,
};
use crate::utils::{format_price, parse_count};

/// Plan cards, premium configuration and the live price.
///
/// Card and radio choices live in `choices`; counts and free text live in
/// their inputs and are folded in by [`PlanStep::form`].
pub(super) struct PlanStep {
    choices: PlanForm,
    creator_licenses: Entity<InputState>,
    viewer_licenses: Entity<InputState>,
    storage_gb: Entity<InputState>,
    api_key: Entity<InputState>,
    cloud_provider: Entity<SelectState<Vec<SharedString>>>,
    region: Entity<SelectState<Vec<SharedString>>>,
    /// Provider whose regions `region` currently lists.
    region_provider: Option<CloudProvider>,
    _subscriptions: Vec<Subscription>,
    _region_subscription: Subscription,
}

impl PlanStep {
    pub(super) fn new(
        form: &PlanForm,
        window: &mut Window,
        cx: &mut Context<WizardView>,
    ) -> Self {
        let creator_licenses =
            make_count_input_state("1", form.creator_licenses, window, cx);
        let viewer_licenses = make_count_input_state("0", form.viewer_licenses, window, cx);
        let storage_gb = make_count_input_state("10", form.storage_gb, window, cx);
        let api_key = make_input_state("Enter your API key", &form.api_key, window, cx);
        let cloud_provider = make_select_state(
            CloudProvider::ALL.iter().map(CloudProvider::label),
            form.cloud_provider.map(|p| p.label()),
            window,
            cx,
        );
        let selected_region = form
            .cloud_provider
            .and_then(|p| p.region(&form.region))
            .map(|r| r.label);
        let region = make_select_state(
            region_labels(form.cloud_provider),
            selected_region,
            window,
            cx,
        );

        let _subscriptions = vec![
            cx.observe(&creator_licenses, |_, _, cx| cx.notify()),
            cx.observe(&viewer_licenses, |_, _, cx| cx.notify()),
            cx.observe(&storage_gb, |_, _, cx| cx.notify()),
            cx.observe(&cloud_provider, |_, _, cx| cx.notify()),
        ];
        let _region_subscription = cx.observe(&region, |_, _, cx| cx.notify());

        Self {
            choices: form.clone(),
            creator_licenses,
            viewer_licenses,
            storage_gb,
            api_key,
            cloud_provider,
            region,
            region_provider: form.cloud_provider,
            _subscriptions,
            _region_subscription,
        }
    }

    pub(super) fn select_plan(
        &mut self,
        plan: PlanKind,
    ) {
        self.choices.select_plan(plan);
    }

    pub(super) fn select_billing_cycle(
        &mut self,
        cycle: BillingCycle,
    ) {
        self.choices.billing_cycle = Some(cycle);
    }

    pub(super) fn select_hosting(
        &mut self,
        hosting: HostingOption,
    ) {
        self.choices.hosting = Some(hosting);
    }

    /// Everything entered so far, as one form.
    pub(super) fn form(
        &self,
        cx: &App,
    ) -> PlanForm {
        let mut form = PlanForm {
            creator_licenses: read_count(&self.creator_licenses, cx),
            viewer_licenses: read_count(&self.viewer_licenses, cx),
            storage_gb: read_count(&self.storage_gb, cx),
            api_key: input_text(&self.api_key, cx),
            region: selected_label(&self.region, cx),
            cloud_provider: None,
            ..self.choices.clone()
        };
        if let Some(provider) = CloudProvider::parse(&selected_label(&self.cloud_provider, cx)) {
            form.select_provider(provider);
        }
        form
    }

    /// Rebuilds the region list after the provider changed.
    pub(super) fn sync_regions(
        &mut self,
        window: &mut Window,
        cx: &mut Context<WizardView>,
    ) {
        let provider = CloudProvider::parse(&selected_label(&self.cloud_provider, cx));
        if provider == self.region_provider {
            return;
        }
        self.region = make_select_state(region_labels(provider), None, window, cx);
        self._region_subscription = cx.observe(&self.region, |_, _, cx| cx.notify());
        self.region_provider = provider;
    }

    pub(super) fn submit_label(&self) -> &'static str {
        match self.choices.plan {
            Some(PlanKind::Premium) => "Continue to Payment",
            _ => "Start Free Trial",
        }
    }

    pub(super) fn render(
        &self,
        errors: &ValidationErrors,
        cx: &mut Context<WizardView>,
    ) -> impl IntoElement {
        let form = self.form(cx);
        let premium = form.plan == Some(PlanKind::Premium);

        let trial_card = self.trial_card(form.plan == Some(PlanKind::Trial), cx);
        let premium_card = self.premium_card(&form, cx);

        v_flex()
            .gap_6()
            .child(
                h_flex()
                    .gap_6()
                    .items_start()
                    .child(trial_card)
                    .child(premium_card),
            )
            .when_some(field_error(errors, Field::Plan), |this, message| {
                this.child(div().text_sm().text_color(cx.theme().danger).child(message))
            })
            .when(premium, |this| {
                this.child(self.billing_section(&form, errors, cx))
                    .child(self.license_section(errors, cx))
                    .child(self.hosting_section(&form, errors, cx))
                    .child(total_box(&form, cx))
            })
    }

    fn trial_card(
        &self,
        selected: bool,
        cx: &mut Context<WizardView>,
    ) -> Stateful<Div> {
        let on_click = cx.listener(|this, _: &ClickEvent, _, cx| {
            this.with_plan(cx, |plan| plan.select_plan(PlanKind::Trial));
        });

        plan_card("plan-trial", selected, cx)
            .on_click(on_click)
            .child(card_title(PlanKind::Trial.label(), selected, cx))
            .child(muted("Try Force Analytics for 7 days with no commitment.", cx))
            .child(bullets(
                [
                    "1 Creator License",
                    "1 Viewer License",
                    "10GB Storage",
                    "All Features Included",
                ],
                cx,
            ))
            .child(price_caption("$0".into(), "No credit card required", cx))
    }

    fn premium_card(
        &self,
        form: &PlanForm,
        cx: &mut Context<WizardView>,
    ) -> Stateful<Div> {
        let selected = form.plan == Some(PlanKind::Premium);
        let on_click = cx.listener(|this, _: &ClickEvent, _, cx| {
            this.with_plan(cx, |plan| plan.select_plan(PlanKind::Premium));
        });

        let from = if selected {
            form.quote().total
        } else {
            starting_price()
        };
        let caption = match form.billing_cycle {
            Some(BillingCycle::Annual) => "Billed annually (20% discount)",
            _ => "Billed monthly",
        };

        plan_card("plan-premium", selected, cx)
            .on_click(on_click)
            .child(card_title(PlanKind::Premium.label(), selected, cx))
            .child(muted("Full access to all features with custom licensing.", cx))
            .child(bullets(
                [
                    "Multiple Creator Licenses ($49/month each)",
                    "Multiple Viewer Licenses ($24/month each)",
                    "Self-hosted or Company Cloud options",
                    "Priority Support",
                ],
                cx,
            ))
            .child(price_caption(
                format!("Starting at {}", format_price(from)).into(),
                caption,
                cx,
            ))
    }

    fn billing_section(
        &self,
        form: &PlanForm,
        errors: &ValidationErrors,
        cx: &mut Context<WizardView>,
    ) -> Div {
        let options = BillingCycle::ALL.map(|cycle| {
            let on_click = cx.listener(move |this, _: &ClickEvent, _, cx| {
                this.with_plan(cx, |plan| plan.select_billing_cycle(cycle));
            });
            radio_option(
                ("billing", cycle as usize),
                cycle.label(),
                None,
                form.billing_cycle == Some(cycle),
                cx,
            )
            .on_click(on_click)
        });

        section(cx)
            .child(section_heading("Billing Cycle"))
            .child(h_flex().gap_4().children(options))
            .when_some(field_error(errors, Field::BillingCycle), |this, message| {
                this.child(div().text_sm().text_color(cx.theme().danger).child(message))
            })
    }

    fn license_section(
        &self,
        errors: &ValidationErrors,
        cx: &App,
    ) -> Div {
        section(cx)
            .child(section_heading("License Configuration"))
            .child(field_pair(
                input_field(
                    "Creator Licenses ($49 each)",
                    &self.creator_licenses,
                    field_error(errors, Field::CreatorLicenses),
                    cx,
                ),
                input_field(
                    "Viewer Licenses ($24 each)",
                    &self.viewer_licenses,
                    field_error(errors, Field::ViewerLicenses),
                    cx,
                ),
            ))
    }

    fn hosting_section(
        &self,
        form: &PlanForm,
        errors: &ValidationErrors,
        cx: &mut Context<WizardView>,
    ) -> Div {
        let options = HostingOption::ALL.map(|hosting| {
            let on_click = cx.listener(move |this, _: &ClickEvent, _, cx| {
                this.with_plan(cx, |plan| plan.select_hosting(hosting));
            });
            radio_option(
                ("hosting", hosting as usize),
                hosting.label(),
                Some(hosting.description()),
                form.hosting == Some(hosting),
                cx,
            )
            .on_click(on_click)
        });

        let hosting = form.hosting;
        section(cx)
            .child(section_heading("Hosting Configuration"))
            .child(h_flex().gap_4().children(options))
            .when_some(field_error(errors, Field::HostingOption), |this, message| {
                this.child(div().text_sm().text_color(cx.theme().danger).child(message))
            })
            .when(hosting == Some(HostingOption::SelfHosted), |this| {
                this.child(select_field(
                    "Cloud Provider",
                    &self.cloud_provider,
                    "Select Cloud Provider",
                    field_error(errors, Field::CloudProvider),
                    cx,
                ))
                .when(form.cloud_provider.is_some(), |this| {
                    this.child(field_pair(
                        input_field(
                            "API Key / Access Token",
                            &self.api_key,
                            field_error(errors, Field::ApiKey),
                            cx,
                        ),
                        select_field(
                            "Region",
                            &self.region,
                            "Select Region",
                            field_error(errors, Field::Region),
                            cx,
                        ),
                    ))
                })
            })
            .when(hosting == Some(HostingOption::Company), |this| {
                this.child(input_field(
                    "Storage Size (GB) - $1/GB",
                    &self.storage_gb,
                    field_error(errors, Field::StorageSize),
                    cx,
                ))
            })
    }
}

fn read_count(
    state: &Entity<InputState>,
    cx: &App,
) -> Option<i64> {
    // Unreadable text is logged by `parse_count` and then treated as blank.
    parse_count(&input_text(state, cx)).ok().flatten()
}

fn region_labels(provider: Option<CloudProvider>) -> Vec<&'static str> {
    provider
        .map(|p| p.regions().iter().map(|r| r.label).collect())
        .unwrap_or_default()
}

fn section(cx: &App) -> Div {
    v_flex()
        .gap_4()
        .pt_6()
        .border_t_1()
        .border_color(cx.theme().border)
}

fn muted(
    text: &'static str,
    cx: &App,
) -> Div {
    div().text_color(cx.theme().muted_foreground).child(text)
}

fn plan_card(
    id: &'static str,
    selected: bool,
    cx: &App,
) -> Stateful<Div> {
    let theme = cx.theme();
    let primary = theme.primary;

    v_flex()
        .id(id)
        .flex_1()
        .gap_4()
        .p_6()
        .rounded_xl()
        .border_1()
        .cursor_pointer()
        .map(|this| {
            if selected {
                this.border_color(primary).bg(primary.opacity(0.05)).shadow_md()
            } else {
                this.border_color(theme.border)
                    .hover(move |style| style.border_color(primary))
            }
        })
}

fn radio_dot(
    selected: bool,
    color: Hsla,
    idle: Hsla,
) -> Div {
    div()
        .size(px(20.))
        .flex_none()
        .rounded_full()
        .border_2()
        .flex()
        .items_center()
        .justify_center()
        .border_color(if selected { color } else { idle })
        .when(selected, |this| {
            this.child(div().size(px(10.)).rounded_full().bg(color))
        })
}

fn card_title(
    title: &'static str,
    selected: bool,
    cx: &App,
) -> Div {
    let theme = cx.theme();

    h_flex()
        .justify_between()
        .items_center()
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::BOLD)
                .text_color(theme.primary)
                .child(title),
        )
        .child(radio_dot(selected, theme.primary, theme.border))
}

fn bullets<const N: usize>(
    items: [&'static str; N],
    cx: &App,
) -> Div {
    let accent = cx.theme().primary;

    v_flex().gap_2().children(items.map(|item| {
        h_flex()
            .gap_2()
            .child(div().text_color(accent).child("✓"))
            .child(item)
    }))
}

fn price_caption(
    price: SharedString,
    caption: &'static str,
    cx: &App,
) -> Div {
    v_flex()
        .items_center()
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .child(price),
        )
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .child(caption),
        )
}

fn radio_option(
    id: (&'static str, usize),
    label: &'static str,
    description: Option<&'static str>,
    selected: bool,
    cx: &App,
) -> Stateful<Div> {
    let theme = cx.theme();
    let primary = theme.primary;

    v_flex()
        .id(id)
        .flex_1()
        .gap_1()
        .p_4()
        .rounded_lg()
        .border_1()
        .cursor_pointer()
        .border_color(if selected { primary } else { theme.border })
        .when(selected, |this| this.bg(primary.opacity(0.05)))
        .child(
            h_flex()
                .gap_2()
                .items_center()
                .child(radio_dot(selected, primary, theme.muted_foreground))
                .child(div().font_weight(FontWeight::MEDIUM).child(label)),
        )
        .when_some(description, |this, text| {
            this.child(
                div()
                    .pl_7()
                    .text_sm()
                    .text_color(theme.muted_foreground)
                    .child(text),
            )
        })
}

fn total_box(
    form: &PlanForm,
    cx: &App,
) -> Div {
    let quote = form.quote();
    let theme = cx.theme();
    let annual = quote.billing_cycle == BillingCycle::Annual;
    let period = if annual {
        format!("{} per year (20% savings)", format_price(quote.yearly_total()))
    } else {
        "per month".to_string()
    };

    h_flex()
        .justify_between()
        .items_center()
        .p_6()
        .rounded_xl()
        .border_1()
        .border_color(theme.border)
        .bg(theme.muted)
        .child(
            v_flex()
                .child(section_heading("Total:"))
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.muted_foreground)
                        .child(quote.billing_cycle.billed_caption()),
                ),
        )
        .child(
            v_flex()
                .items_end()
                .child(
                    div()
                        .text_2xl()
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme.primary)
                        .text_align(TextAlign::Right)
                        .child(format_price(quote.total)),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.muted_foreground)
                        .child(period),
                ),
        )
}
