//! Subscription pricing for the onboarding plan step.
//!
//! # Pricing Rules
//!
//! | Rule | Description |
//! |------|-------------|
//! | 1    | A trial plan costs nothing, whatever else is selected |
//! | 2    | Creator licenses are floored at 1, viewer licenses at 0, storage at 10 GB |
//! | 3    | Creator licenses cost $49 each, viewer licenses $24 each |
//! | 4    | Company-hosted storage costs $1 per GB; self-hosted storage is billed by the customer's provider |
//! | 5    | Subtotal is the sum of license and storage costs |
//! | 6    | Annual billing takes 20% off the subtotal |
//! | 7    | The total is rounded half-up to cents |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use force_core::calculations::{PriceInput, price};
//! use force_core::{BillingCycle, HostingOption, PlanKind};
//!
//! let input = PriceInput {
//!     plan: PlanKind::Premium,
//!     billing_cycle: BillingCycle::Annual,
//!     creator_licenses: 2,
//!     viewer_licenses: 0,
//!     hosting: HostingOption::Company,
//!     storage_gb: 10,
//! };
//!
//! assert_eq!(price(&input), dec!(86.40));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{floor_count, round_half_up};
use crate::models::{BillingCycle, HostingOption, PlanKind, PlanSelection};

/// Monthly price of one creator license.
pub const CREATOR_LICENSE_PRICE: Decimal = Decimal::from_parts(49, 0, 0, false, 0);

/// Monthly price of one viewer license.
pub const VIEWER_LICENSE_PRICE: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Monthly price of one GB of company-hosted storage.
pub const STORAGE_PRICE_PER_GB: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Share of the subtotal still charged on annual billing (20% off).
pub const ANNUAL_FACTOR: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

const MIN_CREATORS: i64 = 1;
const MIN_VIEWERS: i64 = 0;
const MIN_STORAGE: i64 = 10;

/// The plan fields the price depends on.
///
/// Counts are signed because they come straight from form input; the
/// calculator clamps them, so any value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInput {
    pub plan: PlanKind,
    pub billing_cycle: BillingCycle,
    pub creator_licenses: i64,
    pub viewer_licenses: i64,
    pub hosting: HostingOption,
    pub storage_gb: i64,
}

impl From<&PlanSelection> for PriceInput {
    fn from(selection: &PlanSelection) -> Self {
        Self {
            plan: selection.plan,
            billing_cycle: selection.billing_cycle,
            creator_licenses: i64::from(selection.creator_licenses),
            viewer_licenses: i64::from(selection.viewer_licenses),
            hosting: selection.hosting,
            storage_gb: i64::from(selection.storage_gb),
        }
    }
}

/// Itemised result of a price calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub creator_cost: Decimal,
    pub viewer_cost: Decimal,
    pub storage_cost: Decimal,
    pub subtotal: Decimal,
    /// Amount taken off by the annual discount.
    pub discount: Decimal,
    /// Price per month after discount and rounding.
    pub total: Decimal,
    pub billing_cycle: BillingCycle,
}

impl PriceQuote {
    fn free(billing_cycle: BillingCycle) -> Self {
        Self {
            creator_cost: Decimal::ZERO,
            viewer_cost: Decimal::ZERO,
            storage_cost: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            discount: Decimal::ZERO,
            total: Decimal::ZERO,
            billing_cycle,
        }
    }

    /// Twelve months at the quoted total.
    pub fn yearly_total(&self) -> Decimal {
        round_half_up(self.total * Decimal::from(12))
    }
}

/// Computes the itemised monthly price for `input`.
pub fn quote(input: &PriceInput) -> PriceQuote {
    if input.plan == PlanKind::Trial {
        return PriceQuote::free(input.billing_cycle);
    }

    let creators = floor_count(input.creator_licenses, MIN_CREATORS);
    let viewers = floor_count(input.viewer_licenses, MIN_VIEWERS);
    let storage = floor_count(input.storage_gb, MIN_STORAGE);

    let creator_cost = creators * CREATOR_LICENSE_PRICE;
    let viewer_cost = viewers * VIEWER_LICENSE_PRICE;
    let storage_cost = match input.hosting {
        HostingOption::Company => storage * STORAGE_PRICE_PER_GB,
        HostingOption::SelfHosted => Decimal::ZERO,
    };

    let subtotal = creator_cost + viewer_cost + storage_cost;
    let total = match input.billing_cycle {
        BillingCycle::Annual => round_half_up(subtotal * ANNUAL_FACTOR),
        BillingCycle::Monthly => round_half_up(subtotal),
    };

    PriceQuote {
        creator_cost,
        viewer_cost,
        storage_cost,
        subtotal,
        discount: subtotal - total,
        total,
        billing_cycle: input.billing_cycle,
    }
}

/// Computes the monthly price for `input`, rounded to cents.
pub fn price(input: &PriceInput) -> Decimal {
    quote(input).total
}

/// The price of a premium plan with its default configuration.
///
/// Shown as the "Starting at" figure while the trial plan is selected.
pub fn starting_price() -> Decimal {
    price(&PriceInput::from(&PlanSelection::premium_defaults()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn premium(
        billing_cycle: BillingCycle,
        creator_licenses: i64,
        viewer_licenses: i64,
        hosting: HostingOption,
        storage_gb: i64,
    ) -> PriceInput {
        PriceInput {
            plan: PlanKind::Premium,
            billing_cycle,
            creator_licenses,
            viewer_licenses,
            hosting,
            storage_gb,
        }
    }

    // =========================================================================
    // trial plan
    // =========================================================================

    #[test]
    fn trial_is_free_whatever_the_other_fields() {
        for billing_cycle in BillingCycle::ALL {
            for hosting in HostingOption::ALL {
                for (creators, viewers, storage) in [(0, 0, 0), (5, 12, 500), (-1, -1, -1)] {
                    let input = PriceInput {
                        plan: PlanKind::Trial,
                        billing_cycle,
                        creator_licenses: creators,
                        viewer_licenses: viewers,
                        hosting,
                        storage_gb: storage,
                    };

                    assert_eq!(price(&input), Decimal::ZERO, "{input:?}");
                }
            }
        }
    }

    #[test]
    fn trial_quote_has_no_discount() {
        let input = PriceInput {
            plan: PlanKind::Trial,
            ..premium(BillingCycle::Annual, 3, 3, HostingOption::Company, 50)
        };

        let quote = quote(&input);

        assert_eq!(quote.subtotal, Decimal::ZERO);
        assert_eq!(quote.discount, Decimal::ZERO);
        assert_eq!(quote.billing_cycle, BillingCycle::Annual);
    }

    // =========================================================================
    // premium plan
    // =========================================================================

    #[test]
    fn premium_defaults_cost_83_per_month() {
        let input = premium(BillingCycle::Monthly, 1, 1, HostingOption::Company, 10);

        assert_eq!(price(&input), dec!(83));
    }

    #[test]
    fn annual_billing_takes_twenty_percent_off() {
        let input = premium(BillingCycle::Annual, 2, 0, HostingOption::Company, 10);

        let quote = quote(&input);

        assert_eq!(quote.subtotal, dec!(108));
        assert_eq!(quote.total, dec!(86.40));
        assert_eq!(quote.discount, dec!(21.60));
    }

    #[test]
    fn zero_creators_are_billed_as_one() {
        let input = premium(BillingCycle::Monthly, 0, 0, HostingOption::SelfHosted, 10);

        assert_eq!(price(&input), dec!(49));
    }

    #[test]
    fn negative_viewers_are_billed_as_zero() {
        let input = premium(BillingCycle::Monthly, 1, -4, HostingOption::SelfHosted, 10);

        assert_eq!(price(&input), dec!(49));
    }

    #[test]
    fn storage_below_minimum_is_billed_as_ten_gb() {
        let input = premium(BillingCycle::Monthly, 1, 0, HostingOption::Company, 2);

        let quote = quote(&input);

        assert_eq!(quote.storage_cost, dec!(10));
        assert_eq!(quote.total, dec!(59));
    }

    #[test]
    fn self_hosting_drops_storage_cost() {
        let input = premium(BillingCycle::Monthly, 2, 3, HostingOption::SelfHosted, 500);

        let quote = quote(&input);

        assert_eq!(quote.storage_cost, Decimal::ZERO);
        assert_eq!(quote.total, dec!(170));
    }

    #[test]
    fn annual_total_is_rounded_to_cents() {
        // (49 + 24 * 1 + 11) * 0.8 = 67.2
        let input = premium(BillingCycle::Annual, 1, 1, HostingOption::Company, 11);

        assert_eq!(price(&input), dec!(67.20));
    }

    #[test]
    fn yearly_total_is_twelve_months() {
        let input = premium(BillingCycle::Annual, 2, 0, HostingOption::Company, 10);

        assert_eq!(quote(&input).yearly_total(), dec!(1036.80));
    }

    #[test]
    fn price_is_idempotent() {
        let input = premium(BillingCycle::Annual, 7, 13, HostingOption::Company, 42);

        assert_eq!(price(&input), price(&input));
        assert_eq!(quote(&input), quote(&input));
    }

    #[test]
    fn price_input_from_selection_copies_plan_fields() {
        let selection = PlanSelection {
            creator_licenses: 4,
            viewer_licenses: 9,
            storage_gb: 120,
            ..PlanSelection::premium_defaults()
        };

        let input = PriceInput::from(&selection);

        assert_eq!(input.plan, PlanKind::Premium);
        assert_eq!(input.creator_licenses, 4);
        assert_eq!(input.viewer_licenses, 9);
        assert_eq!(input.storage_gb, 120);
    }

    #[test]
    fn starting_price_matches_premium_defaults() {
        assert_eq!(starting_price(), dec!(83));
    }
}
