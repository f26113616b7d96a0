use yew::prelude::*;

use crate::content::{self, PricingTier};

#[derive(Properties, PartialEq)]
struct TierCardProps {
    tier: PricingTier,
    features: Vec<String>,
}

#[function_component(TierCard)]
fn tier_card(props: &TierCardProps) -> Html {
    let tier = &props.tier;

    html! {
        <div class={classes!("pricing-card", tier.highlight.then(|| "highlight"))}>
            <div class="card-header">
                <h3>{&tier.name}</h3>
                <div class="setup-fee">{format!("${} one-time setup", tier.setup_fee)}</div>
                <div class="price">
                    <span class="amount">{format!("${}", tier.monthly_price)}</span>
                    <span class="period">{"/month"}</span>
                </div>
                <div class="minutes">{&tier.minutes}</div>
            </div>

            <ul class="tier-facts">
                <li>{&tier.calls}</li>
                <li>{format!("Overage: {}", tier.overage)}</li>
            </ul>

            <ul class="tier-features">
                { for props.features.iter().map(|feature| html! {
                    <li class="feature">{feature}</li>
                }) }
            </ul>

            <div class="perfect-for">
                <p class="perfect-for-label">{"Perfect for:"}</p>
                <p>{&tier.perfect_for}</p>
            </div>

            {
                match tier.checkout_link() {
                    Some(link) => html! {
                        <a class="buy-button" href={link} target="_blank" rel="noopener noreferrer">
                            {"Buy Now"}
                        </a>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let pricing = content::pricing();

    html! {
        <section id="pricing" class="pricing-section">
            <div class="pricing-header">
                <span class="eyebrow">{"Pricing Plans"}</span>
                <h2>{"Simple pricing that pays for itself"}</h2>
            </div>

            <div class="pricing-grid">
                { for pricing.tiers.iter().map(|tier| html! {
                    <TierCard
                        key={tier.plan.clone()}
                        tier={tier.clone()}
                        features={pricing.common_features.clone()}
                    />
                }) }
            </div>

            <div class="pricing-footnotes">
                { for pricing.footnotes.iter().map(|note| html! { <p>{note}</p> }) }
            </div>
        </section>
    }
}
