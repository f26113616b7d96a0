use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose navigation tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const TALLY_SCRIPT_ID: &str = "tally-js";
pub const TALLY_SCRIPT_SRC: &str = "https://tally.so/widgets/embed.js";
pub const TALLY_FORM_SRC: &str =
    "https://tally.so/embed/ZjaXJ5?alignLeft=1&hideTitle=1&transparentBackground=1&dynamicHeight=1";

/// Stripe payment link for a pricing plan key as it appears in `content/pricing.json`.
pub fn checkout_link(plan: &str) -> Option<&'static str> {
    match plan {
        "starter" => Some("https://buy.stripe.com/9B69AT5WR9cJb6B6lp7ok00"),
        "growth" => Some("https://buy.stripe.com/eVq00j2KFbkRdeJbFJ7ok01"),
        "pro" => Some("https://buy.stripe.com/7sY00jfxr0GdfmR2597ok03"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_plan_has_its_own_link() {
        let links: Vec<_> = ["starter", "growth", "pro"]
            .iter()
            .map(|plan| checkout_link(plan).expect("missing link"))
            .collect();
        assert_eq!(links.len(), 3);
        assert_ne!(links[0], links[1]);
        assert_ne!(links[1], links[2]);
        assert_ne!(links[0], links[2]);
    }

    #[test]
    fn test_unknown_plan_has_no_link() {
        assert_eq!(checkout_link("enterprise"), None);
        assert_eq!(checkout_link(""), None);
    }
}
