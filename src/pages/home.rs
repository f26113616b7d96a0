use yew::prelude::*;

use crate::components::charts::{BookingsTrendChart, JobStatusChart};
use crate::components::tally_form::TallyForm;
use crate::content;
use crate::navigation::controller::Page;
use crate::navigation::navigator::use_page_navigator;
use crate::pages::faq::FaqSection;
use crate::pages::pricing::PricingSection;

struct Step {
    color: &'static str,
    title: &'static str,
    desc: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        color: "black",
        title: "Sign up via form",
        desc: "Fill out a quick questionnaire about your business hours, typical jobs, and pricing.",
    },
    Step {
        color: "blue",
        title: "Connect tools",
        desc: "Link your current phone number and Google Calendar. No hardware needed.",
    },
    Step {
        color: "green",
        title: "Train your AI",
        desc: "Customize AI responses with your pricing and policies. It learns like a pro in minutes.",
    },
    Step {
        color: "pink",
        title: "Quick Deployment",
        desc: "Start capturing missed leads and booking jobs while you sleep.",
    },
];

#[function_component(Hero)]
fn hero() -> Html {
    let navigator = use_page_navigator();

    let (buy_now, see_dashboard) = match navigator {
        Some(navigator) => (
            navigator.to_anchor(Page::Home, "pricing"),
            navigator.to_anchor(Page::Home, "dashboard"),
        ),
        None => (Callback::noop(), Callback::noop()),
    };

    html! {
        <header class="hero grid-bg">
            <span class="hero-badge">{"24/7 AI Receptionist for Small Business"}</span>
            <h1>
                {"Never miss a "}<br />
                <span class="hero-underline">{"customer lead"}</span><br />
                {"again."}
            </h1>
            <p class="hero-subtitle">
                {"Boost revenue with a virtual pro that handles your scheduling, answers questions, and confirms jobs—while you're on site or off the clock."}
            </p>
            <div class="hero-actions">
                <button class="hero-cta primary" onclick={buy_now}>{"Buy Now"}</button>
                <button class="hero-cta secondary" onclick={see_dashboard}>{"See the Dashboard"}</button>
            </div>
            <div class="hero-note">
                <span class="pulse-dot"></span>
                {"Simple onboarding. We handle the heavy lifting so you can focus on your business."}
            </div>
        </header>
    }
}

#[function_component(Integrations)]
fn integrations() -> Html {
    html! {
        <section class="integrations">
            <p class="eyebrow">{"Works with the tools you already use"}</p>
            <div class="integration-logos">
                <img src="https://www.gstatic.com/images/branding/product/2x/calendar_2020q4_48dp.png" alt="Google Calendar" />
                <img src="https://www.gstatic.com/images/branding/product/2x/gmail_2020q4_48dp.png" alt="Gmail" />
                <span class="integration-phone">{"Your Phone Number"}</span>
            </div>
        </section>
    }
}

#[function_component(DashboardSection)]
fn dashboard_section() -> Html {
    let dashboard = content::dashboard();

    html! {
        <section id="dashboard" class="dashboard-section">
            <div class="section-header">
                <h2>{"A clean interface for a busy trade."}</h2>
                <p>{"Everything you need to know about your jobs, organized and automated."}</p>
            </div>

            <div class="stat-grid">
                { for dashboard.stats.iter().map(|stat| html! {
                    <div class="stat-card" key={stat.label.clone()}>
                        <span class="stat-label">{&stat.label}</span>
                        <div class="stat-value">{&stat.value}</div>
                        <div class="stat-note">{&stat.note}</div>
                    </div>
                }) }
            </div>

            <div class="chart-grid">
                <div class="chart-card wide">
                    <h3>{"Daily Bookings Trend"}</h3>
                    <BookingsTrendChart data={dashboard.daily_bookings.clone()} />
                </div>
                <div class="chart-card">
                    <h3>{"Job Status Distribution"}</h3>
                    <JobStatusChart slices={dashboard.job_status.clone()} />
                </div>
            </div>
        </section>
    }
}

#[function_component(AutomationSection)]
fn automation_section() -> Html {
    html! {
        <section class="automation-section grid-bg">
            <div class="section-header">
                <span class="eyebrow">{"Automation"}</span>
                <h2>{"Smart notifications for everyone"}</h2>
                <p>{"BookedAI sends beautiful, clear confirmations to your customers and instant booking requests to you."}</p>
            </div>

            <div class="automation-grid">
                <div class="automation-column">
                    <div class="column-label">{"Customer View"}</div>
                    <div class="customer-card">
                        <h4>{"Confirmed: Leaky faucet on Wed, Feb 4 at 9:00 AM"}</h4>
                        <p class="greeting">{"Hi Bill Jones,"}</p>
                        <p>{"You're all set — your appointment is confirmed."}</p>
                        <div class="appointment-details">
                            <p class="details-label">{"Appointment Details"}</p>
                            <ul>
                                <li><span>{"Service:"}</span>{" Leaky faucet"}</li>
                                <li><span>{"Date/Time:"}</span>{" Wed, Feb 4, 2026 at 9:00 AM"}</li>
                                <li><span>{"Address:"}</span>{" 1234 Harper Landing, Fairview, TX"}</li>
                            </ul>
                        </div>
                        <div class="customer-actions">
                            <span class="reschedule">{"Reschedule →"}</span>
                            <span class="cancel">{"Cancel →"}</span>
                        </div>
                    </div>
                </div>

                <div class="automation-column">
                    <div class="column-label">{"Business View (You)"}</div>
                    <div class="business-card">
                        <div class="business-card-header">
                            <h4>{"New job request"}</h4>
                            <p>{"Bill Jones — Leaky faucet"}</p>
                        </div>
                        <div class="business-card-body">
                            <span class="status-pill">{"Pending Confirmation"}</span>
                            <div class="job-facts">
                                <div><p class="fact-label">{"Customer"}</p><p>{"Bill Jones"}</p></div>
                                <div><p class="fact-label">{"Phone"}</p><p>{"432-123-1234"}</p></div>
                                <div class="full"><p class="fact-label">{"Location"}</p><p>{"1234 Harper Landing, Fairview, TX"}</p></div>
                            </div>
                            <button class="confirm-button">{"Confirm Appointment"}</button>
                            <p class="sync-note">{"Updates synced with Google Calendar"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="how-it-works">
            <div class="section-header">
                <span class="eyebrow">{"Onboarding"}</span>
                <h2>{"Built for the trades"}</h2>
                <p>{"No coding, no complex manuals, just simple setup and better results."}</p>
            </div>

            <div class="steps-grid">
                { for STEPS.iter().map(|step| html! {
                    <div class="step" key={step.title}>
                        <div class={classes!("step-icon", step.color)}></div>
                        <h4>{step.title}</h4>
                        <p>{step.desc}</p>
                    </div>
                }) }
            </div>

            <div id="onboarding" class="onboarding-card">
                <div class="onboarding-header">
                    <h3>{"Have questions? We’ve got you."}</h3>
                    <p>{"Fill out the details below for a free consultation."}</p>
                </div>
                <div class="onboarding-form">
                    <TallyForm />
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Hero />
            <Integrations />
            <DashboardSection />
            <AutomationSection />
            <HowItWorks />
            <PricingSection />
            <FaqSection />
        </>
    }
}
