//! Waitlist landing page
//!
//! A single scroll-animated marketing page:
//! - SEO meta tags
//! - Hero section with the "Join the Waitlist" scroll button and progress bar
//! - Feature cards with staggered entrance
//! - Waitlist form, replaced by a confirmation once submitted
//!
//! Hero, features and form are one-shot reveal regions; the form posts one
//! lead per submit through the `LeadStore` handed to the page.

use leptos::ev::SubmitEvent;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};

use crate::core::{
    FormField, LeadStore, Region, SubmissionStatus, VisibilityFlags, WaitlistForm, WaitlistView,
    ready_to_submit, submit,
};
use crate::ui::common::SubmitButton;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{scroll_to_id, use_reveal_on_scroll};

/// DOM id of the form section, target of the hero scroll button
pub const WAITLIST_FORM_ID: &str = "waitlist-form";

/// Share of waitlist spots shown as claimed
const CLAIMED_PERCENT: u8 = 78;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: icons::BOT,
        title: "AI-Powered Conversations",
        description: "Natural engagement with leads through intelligent email automation and whatsapp chatbots",
    },
    Feature {
        icon: icons::MESSAGE_SQUARE_MORE,
        title: "Smart Qualification",
        description: "Automated gathering of budget, location, contact number, and preferences",
    },
    Feature {
        icon: icons::BAR_CHART,
        title: "Advanced Lead Scoring",
        description: "Intelligent prioritization based on engagement signals",
    },
    Feature {
        icon: icons::ZAP,
        title: "Instant Notifications",
        description: "Real-time alerts when leads become sales-ready",
    },
];

fn delay(ms: u32) -> String {
    format!("transition-delay: {}ms", ms)
}

/// Waitlist landing page
#[component]
pub fn WaitlistPage<S: LeadStore + Clone + Send + Sync + 'static>(
    /// Store receiving submitted leads
    store: S,
) -> impl IntoView {
    let form = RwSignal::new(WaitlistForm::new());
    let status = RwSignal::new(SubmissionStatus::Idle);
    let field_error = RwSignal::new(None::<(FormField, String)>);

    let flags = RwSignal::new(VisibilityFlags::new());
    let hero_ref = NodeRef::<Div>::new();
    let features_ref = NodeRef::<Div>::new();
    let form_ref = NodeRef::<Div>::new();
    let hero_visible = use_reveal_on_scroll(hero_ref, Region::Hero, flags);
    let features_visible = use_reveal_on_scroll(features_ref, Region::Features, flags);
    let form_visible = use_reveal_on_scroll(form_ref, Region::Form, flags);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let snapshot = form.get_untracked();
        match ready_to_submit(status.get_untracked(), &snapshot) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                field_error.set(Some((e.field(), e.to_string())));
                return;
            }
        }

        // Claim the submission before the task yields
        status.set(SubmissionStatus::Submitting);

        let store = store.clone();
        spawn_local(async move {
            let advance = |next: SubmissionStatus| {
                status.update(|current| {
                    if current.can_advance_to(next) {
                        *current = next;
                    }
                })
            };

            if let Err(e) = submit(&store, &snapshot, advance).await {
                field_error.set(Some((e.field(), e.to_string())));
            }
        });
    };

    let view_state = Memo::new(move |_| WaitlistView::from(status.get()));

    view! {
        <WaitlistMeta />

        <div class="min-h-screen bg-slate-950 text-white">
            // Hero Section
            <div class="relative overflow-hidden" node_ref=hero_ref>
                <div class="absolute inset-0 bg-grid mask-gradient" aria-hidden="true"></div>

                <div
                    class="reveal max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-32 pb-24 relative"
                    class:revealed=move || hero_visible.get()
                >
                    <div class="text-center max-w-4xl mx-auto">
                        <div class="reveal inline-block" class:revealed=move || hero_visible.get() style=delay(200)>
                            <span class="waitlist-pill mb-8">
                                <span class="text-primary-400">"New"</span>
                                <Icon name=icons::CHEVRON_RIGHT class="h-4 w-4 mx-1" />
                                <span class="text-slate-400">"AI-powered lead qualification"</span>
                            </span>
                        </div>

                        <h1
                            class="reveal text-5xl md:text-6xl font-bold mb-8"
                            class:revealed=move || hero_visible.get()
                            style=delay(300)
                        >
                            <span class="text-gradient">"AI-Powered Real Estate"</span>
                            <span class="block mt-2">"Lead Nurturing"</span>
                        </h1>

                        <p
                            class="reveal text-xl text-slate-400 mb-8 max-w-2xl mx-auto"
                            class:revealed=move || hero_visible.get()
                            style=delay(400)
                        >
                            "Transform cold emails into hot deals with intelligent automation. "
                            "Focus only on sales-ready prospects while our AI handles the rest."
                        </p>

                        <div class="reveal mb-12" class:revealed=move || hero_visible.get() style=delay(500)>
                            <button
                                class="waitlist-btn-primary group"
                                on:click=move |_| scroll_to_id(WAITLIST_FORM_ID)
                            >
                                <span>"Join the Waitlist"</span>
                                <Icon
                                    name=icons::ARROW_RIGHT
                                    class="ml-2 h-5 w-5 group-hover:translate-x-1 transition-transform duration-200"
                                />
                            </button>
                        </div>

                        <span class="waitlist-pill mb-8">
                            <span class="text-purple-700">
                                "Join the waitlist and Get 7-days free-trial & 30 % off for life on launch"
                            </span>
                        </span>

                        <div
                            class="reveal reveal-scale relative max-w-sm mx-auto mb-12 overflow-hidden rounded-full bg-slate-800"
                            class:revealed=move || hero_visible.get()
                            style=delay(600)
                            role="progressbar"
                            aria-valuenow=CLAIMED_PERCENT.to_string()
                            aria-valuemin="0"
                            aria-valuemax="100"
                        >
                            <div
                                class="h-2 bg-gradient-to-r from-primary-500 to-secondary-500"
                                style=format!("width: {}%", CLAIMED_PERCENT)
                            ></div>
                            <div class="absolute inset-0 animate-shimmer"></div>
                        </div>

                        <p
                            class="reveal reveal-fade text-sm text-slate-500"
                            class:revealed=move || hero_visible.get()
                            style=delay(700)
                        >
                            {format!("{}% of waitlist spots claimed", CLAIMED_PERCENT)}
                        </p>
                    </div>
                </div>
            </div>

            // Features Grid
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24" node_ref=features_ref>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <FeatureCard
                                    icon=feature.icon
                                    title=feature.title
                                    description=feature.description
                                    revealed=features_visible
                                    delay_ms={index as u32 * 100}
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            // Form Section
            <div
                id=WAITLIST_FORM_ID
                class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24"
                node_ref=form_ref
            >
                <div
                    class="reveal relative rounded-3xl overflow-hidden"
                    class:revealed=move || form_visible.get()
                >
                    <div class="absolute inset-0 bg-gradient-to-b from-slate-900 to-slate-900/50" aria-hidden="true"></div>
                    <div class="absolute inset-0 bg-grid opacity-10" aria-hidden="true"></div>

                    <div class="relative md:flex">
                        <div class="md:w-1/2 p-8 lg:p-12">
                            <div class="reveal" class:revealed=move || form_visible.get() style=delay(200)>
                                <h2 class="text-3xl font-bold mb-2 text-gradient">"Join the Waitlist"</h2>
                            </div>

                            {move || match view_state.get() {
                                WaitlistView::ShowingConfirmation => view! { <Confirmation /> }.into_any(),
                                WaitlistView::ShowingForm { busy } => view! {
                                    <form on:submit=on_submit.clone() class="space-y-6">
                                        <WaitlistField
                                            form=form
                                            field=FormField::FullName
                                            errors=field_error
                                            label="Full Name *"
                                            autocomplete="name"
                                        />
                                        <WaitlistField
                                            form=form
                                            field=FormField::Email
                                            errors=field_error
                                            label="Business Email *"
                                            input_type="email"
                                            autocomplete="email"
                                        />
                                        <WaitlistField
                                            form=form
                                            field=FormField::Company
                                            errors=field_error
                                            label="Company/Agency Name *"
                                            autocomplete="organization"
                                        />
                                        <WaitlistField
                                            form=form
                                            field=FormField::MonthlyLeads
                                            errors=field_error
                                            label="How many leads you manage monthly *"
                                            input_type="number"
                                        />
                                        <SubmitButton busy=busy text="Join the Waitlist" />
                                    </form>
                                }.into_any(),
                            }}
                        </div>

                        <SidePanel />
                    </div>
                </div>
            </div>

            <WaitlistStyles />
        </div>
    }
}

/// Labelled form input bound to one waitlist field
#[component]
fn WaitlistField(
    form: RwSignal<WaitlistForm>,
    field: FormField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "off")] autocomplete: &'static str,
    /// Pending submission error; shown under the input it belongs to, cleared on edit
    errors: RwSignal<Option<(FormField, String)>>,
) -> impl IntoView {
    let input_id = format!("waitlist-{}", field.as_str());
    let numeric = input_type == "number";

    view! {
        <div>
            <label for=input_id.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=input_id
                name=field.as_str()
                required=true
                autocomplete=autocomplete
                min=numeric.then_some("0")
                step=numeric.then_some("1")
                class="waitlist-input"
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| {
                    form.update(|f| f.set_field(field, event_target_value(&ev)));
                    if errors.with_untracked(|e| matches!(e, Some((f, _)) if *f == field)) {
                        errors.set(None);
                    }
                }
            />
            {move || {
                errors.get().filter(|(f, _)| *f == field).map(|(_, message)| {
                    view! { <p class="mt-1 text-sm text-red-400" role="alert">{message}</p> }
                })
            }}
        </div>
    }
}

/// Feature card revealed with the features grid
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    revealed: Memo<bool>,
    delay_ms: u32,
) -> impl IntoView {
    view! {
        <div
            class="reveal waitlist-card group relative p-8 rounded-2xl"
            class:revealed=move || revealed.get()
            style=delay(delay_ms)
        >
            <Icon name=icon class="h-12 w-12 mb-6" />
            <h3 class="text-xl font-semibold mb-3 text-white">{title}</h3>
            <p class="text-slate-400 group-hover:text-slate-300 transition-colors duration-300">
                {description}
            </p>
        </div>
    }
}

/// Confirmation shown once the submission settled
#[component]
fn Confirmation() -> impl IntoView {
    view! {
        <div class="text-center py-8 waitlist-pop-in" role="status">
            <Icon name=icons::CHECK_CIRCLE class="h-16 w-16 mx-auto mb-4" />
            <h3 class="text-2xl font-bold mb-2">"You're on the list!"</h3>
            <p class="text-slate-400">"We'll notify you when we launch."</p>
        </div>
    }
}

/// Highlights and social proof next to the form
#[component]
fn SidePanel() -> impl IntoView {
    view! {
        <div class="md:w-1/2 p-8 lg:p-12 bg-slate-900/50">
            <div class="space-y-6">
                <Highlight
                    icon=icons::BOT
                    title="AI-Powered Conversations"
                    description="Our AI engages with leads naturally, qualifying them based on their responses and behavior."
                />
                <Highlight
                    icon=icons::ZAP
                    title="Instant Lead Scoring"
                    description="Get real-time insights into lead quality and receive notifications for hot prospects."
                />
            </div>

            <div class="mt-12 p-6 rounded-xl waitlist-panel">
                <div class="text-center">
                    <p class="text-3xl font-bold text-gradient mb-2">"50+"</p>
                    <p class="text-slate-400">"Agents already on the waitlist"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Highlight(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl waitlist-panel">
            <div class="flex items-start space-x-4">
                <div class="flex-shrink-0">
                    <div class="w-12 h-12 rounded-full bg-primary-500/10 flex items-center justify-center">
                        <Icon name=icon class="h-6 w-6" />
                    </div>
                </div>
                <div>
                    <h3 class="text-lg font-semibold mb-2 text-gradient">{title}</h3>
                    <p class="text-slate-400">{description}</p>
                </div>
            </div>
        </div>
    }
}

/// SEO meta tags using leptos_meta
#[component]
fn WaitlistMeta() -> impl IntoView {
    view! {
        <Title text="AI-Powered Real Estate Lead Nurturing - Join the Waitlist" />
        <Meta
            name="description"
            content="Transform cold emails into hot deals with intelligent automation. Join the waitlist for a 7-day free trial and 30% off for life."
        />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="AI-Powered Real Estate Lead Nurturing" />
        <Meta
            property="og:description"
            content="Focus only on sales-ready prospects while AI qualifies and scores the rest."
        />
    }
}

/// Reveal transitions and page-specific component styles
#[component]
fn WaitlistStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .reveal {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.8s ease-out, transform 0.8s ease-out;
            }
            .reveal.reveal-scale { transform: scale(0.95); }
            .reveal.reveal-fade { transform: none; }
            .reveal.revealed {
                opacity: 1;
                transform: none;
            }

            .waitlist-pop-in { animation: waitlist-pop-in 0.4s ease-out both; }
            @keyframes waitlist-pop-in {
                from { opacity: 0; transform: scale(0.95); }
                to { opacity: 1; transform: scale(1); }
            }

            .waitlist-pill {
                display: inline-flex;
                align-items: center;
                padding: 0.375rem 1rem;
                border-radius: 9999px;
                font-size: 0.875rem;
                font-weight: 500;
                border: 1px solid #1e293b;
            }

            .waitlist-btn-primary,
            .waitlist-btn-submit {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                border-radius: 0.75rem;
                font-weight: 600;
                color: white;
                background-image: linear-gradient(to right, #0ea5e9, #8b5cf6);
                transition: all 0.3s;
                cursor: pointer;
            }
            .waitlist-btn-primary {
                padding: 1rem 2rem;
                font-size: 1.125rem;
            }
            .waitlist-btn-primary:hover { transform: scale(1.05); }
            .waitlist-btn-submit {
                width: 100%;
                padding: 1rem 1.5rem;
            }
            .waitlist-btn-submit:disabled {
                opacity: 0.5;
                cursor: not-allowed;
            }

            .waitlist-input {
                width: 100%;
                padding: 0.75rem 1rem;
                border-radius: 0.75rem;
                border: 1px solid #1e293b;
                background-color: rgba(15, 23, 42, 0.5);
                color: white;
            }

            .waitlist-card,
            .waitlist-panel {
                border: 1px solid #1e293b;
                background-image: linear-gradient(to bottom, #0f172a, rgba(15, 23, 42, 0.5));
            }

            .text-gradient {
                background-image: linear-gradient(to right, #38bdf8, #a78bfa);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }
            "#
        </style>
    }
}
