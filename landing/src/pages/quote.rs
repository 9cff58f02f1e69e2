//! Quote request page.
//!
//! The form is fully controlled: every keystroke goes through
//! [`QuoteFlow::update_field`]. Submitting hands the composed email to the
//! visitor's mail client, waits out a short delay, shows the confirmation
//! overlay and clears the fields a little later. Both timers are cancelled
//! if the page unmounts first.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use loadmovers_core::content::{
    COMPANY_NAME, COMPANY_SUFFIX, NEXT_STEPS, QUOTE_LEAD, QUOTE_TITLE, SUBMIT_FAILED_ALERT,
    SUCCESS_MESSAGE, SUCCESS_TITLE,
};
use loadmovers_core::{
    MailDraft, QuoteField, QuoteFlow, Scheduler, ServiceType, SiteConfig, SiteError,
    SubmissionPhase, SubmissionTimeline, TimedStep,
};
use wasm_bindgen::JsValue;

use crate::components::{
    ICON_CALENDAR, ICON_CHEVRON_DOWN, ICON_CHEVRON_LEFT, Icon, Logo, LogoSize,
};
use crate::sections::{ContactList, ContactTone, Footer};

const INPUT: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary focus:border-transparent transition-smooth bg-white text-gray-900 placeholder-gray-400";

/// `setTimeout`-backed scheduler for one page instance. Fired steps are
/// applied to `flow`, which may schedule the next one.
#[derive(Clone)]
struct BrowserScheduler {
    flow: RwSignal<QuoteFlow>,
    timeline: SubmissionTimeline,
    pending: Arc<Mutex<Vec<TimeoutHandle>>>,
}

impl BrowserScheduler {
    fn new(flow: RwSignal<QuoteFlow>, timeline: SubmissionTimeline) -> Self {
        Self {
            flow,
            timeline,
            pending: Arc::default(),
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay_ms: u64, step: TimedStep) -> Result<(), SiteError> {
        let mut scheduler = self.clone();
        let handle = set_timeout_with_handle(
            move || {
                let (flow, timeline) = (scheduler.flow, scheduler.timeline);
                let fired = flow.try_update(|f| timeline.fire(step, f, &mut scheduler));
                if let Some(Err(e)) = fired {
                    tracing::error!(error = %e, ?step, "follow-up step not scheduled");
                }
            },
            Duration::from_millis(delay_ms),
        )
        .map_err(|e| SiteError::Scheduler(js_error_message(&e)))?;

        if let Ok(mut pending) = self.pending.lock() {
            pending.push(handle);
        }
        Ok(())
    }

    fn cancel_all(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            for handle in pending.drain(..) {
                handle.clear();
            }
        }
    }
}

fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Navigate to the `mailto:` link. Fire-and-forget: success only means the
/// browser accepted the navigation.
fn open_mail_client(draft: &MailDraft) -> Result<(), SiteError> {
    tracing::debug!(subject = %draft.subject, "handing quote request to mail client");
    window()
        .location()
        .set_href(&draft.to_mailto_uri())
        .map_err(|e| SiteError::MailHandoff(js_error_message(&e)))
}

/// Inline message for a submit the core rejected. Native `required`
/// constraints catch blank controls first; this covers whitespace-only
/// values and tampered selects.
fn validation_message(err: &SiteError) -> Option<String> {
    match err {
        SiteError::MissingFields(fields) => Some(format!(
            "Please fill in: {}",
            fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
        )),
        SiteError::UnknownService(_) => Some("Please choose a service from the list.".into()),
        _ => None,
    }
}

/// Today's date as `yyyy-mm-dd`, the earliest value the date picker allows.
fn today_iso() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.split('T').next().unwrap_or_default().to_string()
}

#[component]
pub fn QuotePage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let flow = RwSignal::new(QuoteFlow::default());
    let validation = RwSignal::new(None::<String>);
    let timeline = SubmissionTimeline::from(&config);
    let scheduler = BrowserScheduler::new(flow, timeline);
    let recipient = config.recipient;

    {
        let mut scheduler = scheduler.clone();
        on_cleanup(move || scheduler.cancel_all());
    }
    tracing::debug!("quote page mounted");

    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();

        let mut scheduler = scheduler.clone();
        let outcome = flow.try_update(|f| {
            timeline.submit(f, &recipient, &mut scheduler, open_mail_client)
        });
        match outcome {
            Some(Ok(())) => validation.set(None),
            Some(Err(e @ (SiteError::MailHandoff(_) | SiteError::Scheduler(_)))) => {
                tracing::error!(error = %e, "quote request failed");
                validation.set(None);
                let _ = window().alert_with_message(SUBMIT_FAILED_ALERT);
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "quote request blocked");
                validation.set(validation_message(&e));
            }
            None => {}
        }
    };

    let submitting = move || flow.with(|f| f.phase() == SubmissionPhase::Submitting);

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-950">
            <header class="bg-blue-900 text-white py-8 px-4 md:px-8">
                <div class="max-w-7xl mx-auto">
                    <a
                        href="/"
                        class="inline-flex items-center gap-2 text-white/80 hover:text-white transition-smooth mb-6"
                    >
                        <Icon path=ICON_CHEVRON_LEFT class="w-5 h-5" />
                        "Back to Home"
                    </a>
                    <div class="flex items-center gap-4 mb-6">
                        <Logo size=LogoSize::Large />
                        <div>
                            <h1 class="text-2xl md:text-3xl font-bold">{COMPANY_NAME}</h1>
                            <p class="text-sm md:text-base text-white/80">{COMPANY_SUFFIX}</p>
                        </div>
                    </div>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-3">{QUOTE_TITLE}</h2>
                    <p class="text-lg md:text-xl text-white/90">{QUOTE_LEAD}</p>
                </div>
            </header>

            <div class="max-w-7xl mx-auto px-4 md:px-8 py-8 md:py-12">
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2">
                        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-md p-6 md:p-8">
                            <form on:submit=on_submit class="space-y-8">
                                <FormSection title="Contact Information">
                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                        <TextField flow=flow field=QuoteField::FullName placeholder="John Doe" />
                                        <TextField
                                            flow=flow
                                            field=QuoteField::Phone
                                            input_type="tel"
                                            placeholder="+27 82 123 4567"
                                        />
                                    </div>
                                    <div class="mt-6">
                                        <TextField
                                            flow=flow
                                            field=QuoteField::Email
                                            input_type="email"
                                            placeholder="john@example.com"
                                        />
                                    </div>
                                </FormSection>

                                <FormSection title="Service Details">
                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                        <ServiceSelect flow=flow />
                                        <TextField
                                            flow=flow
                                            field=QuoteField::PreferredDate
                                            input_type="date"
                                            placeholder="yyyy/mm/dd"
                                            min=today_iso()
                                            icon=ICON_CALENDAR
                                        />
                                    </div>
                                </FormSection>

                                <FormSection title="Location Details">
                                    <div class="space-y-6">
                                        <TextField flow=flow field=QuoteField::PickupLocation placeholder="Full address" />
                                        <TextField flow=flow field=QuoteField::DropOffLocation placeholder="Full address" />
                                    </div>
                                </FormSection>

                                <FormSection title="Additional Details">
                                    <DetailsArea flow=flow />
                                </FormSection>

                                {move || {
                                    validation
                                        .get()
                                        .map(|message| {
                                            view! {
                                                <p class="text-sm text-red-600" role="alert">{message}</p>
                                            }
                                        })
                                }}

                                <div class="pt-4">
                                    <button
                                        type="submit"
                                        disabled=submitting
                                        class="w-full px-6 py-4 rounded-lg font-semibold text-lg transition-smooth bg-primary text-white hover:bg-primary-dark shadow-lg hover:shadow-xl disabled:opacity-60 disabled:cursor-not-allowed"
                                    >
                                        {move || if submitting() { "Submitting..." } else { "Submit Quote Request" }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>

                    <aside class="lg:col-span-1 space-y-6">
                        <div class="bg-blue-900 text-white rounded-lg shadow-md p-6">
                            <h3 class="text-xl font-bold mb-6">"Need Immediate Help?"</h3>
                            <ContactList tone=ContactTone::Compact />
                        </div>
                        <NextSteps />
                    </aside>
                </div>
            </div>

            <Show when=move || flow.with(|f| f.state().show_success)>
                <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4 animate-fade-in">
                    <div class="bg-white dark:bg-gray-800 rounded-lg shadow-xl max-w-md w-full p-8 text-center animate-slide-up">
                        <div class="text-6xl mb-4">"✅"</div>
                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">{SUCCESS_TITLE}</h3>
                        <p class="text-gray-600 dark:text-gray-300 mb-6">{SUCCESS_MESSAGE}</p>
                        <button
                            type="button"
                            class="w-full px-6 py-3 rounded-lg font-semibold bg-primary text-white hover:bg-primary-dark shadow-lg"
                            on:click=move |_| flow.update(QuoteFlow::dismiss_success)
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </Show>

            <Footer />
        </div>
    }
}

#[component]
fn FormSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-6">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
fn FieldLabel(field: QuoteField) -> impl IntoView {
    view! {
        <label for=field.name() class="block text-sm font-semibold text-gray-700 dark:text-gray-300 mb-2">
            {field.label()}
            {field.is_required().then(|| view! { <span class="text-red-500">" *"</span> })}
        </label>
    }
}

/// Single-line controlled input bound to one form field.
#[component]
fn TextField(
    flow: RwSignal<QuoteFlow>,
    field: QuoteField,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    #[prop(optional)] min: Option<String>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <FieldLabel field=field />
            <input
                type=input_type
                id=field.name()
                name=field.name()
                required=field.is_required()
                min=min
                placeholder=placeholder
                class=INPUT
                prop:value=move || flow.with(|f| f.form().get(field).to_string())
                on:input=move |ev| flow.update(|f| f.update_field(field, event_target_value(&ev)))
            />
            {icon.map(|path| {
                view! {
                    <div class="absolute right-3 bottom-3.5 pointer-events-none text-gray-400">
                        <Icon path=path class="w-5 h-5" />
                    </div>
                }
            })}
        </div>
    }
}

#[component]
fn ServiceSelect(flow: RwSignal<QuoteFlow>) -> impl IntoView {
    let field = QuoteField::ServiceType;
    view! {
        <div>
            <FieldLabel field=field />
            <div class="relative">
                <select
                    id=field.name()
                    name=field.name()
                    required=true
                    class=format!("{INPUT} appearance-none pr-10")
                    prop:value=move || flow.with(|f| f.form().get(field).to_string())
                    on:change=move |ev| {
                        flow.update(|f| f.update_field(field, event_target_value(&ev)))
                    }
                >
                    <option value="">"Select service type"</option>
                    {ServiceType::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <div class="absolute inset-y-0 right-0 flex items-center pr-3 pointer-events-none text-gray-400">
                    <Icon path=ICON_CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetailsArea(flow: RwSignal<QuoteFlow>) -> impl IntoView {
    let field = QuoteField::AdditionalDetails;
    view! {
        <textarea
            id=field.name()
            name=field.name()
            rows="6"
            class=format!("{INPUT} resize-none")
            placeholder="Describe what you need moved, approximate weight/volume, access conditions, etc."
            prop:value=move || flow.with(|f| f.form().get(field).to_string())
            on:input=move |ev| flow.update(|f| f.update_field(field, event_target_value(&ev)))
        ></textarea>
    }
}

#[component]
fn NextSteps() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-md p-6">
            <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-6">"What Happens Next?"</h3>
            <div class="space-y-4">
                {NEXT_STEPS
                    .into_iter()
                    .map(|step| {
                        view! {
                            <div class="flex items-start gap-4">
                                <div class="bg-blue-100 text-blue-600 rounded-full w-8 h-8 flex items-center justify-center font-bold flex-shrink-0">
                                    {step.number}
                                </div>
                                <p class="text-gray-700 dark:text-gray-300 pt-1">{step.text}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_labels() {
        let err = SiteError::MissingFields(vec![QuoteField::FullName, QuoteField::ServiceType]);
        assert_eq!(
            validation_message(&err).as_deref(),
            Some("Please fill in: Full Name, Type of Service")
        );
    }

    #[test]
    fn validation_message_for_unknown_service() {
        let err = SiteError::UnknownService("Piano Tuning".into());
        assert_eq!(
            validation_message(&err).as_deref(),
            Some("Please choose a service from the list.")
        );
    }

    #[test]
    fn repeated_submit_has_no_message() {
        assert_eq!(validation_message(&SiteError::SubmissionInProgress), None);
        assert_eq!(validation_message(&SiteError::AwaitingDismissal), None);
    }
}
