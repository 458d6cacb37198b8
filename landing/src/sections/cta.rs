use crate::components::{icons, Icon};
use crate::content::{CTA_BENEFITS, IMPROVEMENT_OPTIONS};
use leptos::prelude::*;

const INPUT_CLASS: &str =
    "mt-1 w-full rounded-lg border px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Demo request section. The form is presentational only: the button is
/// `type="button"` and submission (e.g. Enter in a field) is swallowed.
#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-gradient-to-br from-indigo-600 to-blue-600 text-white scroll-mt-16">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 gap-10 items-center">
                <div>
                    <h3 class="text-3xl font-bold">"Ready to modernize your fleet?"</h3>
                    <p class="mt-3 text-white/80">
                        "See how small fleet owners reduce fuel waste, prevent breakdowns, "
                        "and accelerate order-to-cash in weeks."
                    </p>
                    <ul class="mt-6 grid sm:grid-cols-2 gap-3 text-sm">
                        {CTA_BENEFITS
                            .iter()
                            .map(|b| view! {
                                <li class="flex items-center gap-2">
                                    <Icon paths=icons::CHECK_CIRCLE size="18" />
                                    {*b}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
                <form
                    class="bg-white text-gray-900 rounded-2xl p-6 shadow-xl"
                    on:submit=|ev| ev.prevent_default()
                >
                    <div class="grid sm:grid-cols-2 gap-4">
                        <div>
                            <label for="lead-name" class="text-sm text-gray-600">"Full name"</label>
                            <input id="lead-name" name="name" class=INPUT_CLASS placeholder="Ravi Kumar" />
                        </div>
                        <div>
                            <label for="lead-company" class="text-sm text-gray-600">"Company"</label>
                            <input id="lead-company" name="company" class=INPUT_CLASS placeholder="RK Logistics" />
                        </div>
                        <div class="sm:col-span-2">
                            <label for="lead-email" class="text-sm text-gray-600">"Email"</label>
                            <input
                                id="lead-email"
                                name="email"
                                type="email"
                                class=INPUT_CLASS
                                placeholder="you@company.com"
                            />
                        </div>
                        <div class="sm:col-span-2">
                            <label for="lead-goal" class="text-sm text-gray-600">"What do you want to improve?"</label>
                            <select id="lead-goal" name="goal" class=INPUT_CLASS>
                                {IMPROVEMENT_OPTIONS
                                    .iter()
                                    .map(|o| view! { <option>{*o}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="sm:col-span-2">
                            <button
                                type="button"
                                class="w-full inline-flex items-center justify-center gap-2 bg-blue-600 text-white px-5 py-3 rounded-lg shadow hover:bg-blue-700"
                            >
                                "Request demo"
                                <Icon paths=icons::ARROW_RIGHT size="18" />
                            </button>
                            <p class="mt-2 text-xs text-gray-500">"By submitting you agree to be contacted."</p>
                        </div>
                    </div>
                </form>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::render_html;

    #[test]
    fn form_is_inert() {
        let html = render_html(|| view! { <Cta /> });

        assert!(html.contains("<form"));
        assert!(!html.contains("action="));
        assert!(!html.contains(r#"type="submit""#));
        assert!(html.contains(r#"type="button""#));
    }

    #[test]
    fn labels_point_at_their_fields() {
        let html = render_html(|| view! { <Cta /> });

        for id in ["lead-name", "lead-company", "lead-email", "lead-goal"] {
            assert!(html.contains(&format!(r#"for="{id}""#)), "label for {id}");
            assert!(html.contains(&format!(r#"id="{id}""#)), "field {id}");
        }
    }

    #[test]
    fn offers_every_improvement_option() {
        let html = render_html(|| view! { <Cta /> });
        assert_eq!(html.matches("<option").count(), IMPROVEMENT_OPTIONS.len());
        assert!(html.contains("Fuel efficiency"));
    }
}
