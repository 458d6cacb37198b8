use super::DashboardPreview;
use crate::components::{icons, Icon};
use crate::content::HERO_STATS;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="pt-28 pb-20 bg-gradient-to-br from-blue-50 via-cyan-50 to-indigo-50">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <span class="inline-flex items-center gap-2 text-xs font-medium text-blue-700 bg-blue-100 px-3 py-1 rounded-full">
                        <Icon paths=icons::SHIELD_CHECK size="14" />
                        "Built for Indian Fleets"
                    </span>
                    <h1 class="mt-4 text-4xl sm:text-5xl font-extrabold tracking-tight text-gray-900">
                        "Reduce Breakdowns, Save Fuel, Get Paid Faster"
                    </h1>
                    <p class="mt-4 text-gray-600 text-lg">
                        "A connected trucking platform that turns real vehicle data into maintenance actions "
                        "and GST-compliant invoices. All in one place."
                    </p>
                    <div class="mt-6 flex flex-col sm:flex-row gap-3">
                        <a
                            href="#contact"
                            class="inline-flex items-center justify-center gap-2 bg-blue-600 text-white px-5 py-3 rounded-lg shadow hover:bg-blue-700"
                        >
                            "Book a Demo"
                            <Icon paths=icons::ARROW_RIGHT size="18" />
                        </a>
                        <a
                            href="#features"
                            class="inline-flex items-center justify-center px-5 py-3 rounded-lg border border-gray-300 hover:border-gray-400 text-gray-800 bg-white"
                        >
                            "Explore Features"
                        </a>
                    </div>
                    <div class="mt-8 grid grid-cols-2 sm:grid-cols-4 gap-4">
                        {HERO_STATS
                            .iter()
                            .map(|s| view! {
                                <div class="bg-white rounded-lg p-4 border shadow-sm">
                                    <div class="text-sm text-gray-500">{s.label}</div>
                                    <div class="mt-1 text-xl font-bold text-gray-900">{s.value}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="relative">
                    <div class="absolute -inset-4 bg-gradient-to-tr from-blue-200/60 to-transparent rounded-3xl blur-2xl"></div>
                    <div class="relative bg-white rounded-2xl border shadow-xl overflow-hidden">
                        <DashboardPreview />
                    </div>
                </div>
            </div>
        </section>
    }
}
