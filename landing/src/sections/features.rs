use crate::components::FeatureCard;
use crate::content::{Feature, INVOICING_FEATURES, OPERATIONS_FEATURES};
use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-20 bg-white scroll-mt-16">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="max-w-2xl">
                    <h2 class="text-3xl font-bold text-gray-900">"One platform, two wins"</h2>
                    <p class="mt-2 text-gray-600">
                        "Cut operating waste and accelerate cash flow with connected operations and smart invoicing."
                    </p>
                </div>

                <FeatureGroup id="operations" class="mt-8" features=OPERATIONS_FEATURES />
                <FeatureGroup id="invoicing" class="mt-6" features=INVOICING_FEATURES />
            </div>
        </section>
    }
}

/// Two-column grid of cards, addressable by `id` from the nav bar.
#[component]
fn FeatureGroup(
    id: &'static str,
    class: &'static str,
    features: &'static [Feature],
) -> impl IntoView {
    view! {
        <div id=id class=format!("{} grid md:grid-cols-2 gap-6 scroll-mt-20", class)>
            {features
                .iter()
                .map(|f| view! {
                    <FeatureCard icon=f.icon title=f.title points=f.points tag=f.tag anchor=f.anchor />
                })
                .collect_view()}
        </div>
    }
}
