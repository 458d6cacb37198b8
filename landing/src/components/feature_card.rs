use super::{icons, Icon};
use leptos::prelude::*;

/// A product feature with a checklist of selling points.
///
/// The tag badge renders only when `tag` is set. `anchor` becomes the card's
/// `id` so nav links can jump straight to it; `scroll-mt-20` keeps the card
/// clear of the fixed header.
#[component]
pub fn FeatureCard(
    icon: &'static [&'static str],
    title: &'static str,
    points: &'static [&'static str],
    #[prop(optional_no_strip)] tag: Option<&'static str>,
    #[prop(optional_no_strip)] anchor: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            id=anchor
            class="group p-6 rounded-2xl border bg-white shadow-sm hover:shadow-md transition-shadow scroll-mt-20"
        >
            <div class="flex items-center justify-between">
                <div class="h-10 w-10 grid place-items-center rounded-lg bg-blue-600 text-white">
                    <Icon paths=icon size="20" />
                </div>
                {tag.map(|t| view! {
                    <span class="feature-tag text-xs bg-emerald-100 text-emerald-700 px-2 py-1 rounded-full">{t}</span>
                })}
            </div>
            <h3 class="mt-4 text-lg font-semibold text-gray-900">{title}</h3>
            <ul class="mt-3 space-y-2">
                {points
                    .iter()
                    .map(|p| view! {
                        <li class="flex items-start gap-2 text-gray-600">
                            <Icon paths=icons::CHECK_CIRCLE size="18" class="text-emerald-600 mt-0.5 shrink-0" />
                            <span>{*p}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
