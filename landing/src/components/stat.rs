use super::Icon;
use leptos::prelude::*;

/// Icon tile with a label above a value.
#[component]
pub fn Stat(
    icon: &'static [&'static str],
    label: &'static str,
    value: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <div class="h-10 w-10 grid place-items-center rounded-lg bg-blue-50 text-blue-700 border border-blue-100">
                <Icon paths=icon size="18" />
            </div>
            <div>
                <div class="text-sm text-gray-500">{label}</div>
                <div class="text-xl font-semibold text-gray-900">{value}</div>
            </div>
        </div>
    }
}
