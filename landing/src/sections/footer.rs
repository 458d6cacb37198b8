use crate::components::{icons, Icon};
use crate::content::BRAND;
use leptos::prelude::*;

#[component]
pub fn Footer(
    /// Year shown in the copyright line
    year: i32,
) -> impl IntoView {
    let copyright = format!("© {year} {BRAND}. All rights reserved.");
    view! {
        <footer class="py-10 bg-white border-t">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-2 text-gray-700">
                    <div class="h-8 w-8 rounded-lg bg-blue-600 text-white grid place-items-center">
                        <Icon paths=icons::TRUCK size="18" />
                    </div>
                    <span class="font-semibold">{BRAND}</span>
                </div>
                <p class="text-sm text-gray-500">{copyright}</p>
                <div class="flex items-center gap-4 text-sm">
                    <a href="#features" class="text-gray-600 hover:text-blue-600">"Features"</a>
                    <a href="#contact" class="text-gray-600 hover:text-blue-600">"Contact"</a>
                    <a href="#" class="text-gray-600 hover:text-blue-600">"Privacy"</a>
                </div>
            </div>
        </footer>
    }
}

/// Calendar year from the browser clock.
#[cfg(feature = "csr")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Calendar year (UTC) from the system clock.
#[cfg(not(feature = "csr"))]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}
