use crate::components::{icons, Icon};
use crate::content::{BRAND, NAV_ITEMS};
use crate::menu::MenuToggle;
use leptos::prelude::*;

/// Fixed header with desktop links and a collapsible mobile menu.
#[component]
pub fn NavBar(
    /// Render with the mobile menu already expanded
    #[prop(optional)]
    initially_open: bool,
) -> impl IntoView {
    let menu = MenuToggle::new(initially_open);
    close_on_escape(menu);

    view! {
        <header class="fixed top-0 inset-x-0 z-50 backdrop-blur bg-white/70 border-b">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="#home" class="flex items-center gap-2">
                    <div class="h-8 w-8 rounded-lg bg-blue-600 text-white grid place-items-center">
                        <Icon paths=icons::TRUCK size="18" />
                    </div>
                    <span class="font-semibold text-gray-900">{BRAND}</span>
                </a>

                <nav class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! {
                            <a href=item.href class="text-gray-700 hover:text-blue-600 transition-colors">
                                {item.label}
                            </a>
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="inline-flex items-center gap-2 bg-blue-600 text-white px-4 py-2 rounded-lg shadow hover:bg-blue-700 transition-colors"
                    >
                        "Get Started"
                        <Icon paths=icons::ARROW_RIGHT size="16" />
                    </a>
                </nav>

                <button
                    type="button"
                    class="md:hidden p-2"
                    aria-label="Toggle menu"
                    aria-controls="mobile-menu"
                    aria-expanded=move || menu.is_open().to_string()
                    on:click=move |_| menu.toggle()
                >
                    {move || view! { <Icon paths=menu.icon() /> }}
                </button>
            </div>

            <Show when=move || menu.is_open()>
                <div id="mobile-menu" class="md:hidden border-t bg-white">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! {
                            <a
                                href=item.href
                                class="block px-4 py-3 text-gray-800 hover:bg-gray-50"
                                on:click=move |_| menu.close()
                            >
                                {item.label}
                            </a>
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="block m-4 text-center bg-blue-600 text-white px-4 py-2 rounded-lg"
                        on:click=move |_| menu.close()
                    >
                        "Get Started"
                    </a>
                </div>
            </Show>
        </header>
    }
}

#[cfg(feature = "csr")]
fn close_on_escape(menu: MenuToggle) {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            menu.close();
        }
    });
    on_cleanup(move || handle.remove());
}

// No window to listen on when rendering to a string
#[cfg(not(feature = "csr"))]
fn close_on_escape(_menu: MenuToggle) {}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::render_html;

    #[test]
    fn mobile_menu_hidden_on_first_render() {
        let html = render_html(|| view! { <NavBar /> });

        assert!(!html.contains(r#"id="mobile-menu""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"aria-label="Toggle menu""#));
    }

    #[test]
    fn open_menu_lists_every_nav_item() {
        let html = render_html(|| view! { <NavBar initially_open=true /> });

        let menu_start = html.find(r#"id="mobile-menu""#).expect("mobile menu rendered");
        let mobile = &html[menu_start..];
        for item in NAV_ITEMS {
            assert!(mobile.contains(&format!(r#"href="{}""#, item.href)), "{}", item.label);
        }
        assert!(mobile.contains("Get Started"));
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn desktop_links_render_regardless_of_menu_state() {
        for open in [false, true] {
            let html = render_html(move || view! { <NavBar initially_open=open /> });
            for item in NAV_ITEMS {
                assert!(html.contains(item.label));
            }
            assert!(html.contains(BRAND));
        }
    }
}
