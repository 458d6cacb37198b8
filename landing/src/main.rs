// FleetOS landing page - browser entry point (trunk serve / trunk build)

use fleetos_landing::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    fleetos_landing::console::print_banner();
    leptos::mount::mount_to_body(|| view! { <App /> });
}
