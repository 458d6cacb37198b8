use crate::components::Stat;
use crate::content::{DASHBOARD_STATS, FLEET_COLUMNS, FLEET_ROWS};
use leptos::prelude::*;

/// Mock "Fleet Overview" panel shown beside the hero copy.
#[component]
pub fn DashboardPreview() -> impl IntoView {
    view! {
        <div class="p-5">
            <div class="flex items-center justify-between">
                <div class="font-semibold text-gray-900">"Fleet Overview"</div>
                <span class="text-xs bg-green-100 text-green-800 px-2 py-1 rounded-full">"Live"</span>
            </div>
            <div class="mt-4 grid sm:grid-cols-3 gap-4">
                {DASHBOARD_STATS
                    .iter()
                    .map(|s| view! {
                        <div class="bg-gray-50 rounded-lg p-4 border">
                            <Stat icon=s.icon label=s.label value=s.value />
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="mt-4 border rounded-lg overflow-hidden">
                <table class="w-full text-sm">
                    <thead class="bg-gray-100 text-gray-600">
                        <tr>
                            {FLEET_COLUMNS
                                .iter()
                                .map(|c| view! { <th class="px-4 py-2 text-left">{*c}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {FLEET_ROWS
                            .iter()
                            .map(|row| view! {
                                <tr class="odd:bg-white even:bg-gray-50">
                                    <td class="px-4 py-2">{row.vehicle}</td>
                                    <td class="px-4 py-2">{row.health}</td>
                                    <td class="px-4 py-2">{row.fuel}</td>
                                    <td class="px-4 py-2">{row.status}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::render_html;

    #[test]
    fn renders_rows_in_order() {
        let html = render_html(|| view! { <DashboardPreview /> });

        let positions: Vec<usize> = FLEET_ROWS
            .iter()
            .map(|row| html.find(row.vehicle).expect("vehicle rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<tr").count(), FLEET_ROWS.len() + 1);
    }

    #[test]
    fn renders_header_and_stat_tiles() {
        let html = render_html(|| view! { <DashboardPreview /> });

        for column in FLEET_COLUMNS {
            assert!(html.contains(column), "{column}");
        }
        for stat in DASHBOARD_STATS {
            assert!(html.contains(stat.label));
        }
        assert!(html.contains("Fleet Overview"));
    }
}
