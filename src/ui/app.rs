use dioxus::prelude::*;

use crate::config::PortalConfig;
use crate::state::labels;
use crate::state::notice::Notice;
use crate::state::plans::{self, PlanRow};
use crate::state::table_state::CellUpdate;
use crate::ui::actions;
use crate::ui::data_table::DataTable;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let config = try_use_context::<PortalConfig>().unwrap_or_default();
    let initial = use_hook(|| actions::load_initial_plans(&config));

    let plan_rows = use_signal(|| initial.rows.clone());
    let error_message = use_signal(|| initial.error.clone());
    let notice = use_signal(Notice::default);

    let app_title = labels::tr("app.title");
    let page_title = labels::tr("page.plans.title");

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            header { class: "page-header",
                h1 { "{app_title}" }
            }
            section { class: "card", id: "plans-card",
                div { class: "card-header",
                    h2 { "{page_title}" }
                    if let Some(text) = notice.read().text() {
                        span { class: "save-success", id: "update-notice", "\u{2714} {text}" }
                    }
                }
                if let Some(err) = error_message.read().as_ref() {
                    p { class: "error-message", "{err}" }
                }
                DataTable {
                    columns: plans::plan_columns(),
                    data: plan_rows,
                    on_update: move |update: CellUpdate<PlanRow>| {
                        actions::apply_plan_update(plan_rows, notice, update);
                    },
                }
            }
        }
    }
}
