use dioxus::prelude::*;
use std::time::Duration;

use crate::config::PortalConfig;
use crate::io::dataset;
use crate::state::labels;
use crate::state::notice::Notice;
use crate::state::plans::{self, PlanRow};
use crate::state::table_state::CellUpdate;

const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Rows the payments page starts with, plus a message when loading fell back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitialPlans {
    pub rows: Vec<PlanRow>,
    pub error: Option<String>,
}

pub fn load_initial_plans(config: &PortalConfig) -> InitialPlans {
    let mut error = None;

    if let Some(path) = config.plans_file.as_ref() {
        match dataset::load_rows::<PlanRow>(path) {
            Ok(rows) => return InitialPlans { rows, error: None },
            Err(err) => {
                tracing::warn!("could not load {}: {err}", path.display());
                error = Some(labels::fill("error.dataset", &[("erro", err.to_string().as_str())]));
            }
        }
    }

    match plans::default_plans() {
        Ok(rows) => InitialPlans { rows, error },
        Err(err) => {
            tracing::error!("bundled plans are invalid: {err}");
            InitialPlans {
                rows: Vec::new(),
                error: Some(labels::fill("error.dataset", &[("erro", err.to_string().as_str())])),
            }
        }
    }
}

/// Writes a committed table edit into the page's rows and flashes a notice.
pub fn apply_plan_update(
    mut rows: Signal<Vec<PlanRow>>,
    mut notice: Signal<Notice>,
    update: CellUpdate<PlanRow>,
) {
    let changed = rows.with_mut(|rows| plans::apply_update(rows, &update));
    if !changed {
        return;
    }

    tracing::info!(
        company = %update.row.nome,
        field = %update.field,
        value = %update.value,
        "plan updated"
    );
    let serial = notice.with_mut(|notice| {
        notice.show(labels::fill(
            "page.plans.updated",
            &[("nome", update.row.nome.as_str())],
        ))
    });
    spawn(async move {
        tokio::time::sleep(NOTICE_DURATION).await;
        notice.with_mut(|notice| notice.expire(serial));
    });
}
