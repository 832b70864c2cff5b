//! Company plans and billing types, the data behind the payments page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::io::dataset::{self, DatasetError};
use crate::state::column::{ChoiceOption, Column};
use crate::state::data_model::TableRow;
use crate::state::table_state::CellUpdate;

pub const FIELD_NAME: &str = "nome";
pub const FIELD_PLAN: &str = "plano";
pub const FIELD_BILLING: &str = "tipoFaturamento";

pub const PLAN_CHOICES: &[&str] = &["Básico", "Completo", "Premium"];
pub const BILLING_CHOICES: &[&str] = &["PIX", "Boleto", "Cartão de Crédito", "Débito Automático"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRow {
    pub nome: String,
    pub plano: String,
    pub tipo_faturamento: String,
}

impl PlanRow {
    pub fn new(nome: impl Into<String>, plano: impl Into<String>, tipo_faturamento: impl Into<String>) -> Self {
        Self {
            nome: nome.into(),
            plano: plano.into(),
            tipo_faturamento: tipo_faturamento.into(),
        }
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            FIELD_NAME => Some(&mut self.nome),
            FIELD_PLAN => Some(&mut self.plano),
            FIELD_BILLING => Some(&mut self.tipo_faturamento),
            _ => None,
        }
    }
}

impl TableRow for PlanRow {
    fn cell(&self, key: &str) -> Option<Value> {
        let value = match key {
            FIELD_NAME => &self.nome,
            FIELD_PLAN => &self.plano,
            FIELD_BILLING => &self.tipo_faturamento,
            _ => return None,
        };
        Some(Value::String(value.clone()))
    }

    fn display_name(&self) -> Option<String> {
        (!self.nome.is_empty()).then(|| self.nome.clone())
    }
}

pub fn plan_columns() -> Vec<Column<PlanRow>> {
    vec![
        Column::new(FIELD_NAME, "Empresa").sortable().filterable(),
        Column::new(FIELD_PLAN, "Plano")
            .editable()
            .edit_title("Plano")
            .choices(PLAN_CHOICES.iter().copied().map(ChoiceOption::plain).collect()),
        Column::new(FIELD_BILLING, "Tipo de Faturamento")
            .editable()
            .choices(BILLING_CHOICES.iter().copied().map(ChoiceOption::plain).collect()),
    ]
}

/// The bundled mock companies.
pub fn default_plans() -> Result<Vec<PlanRow>, DatasetError> {
    dataset::parse_rows(include_str!("../../assets/data/planos.json"))
}

/// Writes an update into every row carrying the same company name.
///
/// Rows are matched by name, so two companies sharing a name both change.
pub fn apply_update(rows: &mut [PlanRow], update: &CellUpdate<PlanRow>) -> bool {
    let mut changed = false;
    for row in rows.iter_mut().filter(|row| row.nome == update.row.nome) {
        let Some(slot) = row.field_mut(&update.field) else {
            tracing::warn!("ignoring update for unknown field '{}'", update.field);
            return false;
        };
        if *slot != update.value {
            *slot = update.value.clone();
            changed = true;
        }
    }
    changed
}
