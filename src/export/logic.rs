use crate::core::Shop;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{
    DamageExport, ExpenseExport, ExportFormat, ExportTarget, TransactionExport,
};
use crate::store::KeyValueStore;
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write one collection of `shop` to `file`. Returns the number of rows.
    pub fn export<S: KeyValueStore>(
        shop: &Shop<S>,
        format: ExportFormat,
        target: ExportTarget,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_parent(path)?;
        ensure_writable(path, force)?;

        let damages = shop.damages.list();

        match target {
            ExportTarget::Transactions => {
                let rows: Vec<TransactionExport> = shop
                    .transactions
                    .list()
                    .iter()
                    .map(|tx| TransactionExport::from_transaction(tx, damages))
                    .collect();
                Self::write(&rows, format, target, path)
            }
            ExportTarget::Damages => {
                let rows: Vec<DamageExport> = damages.iter().map(DamageExport::from).collect();
                Self::write(&rows, format, target, path)
            }
            ExportTarget::Expenses => {
                let rows: Vec<ExpenseExport> = shop
                    .expenses
                    .list()
                    .iter()
                    .map(ExpenseExport::from)
                    .collect();
                Self::write(&rows, format, target, path)
            }
        }
    }

    fn write<T: Serialize>(
        rows: &[T],
        format: ExportFormat,
        target: ExportTarget,
        path: &Path,
    ) -> AppResult<usize> {
        if rows.is_empty() {
            warning(format!("No {} to export.", target.as_str()));
        }

        match format {
            ExportFormat::Csv => export_csv(rows, path)?,
            ExportFormat::Json => export_json(rows, path)?,
        }
        Ok(rows.len())
    }
}
