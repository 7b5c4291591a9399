use crate::utils::date::optional_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "Dalam Perbaikan")]
    Pending,
    #[serde(rename = "Selesai")]
    Completed,
    #[serde(rename = "Sudah Diambil")]
    PickedUp,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Pending,
        TransactionStatus::Completed,
        TransactionStatus::PickedUp,
    ];

    /// Label shown to shop staff (and stored in JSON).
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Dalam Perbaikan",
            TransactionStatus::Completed => "Selesai",
            TransactionStatus::PickedUp => "Sudah Diambil",
        }
    }

    /// Short code accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::PickedUp => "picked-up",
        }
    }

    /// Accept the short code (any case, `-`/`_` or none) or the label.
    pub fn from_code(s: &str) -> Option<Self> {
        let norm: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        match norm.as_str() {
            "pending" | "dalamperbaikan" => Some(Self::Pending),
            "completed" | "selesai" => Some(Self::Completed),
            "pickedup" | "sudahdiambil" => Some(Self::PickedUp),
            _ => None,
        }
    }
}

/// A customer repair order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub damage_id: String,
    /// Damage price at creation time; later catalog changes do not touch it.
    pub cost: f64,
    pub entry_date: NaiveDate,
    #[serde(default, with = "optional_date")]
    pub pickup_date: Option<NaiveDate>,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub customer_name: String,
    pub customer_phone: String,
    pub damage_id: String,
    pub entry_date: NaiveDate,
    pub pickup_date: Option<NaiveDate>,
}
