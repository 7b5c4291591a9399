//! Default data used when nothing has been persisted yet.

use crate::models::{Damage, Expense, Role, Transaction, TransactionStatus, User};
use chrono::NaiveDate;

pub fn users() -> Vec<User> {
    vec![
        User::new(1, "pemilik", "password123", Role::Owner),
        User::new(2, "pegawai", "password123", Role::Employee),
    ]
}

fn damage(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    video: &str,
    steps: &[&str],
    cost: f64,
) -> Damage {
    Damage {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        video_embed_url: video.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        estimated_cost: cost,
    }
}

pub fn damages() -> Vec<Damage> {
    vec![
        damage(
            "dmg001",
            "Layar LCD Retak",
            "Layar",
            "Kerusakan fisik pada layar LCD yang menyebabkan retakan atau garis-garis aneh.",
            "https://www.youtube.com/embed/qiJ_2-8Tf7w",
            &[
                "Buka casing belakang dengan hati-hati.",
                "Lepaskan konektor baterai untuk keamanan.",
                "Panaskan pinggiran layar untuk melunakkan perekat.",
                "Gunakan alat pembuka tipis untuk memisahkan layar dari frame.",
                "Bersihkan sisa perekat lama.",
                "Pasang layar baru dan sambungkan fleksibelnya.",
                "Pasang kembali baterai dan casing.",
            ],
            850000.0,
        ),
        damage(
            "dmg002",
            "Baterai Kembung",
            "Baterai",
            "Baterai mengalami pembengkakan yang bisa mendorong casing belakang.",
            "https://www.youtube.com/embed/zEqyR4D3-3w",
            &[
                "Matikan perangkat.",
                "Buka casing belakang.",
                "Lepaskan konektor baterai.",
                "Keluarkan baterai lama dengan hati-hati, jangan menusuknya.",
                "Pasang baterai baru.",
                "Sambungkan konektor dan pasang kembali casing.",
            ],
            450000.0,
        ),
        damage(
            "dmg003",
            "Port Charger Longgar",
            "Komponen",
            "Konektor charger tidak terhubung dengan baik, pengisian daya sering terputus.",
            "https://www.youtube.com/embed/YXd6s-HYp3E",
            &[
                "Pastikan port bersih dari debu atau kotoran.",
                "Buka casing perangkat.",
                "Identifikasi modul port charger.",
                "Lepaskan modul lama dan ganti dengan yang baru.",
                "Periksa apakah solderan perlu diperbaiki (jika bukan modul).",
                "Rakit kembali perangkat.",
            ],
            250000.0,
        ),
        damage(
            "dmg004",
            "Tombol Power Tidak Berfungsi",
            "Komponen",
            "Tombol power tidak merespon saat ditekan.",
            "https://www.youtube.com/embed/5N7uIIA6S2c",
            &[
                "Buka casing perangkat.",
                "Periksa fleksibel tombol power, pastikan tidak sobek atau terlepas.",
                "Bersihkan area kontak tombol.",
                "Ganti set fleksibel tombol jika rusak.",
                "Rakit kembali dan tes fungsi.",
            ],
            180000.0,
        ),
        damage(
            "dmg005",
            "Kerusakan Speaker Earpiece",
            "Audio",
            "Suara tidak terdengar saat melakukan panggilan telepon.",
            "https://www.youtube.com/embed/0T0i1D-S2pY",
            &[
                "Buka perangkat dan akses bagian atas motherboard.",
                "Lepaskan modul speaker earpiece yang lama.",
                "Bersihkan grill speaker dari debu.",
                "Pasang speaker earpiece yang baru.",
                "Rakit kembali perangkat.",
            ],
            200000.0,
        ),
    ]
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: &str,
    name: &str,
    phone: &str,
    damage_id: &str,
    cost: f64,
    entry: NaiveDate,
    pickup: Option<NaiveDate>,
    status: TransactionStatus,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        customer_name: name.to_string(),
        customer_phone: phone.to_string(),
        damage_id: damage_id.to_string(),
        cost,
        entry_date: entry,
        pickup_date: pickup,
        status,
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction(
            "trx001",
            "Budi Santoso",
            "081234567890",
            "dmg001",
            850000.0,
            ymd(2023, 10, 1),
            Some(ymd(2023, 10, 3)),
            TransactionStatus::PickedUp,
        ),
        transaction(
            "trx002",
            "Ani Wijaya",
            "082345678901",
            "dmg002",
            450000.0,
            ymd(2023, 10, 2),
            Some(ymd(2023, 10, 2)),
            TransactionStatus::Completed,
        ),
        transaction(
            "trx003",
            "Citra Lestari",
            "083456789012",
            "dmg003",
            250000.0,
            ymd(2023, 10, 4),
            None,
            TransactionStatus::Pending,
        ),
    ]
}

pub fn expenses() -> Vec<Expense> {
    vec![
        Expense::new(1, "Sewa Ruko Bulan Ini", 2000000.0),
        Expense::new(2, "Pembelian Stok Sparepart", 3500000.0),
    ]
}
