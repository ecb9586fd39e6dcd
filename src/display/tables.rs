//! Table rows for CLI list output

use tabled::Tabled;

use super::{DASH, completion_tag, num_or_dash, or_dash, overview_cells, yes_no};
use crate::types::{OverviewRow, Pack, Pallet};

/// A row in the pallet list table
#[derive(Tabled)]
pub struct PalletRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "QR")]
    pub qr_code: String,
    #[tabled(rename = "seq_pallet")]
    pub seq_pallet: String,
    #[tabled(rename = "Doca")]
    pub num_doca: String,
    #[tabled(rename = "Station")]
    pub station: String,
    #[tabled(rename = "Status")]
    pub status: &'static str,
}

impl From<&Pallet> for PalletRow {
    fn from(pallet: &Pallet) -> Self {
        Self {
            id: pallet.id,
            qr_code: pallet.qr_code.clone().unwrap_or_else(|| DASH.to_string()),
            seq_pallet: num_or_dash(pallet.seq_pallet),
            num_doca: num_or_dash(pallet.num_doca),
            station: num_or_dash(pallet.station),
            status: completion_tag(pallet.completed),
        }
    }
}

/// A row in the pack table
#[derive(Tabled)]
pub struct PackRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "QR")]
    pub qr_code: String,
    #[tabled(rename = "orig")]
    pub orig: String,
    #[tabled(rename = "seq_pack")]
    pub seq_pack: String,
    #[tabled(rename = "lastpack")]
    pub lastpack: &'static str,
    #[tabled(rename = "pospallet")]
    pub pospallet: String,
    #[tabled(rename = "robot_num")]
    pub robot_num: String,
}

impl From<&Pack> for PackRow {
    fn from(pack: &Pack) -> Self {
        Self {
            id: pack.id,
            qr_code: pack.qr_code.clone().unwrap_or_else(|| DASH.to_string()),
            orig: or_dash(pack.orig),
            seq_pack: num_or_dash(pack.seq_pack),
            lastpack: yes_no(pack.lastpack),
            pospallet: or_dash(pack.pospallet),
            robot_num: or_dash(pack.robot_num),
        }
    }
}

/// A row in the overview report table
#[derive(Tabled)]
pub struct OverviewTableRow {
    #[tabled(rename = "FECHA")]
    pub fecha: String,
    #[tabled(rename = "HORA")]
    pub hora: String,
    #[tabled(rename = "EAN")]
    pub ean: String,
    #[tabled(rename = "ORIGEM ENFARDADEIRA")]
    pub origem: String,
    #[tabled(rename = "OT")]
    pub ot: String,
    #[tabled(rename = "IDEN ROBOT")]
    pub robot: String,
    #[tabled(rename = "IDEN PALLET")]
    pub pallet: String,
    #[tabled(rename = "PALET COMPLETO")]
    pub completo: String,
    #[tabled(rename = "DESTINO MUELLE")]
    pub destino: String,
}

impl From<&OverviewRow> for OverviewTableRow {
    fn from(row: &OverviewRow) -> Self {
        let [fecha, hora, ean, origem, ot, robot, pallet, completo, destino] = overview_cells(row);
        Self {
            fecha,
            hora,
            ean,
            origem,
            ot,
            robot,
            pallet,
            completo,
            destino,
        }
    }
}
