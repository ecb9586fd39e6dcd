//! In-memory backend implementing [`Gateway`] with the REST API's semantics

use std::sync::Arc;

use parking_lot::Mutex;
use reqwest::StatusCode;
use tokio::sync::Notify;

use palletctl::api::{ApiResult, Gateway, ListQuery, Page, PackScope, RequestError};
use palletctl::types::{
    NewPallet, OverviewRow, Pack, PackPayload, Pallet, PalletUpdate, RecordId,
};
use serde_json::json;

#[derive(Default)]
struct Store {
    next_id: RecordId,
    pallets: Vec<Pallet>,
    /// Packs with the pallet they belong to
    packs: Vec<(Option<RecordId>, Pack)>,
    overview: Vec<OverviewRow>,
    offline: bool,
    fail_writes: Option<String>,
    /// When set, health checks wait for a notification
    health_gate: Option<Arc<Notify>>,
}

impl Store {
    fn next_id(&mut self) -> RecordId {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory backend; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryGateway {
    store: Arc<Mutex<Store>>,
}

fn not_found(what: &str) -> RequestError {
    RequestError::Status {
        status: StatusCode::NOT_FOUND,
        message: format!("{what} not found"),
    }
}

/// Apply `limit` / `offset` the way the backend does
fn paged<T>(all: Vec<T>, query: &ListQuery) -> Page<T> {
    let total = all.len() as u64;
    let items = all
        .into_iter()
        .skip(query.offset as usize)
        .take(query.limit as usize)
        .collect();
    Page { items, total }
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.store.lock().offline = offline;
    }

    /// Make every mutation fail with `message`
    pub fn fail_writes(&self, message: Option<&str>) {
        self.store.lock().fail_writes = message.map(str::to_string);
    }

    /// Hold every health check until the returned handle is notified
    pub fn hold_health(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.store.lock().health_gate = Some(Arc::clone(&gate));
        gate
    }

    pub fn seed_pallet(&self, seq_pallet: f64, qr_code: &str) -> Pallet {
        let mut store = self.store.lock();
        let pallet = Pallet {
            id: store.next_id(),
            qr_code: Some(qr_code.to_string()),
            completed: false,
            num_doca: None,
            seq_pallet: Some(seq_pallet),
            station: None,
            created_at: None,
            updated_at: None,
        };
        store.pallets.push(pallet.clone());
        pallet
    }

    pub fn seed_orphan_pack(&self, qr_code: &str) -> Pack {
        let mut store = self.store.lock();
        let pack = Pack {
            id: store.next_id(),
            qr_code: Some(qr_code.to_string()),
            seq_pallet: None,
            orig: None,
            seq_pack: None,
            lastpack: false,
            pospallet: None,
            robot_num: None,
        };
        store.packs.push((None, pack.clone()));
        pack
    }

    pub fn seed_overview(&self, rows: Vec<OverviewRow>) {
        self.store.lock().overview = rows;
    }

    pub fn pallet_count(&self) -> usize {
        self.store.lock().pallets.len()
    }

    pub fn packs_of(&self, pallet: RecordId) -> Vec<Pack> {
        self.store
            .lock()
            .packs
            .iter()
            .filter(|(parent, _)| *parent == Some(pallet))
            .map(|(_, pack)| pack.clone())
            .collect()
    }

    fn check_online(&self) -> ApiResult<()> {
        if self.store.lock().offline {
            return Err(RequestError::Timeout);
        }
        Ok(())
    }

    fn check_write(&self) -> ApiResult<()> {
        self.check_online()?;
        match &self.store.lock().fail_writes {
            Some(message) => Err(RequestError::Status {
                status: StatusCode::BAD_REQUEST,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn matches_search(pallet: &Pallet, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    pallet
        .qr_code
        .as_deref()
        .is_some_and(|qr| qr.to_lowercase().contains(&needle))
        || pallet.id.to_string() == search
}

impl Gateway for MemoryGateway {
    async fn health(&self) -> ApiResult<()> {
        let gate = self.store.lock().health_gate.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.check_online()
    }

    async fn list_pallets(&self, query: &ListQuery) -> ApiResult<Page<Pallet>> {
        self.check_online()?;
        let store = self.store.lock();
        let matching: Vec<Pallet> = store
            .pallets
            .iter()
            .filter(|p| matches_search(p, &query.search))
            .cloned()
            .collect();
        Ok(paged(matching, query))
    }

    async fn get_pallet(&self, id: RecordId) -> ApiResult<Pallet> {
        self.check_online()?;
        let store = self.store.lock();
        store
            .pallets
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found("Pallet"))
    }

    async fn create_pallet(&self, payload: &NewPallet) -> ApiResult<Pallet> {
        self.check_write()?;
        let mut store = self.store.lock();
        let pallet = Pallet {
            id: store.next_id(),
            qr_code: None,
            completed: false,
            num_doca: None,
            seq_pallet: Some(payload.seq_pallet),
            station: None,
            created_at: Some("2024-01-15T10:00:00Z".to_string()),
            updated_at: None,
        };
        store.pallets.push(pallet.clone());
        Ok(pallet)
    }

    async fn update_pallet(&self, id: RecordId, payload: &PalletUpdate) -> ApiResult<Pallet> {
        self.check_write()?;
        let mut store = self.store.lock();
        let pallet = store
            .pallets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Pallet"))?;
        pallet.qr_code = payload.qr_code.clone();
        pallet.completed = payload.completed;
        pallet.num_doca = payload.num_doca;
        pallet.seq_pallet = payload.seq_pallet;
        pallet.station = payload.station;
        Ok(pallet.clone())
    }

    async fn delete_pallet(&self, id: RecordId) -> ApiResult<()> {
        self.check_write()?;
        let mut store = self.store.lock();
        let before = store.pallets.len();
        store.pallets.retain(|p| p.id != id);
        if store.pallets.len() == before {
            return Err(not_found("Pallet"));
        }
        store.packs.retain(|(parent, _)| *parent != Some(id));
        Ok(())
    }

    async fn list_packs(&self, scope: PackScope, query: &ListQuery) -> ApiResult<Page<Pack>> {
        self.check_online()?;
        let store = self.store.lock();
        let parent = match scope {
            PackScope::Pallet(id) => {
                if !store.pallets.iter().any(|p| p.id == id) {
                    return Err(not_found("Pallet"));
                }
                Some(id)
            }
            PackScope::Orphans => None,
        };
        let packs: Vec<Pack> = store
            .packs
            .iter()
            .filter(|(p, _)| *p == parent)
            .map(|(_, pack)| pack.clone())
            .collect();
        Ok(paged(packs, query))
    }

    async fn create_pack(&self, scope: PackScope, payload: &PackPayload) -> ApiResult<Pack> {
        self.check_write()?;
        let mut store = self.store.lock();
        let (parent, seq_pallet) = match scope {
            PackScope::Pallet(id) => {
                let pallet = store
                    .pallets
                    .iter()
                    .find(|p| p.id == id)
                    .ok_or_else(|| not_found("Pallet"))?;
                (Some(id), pallet.seq_pallet)
            }
            PackScope::Orphans => (None, None),
        };
        let pack = Pack {
            id: store.next_id(),
            qr_code: payload.qr_code.clone(),
            seq_pallet,
            orig: payload.orig,
            seq_pack: payload.seq_pack,
            lastpack: payload.lastpack,
            pospallet: payload.pospallet,
            robot_num: payload.robot_num,
        };
        store.packs.push((parent, pack.clone()));
        Ok(pack)
    }

    async fn update_pack(&self, id: RecordId, payload: &PackPayload) -> ApiResult<Pack> {
        self.check_write()?;
        let mut store = self.store.lock();
        let (_, pack) = store
            .packs
            .iter_mut()
            .find(|(_, p)| p.id == id)
            .ok_or_else(|| not_found("Pack"))?;
        pack.qr_code = payload.qr_code.clone();
        pack.orig = payload.orig;
        pack.seq_pack = payload.seq_pack;
        pack.lastpack = payload.lastpack;
        pack.pospallet = payload.pospallet;
        pack.robot_num = payload.robot_num;
        Ok(pack.clone())
    }

    async fn delete_pack(&self, id: RecordId) -> ApiResult<()> {
        self.check_write()?;
        let mut store = self.store.lock();
        let before = store.packs.len();
        store.packs.retain(|(_, p)| p.id != id);
        if store.packs.len() == before {
            return Err(not_found("Pack"));
        }
        Ok(())
    }

    async fn list_overview(&self, query: &ListQuery) -> ApiResult<Page<OverviewRow>> {
        self.check_online()?;
        let store = self.store.lock();
        let rows: Vec<OverviewRow> = store
            .overview
            .iter()
            .filter(|row| {
                query.search.is_empty()
                    || json!(row).to_string().to_lowercase().contains(&query.search.to_lowercase())
            })
            .cloned()
            .collect();
        Ok(paged(rows, query))
    }
}
