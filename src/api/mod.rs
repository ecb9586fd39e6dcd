//! Remote data gateway for the pallet/pack REST backend.
//!
//! The [`Gateway`] trait is the seam between the console and the network:
//! [`ApiClient`] talks HTTP, tests plug in an in-memory backend.

pub mod client;
pub mod envelope;
pub mod error;

pub use client::ApiClient;
pub use error::RequestError;

use std::fmt;
use std::future::Future;

use serde::Serialize;

use crate::types::{
    NewPallet, OverviewRow, Pack, PackPayload, Pallet, PalletUpdate, RecordId,
};

pub type ApiResult<T> = std::result::Result<T, RequestError>;

/// Window and filter for a listing request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub limit: u32,
    pub offset: u64,
    pub search: String,
}

impl ListQuery {
    pub fn new(limit: u32, offset: u64) -> Self {
        Self {
            limit,
            offset,
            search: String::new(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Query-string pairs; `search` is omitted when empty
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Which packs a listing or creation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackScope {
    /// Packs nested under a pallet
    Pallet(RecordId),
    /// Packs with no parent pallet
    Orphans,
}

impl PackScope {
    pub fn from_parent(parent: Option<RecordId>) -> Self {
        match parent {
            Some(id) => PackScope::Pallet(id),
            None => PackScope::Orphans,
        }
    }

    pub fn is_orphans(&self) -> bool {
        matches!(self, PackScope::Orphans)
    }

    /// Path of the listing / creation endpoint for this scope
    pub fn collection_path(&self) -> String {
        match self {
            PackScope::Pallet(id) => format!("/api/pallets/{id}/packs"),
            PackScope::Orphans => "/api/packs/orphans".to_string(),
        }
    }
}

impl fmt::Display for PackScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackScope::Pallet(id) => write!(f, "pallet #{id}"),
            PackScope::Orphans => write!(f, "orphans"),
        }
    }
}

/// Common interface for the pallet/pack backend
pub trait Gateway: Send + Sync {
    /// Probe the health endpoint
    fn health(&self) -> impl Future<Output = ApiResult<()>> + Send;

    fn list_pallets(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = ApiResult<Page<Pallet>>> + Send;

    fn get_pallet(&self, id: RecordId) -> impl Future<Output = ApiResult<Pallet>> + Send;

    fn create_pallet(&self, payload: &NewPallet) -> impl Future<Output = ApiResult<Pallet>> + Send;

    fn update_pallet(
        &self,
        id: RecordId,
        payload: &PalletUpdate,
    ) -> impl Future<Output = ApiResult<Pallet>> + Send;

    /// Delete a pallet; the backend cascades to its packs
    fn delete_pallet(&self, id: RecordId) -> impl Future<Output = ApiResult<()>> + Send;

    /// List packs of a pallet or orphan packs. `query.search` is not sent.
    fn list_packs(
        &self,
        scope: PackScope,
        query: &ListQuery,
    ) -> impl Future<Output = ApiResult<Page<Pack>>> + Send;

    fn create_pack(
        &self,
        scope: PackScope,
        payload: &PackPayload,
    ) -> impl Future<Output = ApiResult<Pack>> + Send;

    fn update_pack(
        &self,
        id: RecordId,
        payload: &PackPayload,
    ) -> impl Future<Output = ApiResult<Pack>> + Send;

    fn delete_pack(&self, id: RecordId) -> impl Future<Output = ApiResult<()>> + Send;

    fn list_overview(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = ApiResult<Page<OverviewRow>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_omit_empty_search() {
        let pairs = ListQuery::new(20, 40).to_pairs();
        assert_eq!(
            pairs,
            vec![("limit", "20".to_string()), ("offset", "40".to_string())]
        );
    }

    #[test]
    fn test_query_pairs_include_search() {
        let pairs = ListQuery::new(5, 0).with_search("QR-1").to_pairs();
        assert_eq!(pairs.last(), Some(&("search", "QR-1".to_string())));
    }

    #[test]
    fn test_pack_scope_paths() {
        assert_eq!(PackScope::Pallet(12).collection_path(), "/api/pallets/12/packs");
        assert_eq!(PackScope::Orphans.collection_path(), "/api/packs/orphans");
        assert_eq!(PackScope::from_parent(None), PackScope::Orphans);
        assert_eq!(PackScope::from_parent(Some(3)), PackScope::Pallet(3));
    }
}
