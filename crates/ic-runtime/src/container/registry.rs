//! # Domain Registry
//!
//! Holds one service per enabled domain, all sharing the same audit log,
//! outbox and transaction store.

use ic_02_interchain_router::{InMemoryAuditLog, InMemoryOutbox, InterchainContract};
use ic_03_transaction_dispatch::{InMemoryTransactionStore, TransactionApi};
use ic_04_domain_contracts::{
    CommerceCollaborators, CommerceService, DomainService, DomainWiring, FinanceCollaborators,
    FinanceService, GovernmentCollaborators, GovernmentService, HealthcareCollaborators,
    HealthcareService, InsuranceCollaborators, InsuranceService, RealEstateCollaborators,
    RealEstateService, RecordingCollaborators, RetailCollaborators, RetailService,
};
use shared_types::{ChainId, InterchainError, InterchainResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::container::config::{ConfigError, NodeConfig};

/// Enabled domain services keyed by chain.
pub struct DomainRegistry {
    services: BTreeMap<ChainId, Box<dyn DomainService>>,
    audit: Arc<InMemoryAuditLog>,
    outbox: Arc<InMemoryOutbox>,
    store: Arc<InMemoryTransactionStore>,
}

impl DomainRegistry {
    /// Wire every domain enabled in `config` over `collaborators`.
    pub fn from_config(
        config: &NodeConfig,
        collaborators: Arc<RecordingCollaborators>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let audit = Arc::new(InMemoryAuditLog::new(config.audit.retain_events));
        let outbox = Arc::new(InMemoryOutbox::with_capacity(config.outbox.capacity));
        let store = Arc::new(InMemoryTransactionStore::new(
            config.store.max_tracked_transactions,
        ));
        let wiring = DomainWiring::new(audit.clone(), outbox.clone(), store.clone());

        let mut services = BTreeMap::new();
        for chain in config.enabled_domains()? {
            let service = build_service(chain, &collaborators, &wiring)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!("unknown domain {:?}", chain.as_str()))
                })?;
            info!("[runtime] {} ({}) wired", chain.display_name(), chain);
            services.insert(chain, service);
        }

        Ok(Self {
            services,
            audit,
            outbox,
            store,
        })
    }

    /// Every domain with default bounds.
    pub fn in_memory(collaborators: Arc<RecordingCollaborators>) -> Result<Self, ConfigError> {
        Self::from_config(&NodeConfig::default(), collaborators)
    }

    /// Hosted chains in routing-key order.
    pub fn chains(&self) -> Vec<ChainId> {
        self.services.keys().copied().collect()
    }

    /// Service for `chain`.
    pub fn service(&self, chain: ChainId) -> InterchainResult<&dyn DomainService> {
        self.services
            .get(&chain)
            .map(|service| service.as_ref())
            .ok_or_else(|| InterchainError::UnsupportedRoute(chain.as_str().to_string()))
    }

    /// Service for a raw routing key.
    pub fn resolve(&self, key: &str) -> InterchainResult<&dyn DomainService> {
        self.service(key.parse()?)
    }

    /// Interchain contract of `chain`.
    pub fn contract(&self, chain: ChainId) -> InterchainResult<&dyn InterchainContract> {
        Ok(self.service(chain)?.contract())
    }

    /// Transaction API of `chain`.
    pub fn transactions(&self, chain: ChainId) -> InterchainResult<&dyn TransactionApi> {
        Ok(self.service(chain)?.transactions())
    }

    /// Shared callback audit log.
    pub fn audit(&self) -> &InMemoryAuditLog {
        &self.audit
    }

    /// Shared outbox.
    pub fn outbox(&self) -> &InMemoryOutbox {
        &self.outbox
    }

    /// Shared transaction store.
    pub fn store(&self) -> &InMemoryTransactionStore {
        &self.store
    }
}

fn build_service(
    chain: ChainId,
    c: &Arc<RecordingCollaborators>,
    wiring: &DomainWiring,
) -> Option<Box<dyn DomainService>> {
    let service: Box<dyn DomainService> = match chain {
        ChainId::Commerce => {
            Box::new(CommerceService::new(CommerceCollaborators::shared(c.clone()), wiring))
        }
        ChainId::Finance => {
            Box::new(FinanceService::new(FinanceCollaborators::shared(c.clone()), wiring))
        }
        ChainId::Government => {
            Box::new(GovernmentService::new(GovernmentCollaborators::shared(c.clone()), wiring))
        }
        ChainId::Healthcare => {
            Box::new(HealthcareService::new(HealthcareCollaborators::shared(c.clone()), wiring))
        }
        ChainId::Insurance => {
            Box::new(InsuranceService::new(InsuranceCollaborators::shared(c.clone()), wiring))
        }
        ChainId::RealEstate => {
            Box::new(RealEstateService::new(RealEstateCollaborators::shared(c.clone()), wiring))
        }
        ChainId::Retail => {
            Box::new(RetailService::new(RetailCollaborators::shared(c.clone()), wiring))
        }
        ChainId::SupplyChain | ChainId::Pharmacy | ChainId::Laboratory => return None,
    };
    Some(service)
}
