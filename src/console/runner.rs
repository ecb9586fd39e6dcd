//! Executes console commands against a [`Gateway`].
//!
//! Commands run concurrently. Each result is applied to the model as soon as
//! it arrives, and whatever it triggers joins the set of in-flight requests
//! until nothing is left. Out-of-order results are safe: list and detail
//! responses carry generations and stale ones are dropped by the model.

use futures::stream::{FuturesUnordered, StreamExt};

use crate::api::Gateway;

use super::model::{Command, ConsoleState, Msg};

/// Run one command and turn its outcome into a message
pub async fn execute<G: Gateway>(gateway: &G, command: Command) -> Msg {
    match command {
        Command::CheckHealth => Msg::HealthChecked(gateway.health().await.is_ok()),
        Command::FetchPallets(ticket) => Msg::PalletsLoaded {
            generation: ticket.generation,
            result: gateway
                .list_pallets(&ticket.query)
                .await
                .map_err(|e| e.message()),
        },
        Command::FetchPalletDetail(ticket) => {
            let record = match gateway.get_pallet(ticket.id).await {
                Ok(pallet) => Some(pallet),
                Err(e) => {
                    tracing::debug!(id = ticket.id, "pallet detail unavailable: {}", e);
                    None
                }
            };
            Msg::PalletDetailLoaded {
                generation: ticket.generation,
                record,
            }
        }
        Command::FetchPacks { ticket, scope } => Msg::PacksLoaded {
            generation: ticket.generation,
            result: gateway
                .list_packs(scope, &ticket.query)
                .await
                .map_err(|e| e.message()),
        },
        Command::FetchOverview(ticket) => Msg::OverviewLoaded {
            generation: ticket.generation,
            result: gateway
                .list_overview(&ticket.query)
                .await
                .map_err(|e| e.message()),
        },
        Command::CreatePallet(payload) => Msg::PalletCreated(
            gateway
                .create_pallet(&payload)
                .await
                .map_err(|e| e.message()),
        ),
        Command::UpdatePallet { id, update } => Msg::PalletSaved(
            gateway
                .update_pallet(id, &update)
                .await
                .map_err(|e| e.message()),
        ),
        Command::DeletePallet(id) => Msg::PalletDeleted {
            id,
            result: gateway.delete_pallet(id).await.map_err(|e| e.message()),
        },
        Command::CreatePack { scope, payload } => Msg::PackSaved(
            gateway
                .create_pack(scope, &payload)
                .await
                .map_err(|e| e.message()),
        ),
        Command::UpdatePack { id, payload } => Msg::PackSaved(
            gateway
                .update_pack(id, &payload)
                .await
                .map_err(|e| e.message()),
        ),
        Command::DeletePack(id) => Msg::PackDeleted {
            id,
            result: gateway.delete_pack(id).await.map_err(|e| e.message()),
        },
    }
}

/// Run `pending` to completion, feeding every result through `apply`
pub async fn run_commands<G, F>(gateway: &G, commands: Vec<Command>, mut apply: F)
where
    G: Gateway,
    F: FnMut(Msg) -> Vec<Command>,
{
    tracing::trace!(count = commands.len(), "running console commands");
    let mut in_flight: FuturesUnordered<_> = commands
        .into_iter()
        .map(|command| execute(gateway, command))
        .collect();
    while let Some(msg) = in_flight.next().await {
        for command in apply(msg) {
            in_flight.push(execute(gateway, command));
        }
    }
}

/// Headless console: a model bound to a gateway
pub struct Console<G> {
    gateway: G,
    state: ConsoleState,
}

impl<G: Gateway> Console<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ConsoleState::default(),
        }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Issue the initial fetches and wait for everything they trigger
    pub async fn start(&mut self) {
        let commands = self.state.start();
        self.run(commands).await;
    }

    /// Apply a message and wait for everything it triggers
    pub async fn dispatch(&mut self, msg: Msg) {
        let commands = self.state.apply(msg);
        self.run(commands).await;
    }

    async fn run(&mut self, commands: Vec<Command>) {
        let state = &mut self.state;
        run_commands(&self.gateway, commands, |msg| state.apply(msg)).await;
    }
}
