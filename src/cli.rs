use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::api::{ListQuery, PackScope};
use crate::commands::{
    PackFields, PalletEdits, cmd_config_get, cmd_config_set, cmd_config_show, cmd_console,
    cmd_health, cmd_overview, cmd_pack_create, cmd_pack_ls, cmd_pack_rm, cmd_pack_update,
    cmd_pallet_create, cmd_pallet_ls, cmd_pallet_rm, cmd_pallet_show, cmd_pallet_update,
};
use crate::controller::{DEFAULT_PAGE_SIZE, PackScopePolicy};
use crate::types::RecordId;

/// Largest page a single CLI listing may request
pub const MAX_LIMIT: u32 = 500;

#[derive(Parser)]
#[command(name = "palletctl")]
#[command(about = "Admin console for pallets and packs")]
#[command(version)]
pub struct Cli {
    /// Backend base address (overrides PALLETCTL_API_BASE and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub json: bool,
}

impl Cli {
    pub fn output(&self) -> OutputOptions {
        OutputOptions { json: self.json }
    }

    /// Execute the parsed command line
    pub async fn run(self) -> crate::error::Result<()> {
        let output = self.output();
        self.command.run(self.api_base.as_deref(), output).await
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the backend is reachable
    Health,

    /// List, inspect and edit pallets
    #[command(visible_alias = "p")]
    Pallet {
        #[command(subcommand)]
        action: PalletAction,
    },

    /// List and edit packs of a pallet or orphan packs
    Pack {
        #[command(subcommand)]
        action: PackAction,
    },

    /// Show the pack overview report
    #[command(visible_alias = "o")]
    Overview {
        #[command(flatten)]
        page: PageArgs,

        /// Filter the report by free text
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Open the interactive console
    #[command(visible_alias = "ui")]
    Console,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Paging window shared by listing commands
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Items per page
    #[arg(long, short, default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_limit)]
    pub limit: u32,

    /// Number of items to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u64,
}

impl PageArgs {
    pub fn query(&self, search: Option<String>) -> ListQuery {
        ListQuery::new(self.limit, self.offset).with_search(search.unwrap_or_default())
    }
}

#[derive(Subcommand)]
pub enum PalletAction {
    /// List pallets
    Ls {
        #[command(flatten)]
        page: PageArgs,

        /// Filter pallets by free text
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Show a single pallet
    Show {
        /// Pallet ID
        id: RecordId,
    },
    /// Create a pallet
    Create {
        /// Sequence number (default: current time in milliseconds)
        #[arg(long, allow_hyphen_values = true)]
        seq_pallet: Option<String>,
    },
    /// Update fields of a pallet; omitted fields keep their value
    Update {
        /// Pallet ID
        id: RecordId,

        #[arg(long)]
        qr_code: Option<String>,

        /// true/false (also yes/no, 1/0)
        #[arg(long, value_parser = parse_bool)]
        completed: Option<bool>,

        #[arg(long, allow_hyphen_values = true)]
        num_doca: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        seq_pallet: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        station: Option<String>,
    },
    /// Delete a pallet together with its packs
    Rm {
        /// Pallet ID
        id: RecordId,

        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum PackAction {
    /// List packs of a pallet, or orphan packs
    Ls {
        /// Parent pallet ID (omit to list orphan packs)
        #[arg(long)]
        pallet: Option<RecordId>,

        /// List orphan packs even when --pallet is given
        #[arg(long)]
        orphans: bool,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a pack under a pallet, or an orphan pack without --pallet
    Create {
        /// Parent pallet ID
        #[arg(long)]
        pallet: Option<RecordId>,

        #[command(flatten)]
        fields: PackFieldArgs,
    },
    /// Replace every field of a pack
    Update {
        /// Pack ID
        id: RecordId,

        #[command(flatten)]
        fields: PackFieldArgs,

        /// Clear the fields that are not given instead of refusing
        #[arg(long)]
        replace: bool,
    },
    /// Delete a pack
    Rm {
        /// Pack ID
        id: RecordId,

        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

/// Editable pack fields
#[derive(Args, Debug, Clone, Default)]
pub struct PackFieldArgs {
    #[arg(long)]
    pub qr_code: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub orig: Option<String>,

    /// Sequence number (create default: current time in milliseconds)
    #[arg(long, allow_hyphen_values = true)]
    pub seq_pack: Option<String>,

    /// Mark as the last pack of its pallet
    #[arg(long)]
    pub lastpack: bool,

    #[arg(long, allow_hyphen_values = true)]
    pub pospallet: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub robot_num: Option<String>,
}

impl From<PackFieldArgs> for PackFields {
    fn from(args: PackFieldArgs) -> Self {
        PackFields {
            qr_code: args.qr_code,
            orig: args.orig,
            seq_pack: args.seq_pack,
            lastpack: args.lastpack,
            pospallet: args.pospallet,
            robot_num: args.robot_num,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (api_base, request_timeout_secs)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api_base, request_timeout_secs)
        key: String,
    },
}

/// Scope for `pack ls`: orphans without a pallet, or when forced
pub fn pack_scope(pallet: Option<RecordId>, orphans: bool) -> PackScope {
    let mut policy = PackScopePolicy::default();
    policy.set_parent(pallet);
    policy.set_orphans_forced(orphans);
    policy.scope()
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(
        self,
        api_base: Option<&str>,
        output: OutputOptions,
    ) -> crate::error::Result<()> {
        match self {
            Commands::Health => cmd_health(api_base, output).await,

            Commands::Pallet { action } => match action {
                PalletAction::Ls { page, search } => {
                    cmd_pallet_ls(api_base, page.query(search), output).await
                }
                PalletAction::Show { id } => cmd_pallet_show(api_base, id, output).await,
                PalletAction::Create { seq_pallet } => {
                    cmd_pallet_create(api_base, seq_pallet.as_deref(), output).await
                }
                PalletAction::Update {
                    id,
                    qr_code,
                    completed,
                    num_doca,
                    seq_pallet,
                    station,
                } => {
                    let edits = PalletEdits {
                        qr_code,
                        completed,
                        num_doca,
                        seq_pallet,
                        station,
                    };
                    cmd_pallet_update(api_base, id, edits, output).await
                }
                PalletAction::Rm { id, yes } => cmd_pallet_rm(api_base, id, yes, output).await,
            },

            Commands::Pack { action } => match action {
                PackAction::Ls {
                    pallet,
                    orphans,
                    page,
                } => {
                    cmd_pack_ls(api_base, pack_scope(pallet, orphans), page.query(None), output)
                        .await
                }
                PackAction::Create { pallet, fields } => {
                    cmd_pack_create(api_base, PackScope::from_parent(pallet), fields.into(), output)
                        .await
                }
                PackAction::Update {
                    id,
                    fields,
                    replace,
                } => cmd_pack_update(api_base, id, fields.into(), replace, output).await,
                PackAction::Rm { id, yes } => cmd_pack_rm(api_base, id, yes, output).await,
            },

            Commands::Overview { page, search } => {
                cmd_overview(api_base, page.query(search), output).await
            }

            Commands::Console => cmd_console(api_base).await,

            Commands::Config { action } => match action {
                ConfigAction::Show => cmd_config_show(api_base, output),
                ConfigAction::Set { key, value } => cmd_config_set(&key, &value, output),
                ConfigAction::Get { key } => cmd_config_get(&key, output),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "palletctl", &mut io::stdout());
}

fn parse_limit(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(n) if (1..=MAX_LIMIT).contains(&n) => Ok(n),
        _ => Err(format!("Invalid limit. Must be a whole number from 1 to {MAX_LIMIT}")),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err("Invalid value. Must be one of: true, false, yes, no, 1, 0".to_string()),
    }
}
