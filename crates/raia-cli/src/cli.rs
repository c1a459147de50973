use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "raia",
    about = "RAIA - Regulatory Reliance Review Assistant",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the state snapshot.
    #[arg(long, global = true, default_value = ".raia/state.json")]
    pub state: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new dossier and make it active
    Create(CreateArgs),
    /// Open an existing dossier
    Open(OpenArgs),
    /// List all dossiers
    List,
    /// Delete a dossier
    Delete(DeleteArgs),
    /// Ingest files (or directories of files) into the active dossier
    Ingest(IngestArgs),
    /// Map a file to a CTD taxonomy node
    Map(MapArgs),
    /// Remove a file's CTD mapping
    Unmap(UnmapArgs),
    /// Suggest CTD mappings from file names
    Suggest,
    /// Clear all CTD mappings
    ClearMappings,
    /// Run the compliance check
    Analyze,
    /// Accept or dispute a finding
    Finding(FindingArgs),
    /// Show or reset the active rule set
    Rules(RulesArgs),
    /// Show the audit trail
    History,
    /// Verify audit chain integrity
    Verify,
    /// Show dossier progress
    Progress,
    /// Export the active dossier to a JSON document
    Export(ExportArgs),
    /// Import a dossier from an exported JSON document
    Import(ImportArgs),
    /// Show submission guidelines for the active dossier's authority
    Guidelines,
    /// Get or set a setting (actor, persist, dark-mode, training-mode)
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    pub name: String,
    /// Target authority: SAHPRA, TMDA, or BoMRA
    #[arg(long)]
    pub authority: String,
    /// Reliance pathway: abridged, verified, or full
    #[arg(long, default_value = "abridged")]
    pub pathway: String,
}

#[derive(Args)]
pub struct OpenArgs {
    pub name: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub name: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct IngestArgs {
    /// Files or directories to ingest
    pub paths: Vec<String>,
}

#[derive(Args)]
pub struct MapArgs {
    pub file: String,
    /// CTD node id, e.g. m1-1 or m3
    pub node: String,
}

#[derive(Args)]
pub struct UnmapArgs {
    pub file: String,
}

#[derive(Args)]
pub struct FindingArgs {
    /// Finding id (as printed by `analyze`)
    pub id: String,
    /// Decision: accept or dispute
    pub decision: String,
}

#[derive(Args)]
pub struct RulesArgs {
    /// Reset the override rule set to the authority defaults
    #[arg(long)]
    pub reset: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output path; defaults to a name derived from the dossier
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    pub path: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    pub key: Option<String>,
    pub value: Option<String>,
}
