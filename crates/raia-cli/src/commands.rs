use std::fs;
use std::io::{self, Write as _};
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;

use raia_audit::AuditOutcome;
use raia_dossier::{guidelines, progress, Dossier, FindingId, IncomingFile};
use raia_extract::{ArchiveExpander, DirectoryExpander, PlainTextExtractor, TextExtractor};
use raia_store::{export_dossier, export_file_name, import_dossier, Store};
use raia_types::{taxonomy, Authority, FindingStatus, Pathway};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut store = Store::open(&cli.state)?;
    match cli.command {
        Command::Create(args) => cmd_create(&mut store, args),
        Command::Open(args) => cmd_open(&mut store, args),
        Command::List => cmd_list(&store),
        Command::Delete(args) => cmd_delete(&mut store, args),
        Command::Ingest(args) => cmd_ingest(&mut store, args),
        Command::Map(args) => cmd_map(&mut store, args),
        Command::Unmap(args) => cmd_unmap(&mut store, args),
        Command::Suggest => cmd_suggest(&mut store),
        Command::ClearMappings => cmd_clear_mappings(&mut store),
        Command::Analyze => cmd_analyze(&mut store),
        Command::Finding(args) => cmd_finding(&mut store, args),
        Command::Rules(args) => cmd_rules(&mut store, args),
        Command::History => cmd_history(&store),
        Command::Verify => cmd_verify(&store),
        Command::Progress => cmd_progress(&store),
        Command::Export(args) => cmd_export(&mut store, args),
        Command::Import(args) => cmd_import(&mut store, args),
        Command::Guidelines => cmd_guidelines(&store),
        Command::Config(args) => cmd_config(&mut store, args),
    }
}

fn actor(store: &Store) -> String {
    store.state.settings.actor.clone()
}

fn report_audit(outcome: &AuditOutcome) {
    if let Some(reason) = outcome.failure() {
        eprintln!(
            "{} action completed but was not recorded in the audit trail: {reason}",
            "warning:".yellow().bold()
        );
    }
}

fn cmd_create(store: &mut Store, args: CreateArgs) -> anyhow::Result<()> {
    let authority: Authority = args.authority.parse()?;
    let pathway: Pathway = args.pathway.parse()?;
    let audit = store.create_dossier(&args.name, authority, pathway)?;
    report_audit(&audit);
    store.save_best_effort();
    println!(
        "{} Created dossier {} ({authority}, {pathway} pathway)",
        "✓".green().bold(),
        args.name.bold()
    );
    Ok(())
}

fn cmd_open(store: &mut Store, args: OpenArgs) -> anyhow::Result<()> {
    let name = store.select_dossier(&args.name)?.name().to_string();
    store.save_best_effort();
    println!("{} Opened dossier {}", "✓".green().bold(), name.bold());
    Ok(())
}

fn cmd_list(store: &Store) -> anyhow::Result<()> {
    if store.state.dossiers.is_empty() {
        println!("No dossiers yet. Create one with {}.", "raia create".bold());
        return Ok(());
    }
    let active = store.state.active;
    for (index, dossier) in store.state.dossiers.iter().enumerate() {
        let marker = if active == Some(index) { "*" } else { " " };
        println!(
            "{marker} {}  {} | {} | {} files | {}%",
            dossier.name().bold(),
            dossier.authority(),
            dossier.pathway(),
            dossier.files().len(),
            progress(dossier).score
        );
    }
    Ok(())
}

fn cmd_delete(store: &mut Store, args: DeleteArgs) -> anyhow::Result<()> {
    if !args.force {
        print!("Delete dossier {}? This cannot be undone. [y/N] ", args.name.bold());
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }
    store.delete_dossier(&args.name)?;
    store.save_best_effort();
    println!("{} Deleted dossier {}", "✓".green(), args.name.bold());
    Ok(())
}

fn collect_incoming(paths: &[String]) -> anyhow::Result<Vec<IncomingFile>> {
    let extractor = PlainTextExtractor::new();
    let mut incoming = Vec::new();
    for raw in paths {
        let path = Path::new(raw);
        if path.is_dir() {
            for (name, bytes) in DirectoryExpander::new().expand(path)? {
                let extracted_text = extractor.extract(&name, &bytes);
                incoming.push(IncomingFile {
                    name,
                    bytes,
                    extracted_text,
                });
            }
        } else {
            let bytes = fs::read(path).with_context(|| format!("reading {raw}"))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| raw.clone());
            let extracted_text = extractor.extract(&name, &bytes);
            incoming.push(IncomingFile {
                name,
                bytes,
                extracted_text,
            });
        }
    }
    Ok(incoming)
}

fn cmd_ingest(store: &mut Store, args: IngestArgs) -> anyhow::Result<()> {
    if args.paths.is_empty() {
        bail!("no files given");
    }
    let incoming = collect_incoming(&args.paths)?;
    let actor = actor(store);
    let dossier = store.active_dossier_mut()?;

    let report = dossier.ingest_batch(incoming, &actor);
    for (name, result) in &report.results {
        match result {
            Ok(audited) => {
                report_audit(&audited.audit);
                println!(
                    "  {} {} ({} chunks, {})",
                    "✓".green(),
                    name,
                    audited.value.chunk_count,
                    audited.value.digest.short_hex().dimmed()
                );
            }
            Err(err) => println!("  {} {} ({err})", "✗".red(), name),
        }
    }
    store.save_best_effort();
    println!(
        "{} of {} file(s) ingested",
        report.succeeded(),
        report.results.len()
    );
    Ok(())
}

fn cmd_map(store: &mut Store, args: MapArgs) -> anyhow::Result<()> {
    let actor = actor(store);
    let dossier = store.active_dossier_mut()?;
    let audited = dossier.map_file(&args.file, args.node.as_str().into(), &actor)?;
    report_audit(&audited.audit);
    store.save_best_effort();
    let node_name = taxonomy::node_name(&args.node).unwrap_or(&args.node);
    println!("{} Mapped {} to {}", "✓".green(), args.file.bold(), node_name);
    Ok(())
}

fn cmd_unmap(store: &mut Store, args: UnmapArgs) -> anyhow::Result<()> {
    let actor = actor(store);
    let dossier = store.active_dossier_mut()?;
    let audited = dossier.unmap_file(&args.file, &actor)?;
    report_audit(&audited.audit);
    store.save_best_effort();
    if audited.value {
        println!("{} Unmapped {}", "✓".green(), args.file.bold());
    } else {
        println!("{} was not mapped", args.file.bold());
    }
    Ok(())
}

fn cmd_suggest(store: &mut Store) -> anyhow::Result<()> {
    let actor = actor(store);
    let dossier = store.active_dossier_mut()?;
    let audited = dossier.suggest_mappings(&actor);
    report_audit(&audited.audit);
    store.save_best_effort();
    println!(
        "{} Suggested {} mapping(s) from file names",
        "✓".green(),
        audited.value
    );
    Ok(())
}

fn cmd_clear_mappings(store: &mut Store) -> anyhow::Result<()> {
    let actor = actor(store);
    let dossier = store.active_dossier_mut()?;
    let audited = dossier.clear_mappings(&actor);
    report_audit(&audited.audit);
    store.save_best_effort();
    println!("{} Cleared {} mapping(s)", "✓".green(), audited.value);
    Ok(())
}

fn cmd_analyze(store: &mut Store) -> anyhow::Result<()> {
    let actor = actor(store);
    let dossier = store.active_dossier_mut()?;

    let unmapped = dossier.files().len() - dossier.ctd_mapping().len();
    if unmapped > 0 {
        println!(
            "{} {unmapped} file(s) are unmapped; analyzing anyway",
            "note:".yellow()
        );
    }
    let reviewed = dossier
        .findings()
        .iter()
        .filter(|f| f.status.is_reviewed())
        .count();
    if reviewed > 0 {
        println!(
            "{} discarding {reviewed} reviewed finding(s); findings are a fresh snapshot",
            "note:".yellow()
        );
    }

    let audited = dossier.run_analysis(&actor);
    let audit = audited.audit.clone();

    let mut critical = 0;
    let mut major = 0;
    let mut minor = 0;
    for record in dossier.findings() {
        match record.finding.severity {
            raia_types::Severity::Critical => critical += 1,
            raia_types::Severity::Major => major += 1,
            raia_types::Severity::Minor => minor += 1,
        }
    }
    let max_risk = dossier
        .findings()
        .iter()
        .map(|f| f.finding.risk)
        .max()
        .unwrap_or(0);

    println!(
        "{} Analysis complete: {} finding(s)",
        "✓".green().bold(),
        dossier.findings().len()
    );
    println!(
        "  {} critical | {} major | {} minor | max risk {}",
        critical.to_string().red().bold(),
        major.to_string().yellow(),
        minor.to_string().green(),
        max_risk
    );
    for record in dossier.findings() {
        println!(
            "  [{}] {} {}: {} (risk {}, {})",
            record.finding.severity.to_string().to_uppercase(),
            record.id.to_string().dimmed(),
            record.finding.rule_id.bold(),
            record.finding.message,
            record.finding.risk,
            record.finding.file_name
        );
    }
    report_audit(&audit);
    store.save_best_effort();
    Ok(())
}

fn cmd_finding(store: &mut Store, args: FindingArgs) -> anyhow::Result<()> {
    let status = match args.decision.to_ascii_lowercase().as_str() {
        "accept" | "accepted" => FindingStatus::Accepted,
        "dispute" | "disputed" => FindingStatus::Disputed,
        other => bail!("unknown decision {other:?}; expected accept or dispute"),
    };
    let id: FindingId = args.id.parse().context("invalid finding id")?;

    let actor = actor(store);
    let dossier = store.active_dossier_mut()?;
    let audited = dossier.set_finding_status(id, status, &actor)?;
    report_audit(&audited.audit);
    store.save_best_effort();
    println!("{} Finding marked as {status}", "✓".green());
    Ok(())
}

fn cmd_rules(store: &mut Store, args: RulesArgs) -> anyhow::Result<()> {
    if args.reset {
        let actor = actor(store);
        let dossier = store.active_dossier_mut()?;
        let authority = dossier.authority();
        let audited = dossier.reset_rules(&actor);
        report_audit(&audited.audit);
        store.save_best_effort();
        println!("{} Rules reset to {authority} defaults", "✓".green());
        return Ok(());
    }

    let dossier = store.active_dossier()?;
    let source = if dossier.rule_override().is_some() {
        "override"
    } else {
        "defaults"
    };
    println!(
        "Active rule set ({source}, {} rules) for {}:",
        dossier.active_rules().len(),
        dossier.authority()
    );
    for rule in dossier.active_rules() {
        println!(
            "  {} [{}] {}: {} (risk {}) {}",
            rule.id().bold(),
            rule.severity().to_string().to_uppercase(),
            rule.category(),
            rule.message(),
            rule.risk(),
            rule.citations().join("; ").dimmed()
        );
    }
    Ok(())
}

fn cmd_history(store: &Store) -> anyhow::Result<()> {
    let dossier = store.active_dossier()?;
    if dossier.audit_log().is_empty() {
        println!("No audit trail entries yet.");
        return Ok(());
    }
    for entry in dossier.audit_log().entries() {
        println!(
            "{}  {}  {}  {}",
            entry.time.format("%Y-%m-%d %H:%M:%S"),
            entry.actor.cyan(),
            entry.action,
            entry.chain_digest.short_hex().dimmed()
        );
    }
    Ok(())
}

fn cmd_verify(store: &Store) -> anyhow::Result<()> {
    let dossier = store.active_dossier()?;
    match dossier.audit_log().verify_detailed() {
        Ok(()) => {
            println!(
                "{} Audit chain verified ({} entries, head {})",
                "✓".green().bold(),
                dossier.audit_log().len(),
                dossier.audit_log().head().dimmed()
            );
            Ok(())
        }
        Err(err) => bail!("audit chain verification FAILED: {err}"),
    }
}

fn cmd_progress(store: &Store) -> anyhow::Result<()> {
    let dossier = store.active_dossier()?;
    let p = progress(dossier);
    println!("{}: {}% ({})", dossier.name().bold(), p.score, p.label);
    Ok(())
}

fn cmd_export(store: &mut Store, args: ExportArgs) -> anyhow::Result<()> {
    let actor = actor(store);
    let dossier = store.active_dossier_mut()?;
    let output = args
        .output
        .unwrap_or_else(|| export_file_name(dossier));

    let document = export_dossier(dossier)?;
    fs::write(&output, document).with_context(|| format!("writing {output}"))?;

    report_audit(&dossier.audit_note("Exported dossier", &actor));
    store.save_best_effort();
    println!("{} Exported to {}", "✓".green().bold(), output.bold());
    Ok(())
}

fn cmd_import(store: &mut Store, args: ImportArgs) -> anyhow::Result<()> {
    let data = fs::read_to_string(&args.path).with_context(|| format!("reading {}", args.path))?;
    let dossier: Dossier = import_dossier(&data)?;
    let name = dossier.name().to_string();
    store.adopt_dossier(dossier)?;
    store.save_best_effort();
    println!("{} Imported dossier {}", "✓".green().bold(), name.bold());
    Ok(())
}

fn cmd_guidelines(store: &Store) -> anyhow::Result<()> {
    let dossier = store.active_dossier()?;
    println!("{} submission guidelines:", dossier.authority().to_string().bold());
    for line in guidelines(dossier.authority()) {
        println!("  - {line}");
    }
    Ok(())
}

fn cmd_config(store: &mut Store, args: ConfigArgs) -> anyhow::Result<()> {
    fn parse_flag(value: &str) -> anyhow::Result<bool> {
        value.parse().context("expected true or false")
    }

    let settings = &mut store.state.settings;
    match (args.key.as_deref(), args.value.as_deref()) {
        (Some("actor"), Some(value)) => settings.actor = value.to_string(),
        (Some("persist"), Some(value)) => settings.persist = parse_flag(value)?,
        (Some("dark-mode"), Some(value)) => settings.dark_mode = parse_flag(value)?,
        (Some("training-mode"), Some(value)) => settings.training_mode = parse_flag(value)?,
        (Some("actor"), None) => {
            println!("actor = {}", settings.actor);
            return Ok(());
        }
        (Some("persist"), None) => {
            println!("persist = {}", settings.persist);
            return Ok(());
        }
        (Some("dark-mode"), None) => {
            println!("dark-mode = {}", settings.dark_mode);
            return Ok(());
        }
        (Some("training-mode"), None) => {
            println!("training-mode = {}", settings.training_mode);
            return Ok(());
        }
        (Some(key), _) => {
            bail!("unknown setting {key:?}; known: actor, persist, dark-mode, training-mode")
        }
        (None, _) => {
            println!("actor = {}", settings.actor);
            println!("persist = {}", settings.persist);
            println!("dark-mode = {}", settings.dark_mode);
            println!("training-mode = {}", settings.training_mode);
            return Ok(());
        }
    }
    // A disabled persist flag must still be saved once, or it would never
    // stick; write the snapshot directly.
    let persist = store.state.settings.persist;
    store.state.settings.persist = true;
    store.save()?;
    store.state.settings.persist = persist;
    println!("{} Setting updated", "✓".green());
    Ok(())
}
