//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::FolderLoader;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{self, Settings};
use crate::domain::{Folder, OrgId};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::sample::sample_folders;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        return cmd_completion(*shell);
    }

    let cwd = std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?;
    let mut settings = Settings::load(Some(&cwd))?;
    if cli.strict {
        settings.strict = true;
    }
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::List { org }) => cmd_list(&container, cli, *org),
        Some(Commands::Children { org, name }) => cmd_children(&container, cli, *org, name),
        Some(Commands::Move { src, dst }) => cmd_move(&container, cli, src, dst),
        Some(Commands::Tree { org }) => cmd_tree(&container, cli, *org),
        Some(Commands::Validate) => cmd_validate(&container, cli),
        Some(Commands::Sample { output }) => cmd_sample(&container, output.as_deref()),
        Some(Commands::Config { command }) => cmd_config(&container, &cwd, command),
        Some(Commands::Completion { .. }) => Ok(()),
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| InfraError::io("print help", e))?;
            Ok(())
        }
    }
}

fn print_folders(json: bool, list: &[Folder], changed: &[bool]) -> CliResult<()> {
    if json {
        let text = FolderLoader::to_json(list).map_err(|e| ApplicationError::OperationFailed {
            context: "serialize folders".into(),
            source: Box::new(e),
        })?;
        output::info(&text);
    } else {
        output::folders(list, changed);
    }
    Ok(())
}

#[instrument(skip(container, cli))]
fn cmd_list(container: &ServiceContainer, cli: &Cli, org: Option<OrgId>) -> CliResult<()> {
    let service = container.folder_service(cli.file.as_deref())?;
    let folders = match org {
        Some(org) => service.folders_by_org(org),
        None => service.list_all_folders(),
    };
    debug!("listing {} folders", folders.len());
    print_folders(cli.json, &folders, &[])
}

#[instrument(skip(container, cli))]
fn cmd_children(
    container: &ServiceContainer,
    cli: &Cli,
    org: Option<OrgId>,
    name: &str,
) -> CliResult<()> {
    let org = org
        .or(container.settings.default_org)
        .ok_or_else(|| CliError::Usage("--org is required (or set default_org)".into()))?;
    let service = container.folder_service(cli.file.as_deref())?;
    let children = service.descendants_of(org, name)?;
    if children.is_empty() && !cli.json {
        output::warning(&format!("{name} has no descendants"));
        return Ok(());
    }
    print_folders(cli.json, &children, &[])
}

#[instrument(skip(container, cli))]
fn cmd_move(container: &ServiceContainer, cli: &Cli, src: &str, dst: &str) -> CliResult<()> {
    let service = container.folder_service(cli.file.as_deref())?;
    let before = service.list_all_folders();
    let after = service.move_folder(src, dst)?;
    let changed: Vec<bool> = before
        .iter()
        .zip(&after)
        .map(|(old, new)| old.path != new.path)
        .collect();
    if !cli.json {
        let count = changed.iter().filter(|&&c| c).count();
        output::action("Moved", &format!("{src} -> {dst} ({count} paths rewritten)"));
    }
    print_folders(cli.json, &after, &changed)
}

#[instrument(skip(container, cli))]
fn cmd_tree(container: &ServiceContainer, cli: &Cli, org: Option<OrgId>) -> CliResult<()> {
    let service = container.folder_service(cli.file.as_deref())?;
    let org = org.or(container.settings.default_org);
    let forest = service.forest(org);
    if forest.is_empty() {
        output::warning("no folders");
        return Ok(());
    }
    let mut current_org = None;
    for (tree_org, tree) in forest {
        if current_org != Some(tree_org) {
            output::header(&format!("org {tree_org}"));
            current_org = Some(tree_org);
        }
        output::info(&tree);
    }
    Ok(())
}

#[instrument(skip(container, cli))]
fn cmd_validate(container: &ServiceContainer, cli: &Cli) -> CliResult<()> {
    let service = container.folder_service(cli.file.as_deref())?;
    service.validate()?;
    output::success(&format!(
        "{} folders in {} orgs are consistent",
        service.len(),
        service.orgs().len()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_sample(container: &ServiceContainer, output_file: Option<&Path>) -> CliResult<()> {
    let folders = sample_folders();
    match output_file {
        Some(path) => {
            container.loader().save(path, &folders)?;
            output::action("Wrote", &path.display());
        }
        None => print_folders(true, &folders, &[])?,
    }
    Ok(())
}

fn cmd_config(container: &ServiceContainer, cwd: &Path, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("Effective configuration");
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                config::global_config_path()
                    .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?
            } else {
                config::local_config_path(cwd)
            };
            if container.fs.exists(&path) {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            container
                .fs
                .ensure_parent(&path)
                .map_err(|e| InfraError::io(format!("create {}", path.display()), e))?;
            container
                .fs
                .write(&path, &Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::action("Created", &path.display());
        }
        ConfigCommands::Path => {
            let marker = |p: &Path| if p.exists() { "" } else { " (not found)" };
            match config::global_config_path() {
                Some(p) => output::info(&format!("global: {}{}", p.display(), marker(&p))),
                None => output::info("global: <unavailable>"),
            }
            let local = config::local_config_path(cwd);
            output::info(&format!("local:  {}{}", local.display(), marker(&local)));
        }
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
