use anyhow::{bail, Result};
use colored::Colorize;
use tracing::error;

use crate::commands::generate::{self, print_summary};
use crate::project::Project;
use crate::watcher::RouteWatcher;
use crate::ProjectArgs;

pub fn execute(args: &ProjectArgs) -> Result<()> {
    let project = Project::resolve(args)?;

    if !project.router_dir.is_dir() {
        bail!("Router directory not found: {}", project.router_dir.display());
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async { watch(&project).await })
}

async fn watch(project: &Project) -> Result<()> {
    // Start watching before the initial scan so no change is missed
    let mut watcher = RouteWatcher::new(&project.router_dir, project.debounce)?;
    let mut routes = generate::generate(project)?;

    println!();
    println!("  {} Watching for route changes (Ctrl+C to stop)", "👀".cyan());
    println!();

    loop {
        tokio::select! {
            batch = watcher.next_batch() => {
                let Some(batch) = batch else { break };
                if batch.is_empty() {
                    continue;
                }

                let changes = batch.len();
                match batch.apply(&mut routes, &project.router_dir) {
                    Ok(false) => {}
                    Ok(true) => match generate::write(project, &routes) {
                        Ok(written) => {
                            println!("{} {} file change(s)", "🔄".yellow(), changes);
                            print_summary(&routes, &written, project);
                        }
                        Err(e) => error!("{:#}", e),
                    },
                    Err(e) => error!("Failed to apply changes: {}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                println!("{}", "Stopped watching".green());
                break;
            }
        }
    }

    Ok(())
}
