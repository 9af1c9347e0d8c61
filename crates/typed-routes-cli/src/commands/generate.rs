use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use typed_routes::{scan_directory, write_declaration, TypedRoutes};

use crate::project::Project;
use crate::ProjectArgs;

pub fn execute(args: &ProjectArgs) -> Result<()> {
    let project = Project::resolve(args)?;
    generate(&project)?;
    Ok(())
}

/// Scans the router directory and writes router.d.ts
///
/// Returns the populated registry so watch mode can keep updating it.
pub fn generate(project: &Project) -> Result<TypedRoutes> {
    println!("{}", "Generating typed routes...".green().bold());
    println!();

    let mut routes = project.registry()?;
    let added = scan_directory(&mut routes, &project.router_dir)
        .with_context(|| format!("Failed to scan {}", project.router_dir.display()))?;

    let written = write(project, &routes)?;

    println!("  {} Router: {}", "📂".cyan(), relative(project, &project.router_dir));
    println!("  {} Route files: {}", "📄".cyan(), added);
    print_summary(&routes, &written, project);

    Ok(routes)
}

/// Renders the registry and writes it to the types directory
pub fn write(project: &Project, routes: &TypedRoutes) -> Result<PathBuf> {
    write_declaration(&project.types_dir, &routes.snapshot(), project.template.as_deref())
        .with_context(|| format!("Failed to write declaration to {}", project.types_dir.display()))
}

pub fn print_summary(routes: &TypedRoutes, written: &Path, project: &Project) {
    let snapshot = routes.snapshot();
    println!(
        "  {} {} static, {} dynamic routes → {}",
        "✓".green(),
        snapshot.static_routes.len(),
        snapshot.dynamic_routes.len(),
        relative(project, written)
    );
}

fn relative(project: &Project, path: &Path) -> String {
    path.strip_prefix(&project.root)
        .unwrap_or(path)
        .display()
        .to_string()
}
