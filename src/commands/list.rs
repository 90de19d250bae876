use crate::models::{SchemeEntry, SecurityScheme};
use crate::{Result, loader};
use colored::*;
use std::path::Path;

pub fn execute_list(path: &Path) -> Result<()> {
    println!("{}", "Loading OpenAPI document...".bright_blue());
    println!("  Path: {}", path.display());

    let document = loader::load_document(path)?;

    println!("\n{}", "✓ Document loaded successfully".green());
    if let Some(ref info) = document.info {
        println!("  Title: {}", info.title.bold());
        println!("  Version: {}", info.version);
    }
    println!("  OpenAPI Version: {}", document.openapi);
    println!();

    let schemes = match document.security_schemes() {
        Some(schemes) if !schemes.is_empty() => schemes,
        _ => {
            println!("{}", "No security schemes found".yellow());
            return Ok(());
        }
    };

    println!(
        "{}",
        format!("Security schemes ({}):", schemes.len()).bold()
    );
    for (idx, (name, entry)) in schemes.iter().enumerate() {
        println!();
        println!(
            "  {}. {} {}",
            idx + 1,
            "Scheme:".bright_cyan(),
            name.bold()
        );

        match entry {
            SchemeEntry::Reference { reference } => {
                println!("     Reference: {}", reference.bright_magenta());
            }
            SchemeEntry::Scheme(scheme) => print_scheme(scheme),
        }
    }

    Ok(())
}

fn print_scheme(scheme: &SecurityScheme) {
    println!("     Type: {}", scheme.kind.bright_yellow());

    if !scheme.description.is_empty() {
        println!("     Description: {}", scheme.description);
    }
    if !scheme.location.is_empty() {
        println!("     In: {}", scheme.location);
    }
    if !scheme.name.is_empty() {
        println!("     Name: {}", scheme.name);
    }
    if !scheme.http_scheme.is_empty() {
        println!("     Scheme: {}", scheme.http_scheme);
    }
    if !scheme.bearer_format.is_empty() {
        println!("     Bearer format: {}", scheme.bearer_format);
    }

    if let Some(ref flows) = scheme.flows {
        for (slot, flow) in flows.slots() {
            println!("     Flow: {}", slot.to_string().cyan());
            println!("       Authorization URL: {}", flow.authorization_url);
            println!("       Token URL: {}", flow.token_url);
            if !flow.refresh_url.is_empty() {
                println!("       Refresh URL: {}", flow.refresh_url);
            }
            let scopes: Vec<&str> = flow.scopes.keys().map(String::as_str).collect();
            println!("       Scopes: {}", scopes.join(", "));
        }
    }
}
