use crate::cli::{ExportFormat, Preset};
use crate::error::Result;
use crate::models::SecurityScheme;
use colored::*;
use std::fs;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Execute the preset command
pub fn execute_preset(preset: Preset, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let content = render_preset(preset, format)?;

    match output {
        Some(path) => {
            println!("{}", "Exporting preset security scheme...".bright_blue());
            println!("  Output: {}", path.display());
            fs::write(path, content)?;
            println!("\n{}", "✓ Preset exported successfully".green());
        }
        None => {
            // Write to stdout (no colored output)
            print!("{}", content);
        }
    }

    Ok(())
}

/// Serialize a preset. The preset is validated first so that a broken preset
/// never leaves the tool.
pub fn render_preset(preset: Preset, format: ExportFormat) -> Result<String> {
    let scheme = match preset {
        Preset::Csrf => SecurityScheme::csrf(),
        Preset::Jwt => SecurityScheme::jwt_bearer(),
    };

    scheme.validate(&CancellationToken::new())?;

    let content = match format {
        ExportFormat::Yaml => serde_yaml::to_string(&scheme)?,
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&scheme)?;
            json.push('\n');
            json
        }
    };

    Ok(content)
}
