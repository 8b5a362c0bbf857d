use crate::cli::args::{ConfigArgs, ConfigCommand};
use crate::config::{Config, TOKEN_ENV_VAR};
use crate::error::Result;

/// Execute config command
pub fn execute(args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommand::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(key, value)?;
            config.save()?;
            println!("✅ Configuration updated: {} = {}", key, display_value(key, value));
            Ok(())
        }
        ConfigCommand::Get { key } => {
            let config = Config::load()?;
            match config.get(key) {
                Some(value) => {
                    println!("{}: {}", key, display_value(key, &value));
                }
                None => {
                    println!("Configuration key '{}' not found", key);
                }
            }
            Ok(())
        }
        ConfigCommand::Path => {
            let path = Config::config_file_path()?;
            println!("Configuration file: {}", path.display());
            Ok(())
        }
        ConfigCommand::Init => {
            Config::initialize()?;
            println!("✅ Configuration initialized");
            println!();
            println!("To set your token, run:");
            println!("  kenall config set api.token YOUR_TOKEN");
            println!("or export {}.", TOKEN_ENV_VAR);
            Ok(())
        }
    }
}

fn display_value(key: &str, value: &str) -> String {
    if key == "api.token" {
        mask_value(value)
    } else {
        value.to_string()
    }
}

/// Mask sensitive values for display
fn mask_value(value: &str) -> String {
    let count = value.chars().count();
    if count > 10 {
        let head: String = value.chars().take(4).collect();
        format!("{}...({} characters)", head, count)
    } else {
        "*".repeat(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_value() {
        assert_eq!(mask_value("short"), "*****");
        assert_eq!(mask_value("0123456789abcdef"), "0123...(16 characters)");
        assert_eq!(display_value("api.endpoint", "http://localhost"), "http://localhost");
        assert_ne!(display_value("api.token", "opencollector"), "opencollector");
    }
}
