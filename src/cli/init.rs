//! Init command implementation.
//!
//! Writes a commented starter `scatter.yaml` recipe.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, ScatterError};
use crate::output::{display_path, Printer};
use crate::recipe::{RECIPE_FILENAME, STARTER_RECIPE};

/// Write a starter scatter.yaml recipe
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing scatter.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let recipe_path = args.path.join(RECIPE_FILENAME);

    if recipe_path.exists() && !args.force {
        return Err(ScatterError::AlreadyExists { path: recipe_path });
    }

    fs::create_dir_all(&args.path).map_err(|e| ScatterError::Io {
        path: args.path.clone(),
        message: format!("Failed to create directory: {}", e),
    })?;

    fs::write(&recipe_path, STARTER_RECIPE).map_err(|e| ScatterError::Io {
        path: recipe_path.clone(),
        message: format!("Failed to write recipe: {}", e),
    })?;

    printer.success("Created", &display_path(&recipe_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_recipe() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::new()).unwrap();

        let recipe = Recipe::load(&dir.path().join("scatter.yaml")).unwrap();
        assert_eq!(recipe.output, Some(PathBuf::from("scatter.png")));
    }

    #[test]
    fn test_init_errors_if_recipe_exists() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("scatter.yaml"), "num: 3").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        let result = run(args, &Printer::new());
        assert!(matches!(result, Err(ScatterError::AlreadyExists { .. })));

        // Existing recipe is left alone
        let content = fs::read_to_string(dir.path().join("scatter.yaml")).unwrap();
        assert_eq!(content, "num: 3");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("scatter.yaml"), "num: 3").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };

        run(args, &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join("scatter.yaml")).unwrap();
        assert_eq!(content, STARTER_RECIPE);
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("looks/night");

        let args = InitArgs {
            path: target.clone(),
            force: false,
        };

        run(args, &Printer::new()).unwrap();
        assert!(target.join("scatter.yaml").is_file());
    }
}
