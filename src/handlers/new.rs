use anyhow::{Context, Result, bail};
use colored::*;
use std::path::Path;

use crate::copy::{copy_tree, validate_dir, write_files};
use crate::paths::WellKnownDirs;
use crate::templates;

pub fn handle_new(dirs: &WellKnownDirs, name: &str, from: Option<&Path>) -> Result<()> {
    let dest = dirs.current_deps_dir();
    if validate_dir(dest) {
        bail!(
            "destination directory {:?} already exists and is not empty",
            dest
        );
    }

    match from {
        Some(template) => {
            let summary = copy_tree(template, dest)
                .with_context(|| format!("failed to copy template directory {:?}", template))?;
            if !summary.skipped.is_empty() {
                eprintln!(
                    "{}",
                    format!("Warning: {} entries could not be copied.", summary.skipped.len())
                        .yellow()
                );
            }
        }
        None => {
            write_files(dest, &templates::project_files(name))
                .with_context(|| format!("failed to scaffold {:?}", dest))?;
        }
    }

    echo_result(name);
    Ok(())
}

fn echo_result(name: &str) {
    println!();
    println!(
        "Your \"{}\" project was created successfully.",
        name.bold()
    );
    println!();
    println!("Go into your project by running:");
    println!("    {}", format!("$ cd {}", name).cyan());
    println!();
    println!("Start your project with:");
    println!("    {}", "$ poac install hello_world".cyan());
    println!("    {}", "$ poac run main.cpp".cyan());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn dirs_in(cwd: &Path) -> WellKnownDirs {
        WellKnownDirs::from_roots(PathBuf::from("/home/test"), cwd.to_path_buf())
    }

    #[test]
    fn test_new_scaffolds_all_templates() {
        let tmp = tempdir().unwrap();
        let dirs = dirs_in(tmp.path());

        handle_new(&dirs, "demo", None).unwrap();

        let deps = tmp.path().join("deps");
        for file in [".gitignore", "main.cpp", "poac.lock", "poac.yml", "README.md"] {
            assert!(deps.join(file).is_file(), "{} missing", file);
        }
        assert!(
            fs::read_to_string(deps.join("poac.yml"))
                .unwrap()
                .contains("name: demo")
        );
    }

    #[test]
    fn test_new_refuses_populated_destination() {
        let tmp = tempdir().unwrap();
        let dirs = dirs_in(tmp.path());
        let deps = tmp.path().join("deps");
        fs::create_dir(&deps).unwrap();
        fs::write(deps.join("existing.txt"), "x").unwrap();

        assert!(handle_new(&dirs, "demo", None).is_err());
        // nothing was scaffolded next to the existing file
        assert!(!deps.join("poac.yml").exists());
    }

    #[test]
    fn test_new_from_template_directory() {
        let tmp = tempdir().unwrap();
        let dirs = dirs_in(tmp.path());
        let template = tmp.path().join("template");
        fs::create_dir_all(template.join("include")).unwrap();
        fs::write(template.join("mylib.yml"), "name: mylib").unwrap();
        fs::write(template.join("include").join("mylib.hpp"), "#pragma once").unwrap();

        handle_new(&dirs, "demo", Some(&template)).unwrap();

        let deps = tmp.path().join("deps");
        assert!(deps.join("mylib.yml").is_file());
        assert!(deps.join("include").join("mylib.hpp").is_file());
    }
}
