/// Returns the scaffold files for a fresh project as
/// (relative name, content) pairs.
pub fn project_files(name: &str) -> Vec<(&'static str, String)> {
    vec![
        (".gitignore", include_str!("templates/gitignore").to_string()),
        ("main.cpp", include_str!("templates/main.cpp").to_string()),
        ("poac.lock", include_str!("templates/poac.lock").to_string()),
        ("poac.yml", include_str!("templates/poac.yml").replace("{name}", name)),
        ("README.md", include_str!("templates/README.md").replace("{name}", name)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_files_complete() {
        let files = project_files("demo");
        let names: Vec<&str> = files.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![".gitignore", "main.cpp", "poac.lock", "poac.yml", "README.md"]
        );
        for (name, content) in &files {
            assert!(!content.is_empty(), "{} is empty", name);
        }
    }

    #[test]
    fn test_project_name_substitution() {
        let files = project_files("hello_world");
        let manifest = &files.iter().find(|(n, _)| *n == "poac.yml").unwrap().1;
        assert!(manifest.contains("name: hello_world"));
        assert!(!manifest.contains("{name}"));
    }
}
