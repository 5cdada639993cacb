//! Structural checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module declaration files carry no logic of their own
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn relative_paths(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        walk(root, root, &mut found)?;
        Ok(found)
    }

    fn walk(dir: &Path, root: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(root)
                .map_err(|err| io::Error::other(format!("{}: {err}", path.display())))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                found.insert(relative);
                walk(&path, root, found)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                found.insert(relative);
            }
        }
        Ok(())
    }

    fn listing(paths: &[&String], render: impl Fn(&str) -> String) -> String {
        paths
            .iter()
            .map(|path| render(path))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting a unit test file
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = relative_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let tests = relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();
        assert!(!sources.is_empty(), "no source files found under {SRC_DIR}");

        let missing: Vec<&String> = sources
            .iter()
            .filter(|path| !is_organizational(path) && !tests.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "source files without unit tests:\n{}",
            listing(&missing, |path| format!("  - {SRC_DIR}/{path} -> {UNIT_DIR}/{path}"))
        );
    }

    // Tests no unit test file outlives the source file it covers
    // Verified by adding a unit test file for a removed module
    #[test]
    fn test_every_unit_test_has_a_source() {
        let sources = relative_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let tests = relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<&String> = tests
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit tests without a source file:\n{}",
            listing(&orphaned, |path| format!("  - {UNIT_DIR}/{path}"))
        );
    }

    // Tests every test file outside module declarations defines at least one test
    // Verified by emptying a unit test module
    #[test]
    fn test_every_test_file_defines_tests() {
        let files = relative_paths(Path::new("tests")).unwrap_or_default();
        assert!(!files.is_empty(), "no test files found");

        let empty: Vec<&String> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path.as_str()))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "test files without any #[test]:\n{}",
            listing(&empty, |path| format!("  - tests/{path}"))
        );
    }
}
