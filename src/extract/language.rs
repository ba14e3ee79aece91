//! Language detection by file-extension census

use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("py", "Python"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("rs", "Rust"),
    ("go", "Go"),
    ("rb", "Ruby"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("c", "C"),
    ("php", "PHP"),
    ("swift", "Swift"),
    ("kt", "Kotlin"),
];

/// Count source files per known extension and return the most common
/// language, or "Unknown" when nothing matches.
pub fn detect_language(root: &Path) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.file_name().to_str() != Some(".git"))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if let Some(&(_, lang)) = EXTENSION_LANGUAGES.iter().find(|(known, _)| *known == ext) {
            *counts.entry(lang).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        // Tie-break on name so the result is deterministic.
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(lang, _)| lang.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
