//! Tech-stack parsing and categorization.
//!
//! A keyword scan, not NLP: it only has to recognize enough of the
//! candidate's declared stack to key the fallback question bank and to
//! group the completion summary.

/// Technologies the question bank and summary know about.
const KNOWN_TECH: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "django",
    "flask",
    "spring",
    "node",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "git",
];

/// Summary category for one declared item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechCategory {
    Language,
    Framework,
    Database,
    Tool,
    Other,
}

impl TechCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TechCategory::Language => "Languages",
            TechCategory::Framework => "Frameworks",
            TechCategory::Database => "Databases",
            TechCategory::Tool => "Tools",
            TechCategory::Other => "Other",
        }
    }
}

const LANGUAGES: &[&str] = &["python", "java", "javascript", "typescript", "c++", "go", "rust"];
const FRAMEWORKS: &[&str] = &[
    "django", "react", "angular", "vue", "flask", "spring", "express", "node",
];
const DATABASES: &[&str] = &["postgresql", "mysql", "mongodb", "redis", "cassandra"];
const TOOLS: &[&str] = &[
    "docker", "kubernetes", "aws", "azure", "git", "jenkins", "terraform",
];

/// Scan a free-text tech stack for known technologies.
///
/// Returned title-cased, deduplicated, in scan order.
pub fn recognized_technologies(tech_stack: &str) -> Vec<String> {
    let lower = tech_stack.to_lowercase();
    let mut found = Vec::new();

    for keyword in KNOWN_TECH {
        if lower.contains(keyword) {
            let titled = title_case(keyword);
            if !found.contains(&titled) {
                found.push(titled);
            }
        }
    }

    found
}

/// Split the declared stack into individual items (comma or newline
/// separated) and bucket each into a summary category.
pub fn categorize(tech_stack: &str) -> Vec<(TechCategory, Vec<String>)> {
    let items: Vec<String> = tech_stack
        .replace('\n', ",")
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let mut buckets: Vec<(TechCategory, Vec<String>)> = vec![
        (TechCategory::Language, Vec::new()),
        (TechCategory::Framework, Vec::new()),
        (TechCategory::Database, Vec::new()),
        (TechCategory::Tool, Vec::new()),
        (TechCategory::Other, Vec::new()),
    ];

    for item in items {
        let category = category_of(&item);
        if let Some((_, bucket)) = buckets.iter_mut().find(|(c, _)| *c == category) {
            bucket.push(item);
        }
    }

    buckets.retain(|(_, items)| !items.is_empty());
    buckets
}

fn category_of(item: &str) -> TechCategory {
    let lower = item.to_lowercase();
    if LANGUAGES.iter().any(|k| lower.contains(k)) {
        TechCategory::Language
    } else if FRAMEWORKS.iter().any(|k| lower.contains(k)) {
        TechCategory::Framework
    } else if DATABASES.iter().any(|k| lower.contains(k)) {
        TechCategory::Database
    } else if TOOLS.iter().any(|k| lower.contains(k)) {
        TechCategory::Tool
    } else {
        TechCategory::Other
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_declared_technologies() {
        let found = recognized_technologies("Python, Django, React, PostgreSQL, Docker, AWS");
        assert_eq!(
            found,
            vec!["Python", "React", "Django", "Postgresql", "Docker", "Aws"]
        );
    }

    #[test]
    fn test_recognition_deduplicates() {
        let found = recognized_technologies("python python PYTHON");
        assert_eq!(found, vec!["Python"]);
    }

    #[test]
    fn test_unknown_stack_yields_empty() {
        assert!(recognized_technologies("COBOL and Fortran").is_empty());
    }

    #[test]
    fn test_categorize_buckets_items() {
        let buckets = categorize("Python, Django, PostgreSQL, Docker, Vim");
        let labels: Vec<&str> = buckets.iter().map(|(c, _)| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Languages", "Frameworks", "Databases", "Tools", "Other"]
        );

        let (_, other) = buckets.last().unwrap();
        assert_eq!(other, &vec!["Vim".to_string()]);
    }

    #[test]
    fn test_categorize_splits_on_newlines() {
        let buckets = categorize("Python\nReact");
        assert_eq!(buckets.len(), 2);
    }

    #[test]
    fn test_categorize_skips_empty_items() {
        let buckets = categorize("Python,,  ,React");
        let total: usize = buckets.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(total, 2);
    }
}
