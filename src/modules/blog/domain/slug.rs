use std::sync::LazyLock;

use regex::Regex;

use crate::modules::content::domain::ValidationError;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug separator regex is valid"));

static SLUG_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug shape regex is valid")
});

/// Lowercases, collapses every run of non-alphanumerics into one `-`, and
/// trims leading/trailing separators. May return an empty string.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_SHAPE.is_match(slug)
}

pub fn check_slug(slug: &str) -> Result<(), ValidationError> {
    if is_valid_slug(slug) {
        return Ok(());
    }
    Err(ValidationError::Invalid {
        field: "slug",
        reason: "use lowercase letters, digits and single hyphens".to_string(),
    })
}

/// Slug derived from a title, rejected when nothing URL-safe is left.
pub fn slug_from_title(title: &str) -> Result<String, ValidationError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(ValidationError::Invalid {
            field: "slug",
            reason: "cannot be derived from the title".to_string(),
        });
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_become_hyphenated_lowercase() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("New Title"), "new-title");
        assert_eq!(
            slugify("Cloud Migration Strategies: AWS vs GCP"),
            "cloud-migration-strategies-aws-vs-gcp"
        );
    }

    #[test]
    fn separators_collapse_and_edges_trim() {
        assert_eq!(slugify("  --Rust & Tokio!!  "), "rust-tokio");
        assert_eq!(slugify("C/C++ in 2024"), "c-c-in-2024");
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(slugify("Café Déjà Vu"), "caf-d-j-vu");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn derived_slugs_are_always_valid() {
        for title in ["Hello World", "A", "x -- y", "2024: a year"] {
            assert!(is_valid_slug(&slugify(title)), "{}", title);
        }
    }

    #[test]
    fn shape_check_rejects_bad_slugs() {
        assert!(is_valid_slug("hello-world"));
        assert!(!is_valid_slug("Hello-World"));
        assert!(!is_valid_slug("hello--world"));
        assert!(!is_valid_slug("-hello"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn symbol_only_titles_cannot_produce_a_slug() {
        assert!(slug_from_title("!!!").is_err());
        assert_eq!(slug_from_title("Hi there").unwrap(), "hi-there");
    }
}
