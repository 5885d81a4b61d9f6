//! Front matter templating for generated index pages.

/// Derive a display title from a hyphenated slug by replacing
/// separators with spaces and capitalizing each word.
///
/// An empty slug yields an empty title; callers treat that as
/// degenerate but non-fatal.
pub fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The metadata block placed at the top of a generated index page,
/// consumed by the site generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub description: String,
}

impl FrontMatter {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> FrontMatter {
        FrontMatter {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Render the front matter block followed by the placeholder body
    /// used by every generated index page.
    pub fn render(&self) -> String {
        format!(
            "---\n\
             title: \"{title}\"\n\
             description: \"{description}\"\n\
             ---\n\
             \n\
             # {title}\n\
             \n\
             Add your content here.\n",
            title = self.title,
            description = self.description,
        )
    }
}

/// Build the `_index.md` content for a course module from its slug.
pub fn module_index(slug: &str) -> String {
    let title = title_from_slug(slug);
    let description = format!("Learn about {title} in Python");

    FrontMatter::new(title, description).render()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn derives_title_from_slug() {
        assert_eq!("Control Flow", title_from_slug("control-flow"));
        assert_eq!(
            "Introduction To Python",
            title_from_slug("introduction-to-python")
        );
    }

    #[test]
    fn empty_slug_yields_empty_title() {
        assert_eq!("", title_from_slug(""));
        assert_eq!("", title_from_slug("--"));
    }

    #[test]
    fn renders_module_index() {
        let expected = "---\n\
                        title: \"Control Flow\"\n\
                        description: \"Learn about Control Flow in Python\"\n\
                        ---\n\
                        \n\
                        # Control Flow\n\
                        \n\
                        Add your content here.\n";

        assert_eq!(expected, module_index("control-flow"));
    }
}
