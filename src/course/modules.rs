//! Path spec for the Python course modules: a welcome index plus one
//! subdirectory per module, each carrying a generated `_index.md`.

use crate::{
    front_matter::{self, FrontMatter},
    tree::Node,
};

/// Course module slugs, in presentation order. Each becomes both a
/// directory name and the source of its index page title.
pub const MODULE_SLUGS: &[&str] = &[
    "introduction-to-python",
    "variables-and-data-types",
    "control-flow",
    "functions",
    "working-with-files",
    "error-handling",
    "modules-and-packages",
    "object-oriented-programming",
    "python-data-structures",
    "intro-to-python-libraries",
    "python-best-practices",
    "final-project",
];

/// Build the course path spec rooted at the given content directory.
pub fn tree(content_dir: &str) -> Node {
    let welcome = FrontMatter::new(
        "Welcome to PythonPrimer.com",
        "Your journey to mastering Python starts here!",
    )
    .render();

    let modules: Vec<(String, Node)> = MODULE_SLUGS
        .iter()
        .map(|&slug| {
            let index = front_matter::module_index(slug);
            let module = Node::dir([(String::from("_index.md"), Node::file(index))]);

            (String::from(slug), module)
        })
        .collect();

    Node::dir([(
        content_dir,
        Node::dir([
            (String::from("_index.md"), Node::file(welcome)),
            (String::from("modules"), Node::dir(modules)),
        ]),
    )])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path_spec_has_one_directory_per_module() {
        let tree = tree("content");
        let modules = tree
            .get("content")
            .and_then(|content| content.get("modules"))
            .expect("modules directory missing from path spec");

        assert_eq!(12, MODULE_SLUGS.len());
        assert_eq!(MODULE_SLUGS.len(), modules.file_count());

        for slug in MODULE_SLUGS {
            let index = modules
                .get(slug)
                .and_then(|module| module.get("_index.md"));

            assert!(index.is_some(), "missing _index.md for module {slug}");
        }
    }

    #[test]
    fn module_index_interpolates_title() {
        let tree = tree("content");
        let index = tree
            .get("content")
            .and_then(|content| content.get("modules"))
            .and_then(|modules| modules.get("control-flow"))
            .and_then(|module| module.get("_index.md"))
            .expect("control-flow index missing from path spec");

        let Node::File(content) = index else {
            panic!("expected a file node");
        };

        assert!(content.contains("title: \"Control Flow\""));
        assert!(content.contains("description: \"Learn about Control Flow in Python\""));
    }
}
