//! Domain-focused tests for path resolution and entry classification.

use crate::files::domain::{
    EntryKind, FileEntry, FilesDomainError, RootedPath, extension_of, is_image_file,
    is_markdown_file, is_text_file, sort_entries,
};
use rstest::rstest;

const ROOT: &str = "/clawd";

#[rstest]
#[case("", "/clawd", "")]
#[case("/notes/today.md", "/clawd/notes/today.md", "/notes/today.md")]
#[case("notes/today.md", "/clawd/notes/today.md", "/notes/today.md")]
#[case("//notes///today.md", "/clawd/notes/today.md", "/notes/today.md")]
#[case("/notes/./today.md", "/clawd/notes/today.md", "/notes/today.md")]
#[case("/notes/drafts/../today.md", "/clawd/notes/today.md", "/notes/today.md")]
fn resolve_confines_paths_under_the_root(
    #[case] input: &str,
    #[case] expected_full: &str,
    #[case] expected_relative: &str,
) {
    let resolved = RootedPath::resolve(ROOT, input).expect("path should resolve");
    assert_eq!(resolved.full(), expected_full);
    assert_eq!(resolved.relative(), expected_relative);
}

#[rstest]
#[case("..")]
#[case("../etc/passwd")]
#[case("/notes/../../etc")]
#[case("a//..//../x")]
fn resolve_rejects_escapes(#[case] input: &str) {
    let result = RootedPath::resolve(ROOT, input);
    assert_eq!(
        result,
        Err(FilesDomainError::PathOutsideRoot {
            path: input.to_owned()
        })
    );
}

#[rstest]
fn resolve_handles_multi_segment_roots() {
    let resolved =
        RootedPath::resolve("/team/arlo", "/a/../b.md").expect("path should resolve");
    assert_eq!(resolved.full(), "/team/arlo/b.md");

    let escape = RootedPath::resolve("/team/arlo", "/a/../../b.md");
    assert!(escape.is_err());
}

#[rstest]
#[case("today.md", Some("md"))]
#[case("archive.tar.GZ", Some("gz"))]
#[case("README", None)]
#[case(".gitignore", None)]
fn extension_extraction(#[case] filename: &str, #[case] expected: Option<&str>) {
    assert_eq!(extension_of(filename).as_deref(), expected);
}

#[rstest]
fn extension_classification() {
    assert!(is_image_file("diagram.PNG"));
    assert!(!is_image_file("diagram.md"));
    assert!(is_markdown_file("notes.mdx"));
    assert!(is_text_file("config.toml"));
    assert!(!is_text_file("photo.jpeg"));
}

fn entry(name: &str, kind: EntryKind) -> FileEntry {
    FileEntry {
        name: name.to_owned(),
        path: format!("/{name}"),
        kind,
        size: None,
        modified: None,
        extension: None,
    }
}

#[rstest]
fn sort_puts_folders_first_then_case_insensitive_names() {
    let mut entries = vec![
        entry("zeta.md", EntryKind::File),
        entry("Alpha.md", EntryKind::File),
        entry("beta", EntryKind::Folder),
        entry("Archive", EntryKind::Folder),
    ];
    sort_entries(&mut entries);

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Archive", "beta", "Alpha.md", "zeta.md"]);
}
