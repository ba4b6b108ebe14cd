use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use corpus::{highlighted_name, load_document, strip_markup, write_document};

fn make_temp_dir(prefix: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("corpus_{}_{}", prefix, nanos));
    fs::create_dir_all(&path).unwrap();
    path
}

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn load_document_reads_the_whole_file() {
    let dir = make_temp_dir("load");
    let file_path = dir.join("sample.txt");
    write_file(&file_path, "hello world");

    let document = load_document(&file_path).expect("load document");
    assert_eq!(document, "hello world");
}

#[test]
fn load_document_reports_the_failing_path() {
    let dir = make_temp_dir("missing");
    let file_path = dir.join("does_not_exist.txt");

    let err = load_document(&file_path).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.txt"));
}

#[test]
fn write_document_round_trips() {
    let dir = make_temp_dir("write");
    let file_path = dir.join("out.html");

    write_document(&file_path, b"<p>marked</p>").expect("write document");
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "<p>marked</p>");
}

#[test]
fn highlighted_name_prefixes_the_file_name() {
    assert_eq!(
        highlighted_name(Path::new("docs/war_and_peace.html")),
        PathBuf::from("highlighted_war_and_peace.html")
    );
}

#[test]
fn stripped_document_is_searchable_text() {
    let dir = make_temp_dir("strip");
    let file_path = dir.join("page.html");
    write_file(
        &file_path,
        "<html><body><h1>Cities</h1><p>New York &amp; Chicago</p></body></html>",
    );

    let document = load_document(&file_path).expect("load document");
    let text = strip_markup(&document);
    assert_eq!(text, "CitiesNew York & Chicago");
}
