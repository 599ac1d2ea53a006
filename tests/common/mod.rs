use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Minimal attribute-value escaping for hand-built fixture rows.
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render one `<row .../>` element from attribute pairs.
pub fn row(attrs: &[(&str, &str)]) -> String {
    let mut s = String::from("  <row");
    for (k, v) in attrs {
        s.push_str(&format!(" {}=\"{}\"", k, xml_escape(v)));
    }
    s.push_str(" />");
    s
}

/// Write a complete posts.xml document with the provided rows.
pub fn write_posts_xml(path: &Path, rows: &[String]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = File::create(path).unwrap();
    writeln!(&mut f, r#"<?xml version="1.0" encoding="utf-8"?>"#).unwrap();
    writeln!(&mut f, "<posts>").unwrap();
    for r in rows {
        writeln!(&mut f, "{}", r).unwrap();
    }
    writeln!(&mut f, "</posts>").unwrap();
}

/// Build a tiny **valid** dump with:
/// - q1: question with accepted answer, tags `<rust><xml>`, 2-word body, score 5
/// - a10: answer to q1 exactly one day later, 1-word body, score 3
/// - q2: question with accepted answer, tags `<rust>`, 4-word body, score 1
/// - a11: answer to q2 half a day later, 2-word body, score 2
/// - a12: answer whose parent (999) does not exist — exercises the join miss
/// - m50: tag-wiki style row (`PostTypeId=4`) with tags but **no** accepted
///   answer marker and no body — excluded from the tag and word/score passes
///
/// Derived ground truth: tags `rust:2, xml:1`; matched latencies 1.0 and 0.5
/// days (mean 0.75); questions `1` and `2`; five valid word/score pairs.
pub fn make_dump_basic() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.into_path();
    let dump = base.join("posts.xml");

    let rows = vec![
        row(&[
            ("Id", "1"),
            ("PostTypeId", "1"),
            ("CreationDate", "2020-01-01T00:00:00"),
            ("Score", "5"),
            ("Body", "alpha beta"),
            ("Tags", "<rust><xml>"),
            ("AcceptedAnswerId", "10"),
        ]),
        row(&[
            ("Id", "10"),
            ("PostTypeId", "2"),
            ("ParentId", "1"),
            ("CreationDate", "2020-01-02T00:00:00"),
            ("Score", "3"),
            ("Body", "alpha"),
        ]),
        row(&[
            ("Id", "2"),
            ("PostTypeId", "1"),
            ("CreationDate", "2020-01-03T00:00:00"),
            ("Score", "1"),
            ("Body", "alpha beta gamma delta"),
            ("Tags", "<rust>"),
            ("AcceptedAnswerId", "11"),
        ]),
        row(&[
            ("Id", "11"),
            ("PostTypeId", "2"),
            ("ParentId", "2"),
            ("CreationDate", "2020-01-03T12:00:00"),
            ("Score", "2"),
            ("Body", "beta gamma"),
        ]),
        row(&[
            ("Id", "12"),
            ("PostTypeId", "2"),
            ("ParentId", "999"),
            ("CreationDate", "2020-01-05T00:00:00"),
            ("Score", "0"),
            ("Body", "x1"),
        ]),
        row(&[
            ("Id", "50"),
            ("PostTypeId", "4"),
            ("CreationDate", "2020-01-06T00:00:00"),
            ("Tags", "<meta>"),
        ]),
    ];
    write_posts_xml(&dump, &rows);
    dump
}

/// Write a document that is truncated mid-element, so the XML reader must
/// fail at the document level (not merely skip a record).
pub fn make_dump_malformed() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.into_path();
    let dump = base.join("posts.xml");
    fs::create_dir_all(dump.parent().unwrap()).unwrap();
    let mut f = File::create(&dump).unwrap();
    write!(&mut f, r#"<posts><row Id="1" PostTypeId="#).unwrap();
    dump
}
