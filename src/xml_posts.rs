//! Record source: streaming parse of a `posts.xml` dump into `Post` records.

use crate::post::Post;
use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

fn post_from_element(e: &BytesStart) -> Post {
    let mut post = Post::default();
    for attr in e.attributes().flatten() {
        if let Ok(v) = attr.unescape_value() {
            post.set_attr(attr.key.as_ref(), v.into_owned());
        }
    }
    post
}

/// Parse every `<row .../>` element under the document root.
/// Any reader-level error aborts the parse; attribute-level oddities are
/// tolerated (the affected attribute is simply absent from the record).
pub fn parse_posts(path: &Path) -> Result<Vec<Post>> {
    let mut reader = Reader::from_file(path)
        .with_context(|| format!("open {}", path.display()))?;
    reader.config_mut().trim_text(true);

    let mut posts = Vec::new();
    let mut buf = Vec::with_capacity(16 * 1024);
    loop {
        match reader
            .read_event_into(&mut buf)
            .with_context(|| format!("malformed XML in {}", path.display()))?
        {
            Event::Eof => break,
            Event::Empty(e) | Event::Start(e) => {
                if e.name().as_ref() == b"row" {
                    posts.push(post_from_element(&e));
                }
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(posts)
}

/// Best-effort load: a malformed document yields an **empty** record set plus
/// a logged error. Downstream statistics then fail individually with their
/// own degenerate-input conditions instead of the whole run aborting.
pub fn load_posts(path: &Path) -> Vec<Post> {
    match parse_posts(path) {
        Ok(posts) => {
            tracing::info!("Parsed {} posts from {}", posts.len(), path.display());
            posts
        }
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "failed to parse posts dump");
            Vec::new()
        }
    }
}
