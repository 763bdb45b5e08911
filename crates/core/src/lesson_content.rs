//! Lesson content segmentation.
//!
//! Lesson bodies are plain text with fenced code blocks. They are split
//! into an ordered list of paragraphs and code blocks for rendering.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Any fenced block, including malformed ones.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));

/// A well-formed fenced block: optional language, newline, body.
static CODE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A```(\w+)?\n(.*?)```\z").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ContentSegment {
    Paragraph { text: String },
    Code { language: Option<String>, code: String },
}

fn push_paragraphs(text: &str, out: &mut Vec<ContentSegment>) {
    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if !paragraph.is_empty() {
            out.push(ContentSegment::Paragraph {
                text: paragraph.to_string(),
            });
        }
    }
}

/// Split `content` into paragraphs and code blocks, in order.
///
/// Paragraphs are separated by blank lines; empty ones are dropped. A
/// fenced block without the `lang\n` header is kept as paragraph text.
pub fn segment_content(content: &str) -> Vec<ContentSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for fence in FENCE_RE.find_iter(content) {
        push_paragraphs(&content[cursor..fence.start()], &mut segments);
        match CODE_BLOCK_RE.captures(fence.as_str()) {
            Some(caps) => segments.push(ContentSegment::Code {
                language: caps.get(1).map(|m| m.as_str().to_string()),
                code: caps
                    .get(2)
                    .map_or("", |m| m.as_str())
                    .trim_end_matches('\n')
                    .to_string(),
            }),
            None => push_paragraphs(fence.as_str(), &mut segments),
        }
        cursor = fence.end();
    }
    push_paragraphs(&content[cursor..], &mut segments);

    segments
}
