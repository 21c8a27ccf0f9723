use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Pretty-print generated Rust source.
///
/// The parser drops plain `//` comments, so the leading comment block (the
/// "Code generated" header) is cut off first and put back on top of the
/// formatted output. Doc comments survive as attributes.
pub fn format_source(source: &str) -> Result<String> {
    let (header, body) = split_header(source);
    let file = syn::parse_file(body).map_err(Error::Format)?;
    let formatted = prettyplease::unparse(&file);

    if header.is_empty() {
        return Ok(formatted);
    }

    let mut out = String::with_capacity(header.len() + formatted.len() + 1);
    for line in header {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&formatted);
    Ok(out)
}

/// Leading `//` lines (excluding doc comments), and the remaining source.
fn split_header(source: &str) -> (Vec<&str>, &str) {
    let mut header = Vec::new();
    let mut rest = source;

    while !rest.is_empty() {
        let (line, tail) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], &rest[idx + 1..]),
            None => (rest, ""),
        };
        let trimmed = line.trim();

        if trimmed.is_empty() {
            rest = tail;
            continue;
        }
        if trimmed.starts_with("//") && !trimmed.starts_with("///") && !trimmed.starts_with("//!")
        {
            header.push(trimmed);
            rest = tail;
            continue;
        }
        break;
    }

    (header, rest)
}

/// Write the generated file, replacing whatever is at `path`.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
