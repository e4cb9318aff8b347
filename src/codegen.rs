// src/codegen.rs

use crate::params::MARKER;
use crate::registry::TagSet;

/// Render the generated region of the target file: the marker line, a
/// regeneration timestamp comment, and the `lazy_static!` table the decoder
/// compiles. Pure: the same set and timestamp always produce the same
/// bytes, so reruns on unchanged sources differ only in the timestamp line.
pub fn render(tags: &TagSet, timestamp: &str) -> String {
    let mut out = s!();
    out.push_str(MARKER);
    out.push('\n');
    out.push_str(&format!("// {timestamp}\n"));
    out.push('\n');
    out.push_str("lazy_static! {\n");
    out.push_str("    pub static ref TAGS : HashMap<u16, Tag> = {\n");
    out.push_str("        let mut m = HashMap::new();\n");
    for tag in tags.iter() {
        out.push_str(&format!(
            "        m.insert({id}, Tag {{id: {id}, ifd: {ifd}, label: String::from(\"{label}\"), description: String::from(\"{description}\")}});\n",
            id = tag.id,
            ifd = tag.ifd,
            label = escape(&tag.label),
            description = escape(&tag.description),
        ));
    }
    out.push_str("        m\n");
    out.push_str("    };\n");
    out.push_str("}\n");
    out
}

/// Escape text for embedding in a Rust string literal, so scraped quotes or
/// backslashes can never break the emitted code.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}
