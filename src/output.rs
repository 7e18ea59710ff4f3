//! Generated output: ordered C blocks and the single write that emits them.

use std::io::{self, Write};

/// Separator placed between two adjacent blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// The generated C unit.
///
/// Blocks are kept in their emission order: every test function, then the test-case table, then
/// the test-group table. The tables reference only functions defined above them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    functions: Vec<String>,
    case_table: String,
    group_table: String,
}

impl GeneratedOutput {
    pub fn new(functions: Vec<String>, case_table: String, group_table: String) -> Self {
        Self {
            functions,
            case_table,
            group_table,
        }
    }

    /// Test function blocks, in selection order.
    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    pub fn case_table(&self) -> &str {
        &self.case_table
    }

    pub fn group_table(&self) -> &str {
        &self.group_table
    }

    /// All blocks in emission order.
    pub fn blocks(&self) -> impl Iterator<Item = &str> {
        self.functions
            .iter()
            .map(String::as_str)
            .chain([self.case_table.as_str(), self.group_table.as_str()])
    }

    /// Join all blocks with [`BLOCK_SEPARATOR`].
    pub fn render(&self) -> String {
        self.blocks().collect::<Vec<_>>().join(BLOCK_SEPARATOR)
    }

    /// Write the rendered unit as UTF-8 bytes in a single `write_all`, then flush.
    ///
    /// The encoding never depends on the environment's locale settings.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let rendered = self.render();
        writer.write_all(rendered.as_bytes())?;
        writer.flush()?;
        tracing::debug!(bytes = rendered.len(), "wrote generated unit");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn output() -> GeneratedOutput {
        GeneratedOutput::new(
            vec!["void a() {\n}".into(), "void b() {\n}".into()],
            "CASES".into(),
            "GROUPS".into(),
        )
    }

    #[test]
    fn test_blocks_order() {
        let output = output();
        let blocks: Vec<&str> = output.blocks().collect();
        assert_eq!(blocks, vec!["void a() {\n}", "void b() {\n}", "CASES", "GROUPS"]);
    }

    #[test]
    fn test_render_joins_without_trailing_separator() {
        assert_eq!(output().render(), "void a() {\n}\n\nvoid b() {\n}\n\nCASES\n\nGROUPS");
    }

    #[test]
    fn test_render_without_functions() {
        let output = GeneratedOutput::new(Vec::new(), "CASES".into(), "GROUPS".into());
        assert_eq!(output.render(), "CASES\n\nGROUPS");
    }

    #[test]
    fn test_write_to_emits_utf8_bytes() {
        let output = GeneratedOutput::new(vec!["/* é */".into()], "C".into(), "G".into());
        let mut buf = Vec::new();
        output.write_to(&mut buf).unwrap();
        assert_eq!(buf, "/* é */\n\nC\n\nG".as_bytes());
    }
}
