//! Plain-text rendering of the catalog for `--list`.

use std::io::{self, Write};

use crate::catalog::Catalog;

/// Writes every folder and its methods, commands indented under each method.
pub fn write_listing<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    for (n, folder) in catalog.folders().iter().enumerate() {
        if n > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} {}  [{}]", folder.icon, folder.key, folder.size)?;
        writeln!(out, "  {}", folder.location)?;
        writeln!(out, "  {}", folder.description)?;
        writeln!(out, "  ⚠ {}", folder.risks)?;
        writeln!(out, "  CLEANUP METHODS — {} AVAILABLE", folder.methods.len())?;

        for method in folder.methods {
            let class = catalog.classify(method.danger);
            writeln!(out)?;
            writeln!(out, "  [{}] {}", class.label, method.label)?;
            writeln!(out, "    {}", method.note)?;
            for line in method.cmd.lines() {
                writeln!(out, "      {line}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn render() -> String {
        let mut buf = Vec::new();
        write_listing(&mut buf, &CATALOG).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_folders_in_order() {
        let text = render();
        let winsxs = text.find("⬡ WinSxS").unwrap();
        let installer = text.find("◈ Installer").unwrap();
        assert!(winsxs < installer);
    }

    #[test]
    fn methods_carry_badge_labels() {
        let text = render();
        assert!(text.contains("  [DANGER] DISM + ResetBase (aggressive)"));
        assert!(text.contains("  [MEDIUM] msizap.exe (legacy SDK tool)"));
        assert_eq!(text.matches("CLEANUP METHODS — 4 AVAILABLE").count(), 2);
    }

    #[test]
    fn multi_line_commands_are_indented() {
        let text = render();
        assert!(text.contains("      cleanmgr /sageset:1\n      cleanmgr /sagerun:1\n"));
    }
}
