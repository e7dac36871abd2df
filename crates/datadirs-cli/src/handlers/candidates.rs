//! Candidates command handler.
//!
//! Lists what every applicable source contributes, before any directory is
//! probed or created. Useful to find out why a directory is not searched.

use std::fmt::Write as _;

use anyhow::Result;
use datadirs_core::SourceCandidates;

use crate::bootstrap::CliContext;

/// Execute the candidates command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    print!("{}", render(&ctx.locater.collect_sources()));
    Ok(())
}

fn render(sources: &[SourceCandidates]) -> String {
    let mut out = String::new();
    for source in sources {
        let _ = writeln!(out, "{}:", source.kind);
        if source.dirs.is_empty() {
            out.push_str("  (none)\n");
        }
        for dir in &source.dirs {
            let _ = writeln!(out, "  {dir}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use datadirs_core::{DataDir, PathStyle, SourceKind};

    #[test]
    fn renders_each_source_with_its_dirs() {
        let sources = vec![
            SourceCandidates {
                kind: SourceKind::EnvVar,
                dirs: vec![
                    DataDir::new("/a", PathStyle::Posix),
                    DataDir::new("/b", PathStyle::Posix),
                ],
            },
            SourceCandidates {
                kind: SourceKind::ConfigKey,
                dirs: Vec::new(),
            },
        ];

        assert_eq!(
            render(&sources),
            "environment variable:\n  /a/\n  /b/\nconfiguration key:\n  (none)\n"
        );
    }
}
