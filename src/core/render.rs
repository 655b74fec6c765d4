use std::io::{self, Write};

use crate::models::{Connector, LineLabel, TreeLine};

pub const BRANCH: &str = "├── ";
pub const TERMINAL: &str = "└── ";
pub const PIPE: &str = "│   ";
pub const BLANK: &str = "    ";

pub fn write_line<W: Write>(writer: &mut W, line: &TreeLine<'_>) -> io::Result<()> {
    for &has_more in line.ancestors {
        if has_more {
            writer.write_all(PIPE.as_bytes())?;
        } else {
            writer.write_all(BLANK.as_bytes())?;
        }
    }

    match line.connector {
        Connector::Branch => writer.write_all(BRANCH.as_bytes())?,
        Connector::Terminal => writer.write_all(TERMINAL.as_bytes())?,
    }

    match &line.label {
        LineLabel::Entry(name) => writer.write_all(name.as_bytes())?,
        LineLabel::PermissionDenied => writer.write_all(b"[Permission denied]")?,
        LineLabel::Unreadable(reason) => write!(writer, "[Error: {reason}]")?,
    }

    writer.write_all(b"\n")
}
