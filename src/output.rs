/// Statement output.
///
/// Writes statements directly to a `Write` sink with no intermediate `String`
/// per line. Uses `itoa` for the integer initializers.
use std::io::{self, Write};

/// Statement kinds that make up a generated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `let <name> = <value>;`
    Declare { name: &'a str, value: usize },
    /// `print <name>;`
    Print { name: &'a str },
}

/// Write one statement followed by `\n`.
pub fn write_statement<W: Write>(w: &mut W, stmt: Statement<'_>) -> io::Result<()> {
    match stmt {
        Statement::Declare { name, value } => write_declaration(w, name, value),
        Statement::Print { name } => write_print(w, name),
    }
}

pub fn write_declaration<W: Write>(w: &mut W, name: &str, value: usize) -> io::Result<()> {
    w.write_all(b"let ")?;
    w.write_all(name.as_bytes())?;
    w.write_all(b" = ")?;
    let mut buf = itoa::Buffer::new();
    w.write_all(buf.format(value).as_bytes())?;
    w.write_all(b";\n")
}

pub fn write_print<W: Write>(w: &mut W, name: &str) -> io::Result<()> {
    w.write_all(b"print ")?;
    w.write_all(name.as_bytes())?;
    w.write_all(b";\n")
}
