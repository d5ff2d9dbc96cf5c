use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Source language the table is emitted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    C,
    Rust,
}

impl Dialect {
    pub const VARIANTS: &'static [&'static str] = &["c", "rust"];
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::C
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(Dialect::C),
            "rust" => Ok(Dialect::Rust),
            other => Err(format!("unknown dialect `{}`", other)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Dialect::C => f.write_str("c"),
            Dialect::Rust => f.write_str("rust"),
        }
    }
}

/// Renders `primes` as a constant array declaration followed by a
/// declaration of its length.
pub fn render(primes: &[u64], dialect: Dialect) -> String {
    let (open, close, size) = match dialect {
        Dialect::C => (
            "static const size_t prime_table[] = {".to_owned(),
            "};",
            format!("static const size_t prime_table_size = {};", primes.len()),
        ),
        Dialect::Rust => (
            format!("pub static PRIME_TABLE: [u64; {}] = [", primes.len()),
            "];",
            format!("pub const PRIME_TABLE_SIZE: usize = {};", primes.len()),
        ),
    };

    let mut lines = vec![open];

    if !primes.is_empty() {
        lines.push(primes.iter().map(|prime| format!("    {}", prime)).join(",\n"));
    }

    lines.push(close.to_owned());
    lines.push(size);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
