use env_logger::{Builder, Env};
use std::io::Write;

/// Installs the stderr logger. Each record is wrapped in a C block comment so
/// that stdout and stderr can be captured into the same source file. The
/// default level is `info`; `RUST_LOG` overrides it.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "/* {} */", record.args()))
        .init();
}
