//! Command surface: sequences load, selection, resolution and login.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};

use crate::{
    config::{read_selection, select_name, ConfigDocument, HomeDir},
    login::{self, LoginAction},
};

pub mod args;

pub use args::LoginArgs;

/// Run one invocation end to end.
///
/// Input and output are injected so the interactive flow is testable with a
/// cursor and a recording login action; `main` wires up stdin, stdout and
/// the real `cf` CLI.
pub fn run(
    args: LoginArgs,
    home: &HomeDir,
    action: &dyn LoginAction,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let config_path = home.expand(&args.filename);
    let document = ConfigDocument::load(&config_path, home)?;

    let profile_name = if args.list {
        prompt_for_profile(&document, input, &mut output)?
    } else {
        args.profile
            .ok_or_else(|| anyhow!("Please specify a profile."))?
    };

    writeln!(output, "Using profile: '{profile_name}'")?;
    let profile = document.resolve(&profile_name)?;
    login::invoke(action, &profile)?;
    writeln!(output, "OK")?;
    Ok(())
}

/// Present the zero-based menu and apply the selection policy.
fn prompt_for_profile(
    document: &ConfigDocument,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<String> {
    let names = document.profile_names();

    writeln!(output, "Available profiles:")?;
    for (index, name) in names.iter().enumerate() {
        writeln!(output, "{index}. {name}")?;
    }
    write!(output, "Select profile: ")?;
    output.flush()?;

    let selection = read_selection(input);
    Ok(select_name(&names, selection)?.to_string())
}
