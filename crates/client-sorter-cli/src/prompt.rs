use client_sorter_core::ClientIdentity;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

/// Print `prompt` and read one trimmed line. EOF yields an empty string.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<PathBuf> {
    prompt_line(input, output, prompt).map(PathBuf::from)
}

/// Read client lines until `done` (any case) or EOF.
///
/// Blank lines are ignored; a line that is not `First Last` or
/// `First Middle Last` is reported and skipped.
pub fn read_roster<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Vec<ClientIdentity>> {
    writeln!(
        output,
        "\nEnter client names (First Middle(optional) Last), type 'done' when finished:"
    )?;
    output.flush()?;

    let mut roster = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let entry = line.trim();
        if entry.eq_ignore_ascii_case("done") {
            break;
        }
        if entry.is_empty() {
            continue;
        }

        match ClientIdentity::parse(entry) {
            Ok(client) => roster.push(client),
            Err(err) => warn!("{}", err),
        }
    }

    Ok(roster)
}

/// Parse roster entries given on the command line, skipping malformed ones.
pub fn parse_roster_args(entries: &[String]) -> Vec<ClientIdentity> {
    entries
        .iter()
        .filter_map(|entry| match ClientIdentity::parse(entry) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!("{}", err);
                None
            }
        })
        .collect()
}
