//! Line-oriented front end over any reader and writer.
//!
//! Drives the same menu and command queue as the terminal UI, printing the
//! menu, prompts and messages as plain text. Used for `--headless` runs and
//! scripted sessions.

use crate::app::{App, Level};
use crate::command::Menu;
use crate::error::{PlotError, Result};
use std::io::{BufRead, Write};

/// Run the menu until exit or end of input.
pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, out: &mut W) -> Result<()> {
    let mut printed = 0;
    print_messages(app, out, &mut printed)?;

    let mut lines = input.split(b'\n');
    while app.running {
        if app.menu.is_awaiting_choice() {
            for line in Menu::lines() {
                writeln!(out, "{}", line)?;
            }
        }
        write!(out, "{}> ", app.menu.prompt())?;
        out.flush()?;

        let Some(raw) = lines.next() else {
            writeln!(out)?;
            tracing::info!("End of input");
            break;
        };
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        writeln!(out)?;

        match String::from_utf8(raw) {
            Ok(line) => {
                app.submit_line(&line);
                app.process_commands();
            },
            Err(_) => {
                app.menu.cancel();
                app.error(PlotError::invalid_input("line is not valid UTF-8").to_string());
            },
        }
        print_messages(app, out, &mut printed)?;
    }

    Ok(())
}

fn print_messages<W: Write>(app: &App, out: &mut W, printed: &mut usize) -> Result<()> {
    for message in app.messages_after(*printed) {
        let prefix = match message.level {
            Level::Info => "",
            Level::Warning => "warning: ",
            Level::Error => "error: ",
        };
        writeln!(out, "{}{}", prefix, message.text)?;
    }
    *printed = app.messages_total;
    Ok(())
}
