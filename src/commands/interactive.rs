use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use super::CommandContext;
use crate::output::{create_writer, OutputFormat, WriterRenderer};
use crate::session::{Session, SessionCommand};

const HELP: &str = "commands: set <project> <field> <value> | reset <project> | show | quit";

/// Drive a session from stdin, rendering to stdout after every edit.
pub fn run_session(context: &CommandContext, format: Option<OutputFormat>) -> Result<()> {
    let format = context.output_format(format);
    let mut session = Session::new(context.config.projects.clone());
    session.add_renderer(WriterRenderer::new(create_writer(
        format,
        context.formatting,
        Box::new(std::io::stdout()),
    )));

    eprintln!("{}", HELP);
    session.notify();

    let stdin = std::io::stdin();
    drive(&mut session, stdin.lock(), std::io::stderr())
}

/// Feed each input line to the session until `quit` or end of input.
///
/// Bad lines are reported on `errors` and skipped; they never end the session.
pub fn drive<R: BufRead, E: Write>(session: &mut Session, input: R, mut errors: E) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        debug!(line = %line, "session input");

        let outcome = line
            .parse::<SessionCommand>()
            .and_then(|command| session.execute(command));
        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                warn!("rejected session input: {}", e);
                writeln!(errors, "error: {}", e)?;
                writeln!(errors, "{}", HELP)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_projects;
    use crate::session::Snapshot;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn renders_after_each_accepted_edit() {
        let renders = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&renders);
        let mut session = Session::new(default_projects());
        session.add_renderer(move |_: &Snapshot| *counter.borrow_mut() += 1);

        let input = "set lighter points 10,000\n\nset lighter expenses 500\nset nope points 1\nshow\nquit\nset lighter points 1\n";
        let mut errors = Vec::new();
        drive(&mut session, input.as_bytes(), &mut errors).unwrap();

        // two edits + show; the bad line and everything after quit do not render
        assert_eq!(*renders.borrow(), 3);
        assert_eq!(session.state().get("lighter").unwrap().points, "10,000");
        assert_eq!(session.portfolio_metrics().total_value, 700_000.0);

        let errors = String::from_utf8(errors).unwrap();
        assert!(errors.contains("Unknown project: nope"));
    }

    #[test]
    fn skips_comments() {
        let mut session = Session::new(default_projects());
        let mut errors = Vec::new();
        drive(&mut session, "# note\nset paradex fdv 1e9\n".as_bytes(), &mut errors).unwrap();
        assert!(errors.is_empty());
        assert_eq!(session.state().get("paradex").unwrap().fdv, 1_000_000_000.0);
    }
}
