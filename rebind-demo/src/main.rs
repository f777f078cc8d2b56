use std::{io, rc::Rc};

use rebind_core::{BindError, Sink, Stdout, write_line};
use rebind_demo::{ARGUMENTS, summary};

fn main() -> Result<(), BindError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    if let Err(error) = write_line(io::stdout().lock(), summary(ARGUMENTS)) {
        tracing::warn!(%error, "failed to write summary");
    }

    let sink: Rc<dyn Sink> = Rc::new(Stdout);
    rebind_demo::run(&sink)
}
