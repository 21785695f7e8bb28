use anyhow::Result;
use reactive_state::Reactive;
use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};
use tracing::{Level, info, warn};

const PROMPT: &str = "Press Enter to increment the counter. Type 'q' and press Enter to exit.";

fn main() -> Result<()> {
    // initialize tracing - stdout belongs to the counter line
    tracing_subscriber::fmt().with_max_level(Level::INFO).with_writer(std::io::stderr).init();

    let total = run(std::io::stdin().lock(), std::io::stdout())?;
    info!(total, "counter demo finished");
    Ok(())
}

/// Reads lines from `input` until `q` or EOF, incrementing a counter for every other line.
/// Each increment is rendered to `output` by a listener on the counter.
fn run<R, W>(input: R, output: W) -> Result<u64>
where
    R: BufRead,
    W: Write + Send + 'static,
{
    let output = Arc::new(Mutex::new(output));
    writeln!(output.lock().unwrap_or_else(|e| e.into_inner()), "{PROMPT}")?;

    let counter = Reactive::new(0u64);
    {
        let output = output.clone();
        counter.subscribe(move |value: u64| {
            let mut out = output.lock().unwrap_or_else(|e| e.into_inner());
            if let Err(e) = write!(out, "\rCounter: {value}").and_then(|_| out.flush()) {
                warn!("failed to render counter: {e}");
            }
        });
    }

    for line in input.lines() {
        if line? == "q" {
            break;
        }
        counter.set(counter.get() + 1);
    }

    Ok(counter.get())
}
