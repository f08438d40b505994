use std::io::{Write, stdout};

use json64::{Error, encode_file, input_path, logger};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // The usage check runs before anything else, logger included.
    let path = match input_path(args.iter().cloned()) {
        Ok(path) => path,
        Err(usage @ Error::Usage { .. }) => {
            println!("{usage}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    logger::setup_logger();
    if args.len() > 2 {
        log::warn!("ignoring {} extra argument(s)", args.len() - 2);
    }

    let encoded = encode_file(&path)?;

    let mut out = stdout().lock();
    writeln!(out, "{encoded}")?;
    out.flush()?;

    Ok(())
}
