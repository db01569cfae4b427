use clap::Parser;
use da6::{run, Cli};

fn main() {
    // Listings are made to be piped into `head`/`grep`; restore the
    // default SIGPIPE disposition so an early-exiting reader ends us
    // quietly instead of panicking on a broken pipe.
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
