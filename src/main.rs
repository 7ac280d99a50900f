extern crate simple_logging;
extern crate log;

use std::io::{self, Read};
use std::process;

use atty::Stream;
use clap::{Arg, App};
use log::LevelFilter;

use jsx_scrub::{scrub, scrub_file, Options};

fn load_stdin() -> io::Result<String> {
    log::trace!("In load_stdin");

    if atty::is(Stream::Stdin) {
        return Err(io::Error::new(io::ErrorKind::Other, "stdin not redirected"));
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    return Ok(buffer);
}

fn main() {
    log::trace!("In main");

    let _ = simple_logging::log_to_file("debug.log", LevelFilter::Trace);

    let mut document = String::new();

    match load_stdin() {
        Ok(stdin) => {
            document = stdin;
        }
        Err(_e) => {
            log::debug!("Did not receive input from stdin");
        }
    }

    let matches = App::new("jsx-scrub")
        .arg(Arg::with_name("file")
             .short('f')
             .long("file")
             .value_name("FILE")
             .help("Provide file as document for processing"))
        .arg(Arg::with_name("attributes")
             .short('a')
             .long("attributes")
             .value_name("ATTRIBUTES")
             .help("Comma-separated attribute names to strip"))
        .get_matches();

    let mut options = Options::default();

    if let Some(attributes) = matches.value_of("attributes") {
        log::debug!("attributes: {}", attributes);

        options.attributes = Some(
            attributes
                .split(',')
                .map(|name| name.trim().to_string())
                .collect()
        );
    }

    let result = if let Some(file_name) = matches.value_of("file") {
        log::debug!("file_name: {}", file_name);

        scrub_file(file_name, &options)
    } else {
        if document.trim().is_empty() {
            log::debug!("Document not provided, aborting...");
            eprintln!("Document not provided");
            process::exit(1);
        }

        scrub(document, &options)
    };

    match result {
        Ok(output) => {
            println!("{}", output);
        }
        Err(err) => {
            log::error!("Failed to process document: {:?}", err);
            eprintln!("Failed to process document: {:?}", err);
            process::exit(1);
        }
    }
}
