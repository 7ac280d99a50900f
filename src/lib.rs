use std::fs::File;
use std::io::Read;
use std::process;

use swc_ecma_ast::Program;
use swc_ecma_visit::VisitMutWith;

mod ast;
mod attribute_set;
mod constants;
mod error;
mod options;
mod transform;

pub use attribute_set::AttributeNameSet;
pub use error::Errors;
pub use options::Options;
pub use transform::{filter_attributes, strip_element_attributes, StripAttributes};

pub fn scrub(text: String, options: &Options) -> Result<String, Errors> {
    log::trace!("In scrub");

    if text.trim().is_empty() {
        log::info!("Document not provided, aborting...");
        return Err(Errors::DocumentNotProvided);
    }

    let attribute_set = AttributeNameSet::resolve(options)?;
    log::debug!("attribute_set: {:?}", attribute_set);

    let (mut program, source_map) = ast::parse_program(&text)?;
    log::info!("Done parsing document");

    scrub_program(&mut program, &attribute_set);
    log::info!("Done stripping attributes");

    let output = ast::emit_program(&program, source_map)?;
    log::info!("Done emitting document");

    Ok(output)
}

pub fn scrub_file(file_name: &str, options: &Options) -> Result<String, Errors> {
    log::trace!("In scrub_file");
    log::debug!("file_name: {}", file_name);

    let mut document = String::new();

    let mut file = File::open(file_name).unwrap_or_else(|err| {
        eprintln!("Failed to open file: {}", err);
        process::exit(1);
    });

    file.read_to_string(&mut document).unwrap_or_else(|err| {
        eprintln!("Failed to read file: {}", err);
        process::exit(1);
    });

    scrub(document, options)
}

pub fn scrub_program(program: &mut Program, attribute_set: &AttributeNameSet) {
    log::trace!("In scrub_program");

    let mut visitor = StripAttributes { attribute_set };

    program.visit_mut_with(&mut visitor);
}
