use swc_common::sync::Lrc;
use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Program;
use swc_ecma_codegen::{text_writer::JsWriter, Emitter};
use swc_ecma_parser::lexer::Lexer;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};

use crate::error::Errors;

pub fn parse_program(text: &str) -> Result<(Program, Lrc<SourceMap>), Errors> {
    log::trace!("In parse_program");

    let cm: Lrc<SourceMap> = Default::default();

    let source_file = cm.new_source_file(
        Lrc::new(FileName::Custom("document.jsx".into())),
        text.to_string(),
    );

    let lexer = Lexer::new(
        Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        Default::default(),
        StringInput::from(&*source_file),
        None,
    );

    let mut parser = Parser::new_from(lexer);

    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(err) => {
            log::debug!("parse error: {:?}", err);

            return Err(Errors::JsParseError);
        }
    };

    let recovered = parser.take_errors();
    if !recovered.is_empty() {
        log::debug!("recovered parse errors: {:?}", recovered);

        return Err(Errors::JsParseError);
    }

    Ok((program, cm))
}

pub fn emit_program(program: &Program, cm: Lrc<SourceMap>) -> Result<String, Errors> {
    log::trace!("In emit_program");

    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(cm.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: Default::default(),
            comments: None,
            cm: cm.clone(),
            wr: Box::new(writer),
        };

        let result = match program {
            Program::Module(module) => emitter.emit_module(module),
            Program::Script(script) => emitter.emit_script(script),
        };

        if let Err(err) = result {
            log::debug!("emit error: {:?}", err);

            return Err(Errors::CodeGenerationError);
        }
    }

    Ok(String::from_utf8(buf).expect("non-utf8 output from emitter"))
}
