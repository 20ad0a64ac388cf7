use clap::Parser;
use fontcreate::character::preview_compiled;
use fontcreate::command::CommandLineArgs;
use fontcreate::{compile, logging, FontError};

fn main() -> Result<(), FontError> {
    let args = CommandLineArgs::parse();
    logging::init(args.log_level);

    let report = compile(&args.input, &args.output)?;

    if !args.preview.is_empty() {
        if let Some(preview) = preview_compiled(&args.output, &report, &args.preview)? {
            print!("{}", preview);
        }
    }

    println!("total: {}", report.glyph_count);
    Ok(())
}
