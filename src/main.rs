use clap::Parser;
use json_classgen::{
    CSharpOptions, DEFAULT_ROOT_NAME, Language, generate_csharp_with_options, infer_schema,
};
use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "json-classgen")]
#[command(about = "Generate type declarations from a sample JSON document", long_about = None)]
struct Cli {
    /// Input JSON file (use '-' for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Target language
    #[arg(short, long, value_enum, default_value = "typescript")]
    lang: Language,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Type name for the top-level value
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_ROOT_NAME)]
    type_name: String,

    /// C# namespace wrapping the generated classes
    #[arg(long, value_name = "NS")]
    namespace: Option<String>,

    /// Add [JsonPropertyName] attributes to C# properties
    #[arg(long)]
    json_attributes: bool,

    /// Print the inferred schema as JSON instead of source code
    #[arg(long)]
    emit_schema: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Read input
    let input_content = if cli.input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&cli.input)?
    };
    info!("read {} bytes from {}", input_content.len(), cli.input);

    let generated = if cli.emit_schema {
        let schema = infer_schema(&input_content, &cli.type_name)?;
        serde_json::to_string_pretty(&schema)? + "\n"
    } else if cli.lang == Language::CSharp {
        let options = CSharpOptions {
            namespace: cli.namespace,
            json_attributes: cli.json_attributes,
        };
        generate_csharp_with_options(&input_content, &cli.type_name, &options)?
    } else {
        cli.lang.generate(&input_content, &cli.type_name)?
    };

    // Write output
    if let Some(output_path) = cli.output {
        info!("writing {}", output_path.display());
        fs::write(output_path, generated)?;
    } else {
        print!("{}", generated);
    }

    Ok(())
}
