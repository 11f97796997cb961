use clap::Parser;
use farsirule::{
    journal::Journal, pipeline::lexical::LexicalPipeline, Correcter, CorrecterOptions, Pipeline,
};
use std::io::Read;

#[derive(Parser)]
#[clap(
    version = "1.0",
    author = "Benjamin Minixhofer <bminixhofer@gmail.com>"
)]
struct Opts {
    /// The text to correct. Read from stdin if omitted.
    text: Option<String>,
    /// A pipeline binary written by `compile`. Takes precedence over the dumps.
    #[clap(long, short)]
    pipeline: Option<String>,
    #[clap(long, default_value = "resources/words.tsv")]
    words: String,
    #[clap(long, default_value = "resources/verbs.tsv")]
    verbs: String,
    /// JSON file with correcter options.
    #[clap(long, short)]
    config: Option<String>,
    /// Appends every correction to this file as JSON lines.
    #[clap(long, short)]
    journal: Option<String>,
    /// Print the grammatical roles of each sentence instead of correcting it.
    #[clap(long)]
    components: bool,
}

fn main() -> Result<(), farsirule::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let pipeline = match &opts.pipeline {
        Some(path) => LexicalPipeline::new(path)?,
        None => LexicalPipeline::from_dumps(&opts.words, &opts.verbs)?,
    };
    let options = match &opts.config {
        Some(path) => CorrecterOptions::from_path(path)?,
        None => CorrecterOptions::default(),
    };
    let correcter = Correcter::from_options(pipeline, &options)?;

    let text = match opts.text {
        Some(text) => text,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    if opts.components {
        let pipeline = correcter.pipeline();
        for sentence in pipeline.tokenize_sentences(&pipeline.normalize(&text)) {
            println!("{:#?}", correcter.extract(&sentence)?);
        }
        return Ok(());
    }

    let (corrected, corrections) = correcter.correct_text(&text);
    if let Some(path) = &opts.journal {
        Journal::open(path)?.append(&corrections)?;
    }

    println!("{}", corrected);
    Ok(())
}
