use clap::Parser;
use farsirule::pipeline::lexical::LexicalPipeline;
use fs_err::File;
use std::io::BufWriter;

#[derive(Parser)]
#[clap(
    version = "1.0",
    author = "Benjamin Minixhofer <bminixhofer@gmail.com>"
)]
struct Opts {
    /// Word dump with one `word<TAB>TAG` entry per line.
    #[clap(long, default_value = "resources/words.tsv")]
    words: String,
    /// Verb dump with one `past<TAB>present` entry per line.
    #[clap(long, default_value = "resources/verbs.tsv")]
    verbs: String,
    /// Where to write the binary.
    #[clap(long, short)]
    out: String,
}

fn main() -> Result<(), farsirule::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let pipeline = LexicalPipeline::from_dumps(&opts.words, &opts.verbs)?;
    pipeline.to_writer(BufWriter::new(File::create(&opts.out)?))?;

    log::info!("wrote pipeline to {}", opts.out);
    Ok(())
}
