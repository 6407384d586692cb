//! review-wordlist: normalize documents from the command line or over HTTP.

use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use review_wordlist::{Normalizer, StopwordSet};

#[derive(Parser)]
#[command(name = "review-wordlist")]
#[command(about = "Strip markup, lowercase, and tokenize documents into word lists")]
struct Cli {
    /// Word-per-line stopword list to use instead of the built-in English one.
    #[arg(long, global = true)]
    stopwords: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize one document and print its tokens as a JSON array.
    Normalize {
        /// Input file (reads stdin when omitted).
        file: Option<PathBuf>,

        /// Drop stopwords from the output.
        #[arg(long, short)]
        remove_stopwords: bool,

        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },

    /// Normalize a corpus with one document per line, writing JSON Lines.
    Corpus {
        /// Corpus file, one document per line.
        file: PathBuf,

        /// Drop stopwords from the output.
        #[arg(long, short)]
        remove_stopwords: bool,

        /// Output file (writes stdout when omitted).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Start the HTTP normalize API.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[arg(long, short, default_value_t = 3000)]
        port: u16,
    },
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let stopwords = load_stopwords(cli.stopwords.as_deref())?;
    match cli.command {
        Command::Normalize { file, remove_stopwords, pretty } => {
            let normalizer = Normalizer::new(&stopwords).with_remove_stopwords(remove_stopwords);
            run_normalize(normalizer, file.as_deref(), pretty)?;
        }
        Command::Corpus { file, remove_stopwords, output } => {
            let normalizer = Normalizer::new(&stopwords).with_remove_stopwords(remove_stopwords);
            run_corpus(normalizer, &file, output.as_deref())?;
        }
        Command::Serve { host, port } => {
            run_serve(stopwords, &host, port)?;
        }
    }
    Ok(())
}

fn load_stopwords(path: Option<&Path>) -> Result<StopwordSet, BoxError> {
    match path {
        Some(path) => {
            let set = StopwordSet::load(path)
                .map_err(|e| format!("reading stopwords from {:?}: {}", path, e))?;
            if set.is_empty() {
                eprintln!("warning: {:?} holds no stopwords, filtering will keep every token", path);
            } else {
                eprintln!("Loaded {} stopwords from {:?}", set.len(), path);
            }
            Ok(set)
        }
        None => Ok(StopwordSet::english().clone()),
    }
}

fn run_normalize(normalizer: Normalizer<'_>, file: Option<&Path>, pretty: bool) -> Result<(), BoxError> {
    let document = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let tokens = normalizer.normalize(&document);
    let json = if pretty {
        serde_json::to_string_pretty(&tokens)?
    } else {
        serde_json::to_string(&tokens)?
    };
    println!("{}", json);
    Ok(())
}

fn run_corpus(normalizer: Normalizer<'_>, file: &Path, output: Option<&Path>) -> Result<(), BoxError> {
    let reader = BufReader::new(fs::File::open(file)?);
    let mut out: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(fs::File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut docs = 0usize;
    let mut tokens = 0usize;
    for line in reader.lines() {
        let words = normalizer.normalize(&line?);
        tokens += words.len();
        docs += 1;
        serde_json::to_writer(&mut out, &words)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    eprintln!("Normalized {} documents into {} tokens", docs, tokens);
    Ok(())
}

fn run_serve(stopwords: StopwordSet, host: &str, port: u16) -> Result<(), BoxError> {
    let app = review_wordlist::server::router(Arc::new(stopwords));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let addr = format!("{}:{}", host, port);
        println!("Listening on http://{}", addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;
        Ok::<(), BoxError>(())
    })?;
    Ok(())
}
