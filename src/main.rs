use std::collections::HashMap;
use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vector_space_search::{
    corpus, HeuristicTagger, Hits, SegmentingAnalyzer, SimilarityMetric, StemmingAnalyzer,
    TermWeighting, VectorSpace,
};

/// Interactive vector space search demo.
///
/// Mode 1: English search across four metric/weighting combinations.
/// Mode 2: English search with one round of relevance feedback.
/// Mode 3: Chinese search (whitespace-split query) across two
/// weightings.
#[derive(Parser, Debug)]
#[command(name = "vector-space-search", version, about)]
struct Args {
    /// Directory holding the English corpus (*.txt)
    #[arg(long, default_value = "./EnglishNews")]
    english_dir: String,

    /// Directory holding the Chinese corpus (*.txt)
    #[arg(long, default_value = "./ChineseNews")]
    chinese_dir: String,

    /// How many documents to list per ranking
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mode = prompt("Please input a number from 1 to 3, any other input exits: ")?;
    match mode.trim() {
        "1" => mode_search(&args)?,
        "2" => mode_feedback(&args)?,
        "3" => mode_chinese(&args)?,
        _ => println!("bye"),
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn print_ranking(title: &str, hits: &Hits, top: usize) {
    println!("\n--------------------");
    println!("\n{title}\n");
    println!("File names  Scores");
    for entry in hits.top(top) {
        println!("{}  {:.5}", entry.key, entry.score);
    }
}

fn mode_search(args: &Args) -> Result<()> {
    let documents = corpus::read_directory(&args.english_dir)?;
    let space = VectorSpace::build(StemmingAnalyzer::new(), &documents)?;
    let query = prompt("Please input a query in ENGLISH: ")?;
    let query = query.trim();

    let combos = [
        (
            "Term Frequency (TF) Weighting + Cosine Similarity",
            SimilarityMetric::Cosine,
            TermWeighting::TermFrequency,
        ),
        (
            "Term Frequency (TF) Weighting + Euclidean Distance",
            SimilarityMetric::Euclidean,
            TermWeighting::TermFrequency,
        ),
        (
            "TF-IDF Weighting + Cosine Similarity",
            SimilarityMetric::Cosine,
            TermWeighting::TfIdf,
        ),
        (
            "TF-IDF Weighting + Euclidean Distance",
            SimilarityMetric::Euclidean,
            TermWeighting::TfIdf,
        ),
    ];
    for (title, metric, weighting) in combos {
        let hits = space.search_text(query, metric, weighting)?;
        print_ranking(title, &hits, args.top);
    }
    println!("\n--------------------");
    Ok(())
}

fn mode_feedback(args: &Args) -> Result<()> {
    let documents = corpus::read_directory(&args.english_dir)?;
    let texts: HashMap<&str, &str> = documents
        .iter()
        .map(|doc| (doc.id.as_str(), doc.text.as_str()))
        .collect();
    let space = VectorSpace::build(StemmingAnalyzer::new(), &documents)?;
    let query = prompt("Please input a query in ENGLISH: ")?;
    let query = query.trim();

    let initial = space.search_text(query, SimilarityMetric::Cosine, TermWeighting::TfIdf)?;
    let Some(best) = initial.top(1).first() else {
        println!("(empty corpus)");
        return Ok(());
    };
    // the top-ranked document of the initial search is the feedback source
    let feedback_text = texts.get(best.key.as_str()).copied().unwrap_or_default();
    let hits = space.search_with_feedback(query, feedback_text, &HeuristicTagger)?;
    print_ranking(
        "TF-IDF Weighting + Cosine Similarity (with relevance feedback)",
        &hits,
        args.top,
    );
    println!("\n--------------------");
    Ok(())
}

fn mode_chinese(args: &Args) -> Result<()> {
    let documents = corpus::read_directory(&args.chinese_dir)?;
    let space = VectorSpace::build(SegmentingAnalyzer::new(), &documents)?;
    let query = prompt("Please input a query in CHINESE: ")?;
    // the query is split on whitespace after input, not segmented again
    let tokens: Vec<&str> = query.split_whitespace().collect();

    let combos = [
        (
            "Term Frequency (TF) Weighting + Cosine Similarity",
            TermWeighting::TermFrequency,
        ),
        (
            "TF-IDF Weighting + Cosine Similarity",
            TermWeighting::TfIdf,
        ),
    ];
    for (title, weighting) in combos {
        let hits = space.search_tokens(&tokens, SimilarityMetric::Cosine, weighting)?;
        print_ranking(title, &hits, args.top);
    }
    println!("\n--------------------");
    Ok(())
}
