use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use letterpath::graph::{Graph, Vertex};
use letterpath::graph_algos::dijkstra::dijkstra;
use letterpath::io::{format_route, join_path, parse_record};

// Every batch solves the same route, as in the historical tool
const START: Vertex = 'A';
const END: Vertex = 'B';

/// Solve the A -> B route for every graph description in a directory
#[derive(Parser)]
struct Args {
    /// Directory of graph description files
    #[arg(default_value = "./input")]
    input_dir: PathBuf,

    /// Directory for per-graph result files; nothing is persisted without it
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let files = match input_files(&args.input_dir) {
        Ok(files) => files,
        Err(error) => {
            eprintln!("unable to read input directory {}: {}", args.input_dir.display(), error);
            return;
        }
    };

    // a failed graph is reported and the batch moves on
    for file in files {
        if let Err(error) = process_file(&file, args.output_dir.as_deref()) {
            eprintln!("{}: {}", file.display(), error);
        }
    }
}

/// Files of the input directory in sorted name order, for a stable batch order
fn input_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

/// Parse one description file, solve it, and render the result
fn process_file(path: &Path, output_dir: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let graph: Graph<u64> = parse_record(&text)?;

    println!("\n********************************************************");
    println!("Vertices: {}", graph.vertex_count());
    println!("Start: {}", START);
    println!("End: {}", END);

    let route = dijkstra(&graph, START, END)?;

    println!("Final Weight: {}", route.total_weight);
    println!("Final Path: {}", join_path(&route.path));
    println!();

    // persist the result only for a solved graph
    if let Some(output_dir) = output_dir {
        if let Some(stem) = path.file_stem() {
            let result_path = output_dir.join(stem).with_extension("out");
            fs::write(&result_path, format_route(&route))?;
        }
    }

    Ok(())
}
