use std::io;

use tracing::{debug, instrument};

use crate::arena::TopoTree;
use crate::cli::args::{Cli, SortOrder};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::extract;
use crate::levels::LevelSchema;
use crate::paths;
use crate::render;
use crate::walk;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let tree = build_topology(cli)?;

    if cli.json || cli.pretty {
        let dump = tree.to_json();
        let text = if cli.pretty {
            serde_json::to_string_pretty(&dump)?
        } else {
            serde_json::to_string(&dump)?
        };
        output::info(&text);
    } else {
        let drawing = match cli.sort {
            SortOrder::Value => render::render(tree.tokens(walk::by_trailing_number)),
            SortOrder::Label => render::render(tree.tokens(walk::by_label)),
        };
        print!("{}", drawing);
    }
    Ok(())
}

/// Run the extraction pipeline and build the prefix tree.
#[instrument(skip(cli))]
fn build_topology(cli: &Cli) -> CliResult<TopoTree> {
    let schema = LevelSchema::cpu();

    let pairs = if cli.file.as_os_str() == "-" {
        extract::scan(io::stdin().lock(), &schema)?
    } else {
        extract::scan_file(&cli.file, &schema)?
    };

    let id_paths = paths::id_paths(&pairs, &schema)?;
    debug!("building tree from {} id-paths", id_paths.len());

    let mut tree = TopoTree::new();
    for path in &id_paths {
        tree.insert_path(path);
    }
    debug!(
        "tree has {} nodes, {} leaves",
        tree.node_count(),
        tree.leaf_count()
    );
    Ok(tree)
}
