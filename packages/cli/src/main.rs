//! `cyrest` command-line interface.
//!
//! Thin front end over [`cyrest_client::CyRestClient`] for poking at a
//! running Cytoscape from the shell:
//!
//! ```sh
//! cyrest list
//! cyrest import galFiltered.sif
//! cyrest --network galFiltered.sif neighbors YDL194W --nested
//! cyrest add-edges YDL194W:YPR145W --type pd --directed
//! CYREST_BASE_URL=http://remote:1234/v1 cyrest count
//! ```
//!
//! Network arguments accept a name, a SUID or `current`.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::{Map, Value};

use cyrest::{NetworkRef, Table};
use cyrest_client::{
    ClientConfig, CyError, CyRestClient, DataFrameOptions, EdgeOptions, ExportFormat,
    FirstNeighbors, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};

/// cyrest: drive Cytoscape through CyREST
#[derive(Parser)]
#[command(name = "cyrest", version, about, long_about = None)]
struct Cli {
    /// CyREST API base, including the version segment.
    #[arg(long, env = "CYREST_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "CYREST_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout: u64,

    /// Network to operate on: name, SUID or `current`.
    #[arg(short, long, default_value = "current", value_parser = parse_network, global = true)]
    network: NetworkRef,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the CyREST and Cytoscape versions.
    Version,

    /// List network names in the session.
    List,

    /// Print the number of networks in the session.
    Count,

    /// Make a network the current one.
    Current {
        #[arg(value_parser = parse_network)]
        target: NetworkRef,
    },

    /// Rename the selected network (see --network).
    Rename { title: String },

    /// Delete a network, or every network with --all.
    Delete {
        #[arg(value_parser = parse_network, conflicts_with = "all")]
        target: Option<NetworkRef>,

        #[arg(long)]
        all: bool,
    },

    /// List node names.
    Nodes,

    /// List edge names.
    Edges,

    /// Print first neighbors of the given nodes, or of the selected nodes.
    Neighbors {
        names: Vec<String>,

        /// Group neighbors by queried node.
        #[arg(long)]
        nested: bool,
    },

    /// Add nodes by name, skipping names already present.
    AddNodes {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Add edges given as SOURCE:TARGET node names.
    AddEdges {
        #[arg(required = true, value_name = "SOURCE:TARGET")]
        pairs: Vec<String>,

        /// Interaction type.
        #[arg(long = "type", default_value = cyrest::DEFAULT_INTERACTION)]
        edge_type: String,

        #[arg(long)]
        directed: bool,
    },

    /// Load a network file through Cytoscape's importers.
    Import { file: PathBuf },

    /// Export the network to a file.
    Export {
        /// Output path; defaults to the network name.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// cx | cyjs | graphml | nnf | sif | xgmml | cys
        #[arg(long, default_value = "sif")]
        format: ExportFormat,
    },

    /// Copy the network.
    Clone,

    /// Create a network from a JSON file:
    /// `{"title": ..., "nodes": [records], "edges": [records]}`.
    Create { file: PathBuf },
}

/// Input document for `cyrest create`.
#[derive(Deserialize)]
struct CreateInput {
    title: Option<String>,
    #[serde(default)]
    nodes: Vec<Map<String, Value>>,
    #[serde(default)]
    edges: Vec<Map<String, Value>>,
}

fn parse_network(s: &str) -> Result<NetworkRef, String> {
    Ok(NetworkRef::parse_loose(s))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cyrest_client=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(cli.base_url.clone()).with_timeout(Duration::from_secs(cli.timeout));
    let client = CyRestClient::new(&config).unwrap_or_else(|e| fatal(&e.to_string()));

    if let Err(e) = run(&client, cli.network, cli.command).await {
        fatal(&e.to_string());
    }
}

async fn run(client: &CyRestClient, network: NetworkRef, command: Command) -> Result<(), CyError> {
    match command {
        Command::Version => {
            let v = client.version().await?;
            println!("CyREST {} / Cytoscape {}", v.api_version, v.cytoscape_version);
        }

        Command::List => {
            for name in client.get_network_list().await? {
                println!("{name}");
            }
        }

        Command::Count => println!("{}", client.get_network_count().await?),

        Command::Current { target } => {
            client.set_current_network(target).await?;
        }

        Command::Rename { title } => client.rename_network(&title, network).await?,

        Command::Delete { all: true, .. } => client.delete_all_networks().await?,
        Command::Delete { target, .. } => {
            client.delete_network(target.unwrap_or(network)).await?;
        }

        Command::Nodes => {
            for name in client.get_all_nodes(network).await? {
                println!("{name}");
            }
        }

        Command::Edges => {
            for name in client.get_all_edges(network).await? {
                println!("{name}");
            }
        }

        Command::Neighbors { names, nested } => {
            let query = (!names.is_empty()).then_some(names.as_slice());
            match client.get_first_neighbors(query, nested, network).await? {
                FirstNeighbors::Flat(list) => {
                    for name in list {
                        println!("{name}");
                    }
                }
                FirstNeighbors::Nested(groups) => {
                    for (node, list) in groups {
                        println!("{node}: {}", list.join(", "));
                    }
                }
            }
        }

        Command::AddNodes { names } => {
            for node in client.add_cy_nodes(&names, true, network).await? {
                println!("{}\t{}", node.suid, node.name);
            }
        }

        Command::AddEdges {
            pairs,
            edge_type,
            directed,
        } => {
            let pairs = pairs
                .iter()
                .map(|p| {
                    p.split_once(':')
                        .ok_or_else(|| CyError::InvalidInput(format!("expected SOURCE:TARGET, got {p:?}")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let options = EdgeOptions {
                edge_type,
                directed,
            };
            for edge in client.add_cy_edges(&pairs, &options, network).await? {
                println!("{}\t{} -> {}", edge.suid, edge.source, edge.target);
            }
        }

        Command::Import { file } => {
            for suid in client.import_network_from_file(&file).await? {
                println!("{suid}");
            }
        }

        Command::Export { file, format } => {
            let written = client
                .export_network(file.as_deref(), format, Some(network))
                .await?;
            println!("{}", written.display());
        }

        Command::Clone => println!("{}", client.clone_network(network).await?),

        Command::Create { file } => {
            let raw = fs::read_to_string(&file)
                .map_err(|e| CyError::InvalidInput(format!("failed to read {}: {e}", file.display())))?;
            let input: CreateInput = serde_json::from_str(&raw)
                .map_err(|e| CyError::InvalidInput(format!("invalid network document: {e}")))?;

            let opts = match input.title {
                Some(title) => DataFrameOptions::titled(title),
                None => DataFrameOptions::default(),
            };
            let nodes = (!input.nodes.is_empty()).then(|| Table::from_records(&input.nodes));
            let edges = (!input.edges.is_empty()).then(|| Table::from_records(&input.edges));
            let suid = client
                .create_network_from_data_frames(nodes.as_ref(), edges.as_ref(), &opts)
                .await?;
            println!("{suid}");
        }
    }
    Ok(())
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("cyrest: {msg}");
    process::exit(2);
}
