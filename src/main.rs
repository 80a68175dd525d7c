use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fuda::domain::todo::Todo;
use fuda::repo::memory::InMemoryTodoRepo;
use fuda::server::{self, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "fuda — minimal hypermedia todo service", long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let repo = InMemoryTodoRepo::with_seed(seed_todos());
    let state = AppState::new(Arc::new(Mutex::new(repo)));
    server::serve(SocketAddr::new(args.bind, args.port), state).await
}

fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Buy milk"),
        Todo::new(2, "Go for choir practice"),
        Todo::new(3, "Finish Data Structures Assignment"),
        Todo::new(4, "Finish React Assignment"),
    ]
}
