mod config;
mod main_lib;
mod render;

use config::Config;
use main_lib::{build_session, init_tracing};
use render::render_view;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let session = build_session(&config);
    let season = session.resolver().season();
    let mut stdout = tokio::io::stdout();

    stdout
        .write_all(render_view(&session.view(), season).as_bytes())
        .await?;
    let view = session.load_initial().await;
    stdout.write_all(render_view(&view, season).as_bytes()).await?;

    // Queries given on the command line run once each; otherwise read stdin.
    let queries: Vec<String> = std::env::args().skip(1).collect();
    if !queries.is_empty() {
        for query in queries {
            let view = session.submit(&query).await;
            stdout.write_all(render_view(&view, season).as_bytes()).await?;
        }
        stdout.flush().await?;
        return Ok(());
    }

    stdout.write_all(b"\nSearch for a player...\n> ").await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let view = session.submit(&line).await;
        stdout.write_all(render_view(&view, season).as_bytes()).await?;
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;
    }

    tracing::info!(
        "Session ended with {} cached queries",
        session.resolver().cache().len()
    );
    Ok(())
}
