#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockyard_edge::start().await
}
