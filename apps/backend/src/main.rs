#[tokio::main]
async fn main() -> anyhow::Result<()> {
    study_buddy_backend::run().await
}
