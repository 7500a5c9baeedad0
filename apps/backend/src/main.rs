#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cloze_anything_backend::run().await
}
