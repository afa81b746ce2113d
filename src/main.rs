#[tokio::main]
async fn main() -> anyhow::Result<()> {
    homework_teachers_lib::run().await
}
