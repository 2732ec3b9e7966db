#[tokio::main]
async fn main() {
    experience_backend::run().await;
}
