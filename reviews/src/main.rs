#[tokio::main]
async fn main() {
    reviews::start_server().await;
}
