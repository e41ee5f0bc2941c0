#[tokio::main]
async fn main() {
    cart::start_server().await;
}
