#[tokio::main]
async fn main() {
    order::start_server().await;
}
