#[tokio::main]
async fn main() {
    sessions::start_server().await;
}
