#[tokio::main]
async fn main() {
    users::start_server().await;
}
