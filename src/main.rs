#[tokio::main]
async fn main() {
    team_manager_be::start_server().await;
}
