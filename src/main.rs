#[tokio::main]
async fn main() {
    // Failures are logged inside run(); only the exit status is left to set.
    if fullstack_client::run().await.is_err() {
        std::process::exit(1);
    }
}
