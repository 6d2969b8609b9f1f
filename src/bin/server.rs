//! Game server binary.
//!
//! Runs the HTTP server that arbitrates live games. Clients submit
//! actions and long-poll for their opponent's moves.

#[tokio::main]
async fn main() {
    rspfootball::init();
    rspfootball::hosting::Server::run().await.unwrap();
}
