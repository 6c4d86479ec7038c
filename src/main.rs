use crate::catalog::Catalog;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod catalog;
mod domain;
mod errors;
mod responses;
mod router;
mod session;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Decode the embedded catalog
    let catalog = match Catalog::load_embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("❌ Catalog load failed: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} listings across {} cities",
        catalog.listings().len(),
        catalog.cities().len()
    );

    // 2️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the catalog handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
