use rangepool::prelude::{
    IdPool,
    RangeIdPool,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let sub = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .without_time()
        .compact()
        .finish();
    tracing::subscriber::set_global_default(sub)
        .expect("failed to set up global subscriber");

    let ports = RangeIdPool::new(20_000, 20_003);

    let mut held = Vec::new();
    while let Ok(port) = ports.request() {
        println!("acquired port {port}");
        held.push(port);
    }
    println!("range exhausted after {} ports", ports.in_use());

    let freed = held.pop().unwrap();
    ports.return_id(freed);

    println!("reacquired port {}", ports.request().unwrap());
}
