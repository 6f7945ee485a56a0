//! Route one connector and print its SVG path data.
//!
//! Run with: RUST_LOG=debug cargo run --example route --features tracing

use connpath::{MeasuredNode, PathRequest, Rect, SourceNode};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let frame = Rect::try_new(40.0, 120.0, 800.0, 600.0)?;
    let start = Rect::try_new(100.0, 160.0, 120.0, 48.0)?;
    let finish = Rect::try_new(140.0, 320.0, 120.0, 48.0)?;

    let mut request = PathRequest::new()
        .source(SourceNode::new("start", Some(start)))
        .frame(MeasuredNode::measured(frame));

    // Target not laid out yet.
    println!("before layout: {:?}", request.build());

    request = request.target(MeasuredNode::measured(finish));
    match request.build() {
        Some(path) if path.is_empty() => println!("boxes overlap, nothing to draw"),
        Some(path) => {
            let relation = path.relation().map_or("", |r| r.as_str());
            println!("{relation}: <path d=\"{path}\"/>");
        }
        None => println!("still waiting on layout"),
    }

    // Untrusted sizes go through the checked constructor.
    let bad = Rect::try_new(0.0, 0.0, -5.0, 10.0);
    if let Err(err) = bad {
        println!("{:?}", miette::Report::new(err));
    }

    Ok(())
}
