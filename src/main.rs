//! Demo binary for `fragmentator`.
//!
//! Splits the given strings, passes every fragment through the wire codec in
//! the requested delivery order, and prints the reassembled strings.

mod cli;

use std::error::Error;

use clap::Parser;
use cli::{Cli, DeliveryOrder};
use fragmentator::{Fragment, Fragmentator, MessageId, decode_fragment, encode_fragment};
use log::info;

fn arrange(mut fragments: Vec<Fragment>, order: DeliveryOrder) -> Vec<Fragment> {
    match order {
        DeliveryOrder::Forward => {}
        DeliveryOrder::Reverse => fragments.reverse(),
        DeliveryOrder::Interleave => fragments.sort_by_key(|f| (f.fid(), f.id())),
    }
    fragments
}

fn main() -> Result<(), Box<dyn Error>> {
    // Stdout carries only the reassembled strings; diagnostics go to stderr.
    // Applications embedding the library should install their own subscriber.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut fragmentator = Fragmentator::with_starting_id(MessageId::new(cli.start_id));
    let fragments = fragmentator.split(cli.strings.as_slice(), cli.fragments)?;

    for fragment in arrange(fragments, cli.order) {
        let wire = encode_fragment(&fragment)?;
        if let Some(decoded) = decode_fragment(&wire)? {
            fragmentator.add_fragment(decoded)?;
        }
    }

    let mut completed: Vec<_> = fragmentator.completed_strings().iter().collect();
    completed.sort_by_key(|(id, _)| **id);
    info!("reassembled strings: count={}", completed.len());
    for (id, string) in completed {
        println!("{id}\t{string}");
    }
    Ok(())
}
