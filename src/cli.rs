//! Command line interface for the fragmentator demo binary.
//!
//! Kept free of crate dependencies so the build script can include it to
//! render the man page.

use clap::{Parser, ValueEnum};

/// Order in which split fragments are delivered back for reassembly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DeliveryOrder {
    /// Deliver fragments exactly as produced.
    #[default]
    Forward,
    /// Deliver the last fragment first.
    Reverse,
    /// Deliver fragment 0 of every string, then fragment 1, and so on.
    Interleave,
}

/// Command line arguments for the `fragmentator` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fragmentator",
    version,
    about = "Split strings into fragments and reassemble them",
    long_about = "Split each STRING into a fixed number of byte-range fragments, \
                  encode every fragment to its wire form, deliver the fragments \
                  back in the chosen order and print each reassembled string as \
                  `<id><TAB><string>` on stdout. Diagnostics are written to stderr.",
    after_help = "Example:\n  fragmentator --fragments 2 --order reverse TEST CORGE"
)]
pub struct Cli {
    /// Number of fragments each string is split into.
    #[arg(short, long, default_value_t = 3)]
    pub fragments: u16,

    /// Order in which fragments are fed to the reassembler.
    #[arg(short, long, value_enum, default_value_t = DeliveryOrder::Forward)]
    pub order: DeliveryOrder,

    /// Identifier assigned to the first string.
    #[arg(long, default_value_t = 0)]
    pub start_id: u16,

    /// Strings to split.
    #[arg(required = true)]
    pub strings: Vec<String>,
}
