use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use procvec::{
        Degrees, MemorySnapshot, Representation, StrictVector2, StrictVector3, StrictVector4,
        memory,
    };
    use std::{num::ParseIntError, path::PathBuf};

    #[derive(Debug, Parser)]
    #[command(about = "Vectors read from process memory", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Read a vector from a memory dump
        Read {
            /// Path to file containing the raw bytes of the dumped memory region
            #[arg(short, long)]
            snapshot: PathBuf,

            /// Address of the first byte in the dump (decimal or 0x-prefixed
            /// hexadecimal)
            #[arg(short, long, value_parser = parse_address, default_value = "0")]
            base_address: u64,

            /// Address of the first component (decimal or 0x-prefixed
            /// hexadecimal)
            #[arg(short, long, value_parser = parse_address)]
            address: u64,

            /// Number of components to read
            #[arg(short = 'n', long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=4))]
            arity: u8,

            /// How the components are represented in memory
            #[arg(short, long, value_enum, default_value_t = Representation::Float32)]
            representation: Representation,

            /// Number of decimals to display
            #[arg(short, long, default_value_t = 2)]
            precision: usize,
        },
        /// Evaluate a fixed set of vector operations and print the results
        Demo,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Read {
                snapshot,
                base_address,
                address,
                arity,
                representation,
                precision,
            } => {
                let snapshot = MemorySnapshot::from_file(base_address, snapshot)?;
                log::info!(
                    "Reading {arity} {representation:?} components at {address:#x} from {} bytes at {base_address:#x}",
                    snapshot.len()
                );
                let line = match arity {
                    2 => {
                        let vector = StrictVector2::from(memory::read_components::<_, 2>(
                            &snapshot,
                            address,
                            representation,
                        ));
                        format!("{vector:.precision$} |v| = {:.precision$}", vector.magnitude())
                    }
                    3 => {
                        let vector = StrictVector3::from(memory::read_components::<_, 3>(
                            &snapshot,
                            address,
                            representation,
                        ));
                        format!("{vector:.precision$} |v| = {:.precision$}", vector.magnitude())
                    }
                    _ => {
                        let vector = StrictVector4::from(memory::read_components::<_, 4>(
                            &snapshot,
                            address,
                            representation,
                        ));
                        format!("{vector:.precision$} |v| = {:.precision$}", vector.magnitude())
                    }
                };
                println!("{line}");
                Ok(())
            }
            Command::Demo => demo(),
        }
    }

    fn demo() -> Result<()> {
        let a = StrictVector2::new(2.0, -3.0);
        let b = StrictVector2::new(1.0, 2.5);

        println!("a = {a}");
        println!("b = {b}");
        println!("a + b = {}", a + b);
        println!("a - b = {}", a - b);
        println!("a . b = {:.2}", a.dot(&b));
        println!("|a| = {:.4}", a.magnitude());
        println!("distance(a, b) = {:.4}", a.distance_to(&b));
        println!("angle(a, b) = {}", Degrees::from(a.angle_between(&b)?));

        let c = a.extended(1.0);
        let d = b.extended(-1.0);
        println!("c x d = {}", c.cross(&d));

        let snapshot = MemorySnapshot::from_floats(0x1000, &[2.0, -3.0, 1.0, 0.0]);
        let e = StrictVector4::from_floats(&snapshot, 0x1000);
        println!("from memory = {e}");

        Ok(())
    }

    fn parse_address(arg: &str) -> std::result::Result<u64, ParseIntError> {
        match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => arg.parse(),
        }
    }

}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
